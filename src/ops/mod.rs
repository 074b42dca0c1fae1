pub mod classify;
pub mod complete;
pub mod message;
pub mod projection;
pub mod read_state;
pub mod selection;
