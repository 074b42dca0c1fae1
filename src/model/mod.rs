pub mod config;
pub mod contact;
pub mod email;
pub mod selection;

pub use config::*;
pub use contact::*;
pub use email::*;
pub use selection::*;
