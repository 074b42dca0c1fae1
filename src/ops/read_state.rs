use crate::model::email::{EmailId, Mailbox};

/// Mark an email read in place. Returns whether anything changed; unknown
/// ids and already-read emails are left alone.
pub fn mark_read(mailbox: &mut Mailbox, id: &EmailId) -> bool {
    match mailbox.find_mut(id) {
        Some(email) if email.unread => {
            email.unread = false;
            log::debug!("marked {} read", id);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::fixture::load_fixture;

    #[test]
    fn flips_unread() {
        let (mut mailbox, _) = load_fixture().unwrap();
        let id = EmailId::new("1");
        assert!(mailbox.find(&id).unwrap().unread);
        assert!(mark_read(&mut mailbox, &id));
        assert!(!mailbox.find(&id).unwrap().unread);
    }

    #[test]
    fn idempotent() {
        let (mut mailbox, _) = load_fixture().unwrap();
        let id = EmailId::new("6");
        mark_read(&mut mailbox, &id);
        let once = mailbox.clone();
        assert!(!mark_read(&mut mailbox, &id));
        assert_eq!(mailbox, once);
    }

    #[test]
    fn unknown_id_is_noop() {
        let (mut mailbox, _) = load_fixture().unwrap();
        let before = mailbox.clone();
        assert!(!mark_read(&mut mailbox, &EmailId::new("missing")));
        assert_eq!(mailbox, before);
    }
}
