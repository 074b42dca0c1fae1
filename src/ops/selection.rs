use crate::model::contact::{Contact, ContactDirectory};
use crate::model::email::{EmailId, Mailbox};
use crate::model::selection::Selection;

use super::read_state::mark_read;

/// Open an email. Opening an unread email marks it read. Ids not in the
/// mailbox are ignored.
pub fn select(mailbox: &mut Mailbox, selection: &mut Selection, id: &EmailId) {
    if !mailbox.contains(id) {
        log::debug!("select ignored, {} not in mailbox", id);
        return;
    }
    selection.selected = Some(id.clone());
    mark_read(mailbox, id);
    log::debug!("selected {}", id);
}

/// Point the cursor at an email, or clear it. Never touches read state.
pub fn hover(selection: &mut Selection, id: Option<&EmailId>) {
    if selection.hovered.as_ref() != id {
        log::debug!("hover {:?}", id.map(|i| i.0.as_str()));
    }
    selection.hovered = id.cloned();
}

pub fn clear_selection(selection: &mut Selection) {
    selection.selected = None;
}

/// What "mark done" acts on when no email is named: hovered, then selected.
pub fn completion_target(selection: &Selection) -> Option<&EmailId> {
    selection.hovered.as_ref().or(selection.selected.as_ref())
}

/// Contact to show in the side panel: the hovered email's sender, else the
/// selected email's sender, else nothing.
pub fn displayed_contact<'a>(
    mailbox: &Mailbox,
    contacts: &'a ContactDirectory,
    selection: &Selection,
) -> Option<&'a Contact> {
    let source = selection
        .hovered
        .as_ref()
        .and_then(|id| mailbox.find(id))
        .or_else(|| selection.selected.as_ref().and_then(|id| mailbox.find(id)))?;
    contacts.for_email(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::fixture::load_fixture;

    #[test]
    fn select_marks_unread_as_read() {
        let (mut mailbox, _) = load_fixture().unwrap();
        let mut sel = Selection::default();
        let id = EmailId::new("1");
        select(&mut mailbox, &mut sel, &id);
        assert_eq!(sel.selected, Some(id.clone()));
        assert!(!mailbox.find(&id).unwrap().unread);
    }

    #[test]
    fn hover_leaves_unread_alone() {
        let (mailbox, _) = load_fixture().unwrap();
        let mut sel = Selection::default();
        let id = EmailId::new("6");
        hover(&mut sel, Some(&id));
        assert_eq!(sel.hovered, Some(id.clone()));
        assert!(mailbox.find(&id).unwrap().unread);
        hover(&mut sel, None);
        assert!(sel.hovered.is_none());
    }

    #[test]
    fn select_unknown_id_is_noop() {
        let (mut mailbox, _) = load_fixture().unwrap();
        let mut sel = Selection::default();
        select(&mut mailbox, &mut sel, &EmailId::new("404"));
        assert!(sel.selected.is_none());
    }

    #[test]
    fn displayed_contact_prefers_hover() {
        let (mut mailbox, contacts) = load_fixture().unwrap();
        let mut sel = Selection::default();
        assert!(displayed_contact(&mailbox, &contacts, &sel).is_none());

        select(&mut mailbox, &mut sel, &EmailId::new("1"));
        assert_eq!(
            displayed_contact(&mailbox, &contacts, &sel).unwrap().name,
            "Rahul Vohra"
        );

        hover(&mut sel, Some(&EmailId::new("2")));
        assert_eq!(
            displayed_contact(&mailbox, &contacts, &sel).unwrap().name,
            "Noel Ruan"
        );

        // Hovering an unknown sender shows nothing, even with a selection
        hover(&mut sel, Some(&EmailId::new("5")));
        assert!(displayed_contact(&mailbox, &contacts, &sel).is_none());

        clear_selection(&mut sel);
        hover(&mut sel, None);
        assert!(displayed_contact(&mailbox, &contacts, &sel).is_none());
    }

    #[test]
    fn stale_hover_falls_back_to_selection() {
        let (mut mailbox, contacts) = load_fixture().unwrap();
        let mut sel = Selection::default();
        select(&mut mailbox, &mut sel, &EmailId::new("2"));
        hover(&mut sel, Some(&EmailId::new("gone")));
        assert_eq!(
            displayed_contact(&mailbox, &contacts, &sel).unwrap().name,
            "Noel Ruan"
        );
    }

    #[test]
    fn completion_target_order() {
        let mut sel = Selection::default();
        assert!(completion_target(&sel).is_none());
        sel.selected = Some(EmailId::new("a"));
        assert_eq!(completion_target(&sel), Some(&EmailId::new("a")));
        sel.hovered = Some(EmailId::new("b"));
        assert_eq!(completion_target(&sel), Some(&EmailId::new("b")));
    }
}
