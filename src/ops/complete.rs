use crate::model::email::{Category, Email, EmailId, Mailbox};
use crate::model::selection::Selection;

use super::projection::neighbor_in_group;
use super::selection::completion_target;

/// Outcome of marking an email done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub removed: Email,
    /// Next (else previous) email in the same visible group, before removal
    pub neighbor: Option<EmailId>,
    /// The removed email was the open one; selection moved to `neighbor`
    pub was_selected: bool,
}

/// Mark an email done: remove it from the mailbox.
///
/// Without an explicit `target` the hovered email is used, then the selected
/// one. When the target is the open email, selection moves to its neighbor
/// within the visible group (next, else previous, else nothing). Any other
/// selection is left untouched. A stale or missing target does nothing.
pub fn complete(
    mailbox: &mut Mailbox,
    selection: &mut Selection,
    filter: Option<Category>,
    target: Option<&EmailId>,
) -> Option<Completion> {
    let target = match target {
        Some(id) => id.clone(),
        None => completion_target(selection)?.clone(),
    };
    if !mailbox.contains(&target) {
        log::debug!("complete ignored, {} not in mailbox", target);
        return None;
    }

    let neighbor = neighbor_in_group(mailbox.groups(), filter, &target);
    let was_selected = selection.is_selected(&target);

    let removed = mailbox.remove(&target)?;

    if was_selected {
        selection.selected = neighbor.clone();
    }
    if selection.is_hovered(&target) {
        selection.hovered = None;
    }

    log::info!("marked {} done ({:?})", removed.id, removed.subject);
    Some(Completion {
        removed,
        neighbor,
        was_selected,
    })
}
