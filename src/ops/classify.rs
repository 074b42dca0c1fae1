use serde::Serialize;

use crate::model::email::{Category, Email};

/// Layout used by the message view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Invitation,
    Feedback,
    Metrics,
    Review,
    Partnership,
    Newsletter,
    General,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Invitation => "invitation",
            MessageKind::Feedback => "feedback",
            MessageKind::Metrics => "metrics",
            MessageKind::Review => "review",
            MessageKind::Partnership => "partnership",
            MessageKind::Newsletter => "newsletter",
            MessageKind::General => "general",
        }
    }
}

/// Pick a layout from subject and preview keywords. First rule that matches
/// wins.
pub fn classify(email: &Email) -> MessageKind {
    let subject = email.subject.to_lowercase();
    let preview = email.preview.to_lowercase();
    let subject_has = |words: &[&str]| words.iter().any(|w| subject.contains(w));
    let preview_has = |words: &[&str]| words.iter().any(|w| preview.contains(w));

    if subject_has(&["invitation", "fireside", "chat"]) {
        MessageKind::Invitation
    } else if subject_has(&["feedback"]) || preview_has(&["feedback"]) {
        MessageKind::Feedback
    } else if subject_has(&["metrics", "dashboard"]) || preview_has(&["dashboard"]) {
        MessageKind::Metrics
    } else if subject_has(&["review", "mockup"]) {
        MessageKind::Review
    } else if subject_has(&["partnership"]) || preview_has(&["partnership", "proposal"]) {
        MessageKind::Partnership
    } else if subject_has(&["recap", "newsletter"]) || email.category == Some(Category::News) {
        MessageKind::Newsletter
    } else {
        MessageKind::General
    }
}

pub const AVATAR_PALETTE_LEN: usize = 6;

/// Stable avatar color slot for a sender name
pub fn avatar_slot(name: &str) -> usize {
    let sum: u64 = name.chars().map(|c| c as u64).sum();
    (sum % AVATAR_PALETTE_LEN as u64) as usize
}
