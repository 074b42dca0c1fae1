use serde::Serialize;

use crate::model::Email;
use crate::ops::classify::{MessageKind, classify};

/// A decorated block between the body paragraphs and the buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Calendar invite banner
    Event { title: String, when: String },
    /// Highlighted confirmation box
    Notice { title: String, detail: String },
    Stats { cards: Vec<Stat> },
    Files { files: Vec<FileCard> },
    Attachment(FileCard),
    /// "<name> was mentioned in this thread"
    Mention { name: String },
    /// Newsletter article card
    Article { title: String, summary: String, byline: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCard {
    pub name: String,
    pub detail: String,
}

/// Everything the message view draws for one email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageLayout {
    pub kind: MessageKind,
    pub greeting: String,
    pub paragraphs: Vec<String>,
    pub blocks: Vec<Block>,
    pub buttons: Vec<String>,
    /// Closing line and signature, when the layout has one
    pub signoff: Option<(String, String)>,
}

fn stat(label: &str, value: &str, change: &str) -> Stat {
    Stat {
        label: label.into(),
        value: value.into(),
        change: change.into(),
    }
}

fn file(name: &str, detail: &str) -> FileCard {
    FileCard {
        name: name.into(),
        detail: detail.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the message layout for an email. Only the sender, subject,
/// preview, date and the attachment/mention flags vary; the rest is fixed
/// copy per kind.
pub fn compose(email: &Email) -> MessageLayout {
    let kind = classify(email);
    let preview = email.preview.clone();
    let sign = |closing: &str| Some((closing.to_string(), email.sender.clone()));

    match kind {
        MessageKind::Invitation => MessageLayout {
            kind,
            greeting: "Hi there! \u{1F44B}".into(),
            paragraphs: vec![
                preview,
                "We'll be discussing team culture, growth opportunities, and answering any \
                 questions you might have. This is a great opportunity to connect with the \
                 People Team in an informal setting."
                    .into(),
                "12 people have RSVP'd".into(),
            ],
            blocks: vec![Block::Event {
                title: email.subject.clone(),
                when: "Wednesday, Feb 5 \u{00B7} 2:00 PM - 3:00 PM PST".into(),
            }],
            buttons: strings(&["Accept", "Maybe", "Decline"]),
            signoff: None,
        },
        MessageKind::Feedback => MessageLayout {
            kind,
            greeting: "Hi there! \u{1F64F}".into(),
            paragraphs: vec![
                preview,
                "We really appreciate you taking the time to share your thoughts with us. \
                 Your input helps us build a better product for everyone."
                    .into(),
            ],
            blocks: vec![Block::Notice {
                title: "Your feedback has been logged".into(),
                detail: "We'll notify you when we ship updates based on your suggestions."
                    .into(),
            }],
            buttons: Vec::new(),
            signoff: sign("Best regards,"),
        },
        MessageKind::Metrics => MessageLayout {
            kind,
            greeting: "Hey team! \u{1F4CA}".into(),
            paragraphs: vec![preview],
            blocks: vec![Block::Stats {
                cards: vec![
                    stat("Revenue", "$1.2M", "\u{2191} 12% vs last month"),
                    stat("Users", "24.5K", "\u{2191} 8% vs last month"),
                    stat("Retention", "94%", "\u{2191} 2% vs last month"),
                ],
            }],
            buttons: strings(&["View Full Dashboard"]),
            signoff: None,
        },
        MessageKind::Review => MessageLayout {
            kind,
            greeting: "Hey there! \u{1F3A8}".into(),
            paragraphs: vec![preview],
            blocks: vec![Block::Files {
                files: vec![
                    file("Homepage_v2.fig", "Updated 2 hours ago"),
                    file("Dashboard_v2.fig", "Updated 2 hours ago"),
                ],
            }],
            buttons: strings(&["Open in Figma", "Approve", "Request Changes"]),
            signoff: None,
        },
        MessageKind::Partnership => MessageLayout {
            kind,
            greeting: "Hi there! \u{1F91D}".into(),
            paragraphs: vec![
                preview,
                "I've attached the full proposal document for your review. Please let me \
                 know if you have any questions or would like to schedule a call to discuss \
                 further."
                    .into(),
            ],
            blocks: vec![Block::Attachment(file(
                "Partnership_Proposal_2026.pdf",
                "2.4 MB \u{00B7} PDF Document",
            ))],
            buttons: strings(&["Schedule Call", "Reply"]),
            signoff: None,
        },
        MessageKind::Newsletter => {
            let first_name = email.sender.split(' ').next().unwrap_or_default();
            MessageLayout {
                kind,
                greeting: format!(
                    "\u{1F44B} Hi, this is {first_name} with a subscriber-only issue of the \
                     Newsletter. In every issue, I cover challenges at Big Tech and startups \
                     through the lens of engineering managers and senior engineers."
                ),
                paragraphs: Vec::new(),
                blocks: vec![Block::Article {
                    title: email.subject.clone(),
                    summary: preview,
                    byline: format!("{} \u{00B7} {}", email.sender.to_uppercase(), email.date),
                }],
                buttons: strings(&["Unsubscribe", "View in browser", "READ IN APP \u{2197}"]),
                signoff: None,
            }
        }
        MessageKind::General => {
            let mut blocks = Vec::new();
            if email.has_attachment {
                blocks.push(Block::Attachment(file(
                    "Attachment.pdf",
                    "1.2 MB \u{00B7} PDF Document",
                )));
            }
            if let Some(name) = &email.mention {
                blocks.push(Block::Mention { name: name.clone() });
            }
            MessageLayout {
                kind,
                greeting: "Hi there,".into(),
                paragraphs: vec![
                    preview,
                    "Please let me know if you have any questions.".into(),
                ],
                blocks,
                buttons: Vec::new(),
                signoff: sign("Best,"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::fixture::load_fixture;
    use crate::model::EmailId;

    #[test]
    fn invitation_has_event_banner() {
        let (mailbox, _) = load_fixture().unwrap();
        let email = mailbox.find(&EmailId::new("1")).unwrap();
        let layout = compose(email);
        assert_eq!(layout.kind, MessageKind::Invitation);
        assert_eq!(layout.paragraphs[0], email.preview);
        assert!(matches!(
            &layout.blocks[0],
            Block::Event { title, .. } if *title == email.subject
        ));
        assert_eq!(layout.buttons, vec!["Accept", "Maybe", "Decline"]);
    }

    #[test]
    fn general_shows_attachment_and_mention() {
        let email = Email::new("g", "Ann Lee", "ann@x", "Lunch", "Tuesday works", "Jan 3")
            .with_attachment()
            .with_mention("@you");
        let layout = compose(&email);
        assert_eq!(layout.kind, MessageKind::General);
        assert_eq!(layout.blocks.len(), 2);
        assert!(matches!(&layout.blocks[1], Block::Mention { name } if name == "@you"));
        assert_eq!(
            layout.signoff,
            Some(("Best,".to_string(), "Ann Lee".to_string()))
        );
    }

    #[test]
    fn general_without_flags_has_no_blocks() {
        let email = Email::new("g", "Ann", "ann@x", "Lunch", "Tuesday works", "Jan 3");
        assert!(compose(&email).blocks.is_empty());
    }

    #[test]
    fn newsletter_greets_with_first_name() {
        let email = Email::new("n", "Gergely Orosz", "g@x", "Weekly recap", "Links", "Jan 2");
        let layout = compose(&email);
        assert_eq!(layout.kind, MessageKind::Newsletter);
        assert!(layout.greeting.contains("this is Gergely with"));
        assert!(matches!(
            &layout.blocks[0],
            Block::Article { byline, .. } if byline.starts_with("GERGELY OROSZ")
        ));
    }
}
