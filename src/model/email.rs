use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::contact::ContactId;

/// Stable identifier of an inbox item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub String);

impl EmailId {
    pub fn new(id: impl Into<String>) -> Self {
        EmailId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Split-inbox category. The variant order is the tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Important,
    Shared,
    Calendar,
    News,
    Github,
    Linear,
    Engineering,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Important,
        Category::Shared,
        Category::Calendar,
        Category::News,
        Category::Github,
        Category::Linear,
        Category::Engineering,
        Category::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Important => "important",
            Category::Shared => "shared",
            Category::Calendar => "calendar",
            Category::News => "news",
            Category::Github => "github",
            Category::Linear => "linear",
            Category::Engineering => "engineering",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Important => "Important",
            Category::Shared => "Shared",
            Category::Calendar => "Calendar",
            Category::News => "News",
            Category::Github => "GitHub",
            Category::Linear => "Linear",
            Category::Engineering => "Engineering",
            Category::Other => "Other",
        }
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One inbox item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: EmailId,
    /// Sender display name
    pub sender: String,
    /// Sender address
    pub address: String,
    pub subject: String,
    pub preview: String,
    /// Display date, shown as-is
    pub date: String,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub has_attachment: bool,
    /// Highlighted @-mention inside the preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Stable link to the sender's contact profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactId>,
}

impl Email {
    pub fn new(
        id: &str,
        sender: &str,
        address: &str,
        subject: &str,
        preview: &str,
        date: &str,
    ) -> Self {
        Email {
            id: EmailId::new(id),
            sender: sender.to_string(),
            address: address.to_string(),
            subject: subject.to_string(),
            preview: preview.to_string(),
            date: date.to_string(),
            unread: false,
            has_attachment: false,
            mention: None,
            category: None,
            labels: Vec::new(),
            contact: None,
        }
    }

    pub fn unread(mut self) -> Self {
        self.unread = true;
        self
    }

    pub fn with_attachment(mut self) -> Self {
        self.has_attachment = true;
        self
    }

    pub fn with_mention(mut self, mention: &str) -> Self {
        self.mention = Some(mention.to_string());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn with_contact(mut self, contact: ContactId) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Preview text with the mention token cut out, for rendering the
    /// mention separately
    pub fn preview_without_mention(&self) -> String {
        match &self.mention {
            Some(m) => self.preview.replacen(m.as_str(), "", 1).trim().to_string(),
            None => self.preview.clone(),
        }
    }
}

/// A labeled, ordered group of emails ("Last 7 days", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailGroup {
    /// Empty label means the unlabeled leading group
    pub label: String,
    pub emails: Vec<Email>,
}

impl EmailGroup {
    pub fn new(label: &str, emails: Vec<Email>) -> Self {
        EmailGroup {
            label: label.to_string(),
            emails,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailboxError {
    #[error("duplicate email id: {0}")]
    DuplicateId(EmailId),
    #[error("duplicate contact id: {0}")]
    DuplicateContact(ContactId),
}

/// The mutable working set of groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mailbox {
    groups: Vec<EmailGroup>,
}

impl Mailbox {
    /// Build a mailbox, rejecting duplicate ids. Empty groups are dropped.
    pub fn new(groups: Vec<EmailGroup>) -> Result<Self, MailboxError> {
        let mut seen = std::collections::HashSet::new();
        for email in groups.iter().flat_map(|g| g.emails.iter()) {
            if !seen.insert(&email.id) {
                return Err(MailboxError::DuplicateId(email.id.clone()));
            }
        }
        let mut mailbox = Mailbox { groups };
        mailbox.prune_empty();
        Ok(mailbox)
    }

    pub fn groups(&self) -> &[EmailGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.emails.len()).sum()
    }

    pub fn unread_count(&self) -> usize {
        self.emails().filter(|e| e.unread).count()
    }

    pub fn emails(&self) -> impl Iterator<Item = &Email> {
        self.groups.iter().flat_map(|g| g.emails.iter())
    }

    pub fn find(&self, id: &EmailId) -> Option<&Email> {
        self.emails().find(|e| &e.id == id)
    }

    pub fn find_mut(&mut self, id: &EmailId) -> Option<&mut Email> {
        self.groups
            .iter_mut()
            .flat_map(|g| g.emails.iter_mut())
            .find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EmailId) -> bool {
        self.find(id).is_some()
    }

    /// Index of the group holding `id`
    pub fn group_of(&self, id: &EmailId) -> Option<usize> {
        self.groups
            .iter()
            .position(|g| g.emails.iter().any(|e| &e.id == id))
    }

    /// Remove an email by id and drop any group left empty.
    pub fn remove(&mut self, id: &EmailId) -> Option<Email> {
        let gi = self.group_of(id)?;
        let group = &mut self.groups[gi];
        let pos = group.emails.iter().position(|e| &e.id == id)?;
        let removed = group.emails.remove(pos);
        self.prune_empty();
        Some(removed)
    }

    fn prune_empty(&mut self) {
        self.groups.retain(|g| !g.emails.is_empty());
    }
}
