use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::email::{Email, MailboxError};

/// Stable identifier of a contact profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        ContactId(id.into())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of external profile link. Drives the glyph shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Mail,
    Linkedin,
    Github,
    Dribbble,
    Facebook,
    User,
    List,
    Globe,
    Twitter,
}

impl LinkKind {
    /// Parse a link tag; unknown tags fall back to `Globe`
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "mail" => LinkKind::Mail,
            "linkedin" => LinkKind::Linkedin,
            "github" => LinkKind::Github,
            "dribbble" => LinkKind::Dribbble,
            "facebook" => LinkKind::Facebook,
            "user" => LinkKind::User,
            "list" => LinkKind::List,
            "twitter" => LinkKind::Twitter,
            _ => LinkKind::Globe,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            LinkKind::Mail => "\u{2709}",
            LinkKind::Linkedin => "in",
            LinkKind::Github => "gh",
            LinkKind::Dribbble => "\u{25CE}",
            LinkKind::Facebook => "f",
            LinkKind::User => "\u{263A}",
            LinkKind::List => "\u{2261}",
            LinkKind::Globe => "\u{25CB}",
            LinkKind::Twitter => "@",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: String,
    pub url: String,
}

/// A recent thread with this contact, shown under "Mail"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEmail {
    pub subject: String,
    #[serde(default)]
    pub is_recap: bool,
}

/// Read-only sender profile shown in the contact panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub address: String,
    pub location: String,
    pub bio: String,
    pub links: Vec<ContactLink>,
    pub recent: Vec<RecentEmail>,
}

impl Contact {
    /// Avatar text: first letter of each word of the name
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect()
    }
}

/// Contact profiles keyed by stable id, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    by_id: IndexMap<ContactId, Contact>,
}

impl ContactDirectory {
    /// Build the directory, rejecting duplicate ids
    pub fn new(contacts: Vec<Contact>) -> Result<Self, MailboxError> {
        let mut by_id = IndexMap::with_capacity(contacts.len());
        for contact in contacts {
            if by_id.contains_key(&contact.id) {
                return Err(MailboxError::DuplicateContact(contact.id));
            }
            by_id.insert(contact.id.clone(), contact);
        }
        Ok(ContactDirectory { by_id })
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.by_id.values()
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.by_id.get(id)
    }

    /// Legacy lookup by display name. Resolves only when the name is unique
    /// among profiles.
    pub fn by_name(&self, name: &str) -> Option<&Contact> {
        let mut matches = self.by_id.values().filter(|c| c.name == name);
        let first = matches.next()?;
        if matches.next().is_some() {
            log::warn!("contact name {:?} is ambiguous; not resolving", name);
            return None;
        }
        Some(first)
    }

    /// Profile for an email's sender: stable id first, display name as fallback
    pub fn for_email(&self, email: &Email) -> Option<&Contact> {
        match &email.contact {
            Some(id) => self.get(id),
            None => self.by_name(&email.sender),
        }
    }
}
