use serde::Serialize;

use crate::model::{Category, Contact, Email};
use crate::ops::message::{Block, MessageLayout};
use crate::ops::projection::GroupView;
use crate::tui::command_actions::{PaletteAction, Wiring};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CountJson {
    pub id: &'static str,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Serialize)]
pub struct ShowJson<'a> {
    pub email: &'a Email,
    pub group: &'a str,
    pub layout: MessageLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<&'a Contact>,
}

#[derive(Serialize)]
pub struct ActionJson {
    #[serde(flatten)]
    pub action: PaletteAction,
    pub wired: bool,
}

pub fn action_to_json(action: PaletteAction) -> ActionJson {
    let wired = matches!(action.action.wiring(), Wiring::Wired(_));
    ActionJson { action, wired }
}

// ---------------------------------------------------------------------------
// Text formatters
// ---------------------------------------------------------------------------

/// One-line email summary: "* 1  Rahul Vohra  Subject  [important]  FEB 3"
pub fn format_email_line(email: &Email) -> String {
    let unread = if email.unread { "*" } else { " " };
    let attachment = if email.has_attachment { " +att" } else { "" };
    let category = email
        .category
        .map(|c| format!("  [{}]", c.id()))
        .unwrap_or_default();
    format!(
        "{} {:<3} {:<22} {}{}{}  {}",
        unread, email.id, email.sender, email.subject, attachment, category, email.date
    )
}

/// Groups with their labels; the unlabeled leading group has no header
pub fn format_groups(groups: &[GroupView<'_>]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        if !group.label.is_empty() {
            lines.push(format!("{}:", group.label));
        }
        for email in &group.emails {
            lines.push(format_email_line(email));
        }
    }
    lines
}

pub fn format_counts(counts: &[(Category, usize)]) -> Vec<String> {
    counts
        .iter()
        .map(|(c, n)| format!("{:<12} {}", c.label(), n))
        .collect()
}

pub fn format_contact(contact: &Contact) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", contact.name, contact.initials()),
        contact.address.clone(),
        contact.location.clone(),
        String::new(),
        contact.bio.clone(),
        String::new(),
        "Mail:".to_string(),
    ];
    for recent in &contact.recent {
        let recap = if recent.is_recap { " (recap)" } else { "" };
        lines.push(format!("  {}{}", recent.subject, recap));
    }
    // The first link is the mail entry
    for link in contact.links.iter().skip(1) {
        lines.push(format!("{:<3} {}", link.kind.glyph(), link.label));
    }
    lines
}

fn format_block(block: &Block) -> Vec<String> {
    match block {
        Block::Event { title, when } => {
            vec![format!("[event] {}", title), format!("        {}", when)]
        }
        Block::Notice { title, detail } => {
            vec![format!("[note] {}", title), format!("       {}", detail)]
        }
        Block::Stats { cards } => cards
            .iter()
            .map(|s| format!("[stat] {}: {} ({})", s.label, s.value, s.change))
            .collect(),
        Block::Files { files } => files
            .iter()
            .map(|f| format!("[file] {} - {}", f.name, f.detail))
            .collect(),
        Block::Attachment(f) => vec![format!("[attachment] {} - {}", f.name, f.detail)],
        Block::Mention { name } => vec![format!("{} was mentioned in this thread", name)],
        Block::Article {
            title,
            summary,
            byline,
        } => vec![
            format!("[article] {}", title),
            format!("          {}", summary),
            format!("          {}", byline),
        ],
    }
}

/// Full email: headers, then the layout body
pub fn format_email_detail(email: &Email, group: &str, layout: &MessageLayout) -> Vec<String> {
    let mut lines = vec![
        format!("Subject: {}", email.subject),
        format!("From:    {} <{}>", email.sender, email.address),
        format!("Date:    {}", email.date),
    ];
    if !group.is_empty() {
        lines.push(format!("Group:   {}", group));
    }
    if let Some(c) = email.category {
        lines.push(format!("Category: {}", c.label()));
    }
    if !email.labels.is_empty() {
        lines.push(format!("Labels:  {}", email.labels.join(", ")));
    }
    lines.push(format!("Layout:  {}", layout.kind.as_str()));
    lines.push(String::new());

    lines.push(layout.greeting.clone());
    for p in &layout.paragraphs {
        lines.push(String::new());
        lines.push(p.clone());
    }
    for block in &layout.blocks {
        lines.push(String::new());
        lines.extend(format_block(block));
    }
    if !layout.buttons.is_empty() {
        lines.push(String::new());
        lines.push(
            layout
                .buttons
                .iter()
                .map(|b| format!("[ {} ]", b))
                .collect::<Vec<_>>()
                .join(" "),
        );
    }
    if let Some((closing, name)) = &layout.signoff {
        lines.push(String::new());
        lines.push(closing.clone());
        lines.push(name.clone());
    }
    lines
}

/// "E   Mark Done" rows; declared-only actions are marked
pub fn format_actions(actions: &[PaletteAction]) -> Vec<String> {
    actions
        .iter()
        .map(|a| {
            let note = match a.action.wiring() {
                Wiring::Wired(_) => "",
                Wiring::Declared => "  (not wired)",
            };
            format!("{:<3} {} {}{}", a.shortcut, a.icon, a.label, note)
        })
        .collect()
}
