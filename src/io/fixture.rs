//! Built-in demo mailbox. Every call builds a fresh copy, so nothing the UI
//! does to it survives a restart.

use crate::model::{
    Category, Contact, ContactDirectory, ContactId, ContactLink, Email, EmailGroup, LinkKind,
    Mailbox, MailboxError, RecentEmail,
};

const RAHUL: &str = "rahul-vohra";
const NOEL: &str = "noel-ruan";

/// Load the demo mailbox and its contact profiles
pub fn load_fixture() -> Result<(Mailbox, ContactDirectory), MailboxError> {
    let mailbox = Mailbox::new(fixture_groups())?;
    let contacts = fixture_contacts()?;
    Ok((mailbox, contacts))
}

fn fixture_groups() -> Vec<EmailGroup> {
    let rahul = || ContactId::new(RAHUL);
    let noel = || ContactId::new(NOEL);

    vec![
        EmailGroup::new(
            "",
            vec![
                Email::new(
                    "1",
                    "Rahul Vohra",
                    "rahul.vohra@superhuman.com",
                    "Invitation: Fireside chat with the People Team",
                    "Join us for a fireside chat with the people team about upcoming process...",
                    "FEB 3",
                )
                .unread()
                .with_category(Category::Important)
                .with_contact(rahul()),
                Email::new(
                    "2",
                    "Noel Ruan",
                    "noel@company.com",
                    "Thanks for sharing your feedback!",
                    "Your feedback is going to make an impact! We'll let you know when we make these...",
                    "FEB 3",
                )
                .with_category(Category::Important)
                .with_contact(noel()),
                Email::new(
                    "3",
                    "Nicole Luvalle",
                    "nicole@startup.io",
                    "Company metrics update",
                    "Hey team! Here's the dashboard that we talked through last week regarding progress towards our...",
                    "FEB 3",
                )
                .with_category(Category::News)
                .with_labels(&["website", "review"]),
                Email::new(
                    "4",
                    "Rahul Vohra",
                    "rahul.vohra@superhuman.com",
                    "Product Feedback",
                    "Thank you for the note! We're glad to hear you're enjoying Superhuman.",
                    "FEB 3",
                )
                .with_category(Category::Shared)
                .with_contact(rahul()),
            ],
        ),
        EmailGroup::new(
            "Last 7 days",
            vec![
                Email::new(
                    "5",
                    "Simone Johnson",
                    "simone@design.co",
                    "[For Review] Latest web mockups",
                    "Hey there, we updated the designs with your feedback. Can you please review by end of...",
                    "FEB 2",
                )
                .with_category(Category::Engineering),
                Email::new(
                    "6",
                    "Noel Ruan",
                    "noel@company.com",
                    "Partnership",
                    "Hi Noel, Here's the partnership proposal we discussed. We're excited about the potential to collaborate!",
                    "JAN 30",
                )
                .unread()
                .with_category(Category::News)
                .with_contact(noel()),
                Email::new(
                    "7",
                    "Miles, Laura, Amelia",
                    "miles@hyperfusion.io",
                    "Hyperfusion <> Superhuman",
                    "@Peik do we have a contract for 100+ users?",
                    "JAN 30",
                )
                .with_mention("@Peik")
                .with_attachment()
                .with_category(Category::Github),
            ],
        ),
        EmailGroup::new(
            "Earlier in January",
            vec![
                Email::new(
                    "8",
                    "Rahul Vohra",
                    "rahul.vohra@superhuman.com",
                    "Superhuman Recap \u{1F680}",
                    "Email takes hours each day.",
                    "JAN 28",
                )
                .with_category(Category::Calendar)
                .with_contact(rahul()),
            ],
        ),
    ]
}

fn link(kind: &str, label: &str) -> ContactLink {
    ContactLink {
        kind: LinkKind::from_tag(kind),
        label: label.to_string(),
        url: "#".to_string(),
    }
}

fn recent(subject: &str, is_recap: bool) -> RecentEmail {
    RecentEmail {
        subject: subject.to_string(),
        is_recap,
    }
}

fn fixture_contacts() -> Result<ContactDirectory, MailboxError> {
    ContactDirectory::new(vec![
        Contact {
            id: ContactId::new(RAHUL),
            name: "Rahul Vohra".into(),
            address: "rahul.vohra@superhuman.com".into(),
            location: "San Francisco".into(),
            bio: "Founder & CEO of Superhuman. Founded Rapportive. Computer Scientist, Gamer, \
                  Entrepreneur, Designer."
                .into(),
            links: vec![
                link("mail", "Mail"),
                link("linkedin", "LinkedIn"),
                link("github", "GitHub"),
                link("dribbble", "Dribbble"),
                link("facebook", "Facebook"),
                link("user", "about.me"),
                link("list", "AngelList"),
                link("globe", "superhuman.com"),
                link("twitter", "@rahulvohra"),
            ],
            recent: vec![
                recent("Product Feedback", false),
                recent("Superhuman Recap", true),
            ],
        },
        Contact {
            id: ContactId::new(NOEL),
            name: "Noel Ruan".into(),
            address: "noel@company.com".into(),
            location: "New York".into(),
            bio: "Product Manager at Company. Building the future of productivity.".into(),
            links: vec![link("mail", "Mail"), link("linkedin", "LinkedIn")],
            recent: vec![
                recent("Thanks for sharing your feedback!", false),
                recent("Partnership", false),
            ],
        },
    ])
}
