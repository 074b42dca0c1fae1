use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::fixture::load_fixture;
use crate::model::{Category, EmailId};
use crate::ops::message::compose;
use crate::ops::projection;
use crate::tui::command_actions::palette_actions;

/// Lookup failures the read-only commands report
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("email not found: {0}")]
    EmailNotFound(String),
    #[error("no unique contact named {0:?}")]
    ContactNotFound(String),
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a read-only subcommand. Each run reads a fresh copy of the demo
/// mailbox; nothing is written back.
pub fn dispatch(command: Commands, json: bool) -> CmdResult {
    log::debug!("dispatching {:?}", command);
    match command {
        Commands::List(args) => cmd_list(args, json),
        Commands::Counts => cmd_counts(json),
        Commands::Show(args) => cmd_show(args, json),
        Commands::Contact(args) => cmd_contact(args, json),
        Commands::Actions => cmd_actions(json),
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, json: bool) -> CmdResult {
    let filter = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;
    let (mailbox, _) = load_fixture()?;
    let groups = projection::project(mailbox.groups(), filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else if groups.is_empty() {
        println!("(no emails)");
    } else {
        print_lines(format_groups(&groups));
    }
    Ok(())
}

fn cmd_counts(json: bool) -> CmdResult {
    let (mailbox, _) = load_fixture()?;
    let counts: Vec<(Category, usize)> = projection::category_counts(mailbox.groups())
        .into_iter()
        .collect();

    if json {
        let out: Vec<CountJson> = counts
            .iter()
            .map(|(c, n)| CountJson {
                id: c.id(),
                label: c.label(),
                count: *n,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(format_counts(&counts));
        println!("{:<12} {}", "Total", mailbox.total_count());
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, json: bool) -> CmdResult {
    let (mailbox, contacts) = load_fixture()?;
    let id = EmailId::new(args.id.trim());
    let email = mailbox
        .find(&id)
        .ok_or_else(|| CliError::EmailNotFound(args.id.clone()))?;
    let group = mailbox
        .group_of(&id)
        .and_then(|i| mailbox.groups().get(i))
        .map(|g| g.label.as_str())
        .unwrap_or_default();
    let layout = compose(email);
    let contact = contacts.for_email(email);

    if json {
        let out = ShowJson {
            email,
            group,
            layout,
            contact,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(format_email_detail(email, group, &layout));
        if let Some(contact) = contact {
            println!();
            println!("--- sender profile ---");
            print_lines(format_contact(contact));
        }
    }
    Ok(())
}

fn cmd_contact(args: ContactArgs, json: bool) -> CmdResult {
    let (_, contacts) = load_fixture()?;
    let contact = contacts
        .by_name(args.name.trim())
        .ok_or_else(|| CliError::ContactNotFound(args.name.clone()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(contact)?);
    } else {
        print_lines(format_contact(contact));
    }
    Ok(())
}

fn cmd_actions(json: bool) -> CmdResult {
    let actions = palette_actions();
    if json {
        let out: Vec<ActionJson> = actions.into_iter().map(action_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(format_actions(&actions));
    }
    Ok(())
}
