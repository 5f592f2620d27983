use std::io::{self, Write};

use crate::github::{Event, EventKind};

const NO_ACTIVITY: &str = "No recent activity found.";

/// Printed where a payload field the message needs was left out by the API.
const ABSENT_FIELD: &str = "undefined";

/// Writes one line per event to `out`, keeping the order of `events`.
pub fn display_activity<W: Write>(events: &[Event], out: &mut W) -> io::Result<()> {
    if events.is_empty() {
        return writeln!(out, "{}", NO_ACTIVITY);
    }

    for event in events {
        writeln!(out, "- {} .", describe(event))?;
    }

    Ok(())
}

/// Human readable summary of a single event.
pub fn describe(event: &Event) -> String {
    let repo = &event.repo.name;

    match event.kind() {
        EventKind::Push { commits } => format!("Pushed {} commit(s) to {}", commits, repo),
        EventKind::Issues { action } => {
            let action = action.map_or_else(|| ABSENT_FIELD.to_owned(), capitalize);
            format!("{} an issue in {}", action, repo)
        }
        EventKind::Watch => format!("Starred {}", repo),
        EventKind::Fork => format!("Forked {}", repo),
        EventKind::Create { ref_type } => {
            format!("Created {} in {}", ref_type.unwrap_or(ABSENT_FIELD), repo)
        }
        EventKind::Other(r#type) => format!("{} in {}", r#type.replacen("Event", "", 1), repo),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
