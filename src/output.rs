//! Presentation formatting for artifact listings.
//!
//! Pure string/table builders: classification of lifecycle states into
//! glyph + color, relative-time rendering, and the listing table itself.
//! Callers decide where the result is written.

use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;

use crate::domain::{PushedArtifact, StatusState};

const BULLET: &str = "●";
const CHECK: &str = "✔";
const CROSS: &str = "✖";

/// Map a lifecycle state to its display glyph and color.
///
/// Total over all states: anything outside the three known lifecycle
/// outcomes renders as a blank, uncolored cell.
pub fn status_cell(state: StatusState) -> (&'static str, Option<Color>) {
    match state {
        StatusState::Running => (BULLET, Some(Color::Yellow)),
        StatusState::Success => (CHECK, Some(Color::Green)),
        StatusState::Error => (CROSS, Some(Color::Red)),
        StatusState::Unknown => ("", None),
    }
}

/// Render an optional RFC 3339 timestamp relative to `now`.
///
/// Absent or unparseable input renders as the empty string; a bad
/// timestamp never fails the listing, it just leaves the cell blank.
pub fn relative_time(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(then) => relative_phrase(then.with_timezone(&Utc), now),
        Err(_) => String::new(),
    }
}

/// Short relative phrase for an instant, e.g. "3 hours ago".
fn relative_phrase(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let (magnitude, future) = if delta.num_seconds() < 0 {
        (-delta, true)
    } else {
        (delta, false)
    };

    let secs = magnitude.num_seconds();
    let phrase = if secs < 2 {
        return "just now".to_string();
    } else if secs < 60 {
        format!("{} seconds", secs)
    } else if secs < 120 {
        "a minute".to_string()
    } else if secs < 3_600 {
        format!("{} minutes", magnitude.num_minutes())
    } else if secs < 7_200 {
        "an hour".to_string()
    } else if secs < 86_400 {
        format!("{} hours", magnitude.num_hours())
    } else if secs < 172_800 {
        "a day".to_string()
    } else if magnitude.num_days() < 31 {
        format!("{} days", magnitude.num_days())
    } else if magnitude.num_days() < 62 {
        "a month".to_string()
    } else if magnitude.num_days() < 365 {
        format!("{} months", magnitude.num_days() / 30)
    } else if magnitude.num_days() < 730 {
        "a year".to_string()
    } else {
        format!("{} years", magnitude.num_days() / 365)
    };

    if future {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

/// Label for the registry column: "registry/component", or whichever
/// side is present.
pub fn registry_label(artifact: &PushedArtifact) -> String {
    match (artifact.registry.is_empty(), artifact.component.is_empty()) {
        (false, false) => format!("{}/{}", artifact.registry, artifact.component),
        (false, true) => artifact.registry.clone(),
        (true, false) => artifact.component.clone(),
        (true, true) => String::new(),
    }
}

/// Build the artifact listing table.
///
/// One row per record, in the order given; only the status-glyph cell
/// carries a foreground color. An empty slice still yields the header.
pub fn artifact_table(artifacts: &[PushedArtifact], now: DateTime<Utc>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["", "ID", "Workspace", "Registry", "Started", "Completed"]);

    for artifact in artifacts {
        let (glyph, color) = status_cell(artifact.status.state);
        let mut status = Cell::new(glyph);
        if let Some(color) = color {
            status = status.fg(color);
        }

        table.add_row(vec![
            status,
            Cell::new(&artifact.id),
            Cell::new(artifact.workspace.as_str()),
            Cell::new(registry_label(artifact)),
            Cell::new(relative_time(artifact.status.start_time.as_deref(), now)),
            Cell::new(relative_time(artifact.status.complete_time.as_deref(), now)),
        ]);
    }

    table
}

/// Style an error line for the operator-facing output.
pub fn error_line(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}
