// Utility functions for feed rendering

use chrono::{DateTime, Utc};

/// Format a timestamp relative to `now` for feed display.
///
/// The rendering layer receives this alongside the ranked posts; it has
/// no effect on ordering.
pub fn format_relative_time(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - time;

    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();
    let months = days / 30;
    let years = days / 365;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 30 {
        format!("{days}d ago")
    } else if months < 12 {
        format!("{months}mo ago")
    } else {
        format!("{years}y ago")
    }
}
