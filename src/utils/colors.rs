//! Status colors for list and calendar output.

use ansi_term::{Colour, Style};

pub const DOT: &str = "●";
pub const EMPTY_DOT: &str = "·";

/// Colour used for a status tag across every record kind.
pub fn status_colour(status: &str) -> Colour {
    match status {
        "pending" | "scheduled" => Colour::Yellow,
        "approved" | "confirmed" | "active" => Colour::Green,
        "rejected" | "cancelled" | "maintenance" => Colour::Red,
        "completed" => Colour::Blue,
        "retired" => Colour::Purple,
        _ => Colour::White,
    }
}

pub fn paint_status(status: &str) -> String {
    status_colour(status).paint(status).to_string()
}

/// One calendar dot: coloured when present, a grey placeholder otherwise.
pub fn paint_dot(status: &str, present: bool) -> String {
    if present {
        status_colour(status).paint(DOT).to_string()
    } else {
        grey(EMPTY_DOT)
    }
}

pub fn grey(s: &str) -> String {
    Colour::Fixed(244).paint(s).to_string()
}

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}
