//! Formatting utilities used for CLI and export outputs.

use crate::models::status_code::StatusCode;
use crate::utils::colors;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Human label and ANSI color for a server status code.
pub fn describe_status(code: StatusCode) -> (&'static str, &'static str) {
    match code {
        StatusCode::Absent => ("Absent", colors::GREY),
        StatusCode::Present => ("Present", colors::GREEN),
        StatusCode::Late => ("Late", colors::YELLOW),
    }
}
