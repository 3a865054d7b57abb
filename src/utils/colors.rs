/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholder values like "--:--" or an empty cell, leave real
/// values untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Clock-in values render green, clock-out values red, placeholders grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
