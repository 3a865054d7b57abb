//! Table rendering utilities for CLI outputs.
//!
//! Cells may carry ANSI escape sequences, so padding is computed from the
//! visible display width, not the byte length.

use unicode_width::UnicodeWidthChar;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad_cell(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad_cell(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad_cell(s: &str, width: usize) -> String {
    let visible = visible_width(s);
    let padding = width.saturating_sub(visible);
    format!("{}{}", s, " ".repeat(padding))
}

/// Display width of a cell, skipping ANSI `ESC[...m` sequences.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
            continue;
        }
        width += UnicodeWidthChar::width(c).unwrap_or(0);
    }

    width
}
