use anyhow::Result;
use crossterm::{
    QueueableCommand,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};
use std::cmp::max;
use std::io::{self, Write};

pub struct ColumnLayout {
    pub columns: usize,
    pub column_width: usize,
}

impl ColumnLayout {
    /// Fit as many columns as the width allows. For `n` columns we need
    /// room for `n - 1` separating spaces, so the largest `n` satisfying
    /// `n * column_width + n - 1 <= width` is `(width + 1) / (column_width + 1)`.
    pub fn fit(items: &[String], width: usize) -> Self {
        let column_width = items.iter().map(String::len).max().unwrap_or(0);
        let columns = max(1, (width + 1) / (column_width + 1));
        Self {
            columns,
            column_width,
        }
    }
}

/// Render items left-justified in fixed-width columns. Each item is padded
/// to the column width and followed by a single space, except at the end of
/// a row or the end of the list, where a newline ends the line.
pub fn render_columns(items: &[String], layout: &ColumnLayout) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{:<width$}", item, width = layout.column_width));
        if i % layout.columns == layout.columns - 1 || i == items.len() - 1 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    out
}

pub fn print_columns(items: &[String], width: usize) -> Result<()> {
    let layout = ColumnLayout::fit(items, width);
    let rendered = render_columns(items, &layout);
    let mut stdout = io::stdout();
    if let Err(err) = stdout.write_all(rendered.as_bytes()) {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

pub fn terminal_width() -> usize {
    terminal::size().map(|(w, _)| w as usize).unwrap_or(80)
}

pub fn print_success(message: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(SetForegroundColor(Color::Green))?;
    stdout.queue(SetAttribute(Attribute::Bold))?;
    stdout.queue(Print("✓ "))?;
    stdout.queue(SetAttribute(Attribute::Reset))?;
    stdout.queue(SetForegroundColor(Color::Green))?;
    stdout.queue(Print(message))?;
    stdout.queue(ResetColor)?;
    writeln!(stdout)?;
    Ok(())
}
