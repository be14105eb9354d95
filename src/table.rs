//! Header-plus-rows tables for match lists

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::models::MatchSummary;

/// Column order of a match list table
pub const MATCHLIST_HEADER: [&str; 8] = [
    "platformId",
    "gameId",
    "champion",
    "queue",
    "season",
    "timestamp",
    "role",
    "lane",
];

/// How the `timestamp` column is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampStyle {
    /// Epoch milliseconds as sent by the API
    #[default]
    Raw,
    /// `YYYY-MM-DD HH:MM:SS` in UTC
    Utc,
}

/// Formats epoch milliseconds as a UTC date and time.
/// Values outside chrono's range are printed as the raw number.
pub fn format_timestamp(epoch_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| epoch_millis.to_string())
}

pub fn matchlist_row(summary: &MatchSummary, style: TimestampStyle) -> Vec<String> {
    let timestamp = match style {
        TimestampStyle::Raw => summary.timestamp.to_string(),
        TimestampStyle::Utc => format_timestamp(summary.timestamp),
    };
    vec![
        summary.platform_id.clone(),
        summary.game_id.to_string(),
        summary.champion.to_string(),
        summary.queue.to_string(),
        summary.season.to_string(),
        timestamp,
        summary.role.clone(),
        summary.lane.clone(),
    ]
}

/// The header row followed by one row per match, in input order.
/// An empty match list still yields the header.
pub fn matchlist_table(matches: &[MatchSummary], style: TimestampStyle) -> Vec<Vec<String>> {
    std::iter::once(MATCHLIST_HEADER.iter().map(|h| h.to_string()).collect())
        .chain(matches.iter().map(|m| matchlist_row(m, style)))
        .collect()
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Writes one delimited row. Cells containing the separator, a quote or a
/// line break are quoted, with inner quotes doubled.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}

pub fn write_table<W: Write>(mut w: W, rows: &[Vec<String>], sep: char) -> io::Result<()> {
    for row in rows {
        write_row(&mut w, row, sep)?;
    }
    Ok(())
}

/// Pads every column to its widest cell, two spaces between columns.
/// Trailing whitespace is trimmed from each line.
pub fn render_aligned(rows: &[Vec<String>]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            line.trim_end().to_string()
        })
        .collect()
}
