//! Plain-text table layout.
//!
//! Everything here is string formatting only, so it can be tested without a
//! terminal. Each row keeps the [`Tone`] it should be rendered with.

use itertools::Itertools;
use struggle_core::insights::{status_heading, StatusShare};
use struggle_core::record::Record;

use super::Tone;

/// Column headers for record tables, in file order.
pub const RECORD_HEADERS: [&str; 5] = ["DATE ADDED", "COMPANY", "JOB TITLE", "STATUS", "NOTES"];

const NUMBER_HEADER: &str = "NUMBER";
const INSIGHT_HEADERS: [&str; 3] = ["STATUS", "COUNT", "SHARE"];
const COLUMN_GAP: &str = "  ";

/// One rendered line of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLine {
    pub tone: Tone,
    pub text: String,
}

/// Lays out `records` one per row. With `numbered`, rows are prefixed by their
/// 0-based index, which is what selection prompts expect.
#[must_use]
pub fn record_table(records: &[&Record], numbered: bool) -> Vec<TableLine> {
    let mut headers: Vec<&str> = Vec::new();
    if numbered {
        headers.push(NUMBER_HEADER);
    }
    headers.extend(RECORD_HEADERS);

    let rows = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut cells = Vec::with_capacity(headers.len());
            if numbered {
                cells.push(i.to_string());
            }
            cells.extend([
                record.date_added.clone(),
                record.company.clone(),
                record.title.clone(),
                record.status.label().to_string(),
                record.notes.clone(),
            ]);
            (Tone::Status(record.status), cells)
        })
        .collect_vec();

    layout(&headers, rows)
}

/// Lays out one row per share: "`n` out of `N` total jobs", "`p`% of all jobs".
#[must_use]
pub fn insight_table(shares: &[StatusShare]) -> Vec<TableLine> {
    let rows = shares
        .iter()
        .map(|share| {
            (
                Tone::Status(share.status),
                vec![
                    status_heading(share.status).to_string(),
                    format!("{} out of {} total jobs", share.count, share.total),
                    format!("{:.0}% of all jobs", share.percentage),
                ],
            )
        })
        .collect_vec();

    layout(&INSIGHT_HEADERS, rows)
}

fn layout(headers: &[&str], rows: Vec<(Tone, Vec<String>)>) -> Vec<TableLine> {
    let rows = rows
        .into_iter()
        .map(|(tone, cells)| (tone, cells.iter().map(|cell| single_line(cell)).collect_vec()))
        .collect_vec();

    let widths = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|(_, cells)| cells.get(column))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect_vec();

    let header = join_padded(headers.iter().copied(), &widths);
    let separator = "-".repeat(header.chars().count());

    let mut lines = vec![
        TableLine {
            tone: Tone::Heading,
            text: header,
        },
        TableLine {
            tone: Tone::Plain,
            text: separator,
        },
    ];

    lines.extend(rows.iter().map(|(tone, cells)| TableLine {
        tone: *tone,
        text: join_padded(cells.iter().map(String::as_str), &widths),
    }));

    lines
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad_to_width(cell, *width))
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

/// Pad a value with spaces up to `width` characters
fn pad_to_width(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(padding))
}

/// Notes may hold line breaks; a table row must not.
fn single_line(cell: &str) -> String {
    cell.split(['\r', '\n']).filter(|part| !part.is_empty()).join(" ")
}
