use chrono::{DateTime, Local, Utc};

use s3cli::types::size::humanize_size;
use s3cli::types::{BucketSummary, ObjectSummary};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render_buckets(buckets: &[BucketSummary]) -> String {
    let rows: Vec<Vec<String>> = buckets
        .iter()
        .map(|bucket| vec![bucket.name.clone(), to_local_string(&bucket.creation_date)])
        .collect();

    render_table(&["name", "created date"], &rows)
}

pub fn render_objects(objects: &[ObjectSummary]) -> String {
    let rows: Vec<Vec<String>> = objects
        .iter()
        .map(|object| {
            vec![
                object.key.clone(),
                humanize_size(u64::try_from(object.size).unwrap_or_default()),
                to_local_string(&object.last_modified),
            ]
        })
        .collect();

    render_table(&["key", "size", "last modified"], &rows)
}

fn to_local_string(date_time: &DateTime<Utc>) -> String {
    date_time
        .with_timezone(&Local)
        .format(DATE_TIME_FORMAT)
        .to_string()
}

/// Renders an ASCII table with every column padded to its widest cell.
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|column| column.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{border}+\n");

    let mut table = border.clone();
    table.push_str(&render_row(header.iter().copied(), &widths));
    table.push_str(&border);
    for row in rows {
        table.push_str(&render_row(row.iter().map(String::as_str), &widths));
    }
    if !rows.is_empty() {
        table.push_str(&border);
    }

    table
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width - cell.chars().count();
            format!(" {cell}{} ", " ".repeat(padding))
        })
        .collect();

    format!("|{}|\n", cells.join("|"))
}
