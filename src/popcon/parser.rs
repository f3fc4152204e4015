//! Line parser for popularity-contest result dumps.
//!
//! The dump is a best-effort data feed: headers, comments and malformed
//! rows are interleaved with the records we want, so anything that does
//! not match the record shape is skipped without complaint.

use std::collections::HashMap;
use std::io::{self, BufRead};

use crate::rating::{PopconCounters, Rating};

/// Parse a popcon dump into a map from package name to its rating.
///
/// Recognized lines look like `Package: <name> <inst> <vote> <old> <recent>`.
/// Packages whose rating count comes out zero are filtered from the map.
/// Duplicate package lines keep the last occurrence.
pub fn parse(reader: impl BufRead) -> io::Result<HashMap<String, Rating>> {
    let mut ratings = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let Some((name, counters)) = parse_line(&line) else {
            continue;
        };

        let rating = Rating::from_popcon(name, counters);
        if rating.rating_count() == 0 {
            continue; // filtered, not an error
        }
        ratings.insert(name.to_string(), rating);
    }

    Ok(ratings)
}

/// Match one record line. The `Package:` prefix is anchored at the start
/// of the line; the four counters must be plain digit runs with nothing
/// after them.
fn parse_line(line: &str) -> Option<(&str, PopconCounters)> {
    let rest = line.strip_prefix("Package: ")?;

    let mut fields = rest.split_whitespace();
    let name = fields.next()?;
    let inst = parse_count(fields.next()?)?;
    let vote = parse_count(fields.next()?)?;
    let old = parse_count(fields.next()?)?;
    let recent = parse_count(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }

    Some((
        name,
        PopconCounters {
            inst,
            vote,
            old,
            recent,
        },
    ))
}

/// Counters are bare digit runs; `parse::<u64>` alone would also accept
/// a leading `+`.
fn parse_count(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
