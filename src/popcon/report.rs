use serde::Serialize;

use crate::rating::Rating;
use crate::report_helpers;

/// Print the ranked popularity table: install counts plus the stale
/// ratio (`old / (inst - vote)`).
pub fn print_report(ratings: &[Rating]) {
    let separator = report_helpers::separator(56);

    println!("Popcon Popularity");
    println!("{separator}");

    if ratings.is_empty() {
        println!(" no rated packages found");
        println!("{separator}");
        return;
    }

    let max_name = report_helpers::max_name_width(ratings.iter().map(|r| r.package_name()), 7);

    println!(
        " {:<width$}  {:>12}  {:>7}",
        "Package",
        "Installs",
        "Stale",
        width = max_name
    );
    println!("{separator}");

    for r in ratings {
        println!(
            " {:<width$}  {:>12}  {:>7.2}",
            r.package_name(),
            format_thousands(r.rating_count()),
            r.rating_points(),
            width = max_name
        );
    }

    println!("{separator}");
}

/// Format an integer with thousand separators (e.g. 1234567 → "1,234,567").
fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// JSON-serializable representation of one ranked popcon entry.
#[derive(Serialize)]
struct JsonEntry {
    package: String,
    installs: u64,
    stale_ratio: f64,
    rating: u32,
    sortable_rating: f64,
}

/// Serialize the ranked entries to pretty-printed JSON on stdout.
pub fn print_json(ratings: &[Rating]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry> = ratings
        .iter()
        .map(|r| JsonEntry {
            package: r.package_name().to_string(),
            installs: r.rating_count(),
            stale_ratio: r.rating_points(),
            rating: r.rating(),
            sortable_rating: r.sortable_rating(),
        })
        .collect();
    report_helpers::print_json_stdout(&entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
