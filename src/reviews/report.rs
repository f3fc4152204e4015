use serde::Serialize;

use crate::rating::Rating;
use crate::report_helpers;

/// Print the ranked review table: sample size, 0–10 rating, and the
/// dampened sort key.
pub fn print_report(ratings: &[Rating]) {
    let separator = report_helpers::separator(66);

    println!("Review Ratings");
    println!("{separator}");

    if ratings.is_empty() {
        println!(" no rated packages found");
        println!("{separator}");
        return;
    }

    let name_width = report_helpers::max_name_width(ratings.iter().map(|r| r.package_name()), 7);
    let app_width = report_helpers::max_name_width(ratings.iter().map(|r| r.application_name()), 3);

    println!(
        " {:<nw$}  {:<aw$}  {:>7}  {:>6}  {:>8}",
        "Package",
        "App",
        "Reviews",
        "Rating",
        "Dampened",
        nw = name_width,
        aw = app_width
    );
    println!("{separator}");

    for r in ratings {
        println!(
            " {:<nw$}  {:<aw$}  {:>7}  {:>3}/10  {:>8.2}",
            r.package_name(),
            r.application_name(),
            r.rating_count(),
            r.rating(),
            r.sortable_rating(),
            nw = name_width,
            aw = app_width
        );
    }

    println!("{separator}");
}

/// JSON-serializable representation of one ranked review entry.
#[derive(Serialize)]
struct JsonEntry {
    package: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    app: String,
    review_count: u64,
    rating: u32,
    rating_points: f64,
    sortable_rating: f64,
}

/// Serialize the ranked entries to pretty-printed JSON on stdout.
pub fn print_json(ratings: &[Rating]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry> = ratings
        .iter()
        .map(|r| JsonEntry {
            package: r.package_name().to_string(),
            app: r.application_name().to_string(),
            review_count: r.rating_count(),
            rating: r.rating(),
            rating_points: r.rating_points(),
            sortable_rating: r.sortable_rating(),
        })
        .collect();
    report_helpers::print_json_stdout(&entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
