mod parser;
mod report;

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::rating::Rating;
use crate::report_helpers;

use report::{print_json, print_report};

pub fn run(
    file: Option<&Path>,
    json: bool,
    top: usize,
    sort_by: &str,
) -> Result<(), Box<dyn Error>> {
    let ratings = match file {
        Some(path) => {
            let f = File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
            parser::parse(BufReader::new(f))?
        }
        None => parser::parse(io::stdin().lock())?,
    };

    let mut results = rank(ratings, sort_by);
    report_helpers::output_results(&mut results, top, json, print_json, print_report)
}

/// Order ratings by the chosen metric, descending, with the package name
/// as a stable tie-breaker.
fn rank(ratings: HashMap<String, Rating>, sort_by: &str) -> Vec<Rating> {
    let mut results: Vec<Rating> = ratings.into_values().collect();
    match sort_by {
        "stale" => results.sort_by(|a, b| {
            b.rating_points()
                .total_cmp(&a.rating_points())
                .then_with(|| a.package_name().cmp(b.package_name()))
        }),
        _ => results.sort_by(|a, b| {
            b.sortable_rating()
                .total_cmp(&a.sortable_rating())
                .then_with(|| a.package_name().cmp(b.package_name()))
        }),
    }
    results
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
