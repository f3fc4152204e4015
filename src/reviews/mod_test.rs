use super::*;
use std::fs;

const STATS: &str = r#"[
  {"package": "krita", "app": "Krita", "histogram": [2, 3, 20, 75, 150]},
  {"package": "nano", "histogram": "[0, 1, 4, 9, 12]"},
  {"package": "one-hit", "histogram": [0, 0, 0, 0, 1]}
]"#;

#[test]
fn build_ratings_derives_missing_fields() {
    let entries: Vec<ReviewStats> =
        serde_json::from_str(r#"[{"package": "vim", "histogram": [0, 0, 0, 0, 10]}]"#).unwrap();
    let ratings = build_ratings(entries);
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].rating_count(), 10, "count defaults to the histogram total");
    assert_eq!(ratings[0].rating(), 10, "all-5-star mean scales to 10");
    assert_eq!(ratings[0].application_name(), "");
}

#[test]
fn build_ratings_respects_explicit_fields() {
    let entries: Vec<ReviewStats> = serde_json::from_str(
        r#"[{"package": "vim", "app": "Vim", "histogram": [1, 1, 1, 1, 1],
             "rating_count": 42, "rating": 6}]"#,
    )
    .unwrap();
    let ratings = build_ratings(entries);
    assert_eq!(ratings[0].rating_count(), 42);
    assert_eq!(ratings[0].rating(), 6);
    assert_eq!(ratings[0].application_name(), "Vim");
}

#[test]
fn build_ratings_accepts_legacy_string_histogram() {
    let entries: Vec<ReviewStats> =
        serde_json::from_str(r#"[{"package": "nano", "histogram": "[0, 1, 4, 9, 12]"}]"#).unwrap();
    let ratings = build_ratings(entries);
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].rating_count(), 26);
}

#[test]
fn build_ratings_skips_malformed_string_histogram() {
    let entries: Vec<ReviewStats> = serde_json::from_str(
        r#"[{"package": "broken", "histogram": "[1, 2]"},
            {"package": "fine", "histogram": [1, 1, 1, 1, 1]}]"#,
    )
    .unwrap();
    let ratings = build_ratings(entries);
    assert_eq!(ratings.len(), 1, "the malformed entry should be skipped");
    assert_eq!(ratings[0].package_name(), "fine");
}

#[test]
fn mean_rating_balanced_histogram() {
    // 15 points over 5 reviews: mean 3 stars, scaled to 6
    assert_eq!(mean_rating(&[1, 1, 1, 1, 1], 5), 6);
}

#[test]
fn mean_rating_empty_histogram() {
    assert_eq!(mean_rating(&[0, 0, 0, 0, 0], 0), 0);
}

#[test]
fn dampening_orders_sample_sizes() {
    let entries: Vec<ReviewStats> = serde_json::from_str(STATS).unwrap();
    let mut ratings = build_ratings(entries);
    ratings.sort_by(|a, b| b.sortable_rating().total_cmp(&a.sortable_rating()));
    assert_eq!(
        ratings[0].package_name(),
        "krita",
        "250 mostly-positive reviews should outrank a single 5-star"
    );
}

#[test]
fn run_on_stats_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratings.json");
    fs::write(&path, STATS).unwrap();
    run(Some(path.as_path()), false, 20, "dampened").unwrap();
}

#[test]
fn run_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratings.json");
    fs::write(&path, STATS).unwrap();
    run(Some(path.as_path()), true, 20, "dampened").unwrap();
}

#[test]
fn run_sort_variants() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratings.json");
    fs::write(&path, STATS).unwrap();
    run(Some(path.as_path()), false, 20, "reviews").unwrap();
    run(Some(path.as_path()), false, 20, "rating").unwrap();
}

#[test]
fn run_missing_file() {
    let err = run(
        Some(std::path::Path::new("/nonexistent/ratings.json")),
        false,
        20,
        "dampened",
    )
    .unwrap_err();
    assert!(
        err.to_string().contains("ratings.json"),
        "error should name the file, got: {err}"
    );
}

#[test]
fn run_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratings.json");
    fs::write(&path, "not json at all").unwrap();
    assert!(run(Some(path.as_path()), false, 20, "dampened").is_err());
}
