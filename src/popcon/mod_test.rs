use super::*;
use crate::rating::PopconCounters;
use std::collections::HashMap;
use std::fs;

const DUMP: &str = "\
POPULARITY-CONTEST-0 TIME:1000000 ID:deadbeef ARCH:amd64 POPCONVER:1.73\n\
Package: vim 120 95 10 5\n\
Package: nano 80 70 5 5\n\
Package: dropped 0 0 0 0\n\
END-POPULARITY-CONTEST-0\n";

#[test]
fn run_on_dump_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("popcon.txt");
    fs::write(&path, DUMP).unwrap();
    run(Some(path.as_path()), false, 20, "installs").unwrap();
}

#[test]
fn run_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("popcon.txt");
    fs::write(&path, DUMP).unwrap();
    run(Some(path.as_path()), true, 20, "installs").unwrap();
}

#[test]
fn run_sort_by_stale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("popcon.txt");
    fs::write(&path, DUMP).unwrap();
    run(Some(path.as_path()), false, 20, "stale").unwrap();
}

#[test]
fn run_missing_file() {
    let err = run(
        Some(std::path::Path::new("/nonexistent/popcon.txt")),
        false,
        20,
        "installs",
    )
    .unwrap_err();
    assert!(
        err.to_string().contains("popcon.txt"),
        "error should name the file, got: {err}"
    );
}

fn ratings_by_name(entries: &[(&str, u64, u64, u64, u64)]) -> HashMap<String, Rating> {
    entries
        .iter()
        .map(|&(name, inst, vote, old, recent)| {
            (
                name.to_string(),
                Rating::from_popcon(
                    name,
                    PopconCounters {
                        inst,
                        vote,
                        old,
                        recent,
                    },
                ),
            )
        })
        .collect()
}

#[test]
fn rank_by_installs_descending() {
    let ratings = ratings_by_name(&[
        ("small", 10, 8, 1, 1),
        ("big", 1000, 900, 50, 20),
        ("mid", 100, 80, 10, 5),
    ]);
    let ranked = rank(ratings, "installs");
    let names: Vec<&str> = ranked.iter().map(|r| r.package_name()).collect();
    assert_eq!(names, ["big", "mid", "small"]);
}

#[test]
fn rank_ties_break_by_name() {
    let ratings = ratings_by_name(&[("zeta", 10, 8, 1, 1), ("alpha", 10, 8, 1, 1)]);
    let ranked = rank(ratings, "installs");
    let names: Vec<&str> = ranked.iter().map(|r| r.package_name()).collect();
    assert_eq!(names, ["alpha", "zeta"]);
}

#[test]
fn rank_by_stale_ratio() {
    // stale = old / (inst - vote)
    let ratings = ratings_by_name(&[
        ("fresh", 100, 90, 1, 9),  // 0.1
        ("rotting", 100, 50, 45, 5), // 0.9
    ]);
    let ranked = rank(ratings, "stale");
    assert_eq!(ranked[0].package_name(), "rotting");
}
