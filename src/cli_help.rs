//! Long help text constants for CLI subcommands.
//!
//! Extracted from `cli.rs` to keep the argument definitions concise.

/// Popcon dump parsing and install-count ranking.
pub const POPCON: &str = "\
Rank packages from a Debian popularity-contest dump.

Reads a line-oriented popcon results file and ranks packages by how many
participating systems have them installed.

Recognized lines look like:

  Package: <name> <inst> <vote> <old> <recent>

where <inst> counts systems with the package installed, <vote> systems
that use it regularly, <old> systems that have not used it in a long
time, and <recent> systems that upgraded it lately. Lines in any other
shape (headers, comments, malformed rows) are skipped, and packages
with a zero install count are dropped.

The stale column is <old> / (<inst> - <vote>): the share of the
not-regularly-used installs that have gone unused for a long time.

Examples:
  pop popcon all-popcon-results.txt
  zcat all-popcon-results.txt.gz | pop popcon
  pop popcon dump.txt --top 50 --json";

/// Review-histogram ranking with Wilson-score dampening.
pub const REVIEWS: &str = "\
Rank packages by review ratings with Wilson-score dampening.

Reads a JSON array of per-package review statistics:

  [
    {\"package\": \"krita\", \"app\": \"Krita\", \"histogram\": [1, 0, 2, 5, 40]},
    {\"package\": \"nano\", \"histogram\": \"[0, 1, 4, 9, 12]\"}
  ]

The 5-bucket histogram counts 1-star through 5-star reviews in
ascending star order; both the array form and the bracketed string form
are accepted. Optional fields: rating_count (defaults to the histogram
total) and rating (0-10, defaults to the mean star value scaled by 2).

Packages are ranked by the dampened sortable rating, which keeps items
with a handful of reviews from outranking well-reviewed ones. See
`pop rate --help` for the formula.

Examples:
  pop reviews ratings.json
  pop reviews ratings.json --sort-by reviews
  pop reviews ratings.json --json";

/// Single-histogram rating breakdown with the dampening formula.
pub const RATE: &str = "\
Compute the dampened rating for a single 5-star histogram.

The histogram is a bracketed list of 1-star through 5-star review
counts in ascending star order:

  \"[n1, n2, n3, n4, n5]\"

Each bucket is scored with the lower bound of a Wilson confidence
interval, treating the bucket as count successes out of the histogram
total:

  z    = pnormaldist(1 - power/2)
  phat = count / total
  ws   = (phat + z^2/(2*total)
          - z*sqrt((phat*(1-phat) + z^2/(4*total)) / total))
         / (1 + z^2/total)

Buckets are weighted by signed distance from the neutral 3-star
midpoint and re-centered:

  dampened = sum((stars - 3) * ws) + 3    -- 1..5 star scale
  sortable = dampened * 2                 -- 0..10 scale

Low sample sizes pull every bucket's Wilson bound toward 0, so sparsely
reviewed items converge to the neutral midpoint instead of swinging to
the extremes.

Examples:
  pop rate \"[0, 1, 2, 5, 40]\"
  pop rate \"[1, 0, 0, 0, 0]\" --json";
