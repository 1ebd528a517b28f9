//! Match counts of the built-in catalogue on a 30-node tree
//!
//! Expected values are worked out by hand from the tree layout: a `ul` of
//! 30 `li`, or a `dl` of 15 `dt`/`dd` pairs.

#[path = "common/runner.rs"]
mod common;

use common::{matches, runner};
use pretty_assertions::assert_eq;
use selector_bench::catalogue;

#[test]
fn test_catalogue_match_counts() {
    let results = runner(30).run(&catalogue::builtin());

    let counts: Vec<(&str, usize)> = results
        .iter()
        .map(|r| (r.name.as_str(), matches(r)))
        .collect();

    assert_eq!(
        counts,
        vec![
            ("find_id", 1),
            ("find_class", 1),
            ("find_name", 15),
            ("find_attr", 15),
            // the first dt has no previous sibling
            ("find_prev", 14),
            ("find_prev_all", 14),
            ("find_next", 15),
            ("find_next_all", 15),
            ("empty", 15),
            ("contains", 15),
            ("first_child", 1),
            ("last_child", 1),
            ("first_of_type", 2),
            ("last_of_type", 2),
            // multiples of 2, 3 or 5 up to 30
            ("nth_child", 22),
            ("nth_child_10", 1),
            // 5, 7, ..., 29
            ("nth_child_2n5", 13),
            ("nth_last_child", 22),
            ("nth_last_child_10", 1),
            ("nth_last_child_2n5", 13),
            // 10 of 15 per kind
            ("nth_of_type", 20),
            ("nth_of_type_10", 2),
            ("nth_of_type_2n5", 12),
            ("nth_last_of_type", 20),
            ("nth_last_of_type_10", 2),
            ("nth_last_of_type_2n5", 12),
            ("nth_child_find", 22),
        ]
    );
}
