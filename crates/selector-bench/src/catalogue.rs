//! Built-in query case catalogue
//!
//! One row per case, in report order. Uniform cases generate a `ul` of `li`
//! children, alternating cases a `dl` of `dt`/`dd` pairs.

use crate::case::QueryCase;
use crate::traversal::Traversal;
use crate::tree::{Annotation, Marker, Placement, Shape};

/// Default number of generated nodes per tree
pub const DEFAULT_NODE_COUNT: usize = 3000;

/// Default number of timed repetitions per case
pub const DEFAULT_REPETITIONS: u32 = 200;

const CONTAINS_TEXT: &str = "abcdefghijklmnopqrstuvwxyz&abcdefghijklmnopqrstuvwxy";

#[derive(Clone, Copy)]
enum Layout {
    List,
    Pairs,
}

#[derive(Clone, Copy)]
enum Mark {
    None,
    AppendId(&'static str),
    AppendClass(&'static str),
    /// Boolean attribute on every second node
    EvenAttribute(&'static str),
    /// Text on every second node
    EvenText(&'static str),
}

struct Row {
    name: &'static str,
    layout: Layout,
    mark: Mark,
    scope: &'static str,
    traversal: Traversal,
    selector: &'static str,
}

const fn row(
    name: &'static str,
    layout: Layout,
    mark: Mark,
    scope: &'static str,
    traversal: Traversal,
    selector: &'static str,
) -> Row {
    Row {
        name,
        layout,
        mark,
        scope,
        traversal,
        selector,
    }
}

use Layout::{List, Pairs};
use Traversal::{
    AllNextSiblings, AllPreviousSiblings, Children, Descendants, NextSibling, PreviousSibling,
};

#[rustfmt::skip]
const ROWS: &[Row] = &[
    row("find_id",              List,  Mark::AppendId("target"),             "ul",    Descendants,         "#target"),
    row("find_class",           List,  Mark::AppendClass("target"),          "ul",    Descendants,         ".target"),
    row("find_name",            Pairs, Mark::None,                           "dl",    Descendants,         "dt"),
    row("find_attr",            Pairs, Mark::EvenAttribute("contenteditable"), "dl",  Descendants,         "[contenteditable]"),
    row("find_prev",            Pairs, Mark::None,                           "dl dt", PreviousSibling,     "dd"),
    row("find_prev_all",        Pairs, Mark::None,                           "dl dt", AllPreviousSiblings, "dd"),
    row("find_next",            Pairs, Mark::None,                           "dl dt", NextSibling,         "dd"),
    row("find_next_all",        Pairs, Mark::None,                           "dl dt", AllNextSiblings,     "dd"),
    row("empty",                List,  Mark::EvenText("a"),                  "ul",    Children,            ":empty"),
    row("contains",             List,  Mark::EvenText(CONTAINS_TEXT),        "ul",    Children,            ":contains('z&a')"),
    row("first_child",          List,  Mark::None,                           "ul",    Children,            ":first-child"),
    row("last_child",           List,  Mark::None,                           "ul",    Children,            ":last-child"),
    row("first_of_type",        Pairs, Mark::None,                           "dl",    Children,            ":first-of-type"),
    row("last_of_type",         Pairs, Mark::None,                           "dl",    Children,            ":last-of-type"),
    row("nth_child",            List,  Mark::None,                           "ul",    Children,            ":nth-child(2n),:nth-child(3n),:nth-child(5n)"),
    row("nth_child_10",         List,  Mark::None,                           "ul",    Children,            ":nth-child(10)"),
    row("nth_child_2n5",        List,  Mark::None,                           "ul",    Children,            ":nth-child(2n + 5)"),
    row("nth_last_child",       List,  Mark::None,                           "ul",    Children,            ":nth-last-child(2n),:nth-last-child(3n),:nth-last-child(5n)"),
    row("nth_last_child_10",    List,  Mark::None,                           "ul",    Children,            ":nth-last-child(10)"),
    row("nth_last_child_2n5",   List,  Mark::None,                           "ul",    Children,            ":nth-last-child(2n + 5)"),
    row("nth_of_type",          Pairs, Mark::None,                           "dl",    Children,            ":nth-of-type(2n),:nth-of-type(3n)"),
    row("nth_of_type_10",       Pairs, Mark::None,                           "dl",    Children,            ":nth-of-type(10)"),
    row("nth_of_type_2n5",      Pairs, Mark::None,                           "dl",    Children,            ":nth-of-type(2n+5)"),
    row("nth_last_of_type",     Pairs, Mark::None,                           "dl",    Children,            ":nth-last-of-type(2n),:nth-last-of-type(3n)"),
    row("nth_last_of_type_10",  Pairs, Mark::None,                           "dl",    Children,            ":nth-last-of-type(10)"),
    row("nth_last_of_type_2n5", Pairs, Mark::None,                           "dl",    Children,            ":nth-last-of-type(2n+5)"),
    row("nth_child_find",       List,  Mark::None,                           "ul",    Descendants,         ":nth-child(2n),:nth-child(3n),:nth-child(5n)"),
];

impl Row {
    fn to_case(&self) -> QueryCase {
        let (container, shape) = match self.layout {
            List => ("ul", Shape::uniform("li")),
            Pairs => ("dl", Shape::alternating("dt", "dd")),
        };
        let case = QueryCase::new(
            self.name,
            container,
            shape,
            self.scope,
            self.selector,
            self.traversal,
        );

        let every_second = Placement::Every {
            period: 2,
            offset: 1,
        };
        let marker = match self.mark {
            Mark::None => return case,
            Mark::AppendId(id) => Marker::new(Placement::Append, Annotation::Id(id.into())),
            Mark::AppendClass(class) => {
                Marker::new(Placement::Append, Annotation::Class(class.into()))
            }
            Mark::EvenAttribute(name) => Marker::new(
                every_second,
                Annotation::Attribute {
                    name: name.into(),
                    value: None,
                },
            ),
            Mark::EvenText(text) => Marker::new(every_second, Annotation::Text(text.into())),
        };
        case.with_marker(marker)
    }
}

/// The built-in cases in report order
pub fn builtin() -> Vec<QueryCase> {
    ROWS.iter().map(Row::to_case).collect()
}

/// Names of the built-in cases in report order
pub fn case_names() -> Vec<&'static str> {
    ROWS.iter().map(|row| row.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names = case_names();
        let unique: HashSet<_> = names.iter().collect();

        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_builtin_matches_names() {
        let cases = builtin();
        let names: Vec<&str> = cases.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, case_names());
        assert_eq!(cases.len(), 27);
    }

    #[test]
    fn test_every_case_valid_at_default_count() {
        for case in builtin() {
            assert!(
                case.validate(DEFAULT_NODE_COUNT).is_ok(),
                "{} should be valid",
                case.name
            );
        }
    }

    #[test]
    fn test_alternating_cases_reject_odd_counts() {
        let find_name = builtin().into_iter().find(|c| c.name == "find_name").unwrap();

        assert!(find_name.validate(3001).is_err());
    }

    #[test]
    fn test_find_id_appends_target() {
        let find_id = builtin().into_iter().next().unwrap();
        let tree = find_id.build_tree(10).unwrap();

        assert_eq!(tree.child_count(), 11);
        assert!(tree.to_markup().ends_with(r#"<li id="target"></li></ul>"#));
    }

    #[test]
    fn test_contains_text_is_escaped_in_markup() {
        let contains = builtin().into_iter().find(|c| c.name == "contains").unwrap();
        let markup = contains.build_tree(2).unwrap().to_markup();

        assert_eq!(
            markup,
            "<ul><li></li><li>abcdefghijklmnopqrstuvwxyz&amp;abcdefghijklmnopqrstuvwxy</li></ul>"
        );
    }
}
