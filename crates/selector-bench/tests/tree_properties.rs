//! Property tests for tree generation and structural selectors

#[path = "common/runner.rs"]
mod common;

use common::{list_case, matches, runner};
use proptest::prelude::*;
use selector_bench::tree::{generate, Annotation, Marker, Placement, Shape};
use selector_bench::Traversal;

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["li", "p", "dt", "dd", "span"]).prop_map(String::from)
}

proptest! {
    #[test]
    fn uniform_has_count_children_of_tag(count in 1usize..500, tag in tag_strategy()) {
        let tree = generate("ul", &Shape::uniform(tag.clone()), count, &[]).unwrap();

        prop_assert_eq!(tree.child_count(), count);
        prop_assert_eq!(tree.node_count, count + 1);
        prop_assert!(tree.root.children.iter().all(|c| c.tag == tag));
    }

    #[test]
    fn alternating_kinds_follow_position(pairs in 1usize..250) {
        let tree = generate("dl", &Shape::alternating("dt", "dd"), pairs * 2, &[]).unwrap();

        for (i, child) in tree.root.children.iter().enumerate() {
            // 1-indexed position i + 1: odd is the first kind
            let expected = if (i + 1) % 2 == 1 { "dt" } else { "dd" };
            prop_assert_eq!(child.tag.as_str(), expected);
        }
    }

    #[test]
    fn alternating_odd_counts_are_rejected(pairs in 0usize..250) {
        let result = generate("dl", &Shape::alternating("dt", "dd"), pairs * 2 + 1, &[]);

        prop_assert!(result.is_err());
    }

    #[test]
    fn generation_is_repeatable(
        count in 1usize..200,
        index in 0usize..200,
        period in 1usize..5,
    ) {
        let index = index % count;
        let markers = vec![
            Marker::new(Placement::At(index), Annotation::Id("target".into())),
            Marker::new(Placement::Every { period, offset: 0 }, Annotation::Class("c".into())),
            Marker::new(Placement::Append, Annotation::Text("tail".into())),
        ];

        let a = generate("ul", &Shape::uniform("li"), count, &markers).unwrap();
        let b = generate("ul", &Shape::uniform("li"), count, &markers).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.child_count(), count + 1);
        prop_assert_eq!(a.root.children[index].attribute("id"), Some(Some("target")));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn nth_child_matches_formula(count in 1usize..40, a in 1usize..5, b in 1usize..8) {
        let selector = format!(":nth-child({}n+{})", a, b);
        let result = runner(count).run_case(&list_case("nth", &selector, Traversal::Children));

        let expected = (1..=count).filter(|i| *i >= b && (i - b) % a == 0).count();
        prop_assert_eq!(matches(&result), expected);
    }
}
