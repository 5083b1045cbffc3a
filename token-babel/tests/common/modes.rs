//! Mode grouping over realistic token sets.

use proptest::prelude::*;
use token_babel::common::tree;
use token_babel::modes::{self, canonical_path, ModeConvention};
use token_babel::Token;

fn tokens() -> Vec<Token> {
    vec![
        Token::new(&["color", "background", "primary"], "bg", "#ffffff").with_type("color"),
        Token::new(&["color", "dark", "background", "primary"], "bgDark", "#111111")
            .with_type("color"),
        Token::new(&["color", "dark", "accent"], "accentDark", "#00ff00").with_type("color"),
        Token::new(&["size", "spacing", "m"], "m", 16).with_type("dimension"),
    ]
}

#[test]
fn pairs_share_a_canonical_path() {
    let tokens = tokens();
    let groups = modes::group(&tokens, ModeConvention::SecondSegment);
    assert_eq!(groups.len(), 3);

    let background = groups
        .get(&["color".to_string(), "background".to_string(), "primary".to_string()])
        .unwrap();
    assert_eq!(background.light().unwrap().name, "bg");
    assert_eq!(background.dark().unwrap().name, "bgDark");

    let accent = groups
        .get(&["color".to_string(), "accent".to_string()])
        .unwrap();
    assert!(accent.is_dark_only());
    assert_eq!(accent.primary().name, "accentDark");
}

#[test]
fn penultimate_convention_reads_the_other_position() {
    let tokens = vec![
        Token::new(&["color", "bg"], "bg", "#fff"),
        Token::new(&["color", "dark", "bg"], "bgDark", "#000"),
        Token::new(&["color", "surface", "dark", "raised"], "raisedDark", "#222"),
    ];
    let groups = modes::group(&tokens, ModeConvention::Penultimate);
    assert!(groups
        .get(&["color".to_string(), "surface".to_string(), "raised".to_string()])
        .is_some());
    assert!(groups
        .get(&["color".to_string(), "bg".to_string()])
        .is_some_and(|pair| pair.light().is_some() && pair.dark().is_some()));
}

#[test]
fn tree_orders_children_by_segment() {
    let tokens = tokens();
    let groups = modes::group(&tokens, ModeConvention::SecondSegment);
    let root = tree::build(&groups);

    let top: Vec<&str> = root.children.keys().map(String::as_str).collect();
    assert_eq!(top, vec!["color", "size"]);
    let color = &root.children["color"];
    assert_eq!(color.leaves.len(), 1);
    assert_eq!(color.leaves[0].key(), "accent");
    assert!(color.children.contains_key("background"));
    assert_eq!(root.leaf_count(), 3);
}

proptest! {
    #[test]
    fn canonical_path_never_keeps_a_second_segment_marker(
        head in "[a-z]{1,8}",
        tail in proptest::collection::vec("[a-z0-9]{1,6}", 1..4),
    ) {
        let mut path = vec![head.clone(), "dark".to_string()];
        path.extend(tail.iter().cloned());
        let refs: Vec<&str> = path.iter().map(String::as_str).collect();
        let token = Token::new(&refs, "t", "v");

        let canonical = canonical_path(&token, ModeConvention::SecondSegment);
        let mut expected = vec![head];
        expected.extend(tail);
        prop_assert_eq!(canonical, expected);
    }

    #[test]
    fn canonical_path_is_idempotent_with_one_marker(
        segments in proptest::collection::vec("[a-e]{1,5}", 1..6),
        at in 0usize..6,
    ) {
        let mut path = segments;
        let at = at.min(path.len());
        path.insert(at, "dark".to_string());
        for convention in [ModeConvention::SecondSegment, ModeConvention::Penultimate] {
            let refs: Vec<&str> = path.iter().map(String::as_str).collect();
            let once = canonical_path(&Token::new(&refs, "t", "v"), convention);
            let refs: Vec<&str> = once.iter().map(String::as_str).collect();
            let twice = canonical_path(&Token::new(&refs, "t", "v"), convention);
            prop_assert_eq!(twice, once);
        }
    }

    #[test]
    fn light_paths_are_already_canonical(
        path in proptest::collection::vec("[a-c]{1,4}", 1..5),
    ) {
        let refs: Vec<&str> = path.iter().map(String::as_str).collect();
        let token = Token::new(&refs, "t", "v");
        prop_assert_eq!(canonical_path(&token, ModeConvention::SecondSegment), path.clone());
        prop_assert_eq!(canonical_path(&token, ModeConvention::Penultimate), path);
    }
}
