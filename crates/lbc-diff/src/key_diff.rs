//! Recursive key-set diff between two locale trees.
//!
//! Both finders run the same walk; [`extra_keys`] is [`missing_keys`] with
//! the roles of the two trees exchanged, which makes the symmetry between
//! the two reports structural rather than incidental.

use lbc_bundle::{join_key_path, LocaleNode};

/// Key paths present in `reference` but absent from `candidate`.
///
/// Keys are visited in the reference's (lexicographic) key order. One path
/// is emitted per missing subtree root; the descendants of a missing key
/// are not enumerated. When the candidate's entry for a key exists but is
/// a leaf while the reference's is an object, recursion proceeds as if the
/// candidate's entry were an empty object, so every key beneath that point
/// is reported individually.
pub fn missing_keys(reference: &LocaleNode, candidate: &LocaleNode) -> Vec<String> {
    let mut paths = Vec::new();
    walk(reference, candidate, "", &mut paths);
    paths
}

/// Key paths present in `candidate` but absent from `reference`.
///
/// Exact mirror of [`missing_keys`] with the two trees exchanged.
pub fn extra_keys(reference: &LocaleNode, candidate: &LocaleNode) -> Vec<String> {
    missing_keys(candidate, reference)
}

/// Emit every key path present in `base` that has no counterpart in `other`.
///
/// A leaf `other` has no children, so recursing against one reports each
/// key beneath `base` individually. That is the partial-tree policy: a
/// structurally inconsistent counterpart is treated as an empty object,
/// never as a single collapsed "subtree missing" entry.
fn walk(base: &LocaleNode, other: &LocaleNode, parent: &str, out: &mut Vec<String>) {
    let base_children = match base.children() {
        Some(children) => children,
        None => return,
    };

    for (key, base_child) in base_children {
        let path = join_key_path(parent, key);
        match other.get(key) {
            // Absent entirely: one emission for the whole subtree.
            None => out.push(path),
            Some(other_child) => {
                if base_child.is_object() {
                    walk(base_child, other_child, &path, out);
                }
                // Leaf present in both: values are never compared.
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> LocaleNode {
        LocaleNode::from(value)
    }

    #[test]
    fn identical_trees_have_no_drift() {
        let doc = tree(json!({"a": {"b": 1, "c": 2}, "d": "x"}));
        assert!(missing_keys(&doc, &doc).is_empty());
        assert!(extra_keys(&doc, &doc).is_empty());
    }

    #[test]
    fn nested_missing_key() {
        let reference = tree(json!({"a": {"b": 1, "c": 2}}));
        let candidate = tree(json!({"a": {"b": 1}}));

        assert_eq!(missing_keys(&reference, &candidate), vec!["a.c"]);
        assert!(extra_keys(&reference, &candidate).is_empty());
    }

    #[test]
    fn missing_subtree_is_one_entry() {
        // The subtree root is reported once; its descendants are not.
        let reference = tree(json!({"menu": {"file": {"open": 1, "save": 2}}}));
        let candidate = tree(json!({}));

        assert_eq!(missing_keys(&reference, &candidate), vec!["menu"]);
    }

    #[test]
    fn leaf_counterpart_expands_individually() {
        // Candidate's "a" is a leaf, so recursion runs against an empty
        // object and both nested keys are reported.
        let reference = tree(json!({"a": {"b": 1, "c": 2}}));
        let candidate = tree(json!({"a": "oops"}));

        assert_eq!(missing_keys(&reference, &candidate), vec!["a.b", "a.c"]);
        assert!(extra_keys(&reference, &candidate).is_empty());
    }

    #[test]
    fn extra_key_in_nested_object() {
        let reference = tree(json!({"x": {}}));
        let candidate = tree(json!({"x": {"y": 1}}));

        assert!(missing_keys(&reference, &candidate).is_empty());
        assert_eq!(extra_keys(&reference, &candidate), vec!["x.y"]);
    }

    #[test]
    fn leaf_value_changes_are_invisible() {
        let reference = tree(json!({"a": "one", "b": {"c": 2}}));
        let candidate = tree(json!({"a": 1, "b": {"c": "two"}}));

        assert!(missing_keys(&reference, &candidate).is_empty());
        assert!(extra_keys(&reference, &candidate).is_empty());
    }

    #[test]
    fn arrays_are_never_recursed_into() {
        // Both sides hold arrays of objects with different inner keys;
        // arrays are opaque leaves, so no drift is reported.
        let reference = tree(json!({"items": [{"a": 1}]}));
        let candidate = tree(json!({"items": [{"b": 2}]}));

        assert!(missing_keys(&reference, &candidate).is_empty());
        assert!(extra_keys(&reference, &candidate).is_empty());
    }

    #[test]
    fn object_replaced_by_array_expands_individually() {
        // An array counterpart is a leaf like any other.
        let reference = tree(json!({"a": {"b": 1, "c": 2}}));
        let candidate = tree(json!({"a": [1, 2]}));

        assert_eq!(missing_keys(&reference, &candidate), vec!["a.b", "a.c"]);
    }

    #[test]
    fn leaf_reference_root_reports_nothing_missing() {
        let reference = tree(json!("scalar root"));
        let candidate = tree(json!({"a": 1}));

        assert!(missing_keys(&reference, &candidate).is_empty());
        assert_eq!(extra_keys(&reference, &candidate), vec!["a"]);
    }

    #[test]
    fn paths_come_out_in_key_order() {
        let reference = tree(json!({"z": 1, "a": {"y": 1, "b": 2}, "m": 3}));
        let candidate = tree(json!({"a": {}}));

        assert_eq!(
            missing_keys(&reference, &candidate),
            vec!["a.b", "a.y", "m", "z"]
        );
    }

    #[test]
    fn deeply_nested_path_is_fully_qualified() {
        let reference = tree(json!({"a": {"b": {"c": {"d": 1}}}}));
        let candidate = tree(json!({"a": {"b": {"c": {}}}}));

        assert_eq!(missing_keys(&reference, &candidate), vec!["a.b.c.d"]);
    }

    // Strategy for arbitrary locale trees: leaves of assorted JSON types,
    // nested objects up to a few levels deep.
    fn arb_tree() -> impl Strategy<Value = LocaleNode> {
        let leaf = prop_oneof![
            Just(LocaleNode::Leaf(json!(null))),
            any::<bool>().prop_map(|b| LocaleNode::Leaf(json!(b))),
            any::<i64>().prop_map(|n| LocaleNode::Leaf(json!(n))),
            "[a-z ]{0,12}".prop_map(|s| LocaleNode::Leaf(json!(s))),
        ];
        leaf.prop_recursive(3, 32, 4, |inner| {
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(LocaleNode::Object)
        })
    }

    // Replace every leaf payload, preserving the key structure.
    fn scrub_leaves(node: &LocaleNode) -> LocaleNode {
        match node {
            LocaleNode::Object(map) => LocaleNode::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), scrub_leaves(v)))
                    .collect(),
            ),
            LocaleNode::Leaf(_) => LocaleNode::Leaf(json!("translated")),
        }
    }

    proptest! {
        #[test]
        fn self_comparison_is_clean(doc in arb_tree()) {
            prop_assert!(missing_keys(&doc, &doc).is_empty());
            prop_assert!(extra_keys(&doc, &doc).is_empty());
        }

        #[test]
        fn comparison_is_idempotent(a in arb_tree(), b in arb_tree()) {
            prop_assert_eq!(missing_keys(&a, &b), missing_keys(&a, &b));
            prop_assert_eq!(extra_keys(&a, &b), extra_keys(&a, &b));
        }

        #[test]
        fn swapping_sides_swaps_reports(a in arb_tree(), b in arb_tree()) {
            prop_assert_eq!(missing_keys(&a, &b), extra_keys(&b, &a));
            prop_assert_eq!(extra_keys(&a, &b), missing_keys(&b, &a));
        }

        #[test]
        fn leaf_values_never_cause_drift(doc in arb_tree()) {
            let translated = scrub_leaves(&doc);
            prop_assert!(missing_keys(&doc, &translated).is_empty());
            prop_assert!(extra_keys(&doc, &translated).is_empty());
        }
    }
}
