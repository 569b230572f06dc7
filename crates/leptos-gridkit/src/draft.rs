//! Draft Overlay Utilities
//!
//! Generic persisted-vs-draft tracking for wizard steps. The draft map is
//! sparse: only keys the user actually touched are present, and a present
//! draft always wins over the persisted value, even when the two are equal.

use std::collections::HashMap;
use std::hash::Hash;

/// Effective value for `key`: draft if present, else persisted, else
/// `fallback`. An explicit no-op edit (draft equal to persisted) still
/// counts as present.
pub fn get_draft_or_persisted<K, V>(
    draft: &HashMap<K, V>,
    persisted: &HashMap<K, V>,
    key: &K,
    fallback: V,
) -> V
where
    K: Eq + Hash,
    V: Clone,
{
    if let Some(value) = draft.get(key) {
        return value.clone();
    }
    if let Some(value) = persisted.get(key) {
        return value.clone();
    }
    fallback
}

/// True iff the draft value differs from the persisted one.
pub fn is_dirty_value<V: PartialEq>(persisted: &V, draft: &V) -> bool {
    persisted != draft
}

/// Same as [`is_dirty_value`] under a caller-supplied equality.
pub fn is_dirty_value_by<V>(persisted: &V, draft: &V, equals: impl Fn(&V, &V) -> bool) -> bool {
    !equals(persisted, draft)
}

/// One dirty entry of a changeset, with both sides attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Change<K, V> {
    pub key: K,
    pub persisted: V,
    pub draft: V,
}

/// Ordered list of keys whose effective draft value differs from the
/// persisted one. Feeds the "N pending changes" badges and save payloads.
pub fn build_changeset<K, V>(
    keys: &[K],
    persisted: &HashMap<K, V>,
    draft: &HashMap<K, V>,
    fallback: &V,
) -> Vec<Change<K, V>>
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
{
    build_changeset_by(keys, persisted, draft, fallback, |a, b| a == b)
}

/// [`build_changeset`] under a caller-supplied equality.
pub fn build_changeset_by<K, V>(
    keys: &[K],
    persisted: &HashMap<K, V>,
    draft: &HashMap<K, V>,
    fallback: &V,
    equals: impl Fn(&V, &V) -> bool,
) -> Vec<Change<K, V>>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    keys.iter()
        .filter_map(|key| {
            let persisted_value = persisted.get(key).cloned().unwrap_or_else(|| fallback.clone());
            let draft_value = get_draft_or_persisted(draft, persisted, key, fallback.clone());
            if equals(&persisted_value, &draft_value) {
                None
            } else {
                Some(Change {
                    key: key.clone(),
                    persisted: persisted_value,
                    draft: draft_value,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_wins_then_persisted_then_fallback() {
        let persisted = HashMap::from([("a".to_string(), 1)]);
        let empty = HashMap::new();
        assert_eq!(get_draft_or_persisted(&empty, &persisted, &"a".to_string(), 0), 1);

        let draft = HashMap::from([("a".to_string(), 2)]);
        assert_eq!(get_draft_or_persisted(&draft, &persisted, &"a".to_string(), 0), 2);

        let no_persisted: HashMap<String, i32> = HashMap::new();
        assert_eq!(get_draft_or_persisted(&empty, &no_persisted, &"a".to_string(), 9), 9);
    }

    #[test]
    fn test_noop_edit_still_counts_as_present() {
        // Draft equal to persisted is a legal no-op edit, not "unset".
        let persisted = HashMap::from([("a".to_string(), 1)]);
        let draft = HashMap::from([("a".to_string(), 1)]);
        assert_eq!(get_draft_or_persisted(&draft, &persisted, &"a".to_string(), 0), 1);
        assert!(build_changeset(&["a".to_string()], &persisted, &draft, &0).is_empty());
    }

    #[test]
    fn test_is_dirty_value() {
        assert!(!is_dirty_value(&1, &1));
        assert!(is_dirty_value(&1, &2));
    }

    #[test]
    fn test_is_dirty_value_by_id_equality() {
        #[derive(Clone)]
        struct Row {
            id: u32,
            label: &'static str,
        }
        let a = Row { id: 7, label: "old" };
        let b = Row { id: 7, label: "new" };
        assert!(!is_dirty_value_by(&a, &b, |x, y| x.id == y.id));
        assert!(is_dirty_value_by(&a, &b, |x, y| x.label == y.label));
    }

    #[test]
    fn test_build_changeset_single_dirty_key() {
        let keys = vec!["x".to_string(), "y".to_string()];
        let persisted = HashMap::from([("x".to_string(), 1), ("y".to_string(), 2)]);
        let draft = HashMap::from([("x".to_string(), 1), ("y".to_string(), 9)]);

        let changes = build_changeset(&keys, &persisted, &draft, &0);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key, "y");
        assert_eq!(changes[0].persisted, 2);
        assert_eq!(changes[0].draft, 9);
    }

    #[test]
    fn test_build_changeset_preserves_key_order() {
        let keys = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        let persisted: HashMap<String, i32> = HashMap::new();
        let draft = HashMap::from([
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3),
        ]);

        let changes = build_changeset(&keys, &persisted, &draft, &0);
        let order: Vec<&str> = changes.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_build_changeset_missing_persisted_uses_fallback() {
        let keys = vec!["n".to_string()];
        let persisted: HashMap<String, i32> = HashMap::new();
        let draft = HashMap::from([("n".to_string(), 4)]);

        let changes = build_changeset(&keys, &persisted, &draft, &0);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].persisted, 0);
        assert_eq!(changes[0].draft, 4);
    }
}
