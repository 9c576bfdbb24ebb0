//! Lifting element constraints over sequences and keyed mappings.

use std::fmt::Display;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::path::Segment;
use crate::{Checked, Constraint, Verdict};

/// Lifts an element constraint over an ordered sequence.
///
/// Every element is always checked, in order; violations from the element at
/// position `i` get `[i]` prepended to their paths and all violations are
/// merged into one verdict. A break from a single element only affects the
/// `and` chain inside that element's own constraint, never the loop.
///
/// # Example
///
/// ```rust
/// use verdict::constraint::items;
/// use verdict::constraint::numeric::max;
/// use verdict::Constraint;
///
/// let constraint = items(max(5));
/// let verdict = constraint.validate(&[1, 3, 7, 2][..]).unwrap();
///
/// assert_eq!(verdict.violations().len(), 1);
/// assert_eq!(verdict.violations()[0].path().to_string(), "[2]");
/// ```
pub fn items<C>(element: C) -> Items<C> {
    Items { element }
}

/// See [`items`].
pub struct Items<C> {
    element: C,
}

impl<E, C> Constraint<[E]> for Items<C>
where
    C: Constraint<E>,
{
    fn validate<'a>(&self, value: &'a [E]) -> Checked<'a, [E]> {
        let mut violations = Vec::new();
        for (index, element) in value.iter().enumerate() {
            let mut verdict = self.element.validate(element)?;
            verdict.enclose(Segment::index(index));
            violations.extend(verdict.into_violations());
        }
        Ok(Verdict::with_violations(value, violations))
    }
}

impl<E, C> Constraint<Vec<E>> for Items<C>
where
    C: Constraint<E>,
{
    fn validate<'a>(&self, value: &'a Vec<E>) -> Checked<'a, Vec<E>> {
        let (violations, _) = Constraint::<[E]>::validate(self, value.as_slice())?.into_parts();
        Ok(Verdict::with_violations(value, violations))
    }
}

/// Lifts an element constraint over a keyed mapping.
///
/// Entries are visited in the map's insertion order (the deterministic
/// iteration order of [`IndexMap`]); violations from the value under key `k`
/// get `[k]` prepended, with the key rendered in its natural string form.
///
/// # Example
///
/// ```rust
/// use indexmap::IndexMap;
/// use verdict::constraint::entries;
/// use verdict::constraint::string::min_length;
/// use verdict::Constraint;
///
/// let mut meta = IndexMap::new();
/// meta.insert("x".to_string(), "".to_string());
/// meta.insert("y".to_string(), "ok".to_string());
///
/// let constraint = entries(min_length(1));
/// let verdict = constraint.validate(&meta).unwrap();
///
/// assert_eq!(verdict.violations().len(), 1);
/// assert_eq!(verdict.violations()[0].path().to_string(), "[x]");
/// ```
pub fn entries<C>(element: C) -> Entries<C> {
    Entries { element }
}

/// See [`entries`].
pub struct Entries<C> {
    element: C,
}

impl<C> Entries<C> {
    pub(crate) fn element(&self) -> &C {
        &self.element
    }
}

impl<K, E, C> Constraint<IndexMap<K, E>> for Entries<C>
where
    K: Display + Hash + Eq,
    C: Constraint<E>,
{
    fn validate<'a>(&self, value: &'a IndexMap<K, E>) -> Checked<'a, IndexMap<K, E>> {
        let mut violations = Vec::new();
        for (key, entry) in value {
            let mut verdict = self.element.validate(entry)?;
            verdict.enclose(Segment::key(key));
            violations.extend(verdict.into_violations());
        }
        Ok(Verdict::with_violations(value, violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::numeric::max;
    use crate::constraint::rule;
    use crate::Violation;

    #[test]
    fn test_items_all_valid() {
        let constraint = items(max(5));
        let verdict = constraint.validate(&[1, 2, 3][..]).unwrap();
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_items_annotates_failing_index() {
        let constraint = items(max(5));
        let verdict = constraint.validate(&[1, 3, 7, 2][..]).unwrap();
        assert_eq!(verdict.violations().len(), 1);
        assert_eq!(verdict.violations()[0].path().to_string(), "[2]");
    }

    #[test]
    fn test_items_checks_every_element() {
        let constraint = items(max(5));
        let verdict = constraint.validate(&[9, 1, 8][..]).unwrap();
        let paths: Vec<_> = verdict
            .violations()
            .iter()
            .map(|v| v.path().to_string())
            .collect();
        assert_eq!(paths, vec!["[0]", "[2]"]);
    }

    #[test]
    fn test_items_empty_sequence_is_valid() {
        let constraint = items(max(5));
        let verdict = constraint.validate(&[][..]).unwrap();
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_items_element_break_does_not_stop_the_loop() {
        let constraint = items(rule(|v: &i64| *v > 0, "must be positive").or_break());
        let verdict = constraint.validate(&[-1, 2, -3][..]).unwrap();
        // Both bad elements are reported; the outer verdict is not a break.
        assert_eq!(verdict.violations().len(), 2);
        assert!(!verdict.is_break());
    }

    #[test]
    fn test_items_over_vec() {
        let constraint = items(max(5));
        let values = vec![1, 7];
        let verdict = constraint.validate(&values).unwrap();
        assert_eq!(verdict.violations().len(), 1);
        assert_eq!(verdict.violations()[0].path().to_string(), "[1]");
    }

    #[test]
    fn test_entries_annotates_failing_key() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 9);

        let constraint = entries(max(5));
        let verdict = constraint.validate(&map).unwrap();
        assert_eq!(verdict.violations().len(), 1);
        assert_eq!(verdict.violations()[0].path().to_string(), "[b]");
    }

    #[test]
    fn test_entries_reports_in_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("z".to_string(), 9);
        map.insert("a".to_string(), 8);

        let constraint = entries(max(5));
        let verdict = constraint.validate(&map).unwrap();
        let paths: Vec<_> = verdict
            .violations()
            .iter()
            .map(|v| v.path().to_string())
            .collect();
        assert_eq!(paths, vec!["[z]", "[a]"]);
    }

    #[test]
    fn test_entries_integer_keys() {
        let mut map = IndexMap::new();
        map.insert(10, 99);

        let constraint = entries(max(5));
        let verdict = constraint.validate(&map).unwrap();
        assert_eq!(verdict.violations()[0].path().to_string(), "[10]");
    }

    #[test]
    fn test_nested_items_paths_compose() {
        let constraint = items(items(max(5)));
        let rows = vec![vec![1, 2], vec![3, 9]];
        let verdict = constraint.validate(&rows).unwrap();
        assert_eq!(verdict.violations()[0].path().to_string(), "[1][1]");
    }

    #[test]
    fn test_items_merges_multiple_violations_per_element() {
        let element = rule(|v: &i64| *v > 0, "must be positive")
            .and(rule(|v: &i64| *v % 2 == 0, "must be even"));
        let constraint = items(element);
        let verdict = constraint.validate(&[-3][..]).unwrap();
        let messages: Vec<_> = verdict
            .violations()
            .iter()
            .map(Violation::message)
            .collect();
        assert_eq!(messages, vec!["must be positive", "must be even"]);
        for violation in verdict.violations() {
            assert_eq!(violation.path().to_string(), "[0]");
        }
    }
}
