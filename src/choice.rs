//! Discriminated dispatch on a computed classification of the input.
//!
//! [`Choice`] routes a value to one of several handlers by running a
//! classifier over it first; [`ConstraintChoice`] is the same construct with
//! constraints as handlers, for "validate differently depending on a computed
//! category" without subtype dispatch. Exactly one handler runs per
//! application; a classification with no registered handler and no default
//! is a [`Fatal::UnroutedKey`].

use std::fmt::Display;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::constraint::BoxConstraint;
use crate::error::Fatal;
use crate::{Checked, Constraint};

type Classifier<T, C> = Box<dyn Fn(&T) -> C + Send + Sync>;
type Handler<T, R> = Box<dyn Fn(&T) -> R + Send + Sync>;

/// Keyed dispatch of value handlers.
///
/// # Example
///
/// ```rust
/// use verdict::Choice;
///
/// let flow = Choice::new(|s: &String| s.contains('a'))
///     .when(true, |_: &String| -1_i64)
///     .with_default(|s: &String| s.len() as i64);
///
/// assert_eq!(flow.apply(&"abc".to_string()).unwrap(), -1);
/// assert_eq!(flow.apply(&"xbc".to_string()).unwrap(), 3);
/// ```
pub struct Choice<T, R, C> {
    classify: Classifier<T, C>,
    handlers: IndexMap<C, Handler<T, R>>,
    default: Option<Handler<T, R>>,
}

impl<T, R, C> Choice<T, R, C>
where
    C: Eq + Hash + Display,
{
    /// Creates a choice around a classifier.
    pub fn new(classify: impl Fn(&T) -> C + Send + Sync + 'static) -> Self {
        Self {
            classify: Box::new(classify),
            handlers: IndexMap::new(),
            default: None,
        }
    }

    /// Registers the handler for a classification key.
    pub fn when(mut self, route: C, handler: impl Fn(&T) -> R + Send + Sync + 'static) -> Self {
        self.handlers.insert(route, Box::new(handler));
        self
    }

    /// Sets the handler used when no key matches.
    pub fn with_default(mut self, handler: impl Fn(&T) -> R + Send + Sync + 'static) -> Self {
        self.default = Some(Box::new(handler));
        self
    }

    /// Classifies the input and invokes exactly one handler.
    ///
    /// # Errors
    ///
    /// [`Fatal::UnroutedKey`] if the classification has no registered handler
    /// and no default was set.
    pub fn apply(&self, input: &T) -> Result<R, Fatal> {
        let route = (self.classify)(input);
        match self.handlers.get(&route).or(self.default.as_ref()) {
            Some(handler) => Ok(handler(input)),
            None => Err(Fatal::UnroutedKey {
                route: route.to_string(),
            }),
        }
    }
}

/// Builds a [`ConstraintChoice`] around a classifier.
///
/// # Example
///
/// ```rust
/// use verdict::constraint::string::contains;
/// use verdict::{constraint_choice, Constraint};
///
/// let constraint = constraint_choice(|s: &str| s.len() > 2)
///     .when(true, contains("a"))
///     .when(false, contains("b"));
///
/// assert!(constraint.validate("a12").unwrap().is_valid());
/// assert!(!constraint.validate("b12").unwrap().is_valid());
/// assert!(constraint.validate("b1").unwrap().is_valid());
/// ```
pub fn constraint_choice<V, C>(
    classify: impl Fn(&V) -> C + Send + Sync + 'static,
) -> ConstraintChoice<V, C>
where
    V: ?Sized,
    C: Eq + Hash + Display,
{
    ConstraintChoice {
        classify: Box::new(classify),
        handlers: IndexMap::new(),
        fallback: None,
    }
}

/// Keyed dispatch between constraints; itself a constraint.
pub struct ConstraintChoice<V: ?Sized, C> {
    classify: Classifier<V, C>,
    handlers: IndexMap<C, BoxConstraint<V>>,
    fallback: Option<BoxConstraint<V>>,
}

impl<V, C> ConstraintChoice<V, C>
where
    V: ?Sized,
    C: Eq + Hash + Display,
{
    /// Registers the constraint applied for a classification key.
    pub fn when(mut self, route: C, constraint: impl Constraint<V> + 'static) -> Self {
        self.handlers.insert(route, Box::new(constraint));
        self
    }

    /// Sets the constraint applied when no key matches.
    pub fn otherwise(mut self, constraint: impl Constraint<V> + 'static) -> Self {
        self.fallback = Some(Box::new(constraint));
        self
    }
}

impl<V, C> Constraint<V> for ConstraintChoice<V, C>
where
    V: ?Sized,
    C: Eq + Hash + Display + Send + Sync,
{
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        let route = (self.classify)(value);
        match self.handlers.get(&route).or(self.fallback.as_ref()) {
            Some(constraint) => constraint.validate(value),
            None => Err(Fatal::UnroutedKey {
                route: route.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::constraint::rule;
    use crate::constraint::string::contains;

    #[test]
    fn test_choice_routes_by_key() {
        let flow = Choice::new(|s: &String| s.contains('a'))
            .when(true, |_: &String| -1_i64)
            .when(false, |_: &String| 1_i64);

        assert_eq!(flow.apply(&"abc".to_string()).unwrap(), -1);
        assert_eq!(flow.apply(&"xbc".to_string()).unwrap(), 1);
    }

    #[test]
    fn test_choice_falls_back_to_default() {
        let flow = Choice::new(|s: &String| s.contains('a'))
            .when(true, |_: &String| -1_i64)
            .with_default(|s: &String| s.len() as i64);

        assert_eq!(flow.apply(&"xbc".to_string()).unwrap(), 3);
    }

    #[test]
    fn test_choice_unrouted_key_is_fatal() {
        let flow: Choice<String, i64, bool> =
            Choice::new(|s: &String| s.contains('a')).when(true, |_: &String| -1_i64);

        match flow.apply(&"xbc".to_string()) {
            Err(Fatal::UnroutedKey { route }) => assert_eq!(route, "false"),
            _ => panic!("expected unrouted key"),
        }
    }

    #[test]
    fn test_choice_invokes_exactly_one_handler() {
        static LEFT: AtomicUsize = AtomicUsize::new(0);
        static RIGHT: AtomicUsize = AtomicUsize::new(0);

        let flow = Choice::new(|v: &i64| *v > 0)
            .when(true, |_: &i64| {
                LEFT.fetch_add(1, Ordering::SeqCst);
                "positive"
            })
            .when(false, |_: &i64| {
                RIGHT.fetch_add(1, Ordering::SeqCst);
                "non-positive"
            });

        assert_eq!(flow.apply(&5).unwrap(), "positive");
        assert_eq!(LEFT.load(Ordering::SeqCst), 1);
        assert_eq!(RIGHT.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_constraint_choice_dispatches() {
        let constraint = constraint_choice(|s: &str| s.len() > 2)
            .when(true, contains("a"))
            .when(false, contains("b"));

        assert!(constraint.validate("a12").unwrap().is_valid());
        assert!(!constraint.validate("a1").unwrap().is_valid());
        assert!(!constraint.validate("b12").unwrap().is_valid());
        assert!(constraint.validate("b1").unwrap().is_valid());
    }

    #[test]
    fn test_constraint_choice_unrouted_is_fatal() {
        let constraint =
            constraint_choice(|s: &str| s.len()).when(1_usize, contains("a"));

        match constraint.validate("ab") {
            Err(Fatal::UnroutedKey { route }) => assert_eq!(route, "2"),
            _ => panic!("expected unrouted key"),
        }
    }

    #[test]
    fn test_constraint_choice_otherwise() {
        let constraint = constraint_choice(|s: &str| s.len())
            .when(1_usize, contains("a"))
            .otherwise(rule(|_: &str| true, "unreachable"));

        assert!(constraint.validate("xyz").unwrap().is_valid());
    }
}
