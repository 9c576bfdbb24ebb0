//! The outcome of a single validation call.

use stillwater::Validation;

use crate::error::{Violation, Violations};
use crate::path::Segment;

/// The outcome of validating one value against one constraint.
///
/// A verdict borrows the value it judged, carries the violations found (empty
/// means valid) and a break flag that stops an enclosing
/// [`and`](crate::Constraint::and) chain from evaluating further conjuncts.
///
/// Composites never mutate a child verdict in place: they take its violations
/// with [`Verdict::into_parts`] and assemble a fresh verdict. The violations
/// themselves are mutated while bubbling upward, each enclosing scope calling
/// [`Verdict::enclose`] to prepend its field name, index or key onto their
/// paths. That is safe because a verdict is exclusively owned by the call
/// stack that produced it until it is returned.
///
/// # Example
///
/// ```rust
/// use verdict::constraint::string::min_length;
/// use verdict::Constraint;
///
/// let constraint = min_length(2);
///
/// let verdict = constraint.validate("ab").unwrap();
/// assert!(verdict.is_valid());
///
/// let verdict = constraint.validate("a").unwrap();
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.violations()[0].path().to_string(), ".");
/// ```
#[derive(Debug)]
pub struct Verdict<'a, V: ?Sized> {
    value: &'a V,
    violations: Vec<Violation>,
    is_break: bool,
}

impl<'a, V: ?Sized> Verdict<'a, V> {
    /// Creates a valid verdict for the given value.
    pub fn valid(value: &'a V) -> Self {
        Self {
            value,
            violations: Vec::new(),
            is_break: false,
        }
    }

    /// Creates an invalid verdict carrying a single violation.
    pub fn invalid(value: &'a V, violation: Violation) -> Self {
        Self {
            value,
            violations: vec![violation],
            is_break: false,
        }
    }

    /// Creates a verdict carrying the given violations (valid if empty).
    pub fn with_violations(value: &'a V, violations: Vec<Violation>) -> Self {
        Self {
            value,
            violations,
            is_break: false,
        }
    }

    /// Returns the value this verdict judged.
    pub fn value(&self) -> &'a V {
        self.value
    }

    /// Returns true if no violations were found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if an enclosing `and` chain must stop here.
    pub fn is_break(&self) -> bool {
        self.is_break
    }

    /// Sets the break flag.
    pub fn set_break(&mut self, is_break: bool) {
        self.is_break = is_break;
    }

    /// Returns the violations found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns mutable access to the violations, for path annotation.
    pub fn violations_mut(&mut self) -> &mut [Violation] {
        &mut self.violations
    }

    /// Prepends an enclosing scope onto every violation's path.
    pub fn enclose(&mut self, segment: Segment) {
        for violation in &mut self.violations {
            violation.enclose(segment.clone());
        }
    }

    /// Consumes the verdict, returning its violations and break flag.
    pub fn into_parts(self) -> (Vec<Violation>, bool) {
        (self.violations, self.is_break)
    }

    /// Consumes the verdict, returning its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Converts this verdict into an applicative `Validation`.
    ///
    /// Valid verdicts become `Success` carrying the judged value; invalid
    /// verdicts become `Failure` carrying the non-empty [`Violations`], which
    /// combine across independent validations via `Semigroup`. The break flag
    /// does not survive the conversion; it only ever matters to an enclosing
    /// `and` chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::constraint::numeric::greater_than;
    /// use verdict::Constraint;
    ///
    /// let verdict = greater_than(18).validate(&15).unwrap();
    /// let validation = verdict.into_validation();
    /// assert!(validation.is_failure());
    /// ```
    pub fn into_validation(self) -> Validation<&'a V, Violations> {
        if self.violations.is_empty() {
            Validation::Success(self.value)
        } else {
            Validation::Failure(Violations::from_vec(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_verdict() {
        let value = 42;
        let verdict = Verdict::valid(&value);
        assert!(verdict.is_valid());
        assert!(!verdict.is_break());
        assert_eq!(*verdict.value(), 42);
        assert!(verdict.violations().is_empty());
    }

    #[test]
    fn test_invalid_verdict() {
        let value = "abc";
        let verdict = Verdict::invalid(value, Violation::new("must contain z"));
        assert!(!verdict.is_valid());
        assert!(!verdict.is_break());
        assert_eq!(verdict.violations().len(), 1);
        assert_eq!(verdict.violations()[0].message(), "must contain z");
    }

    #[test]
    fn test_with_violations_empty_is_valid() {
        let value = ();
        let verdict = Verdict::with_violations(&value, Vec::new());
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_break_flag() {
        let value = ();
        let mut verdict = Verdict::invalid(&value, Violation::new("must not be null"));
        assert!(!verdict.is_break());
        verdict.set_break(true);
        assert!(verdict.is_break());
    }

    #[test]
    fn test_enclose_annotates_every_violation() {
        let value = ();
        let mut verdict = Verdict::with_violations(
            &value,
            vec![Violation::new("first"), Violation::new("second")],
        );
        verdict.enclose(Segment::field("name"));
        for violation in verdict.violations() {
            assert_eq!(violation.path().to_string(), ".name");
        }
    }

    #[test]
    fn test_into_parts() {
        let value = ();
        let mut verdict = Verdict::invalid(&value, Violation::new("oops"));
        verdict.set_break(true);
        let (violations, is_break) = verdict.into_parts();
        assert_eq!(violations.len(), 1);
        assert!(is_break);
    }

    #[test]
    fn test_into_validation_success() {
        let value = 7;
        let validation = Verdict::valid(&value).into_validation();
        assert!(validation.is_success());
    }

    #[test]
    fn test_into_validation_failure() {
        let value = 7;
        let validation = Verdict::invalid(&value, Violation::new("too small")).into_validation();
        assert!(validation.is_failure());
        let violations = validation.into_result().unwrap_err();
        assert_eq!(violations.len(), 1);
    }
}
