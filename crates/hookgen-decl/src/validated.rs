//! Applicative validation combinator.
//!
//! [`Validated`] holds either a full ordered success sequence or a non-empty
//! ordered failure sequence. Merging never short-circuits: every independent
//! check contributes its result, and failures from separate checks are
//! concatenated in check order. This is what makes container validation
//! all-errors-or-all-successes rather than first-error-wins.

/// Result of validating a sequence of independent items.
///
/// The overall result is `Valid` iff every item validated, carrying all
/// successes in item order; otherwise it is `Invalid`, carrying every
/// failure in item order.
///
/// # Example
/// ```
/// use hookgen_decl::Validated;
///
/// let all_ok: Validated<i32, String> =
///     vec![Ok(1), Ok(2)].into_iter().collect();
/// assert_eq!(all_ok.into_result(), Ok(vec![1, 2]));
///
/// let mixed: Validated<i32, String> =
///     vec![Ok(1), Err("a".to_string()), Err("b".to_string())].into_iter().collect();
/// assert_eq!(mixed.into_result(), Err(vec!["a".to_string(), "b".to_string()]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Validated<T, E> {
    /// Every item validated; successes in item order.
    Valid(Vec<T>),
    /// At least one item failed; all failures in item order.
    Invalid(Vec<E>),
}

impl<T, E> Validated<T, E> {
    /// An empty valid result.
    pub fn empty() -> Self {
        Validated::Valid(Vec::new())
    }

    /// Whether every item validated.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// Folds one more independent check result into the accumulator.
    ///
    /// A failure switches the accumulator to `Invalid`, discarding earlier
    /// successes; later successes are checked but contribute nothing.
    pub fn push(&mut self, item: Result<T, E>) {
        match item {
            Ok(v) => {
                if let Validated::Valid(oks) = self {
                    oks.push(v);
                }
            }
            Err(e) => {
                if let Validated::Invalid(errs) = self {
                    errs.push(e);
                } else {
                    *self = Validated::Invalid(vec![e]);
                }
            }
        }
    }

    /// Concatenates two independently computed results.
    pub fn merge(self, other: Validated<T, E>) -> Self {
        match (self, other) {
            (Validated::Valid(mut a), Validated::Valid(b)) => {
                a.extend(b);
                Validated::Valid(a)
            }
            (Validated::Valid(_), Validated::Invalid(e)) => Validated::Invalid(e),
            (Validated::Invalid(a), Validated::Valid(_)) => Validated::Invalid(a),
            (Validated::Invalid(mut a), Validated::Invalid(b)) => {
                a.extend(b);
                Validated::Invalid(a)
            }
        }
    }

    /// Converts into a plain `Result`.
    pub fn into_result(self) -> Result<Vec<T>, Vec<E>> {
        match self {
            Validated::Valid(oks) => Ok(oks),
            Validated::Invalid(errs) => Err(errs),
        }
    }

    /// Borrows the failure sequence, if any.
    pub fn errors(&self) -> Option<&[E]> {
        match self {
            Validated::Valid(_) => None,
            Validated::Invalid(errs) => Some(errs),
        }
    }
}

impl<T, E> Default for Validated<T, E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, E> FromIterator<Result<T, E>> for Validated<T, E> {
    /// Collects independent check results, consuming the whole iterator
    /// regardless of failures.
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        let mut acc = Validated::empty();
        for item in iter {
            acc.push(item);
        }
        acc
    }
}
