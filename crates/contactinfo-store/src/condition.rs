//! Filter conditions and AND-chain filters.
//!
//! A [`Condition`] is a single `alias <op> value` predicate over field
//! values. A [`Filter`] pairs a condition with an optional inner filter: the
//! outer condition only matches records that the inner filter matched. Folding
//! an ordered list of conditions with [`Filter::chain`] yields the
//! progressively narrowing AND-chain, first condition innermost.
//!
//! ```text
//! chain([a, b, c]) = c within (b within (a))
//! ```

use crate::op::Op;

/// A single field predicate.
///
/// # Example
///
/// ```
/// use contactinfo_store::{Condition, Op};
///
/// let cond = Condition::new("lastname", "Mustermann");
/// assert_eq!(cond.op, Op::Eq);
///
/// let cond = Condition::like("lastname", "Muster%");
/// assert_eq!(cond.op, Op::Like);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Field alias name the condition applies to.
    pub alias: String,
    /// How the stored value is compared.
    pub op: Op,
    /// Expected value.
    pub value: String,
}

impl Condition {
    /// Creates an equality condition.
    pub fn new(alias: impl Into<String>, value: impl Into<String>) -> Self {
        Condition {
            alias: alias.into(),
            op: Op::Eq,
            value: value.into(),
        }
    }

    /// Creates a `LIKE` condition.
    pub fn like(alias: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::new(alias, value).with_op(Op::Like)
    }

    /// Replaces the comparison operator.
    pub fn with_op(mut self, op: Op) -> Self {
        self.op = op;
        self
    }
}

/// A condition restricted to the ids matched by an optional inner filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    condition: Condition,
    within: Option<Box<Filter>>,
}

impl Filter {
    /// Creates an unrestricted filter for one condition.
    pub fn new(condition: Condition) -> Self {
        Filter {
            condition,
            within: None,
        }
    }

    /// Restricts this filter to the ids matched by `inner`.
    pub fn within(mut self, inner: Filter) -> Self {
        self.within = Some(Box::new(inner));
        self
    }

    /// Folds conditions into a nested AND-chain.
    ///
    /// The first condition becomes the innermost filter and the last one the
    /// outermost. Returns `None` for an empty list.
    ///
    /// ```
    /// use contactinfo_store::{Condition, Filter};
    ///
    /// let filter = Filter::chain(vec![
    ///     Condition::new("lastname", "Mustermann"),
    ///     Condition::new("firstname", "Max"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(filter.condition().alias, "firstname");
    /// assert_eq!(filter.inner().unwrap().condition().alias, "lastname");
    /// assert_eq!(filter.depth(), 2);
    /// ```
    pub fn chain<I>(conditions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Condition>,
    {
        conditions.into_iter().fold(None, |inner, condition| {
            let filter = Filter::new(condition);
            Some(match inner {
                Some(inner) => filter.within(inner),
                None => filter,
            })
        })
    }

    /// Returns this filter's own condition.
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Returns the inner filter, if any.
    pub fn inner(&self) -> Option<&Filter> {
        self.within.as_deref()
    }

    /// Returns the number of conditions in the chain.
    pub fn depth(&self) -> usize {
        1 + self.inner().map_or(0, Filter::depth)
    }

    /// Returns the chain's conditions in their original order, innermost first.
    pub fn conditions(&self) -> Vec<&Condition> {
        let mut out = match self.inner() {
            Some(inner) => inner.conditions(),
            None => Vec::new(),
        };
        out.push(&self.condition);
        out
    }
}
