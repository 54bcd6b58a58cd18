//! Predicate tree - the filter side of a query plan.
//!
//! Only flat AND-conjunctions of equality/membership/greater-than leaves are
//! expressible on the wire; anything richer (OR trees, nested conjunctions)
//! is rejected at translation time rather than silently mistranslated.

use super::value::ScalarValue;

/// A filter predicate over one entity's fields.
///
/// Every variant must be handled in `translate::where_clause` - the compiler
/// enforces this.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// field = value
    Eq { field: String, value: ScalarValue },

    /// field IN (values...), order-preserving
    In {
        field: String,
        values: Vec<ScalarValue>,
    },

    /// field > value
    Gt { field: String, value: ScalarValue },

    /// AND-conjunction of leaves
    And(Vec<Predicate>),
}

/// Equality leaf: `field = value`.
pub fn eq(field: impl Into<String>, value: impl Into<ScalarValue>) -> Predicate {
    Predicate::Eq {
        field: field.into(),
        value: value.into(),
    }
}

/// Membership leaf: `field IN (values...)`. Input order is preserved on the
/// wire.
pub fn is_in(
    field: impl Into<String>,
    values: impl IntoIterator<Item = impl Into<ScalarValue>>,
) -> Predicate {
    Predicate::In {
        field: field.into(),
        values: values.into_iter().map(Into::into).collect(),
    }
}

/// Greater-than leaf: `field > value`.
pub fn gt(field: impl Into<String>, value: impl Into<ScalarValue>) -> Predicate {
    Predicate::Gt {
        field: field.into(),
        value: value.into(),
    }
}

/// AND-conjunction of leaf predicates.
pub fn and(children: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::And(children.into_iter().collect())
}
