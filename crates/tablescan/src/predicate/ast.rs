use crate::value::Value;
use serde::{Deserialize, Serialize};

///
/// Predicate AST
///
/// Pure representation of block-fetch predicates, composed from
/// per-column comparison operators. This layer carries no execution
/// semantics: a storage collaborator renders it into its own query
/// surface, and `predicate::eval` provides the reference interpretation
/// for materialized sources.
///

///
/// CompareOp
///
/// Exactly the operators cursor pagination needs: equality pins a key
/// prefix, strict comparisons select past the boundary column.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CompareOp {
    Eq,
    Lt,
    Gt,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub column: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    fn new(column: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Gt, value)
    }
}

///
/// PartitionRef
///
/// Partition-key tuple in declared column order. The partition key is an
/// opaque ordering unit: positioning before/after a partition is
/// delegated to the row source's stable partition order (token order in
/// a token-partitioned store), never to per-column comparison.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PartitionRef {
    pub columns: Vec<(String, Value)>,
}

impl PartitionRef {
    #[must_use]
    pub fn new(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Predicate {
    /// Matches every row; the first block of a scan is fetched with this.
    True,
    And(Vec<Self>),
    Or(Vec<Self>),
    Compare(ComparePredicate),
    /// Rows belonging to exactly the referenced partition.
    InPartition(PartitionRef),
    /// Rows in partitions strictly after the referenced partition, in the
    /// source's stable partition order.
    AfterPartition(PartitionRef),
}

impl Predicate {
    /// Conjunction; a single-element input collapses to its element.
    #[must_use]
    pub fn and(mut preds: Vec<Self>) -> Self {
        if preds.len() == 1 {
            preds.remove(0)
        } else {
            Self::And(preds)
        }
    }

    /// Disjunction; a single-element input collapses to its element.
    #[must_use]
    pub fn or(mut preds: Vec<Self>) -> Self {
        if preds.len() == 1 {
            preds.remove(0)
        } else {
            Self::Or(preds)
        }
    }

    #[must_use]
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::eq(column, value))
    }

    #[must_use]
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::lt(column, value))
    }

    #[must_use]
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::gt(column, value))
    }
}
