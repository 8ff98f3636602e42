//! Reference predicate evaluation over materialized rows.
//!
//! A storage collaborator normally compiles the predicate into its own
//! query surface; sources that hold rows in memory can interpret it
//! directly with this module. Partition positioning uses the reference
//! partition order (canonical value order over the partition tuple,
//! column-wise); a source with a different stable partition order must
//! interpret the partition nodes itself.

use crate::{
    predicate::ast::{CompareOp, ComparePredicate, PartitionRef, Predicate},
    row::Row,
    value::Value,
};
use std::cmp::Ordering;

/// Whether one row satisfies the predicate.
#[must_use]
pub fn matches(predicate: &Predicate, row: &Row) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::And(preds) => preds.iter().all(|p| matches(p, row)),
        Predicate::Or(preds) => preds.iter().any(|p| matches(p, row)),
        Predicate::Compare(cmp) => compare(cmp, row),
        Predicate::InPartition(partition) => partition_cmp(partition, row) == Ordering::Equal,
        Predicate::AfterPartition(partition) => partition_cmp(partition, row) == Ordering::Less,
    }
}

fn compare(cmp: &ComparePredicate, row: &Row) -> bool {
    let ord = Value::canonical_cmp(row.get_or_null(&cmp.column), &cmp.value);

    match cmp.op {
        CompareOp::Eq => ord == Ordering::Equal,
        CompareOp::Lt => ord == Ordering::Less,
        CompareOp::Gt => ord == Ordering::Greater,
    }
}

// Reference partition tuple against the row's partition cells,
// column-wise canonical. Less means the row's partition sorts after the
// reference.
fn partition_cmp(partition: &PartitionRef, row: &Row) -> Ordering {
    for (column, bound) in &partition.columns {
        let ord = Value::canonical_cmp(bound, row.get_or_null(column));
        if ord != Ordering::Equal {
            return ord;
        }
    }

    Ordering::Equal
}
