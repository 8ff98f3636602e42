use crate::{
    cursor::Cursor,
    error::ScanError,
    model::{ClusteringColumn, Direction, TableModel},
    predicate::ast::{PartitionRef, Predicate},
    value::Value,
};

///
/// Resume predicate construction
///
/// Turns the last-seen full key tuple into the predicate selecting
/// exactly the rows that sort strictly after it in the table's total
/// order. The shape for clustering columns c1..cN with directions d1..dN
/// and cursor values v1..vN is the classic composite-key disjunction:
///
///   (c1 >1 v1) OR (c1 = v1 AND c2 >2 v2) OR ... OR
///   (c1 = v1 AND ... AND c(N-1) = v(N-1) AND cN >N vN)
///
/// with >i strict-greater for Asc and strict-less for Desc. Rows in
/// other partitions share clustering values, so the disjunction is
/// scoped to the cursor's partition and joined with an after-partition
/// arm:
///
///   (IN-PARTITION(p) AND clustering-after) OR AFTER-PARTITION(p)
///

/// Build the strictly-after predicate for one cursor position.
///
/// An empty clustering-key list degenerates to partition-only
/// pagination: each partition holds at most one row, and the resume
/// predicate is the after-partition arm alone.
pub fn after(model: &TableModel, cursor: &Cursor) -> Result<Predicate, ScanError> {
    let partition = partition_ref(model, cursor)?;

    let clustering = model.clustering_key();
    let bounds = cursor.clustering();
    if bounds.len() != clustering.len() {
        return Err(ScanError::cursor_invariant(format!(
            "cursor clustering arity {} does not match key model arity {} for table '{}'",
            bounds.len(),
            clustering.len(),
            model.name()
        )));
    }

    if clustering.is_empty() {
        return Ok(Predicate::AfterPartition(partition));
    }

    Ok(Predicate::or(vec![
        Predicate::and(vec![
            Predicate::InPartition(partition.clone()),
            clustering_after(clustering, bounds),
        ]),
        Predicate::AfterPartition(partition),
    ]))
}

fn partition_ref(model: &TableModel, cursor: &Cursor) -> Result<PartitionRef, ScanError> {
    let columns = model.partition_key();
    let values = cursor.partition();
    if values.len() != columns.len() {
        return Err(ScanError::cursor_invariant(format!(
            "cursor partition arity {} does not match key model arity {} for table '{}'",
            values.len(),
            columns.len(),
            model.name()
        )));
    }

    Ok(PartitionRef::new(
        columns
            .iter()
            .zip(values)
            .map(|(column, value)| (column.clone(), value.clone()))
            .collect(),
    ))
}

// One disjunction arm per clustering column: equality on the prefix,
// strict comparison on the boundary column under its direction.
fn clustering_after(columns: &[ClusteringColumn], bounds: &[Value]) -> Predicate {
    let mut arms = Vec::with_capacity(columns.len());

    for (idx, (column, bound)) in columns.iter().zip(bounds).enumerate() {
        let mut conjuncts: Vec<Predicate> = columns[..idx]
            .iter()
            .zip(bounds)
            .map(|(prefix, value)| Predicate::eq(prefix.name.clone(), value.clone()))
            .collect();

        conjuncts.push(match column.direction {
            Direction::Asc => Predicate::gt(column.name.clone(), bound.clone()),
            Direction::Desc => Predicate::lt(column.name.clone(), bound.clone()),
        });

        arms.push(Predicate::and(conjuncts));
    }

    Predicate::or(arms)
}
