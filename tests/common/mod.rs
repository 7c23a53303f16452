#![allow(dead_code)]

use std::sync::Arc;

use datafusion::arrow::datatypes::{DataType, Field, Schema};
use datafusion::common::{DFSchema, DFSchemaRef};
use datafusion::prelude::Expr;
use task_profile::cost::Cost;
use task_profile::operator::{IndexScan, Limit, Selection, TableScan};
use task_profile::optimizer::OptimizerContext;
use task_profile::plan::PlanNode;
use task_profile::task::{CopTask, RootTask};

/// Columns produced by the index scan.
pub const INDEX_COLUMNS: &[&str] = &["a", "b"];
/// Columns produced by the table scan.
pub const TABLE_COLUMNS: &[&str] = &["a", "b", "c", "d"];

pub fn schema(columns: &[&str]) -> DFSchemaRef {
    let fields = columns
        .iter()
        .map(|name| Field::new(*name, DataType::Int64, true))
        .collect::<Vec<_>>();
    Arc::new(DFSchema::try_from(Schema::new(fields)).unwrap())
}

pub fn index_scan(ctx: &OptimizerContext) -> PlanNode {
    PlanNode::new(
        ctx.next_node_id(),
        IndexScan::new("t", "idx_a_b").into(),
        schema(INDEX_COLUMNS),
    )
}

pub fn table_scan(ctx: &OptimizerContext) -> PlanNode {
    PlanNode::new(
        ctx.next_node_id(),
        TableScan::new("t").into(),
        schema(TABLE_COLUMNS),
    )
}

pub fn selection(ctx: &OptimizerContext, conditions: Vec<Expr>) -> PlanNode {
    PlanNode::new(
        ctx.next_node_id(),
        Selection::new(conditions).into(),
        schema(TABLE_COLUMNS),
    )
}

pub fn limit(ctx: &OptimizerContext, limit: usize) -> PlanNode {
    PlanNode::new(
        ctx.next_node_id(),
        Limit::new(limit).into(),
        schema(TABLE_COLUMNS),
    )
}

pub fn index_task(ctx: &OptimizerContext, count: u64, cost: f64) -> CopTask {
    CopTask::index_scan(index_scan(ctx), count, Cost::from(cost))
}

pub fn table_task(ctx: &OptimizerContext, count: u64, cost: f64) -> CopTask {
    CopTask::table_scan(table_scan(ctx), count, Cost::from(cost))
}

pub fn double_read_task(ctx: &OptimizerContext, count: u64, cost: f64) -> CopTask {
    CopTask::double_read(index_scan(ctx), table_scan(ctx), count, Cost::from(cost))
}

pub fn root_task(ctx: &OptimizerContext, count: u64, cost: f64) -> RootTask {
    RootTask::new(table_scan(ctx), count, Cost::from(cost))
}

pub fn conditions_of(node: &PlanNode) -> Vec<Expr> {
    node.operator()
        .as_physical_selection()
        .map(|selection| selection.conditions().to_vec())
        .unwrap_or_default()
}
