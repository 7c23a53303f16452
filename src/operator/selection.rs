use datafusion::common::DFSchema;
use datafusion::prelude::Expr;
use log::{debug, trace};

use crate::error::OptResult;
use crate::operator::{check_input_arity, PhysicalOperatorTrait};
use crate::optimizer::OptimizerContext;
use crate::plan::PlanNode;
use crate::task::{CopTask, TaskProfile};

/// Filter over a conjunction of predicates.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    conditions: Vec<Expr>,
}

impl Selection {
    pub fn new(conditions: Vec<Expr>) -> Self {
        Self { conditions }
    }

    pub fn conditions(&self) -> &[Expr] {
        &self.conditions
    }

    /// Partitions the conditions into the ones computable from the columns of `schema`, and the
    /// ones needing at least one column outside of it.
    ///
    /// Every condition lands in exactly one of the two lists.
    pub fn split_by_index_columns(&self, schema: &DFSchema) -> (Vec<Expr>, Vec<Expr>) {
        let (index_conds, table_conds): (Vec<Expr>, Vec<Expr>) =
            self.conditions.iter().cloned().partition(|cond| {
                cond.column_refs()
                    .into_iter()
                    .all(|column| schema.has_column(column))
            });

        trace!(
            "Split selection into {} index condition(s) and {} table condition(s)",
            index_conds.len(),
            table_conds.len()
        );
        (index_conds, table_conds)
    }

    fn attach_to_cop_task(
        &self,
        node: &PlanNode,
        input: &CopTask,
        ctx: &OptimizerContext,
    ) -> CopTask {
        let cost_model = ctx.cost_model();
        let mut task = input.clone();
        let count = task.count();

        if task.on_index_side() {
            let index_schema = task
                .index_plan()
                .map(|plan| plan.schema_ref())
                .unwrap_or_else(|| node.schema_ref());
            // Nothing to split against until a table lookup exists.
            let (index_conds, table_conds) = if task.table_plan().is_some() {
                self.split_by_index_columns(&index_schema)
            } else {
                (self.conditions.clone(), vec![])
            };

            if !index_conds.is_empty() {
                let index_sel = PlanNode::new(
                    node.id(),
                    Selection::new(index_conds).into(),
                    index_schema,
                );
                task.attach_to_index_plan(index_sel);
                task.set_cost(task.cost() + cost_model.cpu_cost(count));
            }

            if !table_conds.is_empty() {
                let table_schema = task
                    .table_plan()
                    .map(|plan| plan.schema_ref())
                    .unwrap_or_else(|| node.schema_ref());
                // Covers a different subset at a different position, so it gets its own id.
                let table_sel = PlanNode::new(
                    ctx.next_node_id(),
                    Selection::new(table_conds).into(),
                    table_schema,
                );
                task.attach_to_table_plan(table_sel);
                task.switch_to_table_side();
                task.set_cost(task.cost() + cost_model.cpu_cost(count));
            }
        } else {
            task.attach_to_table_plan(node.clone());
            task.set_cost(task.cost() + cost_model.cpu_cost(count));
        }

        task.set_count(cost_model.selected_count(count));
        task
    }
}

impl PhysicalOperatorTrait for Selection {
    fn attach_to_task(
        &self,
        node: &PlanNode,
        inputs: &[TaskProfile],
        ctx: &OptimizerContext,
    ) -> OptResult<TaskProfile> {
        check_input_arity(node, inputs, 1)?;
        let task: TaskProfile = match &inputs[0] {
            _ if self.conditions.is_empty() => {
                // Nothing to evaluate, only the estimate shrinks.
                let mut task = inputs[0].clone();
                task.set_count(ctx.cost_model().selected_count(task.count()));
                task
            }
            TaskProfile::Cop(cop) => self.attach_to_cop_task(node, cop, ctx).into(),
            TaskProfile::Root(root) => {
                let cost_model = ctx.cost_model();
                let mut task = root.attach_plan(node.clone());
                let count = task.count();
                task.set_cost(task.cost() + cost_model.cpu_cost(count));
                task.set_count(cost_model.selected_count(count));
                task.into()
            }
        };

        debug!(
            "Attached selection {} to {} task, cost: {}, count: {}",
            node.id(),
            task.kind(),
            task.cost(),
            task.count()
        );
        Ok(task)
    }
}
