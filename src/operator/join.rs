use datafusion::common::JoinType;
use datafusion::prelude::Expr;
use log::debug;

use crate::error::OptResult;
use crate::operator::{check_input_arity, PhysicalOperatorTrait};
use crate::optimizer::OptimizerContext;
use crate::plan::PlanNode;
use crate::task::{RootTask, TaskProfile};

/// Hash join, built from the right input and probed by the left one.
#[derive(Clone, Debug, PartialEq)]
pub struct Join {
    join_type: JoinType,
    expr: Expr,
}

impl Join {
    pub fn new(join_type: JoinType, expr: Expr) -> Self {
        Self { join_type, expr }
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Without statistics, semi and anti joins are treated as a filter over the preserved side,
    /// and other joins as key lookups producing as many rows as the larger side.
    fn output_count(&self, left: u64, right: u64, ctx: &OptimizerContext) -> u64 {
        let cost_model = ctx.cost_model();
        match self.join_type {
            JoinType::LeftSemi | JoinType::LeftAnti => cost_model.selected_count(left),
            JoinType::RightSemi | JoinType::RightAnti => cost_model.selected_count(right),
            _ => left.max(right),
        }
    }
}

impl PhysicalOperatorTrait for Join {
    fn attach_to_task(
        &self,
        node: &PlanNode,
        inputs: &[TaskProfile],
        ctx: &OptimizerContext,
    ) -> OptResult<TaskProfile> {
        check_input_arity(node, inputs, 2)?;
        let left = inputs[0].clone().into_root_task(ctx);
        let right = inputs[1].clone().into_root_task(ctx);

        let cost = left.cost()
            + right.cost()
            + ctx
                .cost_model()
                .cpu_cost(left.count().saturating_add(right.count()));
        let count = self.output_count(left.count(), right.count(), ctx);
        let plan = node
            .clone()
            .with_inputs([left.plan().clone(), right.plan().clone()]);

        debug!(
            "Attached hash join {} to root task, cost: {}, count: {}",
            node.id(),
            cost,
            count
        );
        Ok(RootTask::new(plan, count, cost).into())
    }
}
