use datafusion::prelude::Expr;
use log::debug;

use crate::error::OptResult;
use crate::operator::{check_input_arity, PhysicalOperatorTrait};
use crate::optimizer::OptimizerContext;
use crate::plan::PlanNode;
use crate::task::TaskProfile;

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    exprs: Vec<Expr>,
}

impl Projection {
    pub fn new(exprs: Vec<Expr>) -> Self {
        Self { exprs }
    }

    pub fn exprs(&self) -> &[Expr] {
        &self.exprs
    }
}

impl PhysicalOperatorTrait for Projection {
    /// Projections are evaluated by the coordinator, so a cop task is finished first.
    fn attach_to_task(
        &self,
        node: &PlanNode,
        inputs: &[TaskProfile],
        ctx: &OptimizerContext,
    ) -> OptResult<TaskProfile> {
        check_input_arity(node, inputs, 1)?;
        let root = inputs[0].clone().into_root_task(ctx);
        let mut task = root.attach_plan(node.clone());
        task.set_cost(task.cost() + ctx.cost_model().cpu_cost(task.count()));

        debug!(
            "Attached projection {} to root task, cost: {}, count: {}",
            node.id(),
            task.cost(),
            task.count()
        );
        Ok(task.into())
    }
}
