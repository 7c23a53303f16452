use log::debug;

use crate::error::OptResult;
use crate::operator::{check_input_arity, PhysicalOperatorTrait};
use crate::optimizer::OptimizerContext;
use crate::plan::PlanNode;
use crate::task::TaskProfile;

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Limit {
    limit: usize,
}

impl Limit {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl PhysicalOperatorTrait for Limit {
    /// The limit truncates its input deterministically, so its value becomes the new count even
    /// if the child estimated fewer rows. Truncation is free.
    fn attach_to_task(
        &self,
        node: &PlanNode,
        inputs: &[TaskProfile],
        _ctx: &OptimizerContext,
    ) -> OptResult<TaskProfile> {
        check_input_arity(node, inputs, 1)?;
        let mut task = inputs[0].attach_plan(node.clone());
        task.set_count(self.limit as u64);

        debug!(
            "Attached limit {} to {} task, cost: {}, count: {}",
            node.id(),
            task.kind(),
            task.cost(),
            task.count()
        );
        Ok(task)
    }
}
