use std::sync::Arc;

use crate::cost::Cost;
use crate::plan::{PlanNode, PlanNodeRef};

/// Work executed by the coordinating process with a single thread.
#[derive(Clone, Debug)]
pub struct RootTask {
    plan: PlanNodeRef,
    cost: Cost,
    count: u64,
}

impl RootTask {
    pub fn new<P: Into<PlanNodeRef>>(plan: P, count: u64, cost: Cost) -> Self {
        Self {
            plan: plan.into(),
            cost,
            count,
        }
    }

    pub fn plan(&self) -> &PlanNodeRef {
        &self.plan
    }

    pub fn attach_plan(&self, node: PlanNode) -> Self {
        let mut task = self.clone();
        task.plan = Arc::new(node.with_inputs([task.plan.clone()]));
        task
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn set_count(&mut self, count: u64) {
        self.count = count;
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn set_cost(&mut self, cost: Cost) {
        self.cost = cost;
    }
}
