use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use datafusion::common::{DFSchema, DFSchemaRef};
use smallvec::SmallVec;

use crate::error::OptResult;
use crate::operator::{PhysicalOperator, PhysicalOperatorTrait};
use crate::optimizer::OptimizerContext;
use crate::properties::LogicalProperty;
use crate::task::TaskProfile;

pub type PlanNodeId = u32;

pub type PlanNodeRef = Arc<PlanNode>;

pub type PlanNodeInputs = SmallVec<[PlanNodeRef; 2]>;

/// One node in a physical plan.
///
/// Once wrapped in a [`PlanNodeRef`] a node is shared by every task profile cloned from the one
/// that installed it, and it is never modified again. Growing a subtree always means building a
/// new node whose input is the old root, see [`PlanNode::with_inputs`].
#[derive(Clone, Debug)]
pub struct PlanNode {
    id: PlanNodeId,
    operator: PhysicalOperator,
    inputs: PlanNodeInputs,
    logical_prop: LogicalProperty,
}

/// The `eq` should ignore `id`.
impl PartialEq for PlanNode {
    fn eq(&self, other: &Self) -> bool {
        self.operator == other.operator
            && self.inputs == other.inputs
            && self.logical_prop == other.logical_prop
    }
}

impl PlanNode {
    pub fn new(id: PlanNodeId, operator: PhysicalOperator, schema: DFSchemaRef) -> Self {
        Self {
            id,
            operator,
            inputs: PlanNodeInputs::new(),
            logical_prop: LogicalProperty::new(schema),
        }
    }

    /// Replace the inputs of an unshared node.
    pub fn with_inputs<I>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = PlanNodeRef>,
    {
        self.inputs = inputs.into_iter().collect();
        self
    }

    pub fn operator(&self) -> &PhysicalOperator {
        &self.operator
    }

    pub fn id(&self) -> PlanNodeId {
        self.id
    }

    pub fn inputs(&self) -> &[PlanNodeRef] {
        &self.inputs
    }

    pub fn schema(&self) -> &DFSchema {
        self.logical_prop.schema()
    }

    pub fn schema_ref(&self) -> DFSchemaRef {
        self.logical_prop.schema_ref()
    }

    /// Folds this node onto the task profiles of its children, see [`PhysicalOperatorTrait`].
    pub fn attach_to_task(
        &self,
        inputs: &[TaskProfile],
        ctx: &OptimizerContext,
    ) -> OptResult<TaskProfile> {
        self.operator.attach_to_task(self, inputs, ctx)
    }
}

pub struct PlanNodeBuilder {
    plan_node: PlanNode,
}

impl PlanNodeBuilder {
    pub fn new(id: PlanNodeId, operator: &PhysicalOperator, schema: DFSchemaRef) -> Self {
        Self {
            plan_node: PlanNode::new(id, operator.clone(), schema),
        }
    }

    pub fn add_inputs<I>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = PlanNodeRef>,
    {
        self.plan_node.inputs.extend(inputs);
        self
    }

    pub fn build(self) -> PlanNode {
        self.plan_node
    }
}

/// Generates plan node ids.
#[derive(Debug, Default)]
pub struct PlanNodeIdGen {
    next: AtomicU32,
}

impl PlanNodeIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: PlanNodeId) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }

    pub fn next(&self) -> PlanNodeId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
