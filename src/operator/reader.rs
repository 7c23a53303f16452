use strum_macros::Display;

use crate::error::OptResult;
use crate::operator::{not_attachable, PhysicalOperatorTrait};
use crate::optimizer::OptimizerContext;
use crate::plan::PlanNode;
use crate::task::TaskProfile;

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Display)]
pub enum ReaderKind {
    /// Reads the table plan of a cop task.
    TableReader,
    /// Reads the index plan of a cop task.
    IndexReader,
    /// Reads the index plan, then looks up the table plan by handle.
    IndexLookUpReader,
}

/// Hands the rows produced by a cop task to the coordinator.
///
/// Only created by [`TaskProfile::into_root_task`].
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Reader {
    kind: ReaderKind,
}

impl Reader {
    pub fn new(kind: ReaderKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ReaderKind {
        self.kind
    }
}

impl PhysicalOperatorTrait for Reader {
    fn attach_to_task(
        &self,
        node: &PlanNode,
        _inputs: &[TaskProfile],
        _ctx: &OptimizerContext,
    ) -> OptResult<TaskProfile> {
        Err(not_attachable(node))
    }
}
