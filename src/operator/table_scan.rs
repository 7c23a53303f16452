use crate::error::OptResult;
use crate::operator::{not_attachable, PhysicalOperatorTrait};
use crate::optimizer::OptimizerContext;
use crate::plan::PlanNode;
use crate::task::TaskProfile;

/// Scan of a table by primary key, executed in the storage layer.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TableScan {
    table_name: String,
}

impl TableScan {
    pub fn new<S: Into<String>>(table_name: S) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl PhysicalOperatorTrait for TableScan {
    fn attach_to_task(
        &self,
        node: &PlanNode,
        _inputs: &[TaskProfile],
        _ctx: &OptimizerContext,
    ) -> OptResult<TaskProfile> {
        Err(not_attachable(node))
    }
}
