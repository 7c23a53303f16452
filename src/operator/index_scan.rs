use crate::error::OptResult;
use crate::operator::{not_attachable, PhysicalOperatorTrait};
use crate::optimizer::OptimizerContext;
use crate::plan::PlanNode;
use crate::task::TaskProfile;

/// Range scan over a secondary index.
///
/// Its output only carries the indexed columns (plus the handle). Other columns require a
/// lookup into the table, see [`CopTask::double_read`](crate::task::CopTask::double_read).
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct IndexScan {
    table_name: String,
    index_name: String,
}

impl IndexScan {
    pub fn new<S: Into<String>, I: Into<String>>(table_name: S, index_name: I) -> Self {
        Self {
            table_name: table_name.into(),
            index_name: index_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

impl PhysicalOperatorTrait for IndexScan {
    fn attach_to_task(
        &self,
        node: &PlanNode,
        _inputs: &[TaskProfile],
        _ctx: &OptimizerContext,
    ) -> OptResult<TaskProfile> {
        Err(not_attachable(node))
    }
}
