//! Physical operators and the rules folding them onto task profiles.
//!
//! Every operator kind implements [`PhysicalOperatorTrait::attach_to_task`]: given the task
//! profile of each child, it returns a new task profile describing where the operator runs, what
//! the plan looks like afterwards and how much it costs. The inputs are never modified, so the
//! enumeration driver may try several operators on top of the same child profiles.

use std::fmt::{Display, Formatter};

use anyhow::ensure;
use enum_as_inner::EnumAsInner;
use enum_dispatch::enum_dispatch;
use itertools::Itertools;
use strum_macros::AsRefStr;

use crate::error::{OptResult, OptimizerError};
use crate::optimizer::OptimizerContext;
use crate::plan::PlanNode;
use crate::task::TaskProfile;

mod index_scan;
pub use index_scan::*;
mod join;
pub use join::*;
mod limit;
pub use limit::*;
mod projection;
pub use projection::*;
mod reader;
pub use reader::*;
mod selection;
pub use selection::*;
mod table_scan;
pub use table_scan::*;

#[enum_dispatch]
pub trait PhysicalOperatorTrait {
    /// Fold `node`, whose operator is `self`, onto one task profile per child.
    fn attach_to_task(
        &self,
        node: &PlanNode,
        inputs: &[TaskProfile],
        ctx: &OptimizerContext,
    ) -> OptResult<TaskProfile>;
}

/// Physical relational operator.
#[enum_dispatch(PhysicalOperatorTrait)]
#[derive(Clone, Debug, PartialEq, EnumAsInner, AsRefStr)]
pub enum PhysicalOperator {
    #[strum(serialize = "TableScan")]
    PhysicalTableScan(TableScan),
    #[strum(serialize = "IndexScan")]
    PhysicalIndexScan(IndexScan),
    #[strum(serialize = "Reader")]
    PhysicalReader(Reader),
    #[strum(serialize = "Selection")]
    PhysicalSelection(Selection),
    #[strum(serialize = "Limit")]
    PhysicalLimit(Limit),
    #[strum(serialize = "Projection")]
    PhysicalProjection(Projection),
    #[strum(serialize = "HashJoin")]
    PhysicalHashJoin(Join),
}

impl Display for PhysicalOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicalOperator::PhysicalTableScan(scan) => {
                write!(f, "{}({})", self.as_ref(), scan.table_name())
            }
            PhysicalOperator::PhysicalIndexScan(scan) => write!(
                f,
                "{}({}.{})",
                self.as_ref(),
                scan.table_name(),
                scan.index_name()
            ),
            PhysicalOperator::PhysicalReader(reader) => write!(f, "{}", reader.kind()),
            PhysicalOperator::PhysicalSelection(selection) => write!(
                f,
                "{}({})",
                self.as_ref(),
                selection.conditions().iter().join(" AND ")
            ),
            PhysicalOperator::PhysicalLimit(limit) => {
                write!(f, "{}({})", self.as_ref(), limit.limit())
            }
            PhysicalOperator::PhysicalProjection(projection) => write!(
                f,
                "{}({})",
                self.as_ref(),
                projection.exprs().iter().join(", ")
            ),
            PhysicalOperator::PhysicalHashJoin(join) => write!(
                f,
                "{}({:?}, {})",
                self.as_ref(),
                join.join_type(),
                join.expr()
            ),
        }
    }
}

pub(crate) fn check_input_arity(
    node: &PlanNode,
    inputs: &[TaskProfile],
    expected: usize,
) -> OptResult<()> {
    ensure!(
        inputs.len() == expected,
        OptimizerError::InputArity {
            operator: node.operator().as_ref().to_string(),
            expected,
            actual: inputs.len(),
        }
    );
    Ok(())
}

pub(crate) fn not_attachable(node: &PlanNode) -> anyhow::Error {
    OptimizerError::NotAttachable {
        operator: node.operator().as_ref().to_string(),
    }
    .into()
}
