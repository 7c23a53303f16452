//! Task profiles.
//!
//! A task profile records where a partial physical plan executes and what it is estimated to
//! cost. A [`CopTask`] runs inside the storage layer's coprocessor, a [`RootTask`] runs in the
//! coordinating process after all cop task rows have been returned.
//!
//! Profiles are values: attaching an operator clones the profile and folds the operator into the
//! clone. The plan subtrees are shared between clones through [`PlanNodeRef`], which is sound
//! because attaching only ever installs a new root node and never modifies a shared one.
//!
//! [`PlanNodeRef`]: crate::plan::PlanNodeRef

use enum_as_inner::EnumAsInner;

use crate::cost::Cost;
use crate::optimizer::OptimizerContext;
use crate::plan::PlanNode;

mod cop;
pub use cop::*;
mod root;
pub use root::*;

#[derive(Clone, Debug, EnumAsInner)]
pub enum TaskProfile {
    Cop(CopTask),
    Root(RootTask),
}

impl TaskProfile {
    /// Returns a copy of this profile with `node` as the new root of the active subtree.
    ///
    /// Cost and count are left untouched.
    pub fn attach_plan(&self, node: PlanNode) -> Self {
        match self {
            TaskProfile::Cop(task) => task.attach_plan(node).into(),
            TaskProfile::Root(task) => task.attach_plan(node).into(),
        }
    }

    pub fn count(&self) -> u64 {
        match self {
            TaskProfile::Cop(task) => task.count(),
            TaskProfile::Root(task) => task.count(),
        }
    }

    pub fn set_count(&mut self, count: u64) {
        match self {
            TaskProfile::Cop(task) => task.set_count(count),
            TaskProfile::Root(task) => task.set_count(count),
        }
    }

    pub fn cost(&self) -> Cost {
        match self {
            TaskProfile::Cop(task) => task.cost(),
            TaskProfile::Root(task) => task.cost(),
        }
    }

    pub fn set_cost(&mut self, cost: Cost) {
        match self {
            TaskProfile::Cop(task) => task.set_cost(cost),
            TaskProfile::Root(task) => task.set_cost(cost),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TaskProfile::Cop(_) => "cop",
            TaskProfile::Root(_) => "root",
        }
    }

    /// Hands the rows of this task to the coordinator.
    ///
    /// A cop task is finished and wrapped in a reader, a root task is returned unchanged. The
    /// result can be compared against, or combined with, other root tasks.
    pub fn into_root_task(self, ctx: &OptimizerContext) -> RootTask {
        match self {
            TaskProfile::Cop(task) => task.into_root_task(ctx),
            TaskProfile::Root(task) => task,
        }
    }
}

impl From<CopTask> for TaskProfile {
    fn from(task: CopTask) -> Self {
        TaskProfile::Cop(task)
    }
}

impl From<RootTask> for TaskProfile {
    fn from(task: RootTask) -> Self {
        TaskProfile::Root(task)
    }
}
