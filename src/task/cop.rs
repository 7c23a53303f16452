use std::sync::Arc;

use log::debug;

use crate::cost::{Cost, CostModel};
use crate::operator::{PhysicalOperator, Reader, ReaderKind};
use crate::optimizer::OptimizerContext;
use crate::plan::{PlanNode, PlanNodeBuilder, PlanNodeRef};
use crate::task::RootTask;

/// Plan subtrees of a cop task. A table plan only exists next to an index plan when the index
/// scan is followed by a lookup into the table.
#[derive(Clone, Debug)]
enum CopPlans {
    Index(PlanNodeRef),
    Table(PlanNodeRef),
    DoubleRead {
        index: PlanNodeRef,
        table: PlanNodeRef,
    },
}

/// Work executed by the coprocessor of the distributed storage layer.
///
/// New operators go to the index plan while the task is on the index side. Once a selection needs
/// columns that only the table lookup provides, the task moves to the table side and stays there.
#[derive(Clone, Debug)]
pub struct CopTask {
    plans: CopPlans,
    cost: Cost,
    count: u64,
    on_index_side: bool,
}

impl CopTask {
    /// A scan over an index covering every column the query needs.
    pub fn index_scan<P: Into<PlanNodeRef>>(index_scan: P, count: u64, cost: Cost) -> Self {
        Self {
            plans: CopPlans::Index(index_scan.into()),
            cost,
            count,
            on_index_side: true,
        }
    }

    pub fn table_scan<P: Into<PlanNodeRef>>(table_scan: P, count: u64, cost: Cost) -> Self {
        Self {
            plans: CopPlans::Table(table_scan.into()),
            cost,
            count,
            on_index_side: false,
        }
    }

    /// An index scan followed by a primary key lookup into the table.
    pub fn double_read<I, T>(index_scan: I, table_scan: T, count: u64, cost: Cost) -> Self
    where
        I: Into<PlanNodeRef>,
        T: Into<PlanNodeRef>,
    {
        Self {
            plans: CopPlans::DoubleRead {
                index: index_scan.into(),
                table: table_scan.into(),
            },
            cost,
            count,
            on_index_side: true,
        }
    }

    pub fn index_plan(&self) -> Option<&PlanNodeRef> {
        match &self.plans {
            CopPlans::Index(index) | CopPlans::DoubleRead { index, .. } => Some(index),
            CopPlans::Table(_) => None,
        }
    }

    pub fn table_plan(&self) -> Option<&PlanNodeRef> {
        match &self.plans {
            CopPlans::Table(table) | CopPlans::DoubleRead { table, .. } => Some(table),
            CopPlans::Index(_) => None,
        }
    }

    pub fn is_double_read(&self) -> bool {
        matches!(self.plans, CopPlans::DoubleRead { .. })
    }

    pub fn on_index_side(&self) -> bool {
        self.on_index_side
    }

    pub fn attach_plan(&self, node: PlanNode) -> Self {
        let mut task = self.clone();
        if task.on_index_side {
            task.attach_to_index_plan(node);
        } else {
            task.attach_to_table_plan(node);
        }
        task
    }

    /// Installs `node` as the new root of the index plan.
    ///
    /// A pure table scan starts on the table side and never gets here.
    pub(crate) fn attach_to_index_plan(&mut self, node: PlanNode) {
        match &mut self.plans {
            CopPlans::Index(plan) | CopPlans::DoubleRead { index: plan, .. } => {
                *plan = Arc::new(node.with_inputs([plan.clone()]));
            }
            CopPlans::Table(plan) => {
                debug_assert!(false, "table scan task has no index plan");
                *plan = Arc::new(node.with_inputs([plan.clone()]));
            }
        }
    }

    /// Installs `node` as the new root of the table plan.
    ///
    /// Only a double read splits conditions to the table side, an index only task never gets here.
    pub(crate) fn attach_to_table_plan(&mut self, node: PlanNode) {
        match &mut self.plans {
            CopPlans::Table(plan) | CopPlans::DoubleRead { table: plan, .. } => {
                *plan = Arc::new(node.with_inputs([plan.clone()]));
            }
            CopPlans::Index(plan) => {
                debug_assert!(false, "index only task has no table plan");
                *plan = Arc::new(node.with_inputs([plan.clone()]));
            }
        }
    }

    /// There is no way back: the index plan output is no longer the final row set.
    pub(crate) fn switch_to_table_side(&mut self) {
        self.on_index_side = false;
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

    /// Adds the cost of sending the final rows to the coordinator. A double read pays the network
    /// twice since the table lookup is another round trip.
    ///
    /// Must be called before the cost is compared against a root task.
    pub fn finish_task(&mut self, cost_model: &CostModel) {
        self.cost += cost_model.network_cost(self.count);
        if self.is_double_read() {
            self.cost += cost_model.network_cost(self.count);
        }
    }

    /// Finishes the task and wraps its plans in a reader executed by the coordinator.
    pub fn into_root_task(mut self, ctx: &OptimizerContext) -> RootTask {
        self.finish_task(ctx.cost_model());

        let (kind, schema, inputs) = match self.plans {
            CopPlans::Index(index) => (ReaderKind::IndexReader, index.schema_ref(), vec![index]),
            CopPlans::Table(table) => (ReaderKind::TableReader, table.schema_ref(), vec![table]),
            CopPlans::DoubleRead { index, table } => (
                ReaderKind::IndexLookUpReader,
                table.schema_ref(),
                vec![index, table],
            ),
        };
        let operator = PhysicalOperator::from(Reader::new(kind));
        let reader = PlanNodeBuilder::new(ctx.next_node_id(), &operator, schema)
            .add_inputs(inputs)
            .build();

        debug!(
            "Finished cop task with {} {}, cost: {}, count: {}",
            kind,
            reader.id(),
            self.cost,
            self.count
        );
        RootTask::new(reader, self.count, self.cost)
    }
}
