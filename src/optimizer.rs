use std::sync::Arc;

use crate::cost::CostModel;
use crate::error::OptResult;
use crate::plan::{PlanNodeId, PlanNodeIdGen};

/// State shared by every enumeration branch planning one query.
///
/// The cost model is read-only. Node identities are handed out by an atomic counter, so clones of
/// a context may be used from several threads and still never hand out the same id twice.
#[derive(Clone, Debug, Default)]
pub struct OptimizerContext {
    cost_model: CostModel,
    id_gen: Arc<PlanNodeIdGen>,
}

impl OptimizerContext {
    pub fn new(cost_model: CostModel) -> OptResult<Self> {
        cost_model.validate()?;
        Ok(Self {
            cost_model,
            id_gen: Arc::new(PlanNodeIdGen::new()),
        })
    }

    /// Continue numbering after ids already used by the caller's plan tree.
    pub fn with_first_node_id(mut self, first: PlanNodeId) -> Self {
        self.id_gen = Arc::new(PlanNodeIdGen::starting_at(first));
        self
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    pub fn next_node_id(&self) -> PlanNodeId {
        self.id_gen.next()
    }
}
