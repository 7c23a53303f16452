//! Cost model used when folding operators onto task profiles.
//!
//! All estimates are expressed in abstract units. Moving one row from the storage layer to the
//! coordinator costs [`NETWORK_FACTOR`], evaluating one operator application on one row costs
//! [`CPU_FACTOR`], and a filter without statistics is assumed to keep [`SELECTION_FACTOR`] of
//! its input.

use derive_more::{Add, AddAssign, Display, From, Into};
use serde::Deserialize;

use crate::error::{OptResult, OptimizerError};

/// Cost of transporting one row across the network.
pub const NETWORK_FACTOR: f64 = 1.5;
/// Cost of evaluating one operator application on one row.
pub const CPU_FACTOR: f64 = 0.9;
/// Fraction of rows assumed to survive an arbitrary filter predicate.
pub const SELECTION_FACTOR: f64 = 0.8;

#[derive(
    Copy, Clone, Debug, Default, PartialEq, PartialOrd, Add, AddAssign, From, Into, Display,
)]
pub struct Cost(f64);

impl Cost {
    pub fn zero() -> Self {
        Self(0.0)
    }
}

/// Calibration of the cost model.
///
/// Missing fields fall back to the built-in constants when deserialized, so a partial
/// configuration only overrides what it names.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CostModel {
    pub network_factor: f64,
    pub cpu_factor: f64,
    pub selection_factor: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            network_factor: NETWORK_FACTOR,
            cpu_factor: CPU_FACTOR,
            selection_factor: SELECTION_FACTOR,
        }
    }
}

impl CostModel {
    pub fn validate(&self) -> OptResult<()> {
        for (field, value) in [
            ("network_factor", self.network_factor),
            ("cpu_factor", self.cpu_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OptimizerError::InvalidCostModel { field, value }.into());
            }
        }

        // A filter keeps some, but never all, of its input.
        let selection = self.selection_factor;
        if !selection.is_finite() || selection <= 0.0 || selection >= 1.0 {
            return Err(OptimizerError::InvalidCostModel {
                field: "selection_factor",
                value: selection,
            }
            .into());
        }

        Ok(())
    }

    /// Cost of moving `count` rows from the storage layer to the coordinator.
    pub fn network_cost(&self, count: u64) -> Cost {
        Cost::from(count as f64 * self.network_factor)
    }

    /// Cost of evaluating one operator over `count` rows.
    pub fn cpu_cost(&self, count: u64) -> Cost {
        Cost::from(count as f64 * self.cpu_factor)
    }

    /// Estimated number of rows surviving a filter over `count` input rows.
    pub fn selected_count(&self, count: u64) -> u64 {
        (count as f64 * self.selection_factor) as u64
    }
}
