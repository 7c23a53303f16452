use thiserror::Error;

pub type OptResult<T> = anyhow::Result<T>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizerError {
    /// Enumeration driver passed the wrong number of child task profiles.
    #[error("{operator} expects {expected} input task profile(s), got {actual}")]
    InputArity {
        operator: String,
        expected: usize,
        actual: usize,
    },

    /// Leaf access paths and readers start a task, they never fold onto one.
    #[error("{operator} can not be attached to a task profile")]
    NotAttachable { operator: String },

    #[error("invalid cost model: {field} = {value}")]
    InvalidCostModel { field: &'static str, value: f64 },
}
