use datafusion::common::{DFSchema, DFSchemaRef};

/// Properties shared by every physical alternative of the same relation.
#[derive(Clone, PartialEq, Debug)]
pub struct LogicalProperty {
    schema: DFSchemaRef,
}

impl LogicalProperty {
    pub fn new(schema: DFSchemaRef) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &DFSchema {
        &self.schema
    }

    pub fn schema_ref(&self) -> DFSchemaRef {
        self.schema.clone()
    }
}
