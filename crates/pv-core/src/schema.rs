//! JSON Schema for the `plan.json` document, derived from the models.

use schemars::{schema_for, Schema};

use crate::models::Plan;

/// Schema describing a whole plan document.
pub fn plan_schema() -> Schema {
    schema_for!(Plan)
}
