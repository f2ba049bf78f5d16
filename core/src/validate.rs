//! Identifier checks run before any request is built.

use crate::error::GatewayError;

pub fn validate_id(id: i64) -> Result<(), GatewayError> {
    if id <= 0 {
        return Err(GatewayError::invalid(format!("id must be greater than 0, got {id}")));
    }
    Ok(())
}

/// Reject the whole batch if it is empty or if any id is non-positive.
pub fn validate_ids(ids: &[i64]) -> Result<(), GatewayError> {
    if ids.is_empty() {
        return Err(GatewayError::invalid("at least one id is required"));
    }
    if let Some(bad) = ids.iter().find(|id| **id <= 0) {
        return Err(GatewayError::invalid(format!(
            "all ids must be greater than 0, got {bad}"
        )));
    }
    Ok(())
}
