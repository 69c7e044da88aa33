//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "success": true }` acknowledgement for delete endpoints.
///
/// Deletes are idempotent: removing an id that no longer exists still
/// acknowledges success rather than reporting 404.
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub success: bool,
}
