use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ActionDetails;

/// The envelope every JSON endpoint answers with: a `success` flag plus an
/// optional human-readable message and, for lookups, the action payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionDetails>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            action: None,
        }
    }

    pub fn with_action(action: ActionDetails) -> Self {
        Self {
            success: true,
            message: None,
            action: Some(action),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            action: None,
        }
    }
}
