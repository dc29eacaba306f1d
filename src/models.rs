use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::user_actions::Model as UserActionModel;

/// Wire shape of a single action as the JSON endpoints expose it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionDetails {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub required_role_level: i32,
    pub description: String,
    pub is_system_action: bool,
}

impl From<UserActionModel> for ActionDetails {
    fn from(model: UserActionModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category: model.category,
            required_role_level: model.required_role_level,
            description: model.description,
            is_system_action: model.is_system_action,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_users: i64,
    pub active_users: i64,
    pub weekly_active_users: i64,
    pub active_user_percentage: f64,
}
