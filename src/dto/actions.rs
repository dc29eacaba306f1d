use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetActionQuery {
    pub action_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActionRequest {
    pub action_id: i32,
    pub name: Option<String>,
    pub category: Option<String>,
    pub required_role_level: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteActionRequest {
    pub user_id: i32,
    pub action_id: i32,
}
