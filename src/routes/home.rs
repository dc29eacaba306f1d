use std::net::SocketAddr;

use axum::{
    Form, Json,
    extract::{ConnectInfo, Query, State},
    response::Html,
};

use crate::{
    dto::actions::{ExecuteActionRequest, GetActionQuery, UpdateActionRequest},
    error::AppResult,
    response::ActionResponse,
    services::{action_service, dashboard_service},
    state::AppState,
    views,
};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Dashboard HTML", body = String, content_type = "text/html")
    ),
    tag = "Dashboard"
)]
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let roles = dashboard_service::get_active_roles(&state.orm).await?;
    let actions = dashboard_service::get_user_actions(&state.orm).await?;
    let metrics = dashboard_service::get_dashboard_metrics(&state.orm).await?;

    Ok(Html(views::render_dashboard(&roles, &actions, &metrics)))
}

#[utoipa::path(
    get,
    path = "/Home/GetAction",
    params(
        ("actionId" = i32, Query, description = "Action ID")
    ),
    responses(
        (status = 200, description = "Action details or a not-found failure", body = ActionResponse)
    ),
    tag = "Actions"
)]
pub async fn get_action(
    State(state): State<AppState>,
    Query(query): Query<GetActionQuery>,
) -> AppResult<Json<ActionResponse>> {
    let resp = action_service::get_action(&state.orm, query.action_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/Home/UpdateAction",
    request_body(content = UpdateActionRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Update result", body = ActionResponse)
    ),
    tag = "Actions"
)]
pub async fn update_action(
    State(state): State<AppState>,
    Form(payload): Form<UpdateActionRequest>,
) -> AppResult<Json<ActionResponse>> {
    let resp = action_service::update_action(&state.orm, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/Home/ExecuteAction",
    request_body(content = ExecuteActionRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Execution result", body = ActionResponse)
    ),
    tag = "Actions"
)]
pub async fn execute_action(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Form(payload): Form<ExecuteActionRequest>,
) -> AppResult<Json<ActionResponse>> {
    let resp = action_service::execute_action(&state.orm, payload, addr.ip().to_string()).await?;
    Ok(Json(resp))
}
