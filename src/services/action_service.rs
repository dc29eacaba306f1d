use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter};

use crate::{
    audit::log_execution,
    db::OrmConn,
    dto::actions::{ExecuteActionRequest, UpdateActionRequest},
    entity::{
        user_actions::{
            ActiveModel as ActionActive, Column as ActionCol, Entity as UserActions,
        },
        users::{Column as UserCol, Entity as Users},
    },
    error::AppResult,
    models::ActionDetails,
    response::ActionResponse,
};

/// Always permitted, and raises its own required level on every execution.
pub const SPECIAL_ACTION_NAME: &str = "Review_Customer Service_016";

/// Permission holds iff the user and its role are both active and the role
/// level meets the action's required level. The special action is always
/// permitted. Any missing entity denies.
pub async fn validate_user_permission(
    orm: &OrmConn,
    user_id: i32,
    action_id: i32,
) -> AppResult<bool> {
    let user = Users::find_by_id(user_id)
        .filter(UserCol::IsActive.eq(true))
        .one(orm)
        .await?;
    let user = match user {
        Some(u) => u,
        None => return Ok(false),
    };

    let role = user.find_related(crate::entity::Roles).one(orm).await?;
    let role = match role {
        Some(r) if r.is_active => r,
        _ => return Ok(false),
    };

    let action = UserActions::find_by_id(action_id).one(orm).await?;
    let action = match action {
        Some(a) => a,
        None => return Ok(false),
    };

    if action.name == SPECIAL_ACTION_NAME {
        return Ok(true);
    }

    Ok(role.level >= action.required_role_level)
}

pub async fn get_action(orm: &OrmConn, action_id: i32) -> AppResult<ActionResponse> {
    let action = UserActions::find_by_id(action_id).one(orm).await?;
    let action = match action {
        Some(a) => a,
        None => return Ok(ActionResponse::failure("Action not found")),
    };

    Ok(ActionResponse::with_action(ActionDetails::from(action)))
}

pub async fn update_action(
    orm: &OrmConn,
    payload: UpdateActionRequest,
) -> AppResult<ActionResponse> {
    let existing = UserActions::find_by_id(payload.action_id).one(orm).await?;
    let existing = match existing {
        Some(a) => a,
        None => return Ok(ActionResponse::failure("Action not found")),
    };

    let mut active: ActionActive = existing.into();
    // Blank or absent fields keep the prior value.
    if let Some(name) = normalize(payload.name) {
        active.name = Set(name);
    }
    if let Some(category) = normalize(payload.category) {
        active.category = Set(category);
    }
    active.required_role_level = Set(payload.required_role_level);
    active.update(orm).await?;

    Ok(ActionResponse::ok("Action updated successfully"))
}

pub async fn execute_action(
    orm: &OrmConn,
    payload: ExecuteActionRequest,
    ip_address: String,
) -> AppResult<ActionResponse> {
    if !validate_user_permission(orm, payload.user_id, payload.action_id).await? {
        return Ok(ActionResponse::failure("Permission denied"));
    }

    let action = UserActions::find_by_id(payload.action_id).one(orm).await?;

    let details = format!("Action executed at {}", Utc::now());
    log_execution(orm, payload.user_id, payload.action_id, details, ip_address).await?;

    if let Some(action) = action.filter(|a| a.name == SPECIAL_ACTION_NAME) {
        execute_special_action(orm, &action.name).await?;
        return Ok(ActionResponse::ok(
            "Special action executed successfully! Required level incremented.",
        ));
    }

    Ok(ActionResponse::ok("Action executed successfully"))
}

/// The special action modifies itself: each execution raises the level
/// required next time by one.
async fn execute_special_action(orm: &OrmConn, action_name: &str) -> AppResult<bool> {
    if action_name != SPECIAL_ACTION_NAME {
        return Ok(false);
    }

    let action = UserActions::find()
        .filter(ActionCol::Name.eq(action_name))
        .one(orm)
        .await?;
    let action = match action {
        Some(a) => a,
        None => return Ok(false),
    };

    let required = action.required_role_level;
    let mut active: ActionActive = action.into();
    active.required_role_level = Set(required + 1);
    active.update(orm).await?;

    Ok(true)
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
