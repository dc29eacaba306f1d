use chrono::Utc;
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::{db::OrmConn, entity::audit_logs, error::AppResult};

/// Append one audit row for an executed action.
pub async fn log_execution(
    orm: &OrmConn,
    user_id: i32,
    action_id: i32,
    details: String,
    ip_address: String,
) -> AppResult<audit_logs::Model> {
    let entry = audit_logs::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        action_id: Set(action_id),
        details: Set(details),
        timestamp: Set(Utc::now()),
        ip_address: Set(ip_address),
    };
    let entry = entry.insert(orm).await?;
    Ok(entry)
}
