use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::{
    db::OrmConn,
    entity::{
        Users,
        roles::{self, Column as RoleCol, Entity as Roles},
        user_actions::{self, Column as ActionCol, Entity as UserActions},
        users::Column as UserCol,
    },
    error::AppResult,
    models::DashboardMetrics,
};

/// Active roles ordered by level, then name.
pub async fn get_active_roles(orm: &OrmConn) -> AppResult<Vec<roles::Model>> {
    let roles = Roles::find()
        .filter(RoleCol::IsActive.eq(true))
        .order_by_asc(RoleCol::Level)
        .order_by_asc(RoleCol::Name)
        .all(orm)
        .await?;
    Ok(roles)
}

/// All actions ordered by category, then name. The dashboard shows every
/// action regardless of the viewer's level.
pub async fn get_user_actions(orm: &OrmConn) -> AppResult<Vec<user_actions::Model>> {
    let actions = UserActions::find()
        .order_by_asc(ActionCol::Category)
        .order_by_asc(ActionCol::Name)
        .all(orm)
        .await?;
    Ok(actions)
}

pub async fn get_dashboard_metrics(orm: &OrmConn) -> AppResult<DashboardMetrics> {
    let total_users = Users::find().count(orm).await? as i64;
    let active_users = Users::find()
        .filter(UserCol::IsActive.eq(true))
        .count(orm)
        .await? as i64;
    let weekly_active_users = Users::find()
        .filter(UserCol::LastLoginAt.gte(Utc::now() - Duration::days(7)))
        .count(orm)
        .await? as i64;

    let active_user_percentage = if total_users > 0 {
        active_users as f64 * 100.0 / total_users as f64
    } else {
        0.0
    };

    Ok(DashboardMetrics {
        total_users,
        active_users,
        weekly_active_users,
        active_user_percentage,
    })
}
