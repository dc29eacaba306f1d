use chrono::{Duration, Utc};
use rbac_dashboard::{
    db::{OrmConn, run_migrations},
    dto::actions::{ExecuteActionRequest, UpdateActionRequest},
    entity::{AuditLogs, Roles, UserActions, Users, roles, user_actions, users},
    seed,
    services::{action_service, dashboard_service},
};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, EntityTrait, PaginatorTrait};

// Each test gets its own in-memory SQLite database. A single pooled
// connection is required so every query sees the same memory store.
async fn setup_orm() -> anyhow::Result<OrmConn> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let orm = Database::connect(opts).await?;
    run_migrations(&orm).await?;
    Ok(orm)
}

async fn insert_role(orm: &OrmConn, name: &str, level: i32, is_active: bool) -> anyhow::Result<i32> {
    let role = roles::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(format!("{name} role")),
        level: Set(level),
        is_active: Set(is_active),
        created_at: Set(Utc::now()),
    }
    .insert(orm)
    .await?;
    Ok(role.id)
}

async fn insert_user(orm: &OrmConn, username: &str, role_id: i32, is_active: bool) -> anyhow::Result<i32> {
    let user = users::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        email: Set(format!("{username}@example.com")),
        role_id: Set(role_id),
        created_at: Set(Utc::now()),
        last_login_at: Set(Utc::now()),
        is_active: Set(is_active),
    }
    .insert(orm)
    .await?;
    Ok(user.id)
}

async fn insert_action(
    orm: &OrmConn,
    name: &str,
    category: &str,
    required_role_level: i32,
) -> anyhow::Result<i32> {
    let action = user_actions::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(format!("{name} action")),
        category: Set(category.to_string()),
        required_role_level: Set(required_role_level),
        is_system_action: Set(false),
        created_at: Set(Utc::now()),
    }
    .insert(orm)
    .await?;
    Ok(action.id)
}

#[tokio::test]
async fn seeding_is_idempotent() -> anyhow::Result<()> {
    let orm = setup_orm().await?;

    seed::run(&orm).await?;
    seed::run(&orm).await?;

    assert_eq!(Roles::find().count(&orm).await?, 100);
    assert_eq!(UserActions::find().count(&orm).await?, 250);
    assert_eq!(Users::find().count(&orm).await?, 50);

    // The self-modifying action comes straight out of the sample data.
    let actions = dashboard_service::get_user_actions(&orm).await?;
    assert!(
        actions
            .iter()
            .any(|a| a.name == action_service::SPECIAL_ACTION_NAME),
        "expected the special action among the seeded actions"
    );

    Ok(())
}

#[tokio::test]
async fn permission_check_covers_all_denial_paths() -> anyhow::Result<()> {
    let orm = setup_orm().await?;

    let active_role = insert_role(&orm, "Analyst_005", 5, true).await?;
    let inactive_role = insert_role(&orm, "Ghost_010", 10, false).await?;

    let active_user = insert_user(&orm, "alice", active_role, true).await?;
    let inactive_user = insert_user(&orm, "bob", active_role, false).await?;
    let ghost_role_user = insert_user(&orm, "carol", inactive_role, true).await?;

    let low_action = insert_action(&orm, "Read_Reports_001", "Report Generation", 3).await?;
    let high_action = insert_action(&orm, "Delete_Security_002", "Security", 8).await?;
    let special_action =
        insert_action(&orm, action_service::SPECIAL_ACTION_NAME, "Customer Service", 10).await?;

    // Role level 5 covers level 3 but not level 8.
    assert!(action_service::validate_user_permission(&orm, active_user, low_action).await?);
    assert!(!action_service::validate_user_permission(&orm, active_user, high_action).await?);

    // The special action bypasses the level check entirely.
    assert!(action_service::validate_user_permission(&orm, active_user, special_action).await?);

    // Inactive user, inactive role, missing user, missing action: all deny.
    assert!(!action_service::validate_user_permission(&orm, inactive_user, low_action).await?);
    assert!(!action_service::validate_user_permission(&orm, ghost_role_user, low_action).await?);
    assert!(!action_service::validate_user_permission(&orm, 9999, low_action).await?);
    assert!(!action_service::validate_user_permission(&orm, active_user, 9999).await?);

    Ok(())
}

#[tokio::test]
async fn special_action_increments_level_and_audits_once() -> anyhow::Result<()> {
    let orm = setup_orm().await?;

    let role = insert_role(&orm, "Viewer_001", 1, true).await?;
    let user = insert_user(&orm, "dave", role, true).await?;
    let special_action =
        insert_action(&orm, action_service::SPECIAL_ACTION_NAME, "Customer Service", 10).await?;

    let resp = action_service::execute_action(
        &orm,
        ExecuteActionRequest {
            user_id: user,
            action_id: special_action,
        },
        "127.0.0.1".to_string(),
    )
    .await?;

    assert!(resp.success);
    assert_eq!(
        resp.message.as_deref(),
        Some("Special action executed successfully! Required level incremented.")
    );

    let action = UserActions::find_by_id(special_action)
        .one(&orm)
        .await?
        .expect("special action still present");
    assert_eq!(action.required_role_level, 11);
    assert_eq!(AuditLogs::find().count(&orm).await?, 1);

    Ok(())
}

#[tokio::test]
async fn denied_execution_writes_no_audit_row() -> anyhow::Result<()> {
    let orm = setup_orm().await?;

    let role = insert_role(&orm, "Viewer_001", 1, true).await?;
    let user = insert_user(&orm, "erin", role, true).await?;
    let high_action = insert_action(&orm, "Configure_Security_003", "Security", 9).await?;

    let resp = action_service::execute_action(
        &orm,
        ExecuteActionRequest {
            user_id: user,
            action_id: high_action,
        },
        "127.0.0.1".to_string(),
    )
    .await?;

    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Permission denied"));
    assert_eq!(AuditLogs::find().count(&orm).await?, 0);

    Ok(())
}

#[tokio::test]
async fn ordinary_execution_succeeds_without_side_effects() -> anyhow::Result<()> {
    let orm = setup_orm().await?;

    let role = insert_role(&orm, "Manager_002", 6, true).await?;
    let user = insert_user(&orm, "frank", role, true).await?;
    let action = insert_action(&orm, "Export_Analytics_004", "Analytics", 4).await?;

    let resp = action_service::execute_action(
        &orm,
        ExecuteActionRequest {
            user_id: user,
            action_id: action,
        },
        "10.0.0.7".to_string(),
    )
    .await?;

    assert!(resp.success);
    assert_eq!(resp.message.as_deref(), Some("Action executed successfully"));

    let unchanged = UserActions::find_by_id(action)
        .one(&orm)
        .await?
        .expect("action still present");
    assert_eq!(unchanged.required_role_level, 4);
    assert_eq!(AuditLogs::find().count(&orm).await?, 1);

    Ok(())
}

#[tokio::test]
async fn metrics_handle_empty_and_populated_stores() -> anyhow::Result<()> {
    let orm = setup_orm().await?;

    let empty = dashboard_service::get_dashboard_metrics(&orm).await?;
    assert_eq!(empty.total_users, 0);
    assert_eq!(empty.active_user_percentage, 0.0);

    let role = insert_role(&orm, "Operator_003", 3, true).await?;
    insert_user(&orm, "gina", role, true).await?;
    insert_user(&orm, "hank", role, true).await?;
    insert_user(&orm, "ivan", role, true).await?;
    insert_user(&orm, "judy", role, false).await?;

    // Push two users' last login outside the weekly window. "judy" stays
    // recent but inactive, which still counts toward weekly active.
    for (name, days_ago) in [("hank", 20i64), ("ivan", 20)] {
        let user = Users::find()
            .all(&orm)
            .await?
            .into_iter()
            .find(|u| u.username == name)
            .expect("seeded test user");
        let mut active: users::ActiveModel = user.into();
        active.last_login_at = Set(Utc::now() - Duration::days(days_ago));
        active.update(&orm).await?;
    }

    let metrics = dashboard_service::get_dashboard_metrics(&orm).await?;
    assert_eq!(metrics.total_users, 4);
    assert_eq!(metrics.active_users, 3);
    assert_eq!(metrics.weekly_active_users, 2);
    assert_eq!(metrics.active_user_percentage, 75.0);

    Ok(())
}

#[tokio::test]
async fn blank_update_fields_keep_prior_values() -> anyhow::Result<()> {
    let orm = setup_orm().await?;

    let action = insert_action(&orm, "Export_Data_005", "Data Access", 4).await?;

    let resp = action_service::update_action(
        &orm,
        UpdateActionRequest {
            action_id: action,
            name: Some("   ".to_string()),
            category: Some("  Reports  ".to_string()),
            required_role_level: 6,
        },
    )
    .await?;
    assert!(resp.success);

    let updated = UserActions::find_by_id(action)
        .one(&orm)
        .await?
        .expect("action still present");
    assert_eq!(updated.name, "Export_Data_005");
    assert_eq!(updated.category, "Reports");
    assert_eq!(updated.required_role_level, 6);

    let missing = action_service::update_action(
        &orm,
        UpdateActionRequest {
            action_id: 9999,
            name: None,
            category: None,
            required_role_level: 1,
        },
    )
    .await?;
    assert!(!missing.success);
    assert_eq!(missing.message.as_deref(), Some("Action not found"));

    Ok(())
}

#[tokio::test]
async fn get_action_returns_camel_case_payload() -> anyhow::Result<()> {
    let orm = setup_orm().await?;

    let action = insert_action(&orm, "Approve_Financial Operations_006", "Financial Operations", 7).await?;

    let resp = action_service::get_action(&orm, action).await?;
    assert!(resp.success);
    let details = resp.action.expect("action payload");
    assert_eq!(details.name, "Approve_Financial Operations_006");

    let json = serde_json::to_value(&details)?;
    assert_eq!(json["requiredRoleLevel"], 7);
    assert_eq!(json["isSystemAction"], false);

    let missing = action_service::get_action(&orm, 9999).await?;
    assert!(!missing.success);
    assert_eq!(missing.message.as_deref(), Some("Action not found"));

    Ok(())
}

#[tokio::test]
async fn active_roles_are_ordered_by_level_then_name() -> anyhow::Result<()> {
    let orm = setup_orm().await?;

    insert_role(&orm, "Zeta", 1, true).await?;
    insert_role(&orm, "Alpha", 1, true).await?;
    insert_role(&orm, "Beta", 2, true).await?;
    insert_role(&orm, "Hidden", 1, false).await?;

    let roles = dashboard_service::get_active_roles(&orm).await?;
    let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zeta", "Beta"]);

    Ok(())
}
