use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    db::OrmConn,
    entity::{Roles, UserActions, Users, roles, user_actions, users},
    error::AppResult,
};

const ROLE_CATEGORIES: [&str; 10] = [
    "Admin",
    "Manager",
    "Supervisor",
    "Analyst",
    "Operator",
    "Viewer",
    "Guest",
    "System",
    "Service",
    "API",
];

const ACTION_CATEGORIES: [&str; 10] = [
    "User Management",
    "Data Access",
    "Report Generation",
    "System Configuration",
    "Financial Operations",
    "Inventory Management",
    "Customer Service",
    "Analytics",
    "Security",
    "Audit",
];

const ACTION_TYPES: [&str; 10] = [
    "Create", "Read", "Update", "Delete", "Execute", "Approve", "Review", "Export", "Import",
    "Configure",
];

/// Populate sample roles, actions, and users on first run.
/// A non-empty roles table means the store is already seeded.
pub async fn run(orm: &OrmConn) -> AppResult<()> {
    if Roles::find().count(orm).await? > 0 {
        tracing::debug!("store already seeded, skipping");
        return Ok(());
    }

    // ThreadRng is not Send, so keep it out of scope across the awaits below.
    let (roles, actions, users) = build_sample_data();

    Roles::insert_many(roles).exec(orm).await?;
    UserActions::insert_many(actions).exec(orm).await?;
    Users::insert_many(users).exec(orm).await?;

    tracing::info!("seeded 100 roles, 250 actions, 50 users");
    Ok(())
}

type SampleData = (
    Vec<roles::ActiveModel>,
    Vec<user_actions::ActiveModel>,
    Vec<users::ActiveModel>,
);

fn build_sample_data() -> SampleData {
    let mut rng = rand::rng();
    let now = Utc::now();

    let roles: Vec<roles::ActiveModel> = (1..=100)
        .map(|i| {
            let category = ROLE_CATEGORIES[i % ROLE_CATEGORIES.len()];
            roles::ActiveModel {
                id: NotSet,
                name: Set(format!("{category}_{i:03}")),
                description: Set(format!("Role description for {category} level {i}")),
                level: Set((i as i32 - 1) / 10 + 1),
                // every 20th role is inactive
                is_active: Set(i % 20 != 0),
                created_at: Set(now - Duration::days(rng.random_range(0..365))),
            }
        })
        .collect();

    let actions: Vec<user_actions::ActiveModel> = (1..=250)
        .map(|i| {
            let action_type = ACTION_TYPES[i % ACTION_TYPES.len()];
            let category = ACTION_CATEGORIES[i % ACTION_CATEGORIES.len()];
            user_actions::ActiveModel {
                id: NotSet,
                name: Set(format!("{action_type}_{category}_{i:03}")),
                description: Set(format!(
                    "Action to {} {}",
                    action_type.to_lowercase(),
                    category.to_lowercase()
                )),
                category: Set(category.to_string()),
                required_role_level: Set((i as i32 - 1) % 10 + 1),
                is_system_action: Set(i % 15 == 0),
                created_at: Set(now - Duration::days(rng.random_range(0..180))),
            }
        })
        .collect();

    let users: Vec<users::ActiveModel> = (1..=50)
        .map(|i| {
            users::ActiveModel {
                id: NotSet,
                username: Set(format!("user_{i:03}")),
                email: Set(format!("user{i}@example.com")),
                role_id: Set(rng.random_range(1..=100)),
                created_at: Set(now - Duration::days(rng.random_range(0..365))),
                last_login_at: Set(now - Duration::days(rng.random_range(0..30))),
                // every 10th user is inactive
                is_active: Set(i % 10 != 0),
            }
        })
        .collect();

    (roles, actions, users)
}
