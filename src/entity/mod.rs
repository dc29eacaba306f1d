pub mod audit_logs;
pub mod roles;
pub mod user_actions;
pub mod users;

pub use audit_logs::Entity as AuditLogs;
pub use roles::Entity as Roles;
pub use user_actions::Entity as UserActions;
pub use users::Entity as Users;
