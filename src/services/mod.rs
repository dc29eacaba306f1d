pub mod action_service;
pub mod dashboard_service;
