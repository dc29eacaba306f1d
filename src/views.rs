use std::fmt::Write;

use html_escape::encode_text;

use crate::{
    entity::{roles, user_actions},
    models::DashboardMetrics,
};

/// Render the dashboard page: metric cards, active roles, and all actions.
pub fn render_dashboard(
    roles: &[roles::Model],
    actions: &[user_actions::Model],
    metrics: &DashboardMetrics,
) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Access Dashboard</title>\n<style>\n\
         body { font-family: sans-serif; margin: 2rem; }\n\
         table { border-collapse: collapse; margin-bottom: 2rem; }\n\
         th, td { border: 1px solid #ccc; padding: 0.3rem 0.8rem; text-align: left; }\n\
         .metrics { display: flex; gap: 2rem; margin-bottom: 2rem; }\n\
         .metric { border: 1px solid #ccc; padding: 1rem; }\n\
         </style>\n</head>\n<body>\n<h1>Access Dashboard</h1>\n",
    );

    let _ = write!(
        html,
        "<div class=\"metrics\">\
         <div class=\"metric\"><strong>Total users</strong><br>{}</div>\
         <div class=\"metric\"><strong>Active users</strong><br>{}</div>\
         <div class=\"metric\"><strong>Weekly active</strong><br>{}</div>\
         <div class=\"metric\"><strong>Active %</strong><br>{:.1}</div>\
         </div>\n",
        metrics.total_users,
        metrics.active_users,
        metrics.weekly_active_users,
        metrics.active_user_percentage,
    );

    html.push_str(
        "<h2>Active roles</h2>\n<table>\n\
         <tr><th>ID</th><th>Name</th><th>Level</th><th>Description</th></tr>\n",
    );
    for role in roles {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            role.id,
            encode_text(&role.name),
            role.level,
            encode_text(&role.description),
        );
    }
    html.push_str("</table>\n");

    html.push_str(
        "<h2>Actions</h2>\n<table>\n\
         <tr><th>ID</th><th>Category</th><th>Name</th><th>Required level</th><th>System</th></tr>\n",
    );
    for action in actions {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            action.id,
            encode_text(&action.category),
            encode_text(&action.name),
            action.required_role_level,
            if action.is_system_action { "yes" } else { "no" },
        );
    }
    html.push_str("</table>\n</body>\n</html>\n");

    html
}
