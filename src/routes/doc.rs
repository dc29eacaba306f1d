use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::actions::{ExecuteActionRequest, GetActionQuery, UpdateActionRequest},
    models::{ActionDetails, DashboardMetrics},
    response::ActionResponse,
    routes::{health, home},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        home::index,
        home::get_action,
        home::update_action,
        home::execute_action,
    ),
    components(
        schemas(
            ActionDetails,
            ActionResponse,
            DashboardMetrics,
            GetActionQuery,
            UpdateActionRequest,
            ExecuteActionRequest,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Dashboard", description = "Dashboard page"),
        (name = "Actions", description = "Action lookup, update, and execution"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
