use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::model::AuthenticatedUser;
use crate::features::confirmations::{dtos as confirmations_dtos, handlers as confirmations_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, presentation,
};
use crate::shared::types::Meta;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::list_community_reports,
        // Confirmations
        confirmations_handlers::confirmation_handler::confirm_report,
        confirmations_handlers::confirmation_handler::list_my_confirmations,
        confirmations_handlers::confirmation_handler::get_my_stats,
    ),
    components(
        schemas(
            // Shared
            Meta,
            AuthenticatedUser,
            // Reports
            reports_dtos::ReportResponseDto,
            presentation::StatusClass,
            presentation::PriorityClass,
            // Confirmations
            confirmations_dtos::ConfirmationResponseDto,
            confirmations_dtos::ConfirmationOutcomeDto,
            confirmations_dtos::ConfirmedReportIdsDto,
            confirmations_dtos::UserStatsResponseDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "reports", description = "Community report feed"),
        (name = "confirmations", description = "Report confirmation and contributor scoring")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Applies deployment-specific info from `SwaggerConfig` onto the document.
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
