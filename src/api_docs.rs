use utoipa::OpenApi;

use crate::controllers::{education_controller, estimate_controller, system_controller};
use crate::errors::ErrorDto;
use crate::models::{carbon, education, farm, orientation, panel, savings, system};

#[derive(OpenApi)]
#[openapi(
    paths(
        estimate_controller::estimate_savings,
        estimate_controller::estimate_carbon,
        estimate_controller::estimate_panel_lifespan,
        estimate_controller::estimate_agrovoltaic,
        estimate_controller::estimate_orientation,
        education_controller::list_topics,
        education_controller::get_topic,
        system_controller::health
    ),
    components(
        schemas(
            savings::SavingsInput,
            carbon::CarbonInput,
            panel::PanelInput,
            farm::FarmInput,
            orientation::AddressInput,
            education::LearningTopic,
            system::HealthStatus,
            ErrorDto
        )
    ),
    tags(
        (name = "estimates", description = "Solar 360 calculators"),
        (name = "education", description = "SolarEd learning topics")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/estimates/savings",
            "/api/estimates/carbon",
            "/api/estimates/panel-lifespan",
            "/api/estimates/agrovoltaic",
            "/api/estimates/orientation",
            "/api/education/topics",
            "/api/education/topics/{id}",
            "/api/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
