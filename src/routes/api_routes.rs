use axum::{
    Router,
    routing::{get, post},
};

use crate::controllers::education_controller::{get_topic, list_topics};
use crate::controllers::estimate_controller::{
    estimate_agrovoltaic, estimate_carbon, estimate_orientation, estimate_panel_lifespan,
    estimate_savings,
};
use crate::controllers::system_controller::health;
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/estimates/savings",         post(estimate_savings))
        .route("/estimates/carbon",          post(estimate_carbon))
        .route("/estimates/panel-lifespan",  post(estimate_panel_lifespan))
        .route("/estimates/agrovoltaic",     post(estimate_agrovoltaic))
        .route("/estimates/orientation",     post(estimate_orientation))
        .route("/education/topics",          get(list_topics))
        .route("/education/topics/{id}",     get(get_topic))
        .route("/health",                    get(health))
        .with_state(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::config::Config;

    fn router() -> Router {
        Router::new().nest("/api", api_routes(SharedState::new(Config::default())))
    }

    async fn post_json(uri: &str, body: &str) -> StatusCode {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        router().oneshot(req).await.unwrap().status()
    }

    async fn get_status(uri: &str) -> StatusCode {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        router().oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_savings_ok_and_invalid() {
        assert_eq!(post_json("/api/estimates/savings", r#"{"monthlyBill":150}"#).await, StatusCode::OK);
        assert_eq!(post_json("/api/estimates/savings", r#"{"monthlyBill":0}"#).await, StatusCode::BAD_REQUEST);
        assert_eq!(post_json("/api/estimates/savings", "{}").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_carbon_defaults_rate() {
        let body = r#"{"monthlyBill":150,"householdSize":4}"#;
        assert_eq!(post_json("/api/estimates/carbon", body).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_carbon_household_size_reaches_validation() {
        let negative = r#"{"monthlyBill":150,"householdSize":-1}"#;
        assert_eq!(post_json("/api/estimates/carbon", negative).await, StatusCode::BAD_REQUEST);
        let fractional = r#"{"monthlyBill":150,"householdSize":2.5}"#;
        assert_eq!(post_json("/api/estimates/carbon", fractional).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_panel_future_date_is_rejected() {
        let body = r#"{"purchaseDate":"2999-01-01","capacity":5,"technology":"perc","manufacturer":"X"}"#;
        assert_eq!(post_json("/api/estimates/panel-lifespan", body).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_agrovoltaic_and_orientation_ok() {
        let farm = r#"{"location":"Salinas","farmSize":40,"soilType":"sandy"}"#;
        assert_eq!(post_json("/api/estimates/agrovoltaic", farm).await, StatusCode::OK);
        let addr = r#"{"address":"1 Solar Way"}"#;
        assert_eq!(post_json("/api/estimates/orientation", addr).await, StatusCode::OK);
        assert_eq!(post_json("/api/estimates/orientation", r#"{"address":" "}"#).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_topics_and_health() {
        assert_eq!(get_status("/api/education/topics").await, StatusCode::OK);
        assert_eq!(get_status("/api/education/topics/policy").await, StatusCode::OK);
        assert_eq!(get_status("/api/education/topics/nope").await, StatusCode::NOT_FOUND);
        assert_eq!(get_status("/api/health").await, StatusCode::OK);
    }
}
