pub mod carbon_estimator;
pub mod education_catalog;
pub mod farm_estimator;
pub mod orientation_estimator;
pub mod panel_estimator;
pub mod presentation;
pub mod savings_estimator;
