pub mod carbon;
pub mod education;
pub mod envelope;
pub mod farm;
pub mod orientation;
pub mod panel;
pub mod savings;
pub mod system;
