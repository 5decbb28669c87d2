use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum TopicLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// One SolarEd learning track.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LearningTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// e.g. "2-3 hours"
    pub duration: &'static str,
    pub level: TopicLevel,
    pub modules: u32,
    /// External reading material
    pub url: &'static str,
}
