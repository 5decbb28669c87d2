use crate::models::education::{LearningTopic, TopicLevel};

static TOPICS: [LearningTopic; 9] = [
    LearningTopic {
        id: "basics",
        title: "Solar Energy Basics",
        description: "Fundamental concepts of solar energy and photovoltaic technology",
        duration: "2-3 hours",
        level: TopicLevel::Beginner,
        modules: 6,
        url: "https://www.energy.gov/eere/solar/solar-photovoltaic-technology-basics",
    },
    LearningTopic {
        id: "installation",
        title: "Solar Installation Process",
        description: "Step-by-step guide to solar panel installation and setup",
        duration: "4-5 hours",
        level: TopicLevel::Intermediate,
        modules: 8,
        url: "https://www.electronicsandyou.com/solar-panel-installation-guide-step-by-step-process.html",
    },
    LearningTopic {
        id: "financing",
        title: "Solar Financing & Economics",
        description: "Understanding costs, savings, incentives, and ROI calculations",
        duration: "3-4 hours",
        level: TopicLevel::Beginner,
        modules: 7,
        url: "https://www.nrel.gov/analysis/tech-lcoe-documentation.html",
    },
    LearningTopic {
        id: "technology",
        title: "Advanced Solar Technologies",
        description: "Latest innovations in solar cell technology and efficiency",
        duration: "5-6 hours",
        level: TopicLevel::Advanced,
        modules: 10,
        url: "https://www.nrel.gov/pv/",
    },
    LearningTopic {
        id: "maintenance",
        title: "Solar System Maintenance",
        description: "Best practices for maintaining and optimizing solar systems",
        duration: "2-3 hours",
        level: TopicLevel::Intermediate,
        modules: 5,
        url: "https://www.energy.gov/femp/optimizing-solar-photovoltaic-performance-longevity",
    },
    LearningTopic {
        id: "grid",
        title: "Grid Integration & Storage",
        description: "Understanding grid-tie systems, net metering, and battery storage",
        duration: "4-5 hours",
        level: TopicLevel::Advanced,
        modules: 9,
        url: "https://www.nrel.gov/grid/",
    },
    LearningTopic {
        id: "policy",
        title: "Solar Policy & Regulations",
        description: "Government policies, incentives, and regulatory frameworks",
        duration: "3-4 hours",
        level: TopicLevel::Intermediate,
        modules: 6,
        url: "https://www.epa.gov/environmental-economics/economic-incentives",
    },
    LearningTopic {
        id: "commercial",
        title: "Commercial Solar Solutions",
        description: "Large-scale solar installations for businesses and industries",
        duration: "6-7 hours",
        level: TopicLevel::Advanced,
        modules: 12,
        url: "https://www.seia.org/solar-means-business-report",
    },
    LearningTopic {
        id: "environmental",
        title: "Environmental Impact & Sustainability",
        description: "Solar energy's role in climate change mitigation and sustainability",
        duration: "3-4 hours",
        level: TopicLevel::Beginner,
        modules: 7,
        url: "https://www.irena.org/solar",
    },
];

/// All learning topics in display order.
pub fn topics() -> &'static [LearningTopic] {
    &TOPICS
}

pub fn find_topic(id: &str) -> Option<&'static LearningTopic> {
    TOPICS.iter().find(|t| t.id == id)
}
