pub mod education_controller;
pub mod estimate_controller;
pub mod system_controller;
