pub mod api;
pub mod errors;
pub mod layout;
pub mod manifest;
pub mod plan;
pub mod report;
pub mod scaffold;
