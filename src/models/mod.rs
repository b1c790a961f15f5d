//! Display records for the portfolio page

pub mod certification;
pub mod data;
pub mod project;

pub use certification::Certification;
pub use project::Project;
