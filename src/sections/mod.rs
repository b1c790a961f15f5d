//! Section components for the portfolio page tabs

pub mod about;
pub mod certifications;
pub mod projects;

pub use about::About;
pub use certifications::Certifications;
pub use projects::Projects;
