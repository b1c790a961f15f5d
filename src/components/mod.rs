//! Reusable UI components for the portfolio page

pub mod certification_list;
pub mod project_list;
pub mod tabs;
