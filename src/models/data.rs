//! Built-in page content
//!
//! The loaders take dataset slices, so page content lives here and is
//! injected by the root component. Editing these functions changes what the
//! page shows without touching any behavior logic.

use super::certification::Certification;
use super::project::Project;

/// The projects rendered on the projects tab, in display order
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new("Project 1", "Java"),
        Project::new("Project 2", "C#"),
        Project::new("Project 3", "Node.js"),
    ]
}

/// The certifications rendered on the certifications tab, in display order
pub fn default_certifications() -> Vec<Certification> {
    vec![
        Certification::new("Certification 1", "Certification Agency 1"),
        Certification::new("Certification 2", "Certification Agency 2"),
    ]
}
