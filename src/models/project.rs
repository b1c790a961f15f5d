//! Project record for the project list

use serde::{Deserialize, Serialize};

/// A project shown on the projects tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub technology: String,
}

impl Project {
    /// Creates a new project record
    pub fn new(name: impl Into<String>, technology: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            technology: technology.into(),
        }
    }

    /// Display label rendered into the project list
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.technology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new("Project 1", "Java");
        assert_eq!(project.name, "Project 1");
        assert_eq!(project.technology, "Java");
    }

    #[test]
    fn test_project_label() {
        let project = Project::new("Project 3", "Node.js");
        assert_eq!(project.label(), "Project 3 (Node.js)");
    }

    #[test]
    fn test_project_serialization() -> Result<(), Box<dyn std::error::Error>> {
        let project = Project::new("Project 2", "C#");

        let json = serde_json::to_string(&project)?;
        assert!(json.contains("Project 2"));
        assert!(json.contains("C#"));
        Ok(())
    }

    #[test]
    fn test_project_deserialization() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{ "name": "Project 1", "technology": "Java" }"#;

        let project: Project = serde_json::from_str(json)?;
        assert_eq!(project.name, "Project 1");
        assert_eq!(project.technology, "Java");
        Ok(())
    }
}
