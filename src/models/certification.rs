//! Certification record for the certifications list

use serde::{Deserialize, Serialize};

/// A certification shown on the certifications tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub agency: String,
}

impl Certification {
    /// Creates a new certification record
    pub fn new(name: impl Into<String>, agency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agency: agency.into(),
        }
    }

    /// Display label rendered into the certifications list
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.agency)
    }
}
