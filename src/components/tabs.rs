//! Tab set state and section visibility
//!
//! A `TabSet` tracks the named sections of the page and which one is
//! currently shown. Exactly one section is active at any time; switch
//! requests naming an unknown section are rejected without changing state,
//! so a bad name can never blank the page.

use leptos::prelude::*;

use crate::error::UiError;

/// Section identifiers as constants so callers never spell raw strings
pub mod section {
    pub const ABOUT: &str = "about";
    pub const PROJECTS: &str = "projects";
    pub const CERTIFICATIONS: &str = "certifications";

    /// All portfolio sections in display order
    pub const ALL: [&str; 3] = [ABOUT, PROJECTS, CERTIFICATIONS];
}

/// A mutually-exclusive set of named page sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<String>,
    active: String,
}

impl TabSet {
    /// Creates a tab set from section identifiers; the first is active
    ///
    /// # Errors
    ///
    /// Returns `UiError::EmptyTabSet` if `ids` is empty.
    pub fn new(ids: Vec<String>) -> Result<Self, UiError> {
        let active = ids.first().cloned().ok_or(UiError::EmptyTabSet)?;
        Ok(Self { ids, active })
    }

    /// The portfolio page tab set, with the about section active
    pub fn portfolio() -> Self {
        Self {
            ids: section::ALL.iter().map(|id| (*id).to_string()).collect(),
            active: section::ABOUT.to_string(),
        }
    }

    /// Makes `name` the single visible section
    ///
    /// # Errors
    ///
    /// Returns `UiError::UnknownTab` and leaves the active section unchanged
    /// if `name` is not in the tab set.
    pub fn show(&mut self, name: &str) -> Result<(), UiError> {
        if self.contains(name) {
            self.active = name.to_string();
            Ok(())
        } else {
            Err(UiError::UnknownTab(name.to_string()))
        }
    }

    /// The identifier of the currently visible section
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether `id` is the currently visible section
    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Whether `id` names a section in this tab set
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// All section identifiers in this tab set
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Wraps one page section and derives its visibility from the tab set
#[component]
pub fn TabSection(
    id: &'static str,
    tabs: RwSignal<TabSet>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class="tab"
            style=move || {
                if tabs.with(|set| set.is_active(id)) {
                    "display: block"
                } else {
                    "display: none"
                }
            }
        >
            {children()}
        </section>
    }
}
