//! Certification list state and view
//!
//! Same replacement-on-load semantics as the project list, but entries are
//! plain text labels and the list is never filtered.

use leptos::prelude::*;

use crate::models::certification::Certification;

/// The rendered contents of the certifications list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationListState {
    entries: Vec<String>,
}

impl CertificationListState {
    /// Creates an empty list (nothing rendered until the first load)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all entries with one label per certification, in dataset order
    pub fn load(&mut self, dataset: &[Certification]) {
        self.entries = dataset.iter().map(Certification::label).collect();
    }

    /// All rendered labels, in load order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of rendered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Certifications list view
#[component]
pub fn CertificationListView(certifications: RwSignal<CertificationListState>) -> impl IntoView {
    view! {
        <ul class="certification-items" id="certificationsList">
            {move || {
                certifications.with(|list| {
                    list.entries()
                        .iter()
                        .map(|label| view! { <li class="certification-item">{label.clone()}</li> })
                        .collect::<Vec<_>>()
                })
            }}
        </ul>
    }
}
