//! Certifications section

use leptos::prelude::*;

use crate::components::certification_list::{CertificationListState, CertificationListView};

/// Certifications section component
#[component]
pub fn Certifications(certifications: RwSignal<CertificationListState>) -> impl IntoView {
    view! {
        <div class="certifications-section">
            <h2>"Certifications"</h2>
            <CertificationListView certifications=certifications />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certifications_component_exists() {
        let _component = Certifications;
    }
}
