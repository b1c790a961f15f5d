//! About section, the default-visible tab

use leptos::prelude::*;

/// About section component
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="about-section">
            <h2>"About"</h2>
            <p>"Welcome to my portfolio."</p>
            <p>
                "Use the tabs above to browse my projects and certifications. "
                "The project list can be narrowed with the technology filter."
            </p>
        </div>
    }
}
