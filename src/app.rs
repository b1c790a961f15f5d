//! Main application component
//!
//! The root component owns every signal and wires all trigger handlers in
//! one place, so initialization happens exactly once and is visible at a
//! glance. Activating the projects tab reloads the project list and
//! re-applies the current filter term; activating the certifications tab
//! reloads the certifications list.

use leptos::prelude::*;

use crate::components::certification_list::CertificationListState;
use crate::components::project_list::{self, ProjectListState};
use crate::components::tabs::{TabSection, TabSet, section};
use crate::dom;
use crate::models::data::{default_certifications, default_projects};
use crate::sections::{About, Certifications, Projects};

/// Root component for the portfolio page
#[component]
pub fn App() -> impl IntoView {
    let tabs = RwSignal::new(TabSet::portfolio());
    let projects = RwSignal::new(ProjectListState::new());
    let certifications = RwSignal::new(CertificationListState::new());
    let filter_term = RwSignal::new(String::new());

    let open_about = move |_| switch_to(tabs, section::ABOUT);

    let open_projects = move |_| {
        switch_to(tabs, section::PROJECTS);
        let term = filter_term.get_untracked();
        projects.update(|list| {
            list.load(&default_projects());
            // Restores "all visible" when the filter box is empty.
            list.apply_filter(&term);
        });
        dom::focus_input(project_list::FILTER_INPUT_ID);
    };

    let open_certifications = move |_| {
        switch_to(tabs, section::CERTIFICATIONS);
        certifications.update(|list| list.load(&default_certifications()));
    };

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Portfolio"</h1>
                <nav class="app-nav">
                    <button class="tab-trigger" on:click=open_about>"About"</button>
                    <button class="tab-trigger" on:click=open_projects>"Projects"</button>
                    <button class="tab-trigger" on:click=open_certifications>
                        "Certifications"
                    </button>
                </nav>
            </header>
            <main class="app-main">
                <TabSection id=section::ABOUT tabs=tabs>
                    <About />
                </TabSection>
                <TabSection id=section::PROJECTS tabs=tabs>
                    <Projects projects=projects filter_term=filter_term />
                </TabSection>
                <TabSection id=section::CERTIFICATIONS tabs=tabs>
                    <Certifications certifications=certifications />
                </TabSection>
            </main>
            <footer class="app-footer">
                <p>{move || format!("Viewing: {}", tabs.with(|set| set.active().to_string()))}</p>
            </footer>
        </div>
    }
}

/// Switches the visible section, reporting and ignoring unknown names
fn switch_to(tabs: RwSignal<TabSet>, name: &str) {
    tabs.update(|set| {
        if let Err(err) = set.show(name) {
            web_sys::console::warn_1(&format!("tab switch ignored: {err}").into());
        }
    });
}
