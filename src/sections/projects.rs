//! Projects section: filter controls above the project list

use leptos::prelude::*;

use crate::components::project_list::{FilterControls, ProjectListState, ProjectListView};

/// Projects section component
///
/// The apply control re-runs the filter against the input's current value;
/// typing alone never changes visibility.
#[component]
pub fn Projects(
    projects: RwSignal<ProjectListState>,
    filter_term: RwSignal<String>,
) -> impl IntoView {
    let apply = move || {
        let term = filter_term.get_untracked();
        projects.update(|list| list.apply_filter(&term));
    };

    view! {
        <div class="projects-section">
            <h2>"Projects"</h2>
            <FilterControls filter_term=filter_term on_apply=apply />
            <ProjectListView projects=projects />
        </div>
    }
}
