//! Project list state, filter controls, and list view
//!
//! Loading fully replaces the rendered entries from a dataset snapshot.
//! Filtering only toggles per-entry visibility against the rendered labels;
//! it never removes or reorders entries. The filter runs on demand (after a
//! load, or from the apply control), not on every keystroke.

use leptos::prelude::*;

use crate::models::project::Project;

/// DOM id of the filter text input
pub const FILTER_INPUT_ID: &str = "filter";

/// A rendered project list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    label: String,
    visible: bool,
}

impl ProjectEntry {
    fn from_project(project: &Project) -> Self {
        Self {
            label: project.label(),
            visible: true,
        }
    }

    /// The entry's display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the entry is currently shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Case-insensitive substring match against the label; empty terms match
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.label.to_lowercase().contains(&term.to_lowercase())
    }
}

/// The rendered contents of the project list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListState {
    entries: Vec<ProjectEntry>,
}

impl ProjectListState {
    /// Creates an empty list (nothing rendered until the first load)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all entries with one visible entry per project, in dataset order
    pub fn load(&mut self, dataset: &[Project]) {
        self.entries = dataset.iter().map(ProjectEntry::from_project).collect();
    }

    /// Toggles each entry's visibility against `term`
    pub fn apply_filter(&mut self, term: &str) {
        for entry in &mut self.entries {
            entry.visible = entry.matches(term);
        }
    }

    /// All rendered entries, in load order
    pub fn entries(&self) -> &[ProjectEntry] {
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

    /// Number of entries currently shown
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.visible).count()
    }
}

/// Filter input plus the apply control
///
/// The input's live value is tracked in `filter_term` so an apply always
/// reads the current text, but filtering itself only runs when `on_apply`
/// fires.
#[component]
pub fn FilterControls(
    filter_term: RwSignal<String>,
    on_apply: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="filter-controls">
            <label for=FILTER_INPUT_ID>"Filter: "</label>
            <input
                id=FILTER_INPUT_ID
                type="text"
                placeholder="Filter projects..."
                on:input=move |ev| filter_term.set(event_target_value(&ev))
                prop:value=move || filter_term.get()
            />
            <button class="apply-filter-btn" on:click=move |_| on_apply()>
                "Apply"
            </button>
        </div>
    }
}

/// Project list view with a visible-count readout
#[component]
pub fn ProjectListView(projects: RwSignal<ProjectListState>) -> impl IntoView {
    view! {
        <div class="project-list">
            <div class="project-count">
                {move || {
                    projects.with(|list| format!("{} of {} shown", list.visible_count(), list.len()))
                }}
            </div>
            <ul class="project-items" id="projectList">
                {move || {
                    projects.with(|list| {
                        list.entries()
                            .iter()
                            .cloned()
                            .map(|entry| view! { <ProjectItemView entry=entry /> })
                            .collect::<Vec<_>>()
                    })
                }}
            </ul>
        </div>
    }
}

/// Individual project entry: a link-shaped label with no navigation target
#[component]
pub fn ProjectItemView(entry: ProjectEntry) -> impl IntoView {
    let display = if entry.is_visible() {
        "display: list-item"
    } else {
        "display: none"
    };

    view! {
        <li class="project-item" style=display>
            <a>{entry.label().to_string()}</a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_projects() -> Vec<Project> {
        vec![
            Project::new("Project 1", "Java"),
            Project::new("Project 2", "C#"),
            Project::new("Project 3", "Node.js"),
        ]
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = ProjectListState::new();
        assert!(list.is_empty());
        assert_eq!(list.visible_count(), 0);
    }

    #[test]
    fn test_load_renders_dataset_in_order() {
        let mut list = ProjectListState::new();
        list.load(&sample_projects());

        let labels: Vec<&str> = list.entries().iter().map(ProjectEntry::label).collect();
        assert_eq!(
            labels,
            vec!["Project 1 (Java)", "Project 2 (C#)", "Project 3 (Node.js)"]
        );
        assert_eq!(list.visible_count(), 3, "Loaded entries start visible");
    }

    #[test]
    fn test_reload_discards_previous_entries() {
        let mut list = ProjectListState::new();
        list.load(&sample_projects());
        list.load(&sample_projects());
        assert_eq!(list.len(), 3, "Reload must not duplicate entries");

        list.load(&[Project::new("Project 9", "Rust")]);
        assert_eq!(list.len(), 1, "Reload must not keep stale entries");
    }

    #[test]
    fn test_filter_hides_non_matching_entries() {
        let mut list = ProjectListState::new();
        list.load(&sample_projects());
        list.apply_filter("java");

        let visible: Vec<&str> = list
            .entries()
            .iter()
            .filter(|entry| entry.is_visible())
            .map(ProjectEntry::label)
            .collect();
        assert_eq!(visible, vec!["Project 1 (Java)"]);
        assert_eq!(list.len(), 3, "Filtering must not remove entries");
    }

    #[test]
    fn test_empty_filter_shows_all_entries() {
        let mut list = ProjectListState::new();
        list.load(&sample_projects());
        list.apply_filter("java");
        list.apply_filter("");
        assert_eq!(list.visible_count(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut list = ProjectListState::new();
        list.load(&sample_projects());

        list.apply_filter("JAVA");
        let upper: Vec<bool> = list.entries().iter().map(ProjectEntry::is_visible).collect();

        list.apply_filter("java");
        let lower: Vec<bool> = list.entries().iter().map(ProjectEntry::is_visible).collect();

        assert_eq!(upper, lower);
    }

    #[test]
    fn test_entry_matches_empty_term() {
        let mut list = ProjectListState::new();
        list.load(&sample_projects());
        let all_match = list.entries().iter().all(|entry| entry.matches(""));
        assert!(all_match, "Empty terms match every entry");
    }

    #[test]
    fn test_components_compile() {
        let _ = FilterControls::<fn()>;
        let _ = ProjectListView;
        let _ = ProjectItemView;
    }
}
