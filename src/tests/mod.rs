//! Behavioral tests for the portfolio page
//!
//! This module provides BDD-style tests using given-when-then naming
//! convention. Tests focus on observable page behavior rather than
//! implementation details.


use crate::App;
use crate::components::tabs::TabSet;
use crate::error::UiError;

#[test]
fn test_module_structure() {
    // Verify that the main pieces are accessible
    let _app = App;
    let tabs = TabSet::portfolio();
    assert!(!tabs.ids().is_empty());
}

#[test]
fn test_error_types() {
    let err = UiError::UnknownTab("resume".to_string());
    assert!(err.to_string().contains("unknown tab"));
}
