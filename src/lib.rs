//! Leptos 0.7 CSR portfolio page
//!
//! This crate renders a tabbed portfolio page: an about section, a
//! filterable project list, and a certifications list, compiled to WASM and
//! mounted client-side with Leptos 0.7.
//!
//! ## Behavior
//! - Exactly one tab section is visible at a time; unknown tab names are
//!   logged and ignored instead of crashing the page
//! - List contents are loaded from injected datasets when their owning tab
//!   is activated; every load fully replaces the previous items
//! - The project filter toggles per-item visibility on demand
//!   (case-insensitive substring match), never removing or reordering items
//!
//! ## Module Structure
//! - `app`: Main application component and trigger wiring
//! - `components`: Tab set, project list, and certification list
//! - `sections`: Top-level section components for each tab
//! - `models`: Display records and built-in page content
//! - `dom`: Panic-free by-id DOM accessors
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod dom;
pub mod error;
pub mod models;
pub mod sections;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

#[cfg(test)]
mod tests;
