//! Leptos components making up the page.

pub mod backdrop;
pub mod nav;
pub mod scrollspy;
pub mod sections;
