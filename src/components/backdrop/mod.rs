//! Ambient orb backdrop.
//!
//! A fixed full-viewport canvas behind the page content, filled with a
//! small set of large, slow, translucent orbs:
//! - the field simulation is pure and host-testable,
//! - gradient ramps are pure functions of opacity and theme,
//! - the Leptos component wires up the frame loop, resize handling and
//!   teardown.

mod component;
mod field;
mod paint;
pub mod theme;

pub use component::OrbBackdrop;
pub use field::{ORB_COUNT, Orb, OrbField};
pub use paint::{GradientStop, orb_gradient};
pub use theme::ThemeMode;
