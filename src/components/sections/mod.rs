//! The page sections, in document order.
//!
//! Each section is a self-contained component taking the content it
//! renders as plain props; none of them owns page-level state beyond
//! what is local to the section (project expansion, form fields).

mod about;
mod contact;
mod hero;
mod journey;
mod projects;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use journey::JourneySection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
