//! Single-page developer portfolio rendered client side.
//!
//! A fixed set of sections over an animated orb backdrop. Content is
//! compiled in and can be partially overridden by a JSON document
//! embedded in the host page; the navigation highlight follows the
//! scroll position.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

pub use components::backdrop::{OrbBackdrop, ThemeMode};
pub use components::scrollspy::Section;
pub use content::Portfolio;

use components::nav::NavBar;
use components::scrollspy::track_active_section;
use components::sections::{
	AboutSection, ContactSection, HeroSection, JourneySection, ProjectsSection, SkillsSection,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ask-portfolio: logging initialized");
}

/// Load content from a script element with id="portfolio-data".
/// Expected format: JSON matching [`Portfolio`]; fields absent from the
/// document keep the shipped content.
fn load_portfolio() -> Option<Portfolio> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<Portfolio>(&json_text) {
		Ok(data) => {
			info!(
				"ask-portfolio: loaded content ({} projects, {} skill groups)",
				data.projects.len(),
				data.skills.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("ask-portfolio: failed to parse embedded content: {}", e);
			None
		}
	}
}

/// Main application component.
/// Owns the theme and active-section state and wires the backdrop, nav,
/// sections and footer together.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let Portfolio {
		name,
		role,
		email,
		github,
		linkedin,
		skills,
		projects,
		timeline,
		profiles,
	} = load_portfolio().unwrap_or_default();

	let (theme, set_theme) = signal(ThemeMode::default());
	let (active, set_active) = signal(Section::default());
	track_active_section(set_active);

	let title = format!("{name} | Portfolio");
	let about_name = name.clone();
	let footer_brand = format!("◆ {name}");

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="portfolio" data-theme=move || theme.get().attr()>
			<OrbBackdrop theme=theme />
			<NavBar active=active theme=theme set_theme=set_theme />
			<HeroSection name=name role=role />
			<AboutSection name=about_name />
			<JourneySection timeline=timeline profiles=profiles />
			<SkillsSection groups=skills />
			<ProjectsSection projects=projects />
			<ContactSection recipient=email github=github linkedin=linkedin />

			<footer class="footer">
				<div class="footer-content">
					<span class="footer-brand">{footer_brand}</span>
					<span class="footer-copy">"© 2024 • Built with precision"</span>
				</div>
			</footer>
		</div>
	}
}
