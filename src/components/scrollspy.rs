//! Scroll-position tracking for navigation highlighting.
//!
//! Maps the window scroll offset to the page section currently under a
//! fixed probe line. Resolution is a pure function over measured section
//! spans so it can be tested on the host; only the listener wiring and
//! the `offsetTop`/`offsetHeight` probing touch the DOM.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

/// Offset added to the scroll position before matching, so a section
/// lights up while its heading approaches the top of the viewport rather
/// than only once it reaches it.
pub const PROBE_OFFSET: f64 = 200.0;

/// The page sections, in document order. Exactly one is active at a time;
/// `Home` is active before the first scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
	#[default]
	Home,
	About,
	Experience,
	Skills,
	Projects,
	Contact,
}

impl Section {
	/// Every section in declared (document) order.
	pub const ALL: [Section; 6] = [
		Section::Home,
		Section::About,
		Section::Experience,
		Section::Skills,
		Section::Projects,
		Section::Contact,
	];

	/// DOM id of the section element; doubles as the nav anchor fragment.
	pub fn id(self) -> &'static str {
		match self {
			Section::Home => "home",
			Section::About => "about",
			Section::Experience => "experience",
			Section::Skills => "skills",
			Section::Projects => "projects",
			Section::Contact => "contact",
		}
	}

	/// Link text shown in the nav bar.
	pub fn label(self) -> &'static str {
		match self {
			Section::Home => "Home",
			Section::About => "About",
			Section::Experience => "Experience",
			Section::Skills => "Skills",
			Section::Projects => "Projects",
			Section::Contact => "Contact",
		}
	}
}

/// A section's vertical extent within the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
	/// Distance from the document top to the section's top edge.
	pub top: f64,
	/// Rendered height of the section.
	pub height: f64,
}

impl SectionSpan {
	fn contains(self, y: f64) -> bool {
		y >= self.top && y < self.top + self.height
	}
}

/// First section, in declared order, whose span contains the probe point.
///
/// Sections without geometry are skipped. `None` means the probe sits
/// outside every section (above the first, past the last); the caller
/// keeps whatever was active before.
pub fn resolve_active(scroll_y: f64, spans: &[(Section, Option<SectionSpan>)]) -> Option<Section> {
	let probe = scroll_y + PROBE_OFFSET;
	spans
		.iter()
		.find_map(|&(section, span)| span.filter(|s| s.contains(probe)).map(|_| section))
}

/// Measure every section's span from the live document. Sections whose
/// element is absent yield `None` and are skipped by resolution.
fn measure(document: &Document) -> Vec<(Section, Option<SectionSpan>)> {
	Section::ALL
		.into_iter()
		.map(|section| {
			let span = document
				.get_element_by_id(section.id())
				.and_then(|el| el.dyn_into::<HtmlElement>().ok())
				.map(|el| SectionSpan {
					top: el.offset_top() as f64,
					height: el.offset_height() as f64,
				});
			(section, span)
		})
		.collect()
}

/// Install the window `scroll` listener that publishes the active section.
///
/// Cleanup is registered with the current reactive owner: when the owner
/// is disposed the listener is removed and the closure dropped.
pub fn track_active_section(set_active: WriteSignal<Section>) {
	let Some(window) = web_sys::window() else {
		return;
	};

	let handler: Closure<dyn FnMut()> = Closure::new(move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};
		let scroll_y = window.scroll_y().unwrap_or_default();
		if let Some(section) = resolve_active(scroll_y, &measure(&document)) {
			set_active.set(section);
		}
	});
	let _ = window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());

	// The closure itself is not Send, so the cleanup closure holds an arena
	// handle to it rather than the closure.
	let listener: StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage> =
		StoredValue::new_local(Some(handler));
	on_cleanup(move || {
		let _ = listener.try_update_value(|slot| {
			if let (Some(handler), Some(window)) = (slot.take(), web_sys::window()) {
				let _ = window
					.remove_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
			}
		});
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	fn span(top: f64, height: f64) -> Option<SectionSpan> {
		Some(SectionSpan { top, height })
	}

	fn page() -> Vec<(Section, Option<SectionSpan>)> {
		vec![
			(Section::Home, span(0.0, 500.0)),
			(Section::About, span(500.0, 400.0)),
			(Section::Experience, span(900.0, 300.0)),
			(Section::Skills, None),
			(Section::Projects, None),
			(Section::Contact, None),
		]
	}

	#[test]
	fn inventory_is_ordered_and_stable() {
		assert_eq!(Section::ALL.len(), 6);
		assert_eq!(Section::default(), Section::Home);

		let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
		assert_eq!(
			ids,
			["home", "about", "experience", "skills", "projects", "contact"]
		);
		for section in Section::ALL {
			assert!(!section.label().is_empty());
		}
	}

	#[test]
	fn probe_lands_in_the_containing_section() {
		// scroll 350 -> probe 550, inside about's [500, 900)
		assert_eq!(resolve_active(350.0, &page()), Some(Section::About));
		// probe 200 -> home
		assert_eq!(resolve_active(0.0, &page()), Some(Section::Home));
		// probe 1000 -> experience
		assert_eq!(resolve_active(800.0, &page()), Some(Section::Experience));
	}

	#[test]
	fn probe_outside_every_section_resolves_to_none() {
		// scroll -300 -> probe -100, above the first section
		assert_eq!(resolve_active(-300.0, &page()), None);
		// probe far past the last measured section
		assert_eq!(resolve_active(5000.0, &page()), None);
	}

	#[test]
	fn section_ranges_are_half_open() {
		// scroll 300 -> probe 500: home's range ends at 500, about begins
		assert_eq!(resolve_active(300.0, &page()), Some(Section::About));
	}

	#[test]
	fn first_declared_section_wins_on_overlap() {
		let overlapping = vec![
			(Section::Home, span(0.0, 800.0)),
			(Section::About, span(400.0, 400.0)),
		];
		// probe 600 is inside both
		assert_eq!(resolve_active(400.0, &overlapping), Some(Section::Home));
	}

	#[test]
	fn sections_without_geometry_are_skipped() {
		let partial = vec![
			(Section::Home, None),
			(Section::About, span(0.0, 10_000.0)),
		];
		assert_eq!(resolve_active(0.0, &partial), Some(Section::About));
	}
}
