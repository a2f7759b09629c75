//! Fixed top navigation: brand, section links and the theme toggle.

use leptos::prelude::*;

use super::backdrop::ThemeMode;
use super::scrollspy::Section;

/// Navigation bar. The link matching `active` gets the `active` class;
/// the toggle button flips the theme and shows the glyph for the mode it
/// would switch to.
#[component]
pub fn NavBar(
	active: ReadSignal<Section>,
	theme: ReadSignal<ThemeMode>,
	set_theme: WriteSignal<ThemeMode>,
) -> impl IntoView {
	view! {
		<nav class="nav">
			<div class="nav-brand">
				<span class="brand-symbol">"◆"</span>
				<span class="brand-text">"AS"</span>
			</div>
			<ul class="nav-links">
				{Section::ALL
					.iter()
					.map(|&section| {
						view! {
							<li>
								<a
									href=format!("#{}", section.id())
									class=move || {
										if active.get() == section { "active" } else { "" }
									}
								>
									{section.label()}
								</a>
							</li>
						}
					})
					.collect_view()}
			</ul>
			<button
				class="theme-toggle"
				aria-label="Toggle theme"
				on:click=move |_| set_theme.set(theme.get_untracked().toggled())
			>
				{move || theme.get().toggle_glyph()}
			</button>
		</nav>
	}
}
