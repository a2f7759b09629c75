//! About section rendered as an editor window showing `developer.json`.

use leptos::prelude::*;

const VSCODE_ICON: &str =
	"https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vscode/vscode-original.svg";

/// About section. The whole biography is typeset as a JSON document in a
/// mock editor window, with the author's name taken from the content.
#[component]
pub fn AboutSection(name: String) -> impl IntoView {
	let name_literal = format!("\"{name}\"");

	view! {
		<section id="about" class="about">
			<div class="section-header">
				<span class="section-tag">"01"</span>
				<h2 class="section-title">"About Me"</h2>
			</div>

			<div class="vscode-window about-editor">
				<div class="vscode-titlebar">
					<div class="vscode-brand">
						<img src=VSCODE_ICON alt="VS Code" class="vscode-logo" />
					</div>
					<div class="vscode-title">
						<span class="json-icon">"{ }"</span>
						<span>"developer.json"</span>
					</div>
					<div class="vscode-actions">
						<span>"−"</span>
						<span>"□"</span>
						<span>"×"</span>
					</div>
				</div>
				<div class="vscode-body">
					<div class="vscode-sidebar">
						<div class="sidebar-icon">"📁"</div>
						<div class="sidebar-icon">"🔍"</div>
						<div class="sidebar-icon">"⚙️"</div>
					</div>
					<div class="vscode-editor">
						<div class="line-numbers">
							{(1..=24).map(|n| view! { <span>{n}</span> }).collect_view()}
						</div>
						<div class="code-content">
							<div class="code-line"><span class="json-bracket">"{"</span></div>
							<div class="code-line">
								"  "<span class="json-key">"\"name\""</span>": "
								<span class="json-string">{name_literal}</span>","
							</div>
							<div class="code-line">
								"  "<span class="json-key">"\"role\""</span>": "
								<span class="json-string">"\"Full Stack Developer\""</span>","
							</div>
							<div class="code-line">
								"  "<span class="json-key">"\"location\""</span>": "
								<span class="json-string">"\"India\""</span>","
							</div>
							<div class="code-line">
								"  "<span class="json-key">"\"status\""</span>": "
								<span class="json-string json-highlight">"\"Open to Opportunities\""</span>","
							</div>
							<div class="code-line"></div>
							<div class="code-line">
								"  "<span class="json-key">"\"focus_areas\""</span>": ["
							</div>
							<div class="code-line">
								"    "<span class="json-string">"\"Web Development\""</span>","
							</div>
							<div class="code-line">
								"    "<span class="json-string">"\"System Design\""</span>","
							</div>
							<div class="code-line">
								"    "<span class="json-string">"\"AI/ML Integration\""</span>","
							</div>
							<div class="code-line">
								"    "<span class="json-string">"\"Problem Solving\""</span>
							</div>
							<div class="code-line">"  ],"</div>
							<div class="code-line"></div>
							<div class="code-line">
								"  "<span class="json-key">"\"philosophy\""</span>": "
								<span class="json-string">"\"Clean code that solves real problems,"</span>
							</div>
							<div class="code-line">
								"    "<span class="json-string">"technical precision with creative thinking.\""</span>","
							</div>
							<div class="code-line"></div>
							<div class="code-line">
								"  "<span class="json-key">"\"interests\""</span>": "
								<span class="json-bracket">"{"</span>
							</div>
							<div class="code-line interests-line">
								<div class="interest-chip"><span>"📚"</span>" Reading"</div>
								<div class="interest-chip"><span>"💻"</span>" Coding"</div>
							</div>
							<div class="code-line">
								"  "<span class="json-bracket">"}"</span>","
							</div>
							<div class="code-line"></div>
							<div class="code-line">
								"  "<span class="json-key">"\"available\""</span>": "
								<span class="json-bool">"true"</span>
							</div>
							<div class="code-line"><span class="json-bracket">"}"</span></div>
						</div>
					</div>
				</div>
				<div class="vscode-statusbar statusbar-json">
					<div class="status-left">
						<span class="status-branch">"main"</span>
						<span>"JSON"</span>
					</div>
					<div class="status-right">
						<span>"UTF-8"</span>
						<span>"Ln 24, Col 1"</span>
					</div>
				</div>
			</div>
		</section>
	}
}
