//! Tech stack rendered as a Python source listing in an editor window.

use leptos::prelude::*;

use crate::content::SkillGroup;

const VSCODE_ICON: &str =
	"https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vscode/vscode-original.svg";
const PYTHON_ICON: &str =
	"https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg";

/// Skills section. Each group becomes one class attribute of a mock
/// `tech_stack.py`, its items drawn as icon chips inside the listing.
#[component]
pub fn SkillsSection(groups: Vec<SkillGroup>) -> impl IntoView {
	view! {
		<section id="skills" class="skills">
			<div class="section-header">
				<span class="section-tag">"03"</span>
				<h2 class="section-title">"Tech Stack"</h2>
			</div>

			<div class="vscode-window">
				<div class="vscode-titlebar">
					<div class="vscode-brand">
						<img src=VSCODE_ICON alt="VS Code" class="vscode-logo" />
					</div>
					<div class="vscode-title">
						<img src=PYTHON_ICON alt="Python" />
						<span>"tech_stack.py"</span>
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
							{(1..=32).map(|n| view! { <span>{n}</span> }).collect_view()}
						</div>
						<div class="code-content">
							<div class="code-line">
								<span class="py-comment">"# -*- coding: utf-8 -*-"</span>
							</div>
							<div class="code-line">
								<span class="py-comment">"\"\"\"Technical Skills & Proficiencies\"\"\""</span>
							</div>
							<div class="code-line"></div>
							<div class="code-line">
								<span class="py-keyword">"class"</span>" "
								<span class="py-class">"TechStack"</span>":"
							</div>
							{groups
								.into_iter()
								.map(|group| {
									view! {
										<div class="code-line"></div>
										<div class="code-line">
											"    "<span class="py-comment">{format!("# {}", group.heading)}</span>
										</div>
										<div class="code-line">
											"    "<span class="py-property">{group.binding}</span>" = ["
										</div>
										<div class="code-line skill-icons-line">
											{group
												.items
												.into_iter()
												.map(|skill| {
													let title = skill.name.clone();
													let alt = skill.name.clone();
													view! {
														<div class="skill-icon-item" title=title>
															<img src=skill.icon alt=alt />
															<span>{skill.name}</span>
														</div>
													}
												})
												.collect_view()}
										</div>
										<div class="code-line">"    ]"</div>
									}
								})
								.collect_view()}
						</div>
					</div>
				</div>
				<div class="vscode-statusbar">
					<div class="status-left">
						<span class="status-branch">"main"</span>
						<span>"Python"</span>
					</div>
					<div class="status-right">
						<span>"UTF-8"</span>
						<span>"Ln 32, Col 1"</span>
					</div>
				</div>
			</div>
		</section>
	}
}
