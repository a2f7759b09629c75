//! Featured project cards with click-to-expand details.

use leptos::prelude::*;

use crate::content::Project;

/// Projects section. At most one card is expanded at a time; clicking a
/// card toggles it and collapses whichever other card was open.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
	let expanded: RwSignal<Option<u32>> = RwSignal::new(None);

	view! {
		<section id="projects" class="projects">
			<div class="section-header">
				<span class="section-tag">"04"</span>
				<h2 class="section-title">"Featured Work"</h2>
			</div>

			<div class="projects-grid">
				{projects
					.into_iter()
					.map(|project| {
						let Project {
							id,
							title,
							summary,
							problem,
							solution,
							tech,
							image,
							contribution,
						} = project;
						let alt = title.clone();
						view! {
							<div
								class=move || {
									if expanded.get() == Some(id) {
										"project-card expanded"
									} else {
										"project-card"
									}
								}
								on:click=move |_| {
									expanded.update(|cur| {
										*cur = if *cur == Some(id) { None } else { Some(id) };
									});
								}
							>
								<div class="project-preview">
									<img src=image alt=alt />
									<div class="project-overlay">
										<span class="expand-hint">
											{move || {
												if expanded.get() == Some(id) {
													"Click to collapse"
												} else {
													"Click to expand"
												}
											}}
										</span>
									</div>
								</div>
								<div class="project-info">
									<h3>{title}</h3>
									<p class="project-short">{summary}</p>
									<Show when=move || expanded.get() == Some(id)>
										<div class="project-details">
											<div class="detail-block">
												<span class="detail-label">"Problem"</span>
												<p>{problem.clone()}</p>
											</div>
											<div class="detail-block">
												<span class="detail-label">"Solution"</span>
												<p>{solution.clone()}</p>
											</div>
											<div class="detail-block">
												<span class="detail-label">"My Role"</span>
												<p>{contribution.clone()}</p>
											</div>
										</div>
									</Show>
									<div class="project-tech">
										{tech
											.into_iter()
											.map(|t| view! { <span class="tech-chip">{t}</span> })
											.collect_view()}
									</div>
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
