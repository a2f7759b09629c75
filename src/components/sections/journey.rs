//! Education timeline plus competitive-programming profiles.

use leptos::prelude::*;

use crate::content::{ProfileLink, TimelineEntry};

/// Journey section: alternating timeline entries over a center line,
/// followed by a grid of external profile cards.
#[component]
pub fn JourneySection(timeline: Vec<TimelineEntry>, profiles: Vec<ProfileLink>) -> impl IntoView {
	view! {
		<section id="experience" class="experience">
			<div class="section-header">
				<span class="section-tag">"02"</span>
				<h2 class="section-title">"Journey"</h2>
			</div>

			<div class="timeline">
				<div class="timeline-line"></div>
				{timeline
					.into_iter()
					.map(|entry| {
						let org_alt = entry.organization.clone();
						view! {
							<div class="timeline-item">
								<div class="timeline-marker">
									<div class="marker-dot"></div>
								</div>
								<div class="timeline-content">
									<span class="timeline-year">{entry.year}</span>
									<h4 class="timeline-title">{entry.title}</h4>
									<div class="timeline-org">
										{entry.logo.map(|logo| view! { <img src=logo alt=org_alt /> })}
										<span>{entry.organization}</span>
									</div>
									<span class="timeline-detail">{entry.detail}</span>
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="profiles-section">
				<h3 class="profiles-title">"Competitive Programming"</h3>
				<div class="profiles-grid">
					{profiles
						.into_iter()
						.map(|profile| {
							let alt = profile.name.clone();
							view! {
								<a
									href=profile.url
									target="_blank"
									rel="noopener noreferrer"
									class="profile-card"
								>
									<img src=profile.icon alt=alt />
									<div class="profile-info">
										<span class="profile-name">{profile.name}</span>
										<span class="profile-rank">{profile.rank}</span>
									</div>
								</a>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}
