//! Landing section: role label, name, tagline and a terminal mock.

use leptos::prelude::*;

const VSCODE_ICON: &str =
	"https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vscode/vscode-original.svg";

/// Hero section. The terminal mock replays a short shell session that
/// introduces the author by name.
#[component]
pub fn HeroSection(name: String, role: String) -> impl IntoView {
	let whoami = name.clone();

	view! {
		<section id="home" class="hero">
			<div class="hero-grid">
				<div class="hero-left">
					<div class="hero-label">{role}</div>
					<h1 class="hero-name">
						<span class="name-line">{name}</span>
					</h1>
					<p class="hero-tagline">
						"Building scalable applications at the intersection of"
						<span class="highlight">" modern web"</span>
						" and"
						<span class="highlight">" intelligent systems"</span>
					</p>
					<div class="hero-actions">
						<a href="#projects" class="btn-primary">"View Work"</a>
						<a href="#contact" class="btn-secondary">"Get in Touch"</a>
					</div>
				</div>
				<div class="hero-right">
					<div class="hero-terminal">
						<div class="terminal-header">
							<img src=VSCODE_ICON alt="VS Code" class="terminal-logo" />
							<span class="terminal-title">"Terminal"</span>
							<div class="terminal-actions">
								<span>"−"</span>
								<span>"×"</span>
							</div>
						</div>
						<div class="terminal-body">
							<div class="terminal-line">
								<span class="terminal-prompt">"~"</span>
								<span class="terminal-command">"whoami"</span>
							</div>
							<div class="terminal-output">{whoami}</div>
							<div class="terminal-line">
								<span class="terminal-prompt">"~"</span>
								<span class="terminal-command">"cat skills.txt"</span>
							</div>
							<div class="terminal-output">"Full Stack Developer | Problem Solver"</div>
							<div class="terminal-line">
								<span class="terminal-prompt">"~"</span>
								<span class="terminal-command">"echo $STATUS"</span>
							</div>
							<div class="terminal-output highlight">"Open to opportunities ✓"</div>
							<div class="terminal-line">
								<span class="terminal-prompt">"~"</span>
								<span class="terminal-cursor">"|"</span>
							</div>
						</div>
					</div>
				</div>
			</div>
			<div class="scroll-indicator">
				<span>"Scroll to explore"</span>
				<div class="scroll-line"></div>
			</div>
		</section>
	}
}
