//! Portfolio content: the data the page sections render.
//!
//! Plain data with serde support so the shipped content can be replaced
//! or partially overridden by an embedded JSON document without touching
//! the components. `Default` is the content the site ships with.

use serde::Deserialize;

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// A single technology with its icon.
#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
	pub name: String,
	/// Absolute URL of the icon image.
	pub icon: String,
}

fn devicon(name: &str, path: &str) -> Skill {
	Skill {
		name: name.into(),
		icon: format!("{DEVICON}/{path}.svg"),
	}
}

/// A group of skills rendered as one attribute of the editor mock.
#[derive(Clone, Debug, Deserialize)]
pub struct SkillGroup {
	/// Attribute name shown in the mock source listing.
	pub binding: String,
	/// Comment line above the attribute.
	pub heading: String,
	pub items: Vec<Skill>,
}

/// A featured project card.
#[derive(Clone, Debug, Deserialize)]
pub struct Project {
	/// Stable id used to track which card is expanded.
	pub id: u32,
	pub title: String,
	/// One-line description shown while the card is collapsed.
	pub summary: String,
	pub problem: String,
	pub solution: String,
	pub tech: Vec<String>,
	/// Preview image URL or site-relative path.
	pub image: String,
	/// What the author actually did on the project.
	pub contribution: String,
}

/// One stop on the education timeline.
#[derive(Clone, Debug, Deserialize)]
pub struct TimelineEntry {
	pub year: String,
	pub title: String,
	pub organization: String,
	/// Organization logo; entries without one render text only.
	pub logo: Option<String>,
	pub detail: String,
}

/// An external competitive-programming profile.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileLink {
	pub name: String,
	pub rank: String,
	pub url: String,
	pub icon: String,
}

/// Everything the page renders. Missing fields in an override document
/// fall back to the shipped content field by field.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Portfolio {
	/// Name shown in the hero, terminal mock and footer.
	pub name: String,
	/// Role line above the name.
	pub role: String,
	/// Address the contact form composes mail to.
	pub email: String,
	pub github: String,
	pub linkedin: String,
	pub skills: Vec<SkillGroup>,
	pub projects: Vec<Project>,
	pub timeline: Vec<TimelineEntry>,
	pub profiles: Vec<ProfileLink>,
}

impl Default for Portfolio {
	fn default() -> Self {
		Portfolio {
			name: "Adithyaa S Kumar".into(),
			role: "Software Engineer".into(),
			email: "adithya23bcs55@iiitkottayam.ac.in".into(),
			github: "https://github.com/AAYHTIDA".into(),
			linkedin: "https://www.linkedin.com/in/adithyaa-s-kumar-28437b2a7".into(),
			skills: vec![
				SkillGroup {
					binding: "languages".into(),
					heading: "Programming Languages".into(),
					items: vec![
						devicon("JavaScript", "javascript/javascript-original"),
						devicon("Python", "python/python-original"),
						devicon("Java", "java/java-original"),
						devicon("C++", "cplusplus/cplusplus-original"),
						devicon("C", "c/c-original"),
						devicon("HTML", "html5/html5-original"),
						devicon("CSS", "css3/css3-original"),
					],
				},
				SkillGroup {
					binding: "frameworks".into(),
					heading: "Frameworks & Libraries".into(),
					items: vec![
						devicon("React", "react/react-original"),
						devicon("Node.js", "nodejs/nodejs-original"),
						devicon("Express", "express/express-original"),
						devicon("Tailwind", "tailwindcss/tailwindcss-original"),
						devicon("Bootstrap", "bootstrap/bootstrap-original"),
					],
				},
				SkillGroup {
					binding: "databases".into(),
					heading: "Databases".into(),
					items: vec![
						devicon("MySQL", "mysql/mysql-original"),
						devicon("Firebase", "firebase/firebase-plain"),
					],
				},
				SkillGroup {
					binding: "infrastructure".into(),
					heading: "Cloud & DevOps Tools".into(),
					items: vec![
						devicon("Google Cloud", "googlecloud/googlecloud-original"),
						devicon("Netlify", "netlify/netlify-original"),
						devicon("Git", "git/git-original"),
						devicon("GitHub", "github/github-original"),
						devicon("VS Code", "vscode/vscode-original"),
					],
				},
			],
			projects: vec![
				Project {
					id: 1,
					title: "Employee Tracking App".into(),
					summary: "Real-time workforce monitoring for shop owners".into(),
					problem: "Shop owners struggle to monitor distributed workforce efficiently"
						.into(),
					solution: "Built a comprehensive tracking system with real-time location, \
					           attendance management, and analytics"
						.into(),
					tech: vec!["React".into(), "Google Maps API".into(), "Firebase".into()],
					image: "/employee-tracker.png".into(),
					contribution: "Full-stack development, API integration, real-time data sync"
						.into(),
				},
				Project {
					id: 2,
					title: "AI Subtitle Generator".into(),
					summary: "Multilingual subtitle generation platform".into(),
					problem: "Films lack accessible, culturally-aware subtitles across languages"
						.into(),
					solution: "AI-powered platform generating context-aware subtitles in 50+ \
					           languages"
						.into(),
					tech: vec![
						"React".into(),
						"Python".into(),
						"Assembly AI".into(),
						"Sarvam AI".into(),
					],
					image: "https://images.unsplash.com/photo-1485846234645-a62644f84728?w=400&h=200&fit=crop"
						.into(),
					contribution: "Frontend architecture, AI integration, UX design".into(),
				},
				Project {
					id: 3,
					title: "Narrative Consistency Checker".into(),
					summary: "AI-powered web application that evaluates character backstory \
					          consistency"
						.into(),
					problem: "Writers and content creators struggle to maintain narrative \
					          consistency across complex storylines and character development"
						.into(),
					solution: "Built an intelligent fact extraction system using LLMs with \
					           distributed data processing to analyze 100+ novel chunks and \
					           evaluate multiple backstories simultaneously with semantic \
					           timeline analysis"
						.into(),
					tech: vec![
						"Python".into(),
						"React".into(),
						"Vite".into(),
						"Pathway".into(),
						"LLM".into(),
						"Tiktoken".into(),
					],
					image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=200&fit=crop"
						.into(),
					contribution: "Distributed pipeline architecture, LLM integration, \
					               concurrent processing optimization"
						.into(),
				},
			],
			timeline: vec![
				TimelineEntry {
					year: "2023 - Present".into(),
					title: "B.Tech in Computer Science".into(),
					organization: "Indian Institute of Information Technology, Kottayam".into(),
					logo: Some("/iiitk-logo.png".into()),
					detail: "CGPA: 8.06".into(),
				},
				TimelineEntry {
					year: "2020 - 2022".into(),
					title: "Grade XII".into(),
					organization: "Silver Hills Higher Secondary School".into(),
					logo: Some("/silver.png".into()),
					detail: "Score: 98%".into(),
				},
				TimelineEntry {
					year: "2020".into(),
					title: "Grade X".into(),
					organization: "Providence Girls Higher Secondary School".into(),
					logo: None,
					detail: "Score: 99%".into(),
				},
			],
			profiles: vec![
				ProfileLink {
					name: "Codeforces".into(),
					rank: "Pupil • Max 788".into(),
					url: "https://codeforces.com/profile/Adithyaaaaaa".into(),
					icon: "https://cdn.iconscout.com/icon/free/png-256/free-code-forces-3521352-2944796.png"
						.into(),
				},
				ProfileLink {
					name: "LeetCode".into(),
					rank: "Problem Solver".into(),
					url: "https://leetcode.com/u/Adithyaaaaaa/".into(),
					icon: "https://cdn.iconscout.com/icon/free/png-256/free-leetcode-3521542-2944960.png"
						.into(),
				},
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shipped_content_covers_every_section() {
		let portfolio = Portfolio::default();
		assert!(!portfolio.name.is_empty());
		assert!(!portfolio.role.is_empty());
		assert!(portfolio.email.contains('@'));
		assert_eq!(portfolio.skills.len(), 4);
		assert_eq!(portfolio.projects.len(), 3);
		assert_eq!(portfolio.timeline.len(), 3);
		assert_eq!(portfolio.profiles.len(), 2);
	}

	#[test]
	fn skill_groups_keep_their_bindings_in_order() {
		let portfolio = Portfolio::default();
		let bindings: Vec<_> = portfolio.skills.iter().map(|g| g.binding.as_str()).collect();
		assert_eq!(
			bindings,
			["languages", "frameworks", "databases", "infrastructure"]
		);
		for group in &portfolio.skills {
			assert!(!group.items.is_empty());
			for skill in &group.items {
				assert!(skill.icon.starts_with("https://"), "{}", skill.name);
			}
		}
	}

	#[test]
	fn project_ids_are_unique() {
		let portfolio = Portfolio::default();
		let mut ids: Vec<_> = portfolio.projects.iter().map(|p| p.id).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), portfolio.projects.len());
	}

	#[test]
	fn override_document_replaces_only_named_fields() {
		let portfolio: Portfolio =
			serde_json::from_str(r#"{ "name": "Someone Else", "projects": [] }"#)
				.expect("valid override");
		assert_eq!(portfolio.name, "Someone Else");
		assert!(portfolio.projects.is_empty());
		// untouched fields keep the shipped content
		assert_eq!(portfolio.email, Portfolio::default().email);
		assert_eq!(portfolio.skills.len(), 4);
	}

	#[test]
	fn full_document_round_trips_nested_types() {
		let json = r#"{
			"timeline": [
				{
					"year": "2019",
					"title": "Example",
					"organization": "Somewhere",
					"logo": null,
					"detail": "n/a"
				}
			]
		}"#;
		let portfolio: Portfolio = serde_json::from_str(json).expect("valid document");
		assert_eq!(portfolio.timeline.len(), 1);
		assert_eq!(portfolio.timeline[0].logo, None);
	}
}
