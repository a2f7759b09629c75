//! Contact section: social links and a form that drafts an email.
//!
//! There is no backend. Submitting the form composes a `mailto:` URL and
//! hands it to the browser, which opens the visitor's mail client with
//! the message prefilled. URL composition is pure and tested on the host;
//! only the submit handler touches the window.

use leptos::prelude::*;
use web_sys::SubmitEvent;

const GITHUB_ICON: &str =
	"https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg";
const LINKEDIN_ICON: &str =
	"https://cdn.jsdelivr.net/gh/devicons/devicon/icons/linkedin/linkedin-original.svg";

/// Subject line for a message from `name`. Percent-encoded by the caller
/// before it goes into the URL.
fn mail_subject(name: &str) -> String {
	format!("Portfolio Contact from {name}")
}

/// Mail body with pre-encoded CRLF line breaks, so the mail client shows
/// the fields on separate lines. The field values ride through as typed.
fn mail_body(name: &str, email: &str, message: &str) -> String {
	format!("Name: {name}%0D%0AEmail: {email}%0D%0A%0D%0AMessage:%0D%0A{message}")
}

/// Assemble the final `mailto:` URL from an already-encoded subject.
fn mailto_href(to: &str, subject: &str, body: &str) -> String {
	format!("mailto:{to}?subject={subject}&body={body}")
}

/// Contact section. `recipient` is the address mail is drafted to;
/// `github` and `linkedin` fill the social links above the form.
#[component]
pub fn ContactSection(recipient: String, github: String, linkedin: String) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let (n, e, m) = (
			name.get_untracked(),
			email.get_untracked(),
			message.get_untracked(),
		);
		if n.is_empty() || e.is_empty() || m.is_empty() {
			if let Some(window) = web_sys::window() {
				let _ = window.alert_with_message("Please fill in all fields");
			}
			return;
		}

		let subject = String::from(js_sys::encode_uri_component(&mail_subject(&n)));
		let href = mailto_href(&recipient, &subject, &mail_body(&n, &e, &m));
		if let Some(window) = web_sys::window() {
			let _ = window.location().set_href(&href);
		}

		name.set(String::new());
		email.set(String::new());
		message.set(String::new());
	};

	view! {
		<section id="contact" class="contact">
			<div class="contact-content">
				<span class="section-tag">"05"</span>
				<h2 class="contact-title">"Let's Connect"</h2>
				<p class="contact-text">"Open to opportunities and interesting conversations."</p>
				<div class="contact-links">
					<a href=github target="_blank" rel="noopener noreferrer" class="contact-link">
						<img src=GITHUB_ICON alt="GitHub" />
					</a>
					<a href=linkedin target="_blank" rel="noopener noreferrer" class="contact-link">
						<img src=LINKEDIN_ICON alt="LinkedIn" />
					</a>
				</div>
				<form class="contact-form" on:submit=on_submit>
					<div class="form-row">
						<input
							type="text"
							name="name"
							placeholder="Name"
							class="form-input"
							required=true
							prop:value=move || name.get()
							on:input=move |ev| name.set(event_target_value(&ev))
						/>
						<input
							type="email"
							name="email"
							placeholder="Email"
							class="form-input"
							required=true
							prop:value=move || email.get()
							on:input=move |ev| email.set(event_target_value(&ev))
						/>
					</div>
					<textarea
						name="message"
						placeholder="Message"
						class="form-textarea"
						required=true
						prop:value=move || message.get()
						on:input=move |ev| message.set(event_target_value(&ev))
					></textarea>
					<button type="submit" class="form-submit">"Send Message"</button>
				</form>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn subject_names_the_sender() {
		assert_eq!(mail_subject("Ada"), "Portfolio Contact from Ada");
	}

	#[test]
	fn body_separates_fields_with_crlf_breaks() {
		let body = mail_body("Ada", "ada@example.com", "Hello there");
		assert_eq!(
			body,
			"Name: Ada%0D%0AEmail: ada@example.com%0D%0A%0D%0AMessage:%0D%0AHello there"
		);
	}

	#[test]
	fn href_targets_the_recipient_with_subject_and_body() {
		let href = mailto_href(
			"dev@example.com",
			"Portfolio%20Contact%20from%20Ada",
			"Name: Ada",
		);
		assert_eq!(
			href,
			"mailto:dev@example.com?subject=Portfolio%20Contact%20from%20Ada&body=Name: Ada"
		);
	}

	#[test]
	fn body_passes_field_values_through_unencoded() {
		// only the line breaks are pre-encoded, field values are not
		let body = mail_body("A B", "a@b.c", "line one\nline two");
		assert!(body.contains("Name: A B%0D%0A"));
		assert!(body.contains("line one\nline two"));
	}
}
