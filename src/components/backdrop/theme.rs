//! Theme flag and color handling for the orb backdrop.
//!
//! The page has exactly two palettes. The mode is owned by the app shell,
//! threaded into the painter as a plain parameter, and mirrored onto the
//! document as a `data-theme` attribute for the stylesheet.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque color from components.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same hue at a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string: hex for opaque colors, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The single base hue shared by every orb.
pub const ORB_HUE: Color = Color::rgb(127, 90, 240);

/// Page-wide light/dark flag.
///
/// Dark is the default on first load; the nav toggle flips it. Nothing is
/// persisted between sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	#[default]
	Dark,
	Light,
}

impl ThemeMode {
	/// The opposite mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Dark => ThemeMode::Light,
			ThemeMode::Light => ThemeMode::Dark,
		}
	}

	/// Value for the root `data-theme` attribute.
	pub fn attr(self) -> &'static str {
		match self {
			ThemeMode::Dark => "dark",
			ThemeMode::Light => "light",
		}
	}

	/// Glyph for the toggle button; it advertises the mode a click
	/// switches to, so dark mode shows the sun.
	pub fn toggle_glyph(self) -> &'static str {
		match self {
			ThemeMode::Dark => "☀️",
			ThemeMode::Light => "🌙",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_round_trips() {
		assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
		assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
		assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
	}

	#[test]
	fn default_mode_is_dark() {
		assert_eq!(ThemeMode::default(), ThemeMode::Dark);
		assert_eq!(ThemeMode::default().attr(), "dark");
	}

	#[test]
	fn css_formatting() {
		assert_eq!(ORB_HUE.to_css(), "#7f5af0");
		assert_eq!(
			ORB_HUE.with_alpha(0.25).to_css(),
			"rgba(127, 90, 240, 0.25)"
		);
		assert_eq!(ORB_HUE.with_alpha(0.0).to_css(), "rgba(127, 90, 240, 0)");
	}
}
