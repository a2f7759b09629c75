//! Canvas painting for the orb backdrop.
//!
//! The gradient ramp is computed by a pure function so it can be asserted
//! in host tests; only [`paint`] touches the drawing surface.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::OrbField;
use super::theme::{ORB_HUE, ThemeMode};

/// One stop of the radial gradient an orb is filled with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
	pub offset: f64,
	pub alpha: f64,
}

/// Gradient ramp for one orb.
///
/// Alphas are a pure function of `(opacity, mode)`: the light palette
/// doubles the core alpha so the orbs stay visible on a pale page, the
/// dark palette uses the base opacity directly. Both fade to nothing at
/// the rim.
pub fn orb_gradient(opacity: f64, mode: ThemeMode) -> [GradientStop; 3] {
	match mode {
		ThemeMode::Light => [
			GradientStop {
				offset: 0.0,
				alpha: opacity * 2.0,
			},
			GradientStop {
				offset: 0.4,
				alpha: opacity * 1.2,
			},
			GradientStop {
				offset: 1.0,
				alpha: 0.0,
			},
		],
		ThemeMode::Dark => [
			GradientStop {
				offset: 0.0,
				alpha: opacity,
			},
			GradientStop {
				offset: 0.4,
				alpha: opacity * 0.5,
			},
			GradientStop {
				offset: 1.0,
				alpha: 0.0,
			},
		],
	}
}

/// Clear the whole surface, then draw every orb in field order.
///
/// Later orbs paint over earlier ones; there is no z-order beyond the
/// field's insertion order.
pub fn paint(ctx: &CanvasRenderingContext2d, field: &OrbField, mode: ThemeMode) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for orb in &field.orbs {
		let gradient = ctx
			.create_radial_gradient(orb.x, orb.y, 0.0, orb.x, orb.y, orb.radius)
			.unwrap();
		for stop in orb_gradient(orb.opacity, mode) {
			gradient
				.add_color_stop(
					stop.offset as f32,
					&ORB_HUE.with_alpha(stop.alpha).to_css(),
				)
				.unwrap();
		}

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.begin_path();
		let _ = ctx.arc(orb.x, orb.y, orb.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stops_sit_at_core_mid_and_rim() {
		for mode in [ThemeMode::Dark, ThemeMode::Light] {
			let stops = orb_gradient(0.1, mode);
			assert_eq!(stops[0].offset, 0.0);
			assert_eq!(stops[1].offset, 0.4);
			assert_eq!(stops[2].offset, 1.0);
		}
	}

	#[test]
	fn dark_core_alpha_is_the_base_opacity() {
		let stops = orb_gradient(0.13, ThemeMode::Dark);
		assert_eq!(stops[0].alpha, 0.13);
		assert_eq!(stops[1].alpha, 0.13 * 0.5);
		assert_eq!(stops[2].alpha, 0.0);
	}

	#[test]
	fn light_core_alpha_is_doubled() {
		let stops = orb_gradient(0.13, ThemeMode::Light);
		assert_eq!(stops[0].alpha, 0.13 * 2.0);
		assert_eq!(stops[1].alpha, 0.13 * 1.2);
		assert_eq!(stops[2].alpha, 0.0);
	}

	#[test]
	fn ramp_is_deterministic_for_fixed_inputs() {
		assert_eq!(
			orb_gradient(0.08, ThemeMode::Dark),
			orb_gradient(0.08, ThemeMode::Dark)
		);
		assert_ne!(
			orb_gradient(0.08, ThemeMode::Dark),
			orb_gradient(0.08, ThemeMode::Light)
		);
	}
}
