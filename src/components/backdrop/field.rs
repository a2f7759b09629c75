//! Drifting orb field simulated behind the page content.

/// One translucent circle in the background field.
///
/// `radius`, velocity and `opacity` are fixed at creation; only the
/// position changes after that.
#[derive(Clone, Debug, PartialEq)]
pub struct Orb {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
}

/// Number of orbs in a field. Constant for the life of a session.
pub const ORB_COUNT: usize = 20;

/// The complete orb set plus the canvas dimensions it wraps against.
///
/// A field is generated on mount and regenerated wholesale on every
/// viewport resize; it is never rescaled in place.
pub struct OrbField {
	pub orbs: Vec<Orb>,
	width: f64,
	height: f64,
}

impl OrbField {
	/// Build a fresh field of [`ORB_COUNT`] orbs.
	///
	/// `rand` supplies uniform samples in `[0, 1)`: `Math.random` in the
	/// browser, a deterministic stream in tests. Positions land uniformly
	/// in `[0, width) × [0, height)`; non-positive dimensions degrade to
	/// placement at the origin rather than panicking.
	pub fn generate(width: f64, height: f64, mut rand: impl FnMut() -> f64) -> Self {
		let (span_x, span_y) = (width.max(0.0), height.max(0.0));
		let mut orbs = Vec::with_capacity(ORB_COUNT);

		for _ in 0..ORB_COUNT {
			orbs.push(Orb {
				x: rand() * span_x,
				y: rand() * span_y,
				radius: rand() * 120.0 + 60.0,
				vx: (rand() - 0.5) * 0.4,
				vy: (rand() - 0.5) * 0.4,
				opacity: rand() * 0.12 + 0.05,
			});
		}

		Self {
			orbs,
			width,
			height,
		}
	}

	/// Advance every orb by its velocity, once per display frame.
	///
	/// An orb that drifts more than its own radius past an edge re-enters
	/// from the opposite edge, offset by its radius, so it is fully
	/// offscreen both before and after the jump.
	pub fn advance(&mut self) {
		for orb in &mut self.orbs {
			orb.x += orb.vx;
			orb.y += orb.vy;

			if orb.x < -orb.radius {
				orb.x = self.width + orb.radius;
			} else if orb.x > self.width + orb.radius {
				orb.x = -orb.radius;
			}
			if orb.y < -orb.radius {
				orb.y = self.height + orb.radius;
			} else if orb.y > self.height + orb.radius {
				orb.y = -orb.radius;
			}
		}
	}

	/// Width the field was generated for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Height the field was generated for.
	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Deterministic uniform stream (LCG), distinct per seed.
	fn stream(seed: u32) -> impl FnMut() -> f64 {
		let mut state = seed;
		move || {
			state = state.wrapping_mul(1664525).wrapping_add(1013904223);
			(state >> 8) as f64 / (1u32 << 24) as f64
		}
	}

	#[test]
	fn generate_yields_exactly_twenty_orbs() {
		for (w, h) in [(1280.0, 800.0), (1.0, 1.0), (0.0, 0.0)] {
			let field = OrbField::generate(w, h, stream(7));
			assert_eq!(field.orbs.len(), ORB_COUNT);
		}
	}

	#[test]
	fn generate_attributes_stay_in_range() {
		let field = OrbField::generate(1920.0, 1080.0, stream(42));
		for orb in &field.orbs {
			assert!(orb.x >= 0.0 && orb.x < 1920.0);
			assert!(orb.y >= 0.0 && orb.y < 1080.0);
			assert!(orb.radius >= 60.0 && orb.radius < 180.0);
			assert!(orb.vx >= -0.2 && orb.vx < 0.2);
			assert!(orb.vy >= -0.2 && orb.vy < 0.2);
			assert!(orb.opacity >= 0.05 && orb.opacity < 0.17);
		}
	}

	#[test]
	fn degenerate_dimensions_place_orbs_at_origin() {
		let field = OrbField::generate(0.0, -40.0, stream(3));
		assert_eq!(field.orbs.len(), ORB_COUNT);
		for orb in &field.orbs {
			assert_eq!(orb.x, 0.0);
			assert_eq!(orb.y, 0.0);
			assert!(orb.radius >= 60.0);
			assert!(orb.opacity >= 0.05);
		}
	}

	#[test]
	fn advance_moves_every_orb_by_exactly_its_velocity() {
		let mut field = OrbField::generate(4000.0, 4000.0, stream(11));
		// Keep everything far from the edges so no wrap interferes.
		for orb in &mut field.orbs {
			orb.x = orb.x.clamp(500.0, 3500.0);
			orb.y = orb.y.clamp(500.0, 3500.0);
		}
		let before = field.orbs.clone();
		field.advance();
		for (prev, now) in before.iter().zip(&field.orbs) {
			assert_eq!(now.x, prev.x + prev.vx);
			assert_eq!(now.y, prev.y + prev.vy);
			assert_eq!(now.radius, prev.radius);
			assert_eq!(now.opacity, prev.opacity);
		}
	}

	#[test]
	fn wrap_relocates_across_each_edge() {
		let (w, h) = (800.0, 600.0);
		let mut field = OrbField::generate(w, h, stream(5));
		let r = 75.0;
		for orb in &mut field.orbs {
			orb.radius = r;
			orb.vx = 0.0;
			orb.vy = 0.0;
			orb.x = 400.0;
			orb.y = 300.0;
		}

		field.orbs[0].x = -r - 0.5; // past the left edge
		field.orbs[1].x = w + r + 0.5; // past the right edge
		field.orbs[2].y = -r - 0.5; // past the top edge
		field.orbs[3].y = h + r + 0.5; // past the bottom edge
		field.advance();

		assert_eq!(field.orbs[0].x, w + r);
		assert_eq!(field.orbs[1].x, -r);
		assert_eq!(field.orbs[2].y, h + r);
		assert_eq!(field.orbs[3].y, -r);
	}

	#[test]
	fn orb_exactly_on_threshold_does_not_wrap() {
		let mut field = OrbField::generate(800.0, 600.0, stream(5));
		field.orbs[0].radius = 60.0;
		field.orbs[0].x = -60.0; // leading edge touching, not past
		field.orbs[0].vx = 0.0;
		field.orbs[0].vy = 0.0;
		let y = field.orbs[0].y;
		field.advance();
		assert_eq!(field.orbs[0].x, -60.0);
		assert_eq!(field.orbs[0].y, y);
	}

	#[test]
	fn regeneration_is_independent_of_the_previous_field() {
		let first = OrbField::generate(1280.0, 720.0, stream(1));
		let second = OrbField::generate(1280.0, 720.0, stream(2));
		assert!(
			first
				.orbs
				.iter()
				.zip(&second.orbs)
				.any(|(a, b)| a.x != b.x || a.y != b.y),
			"fields from distinct streams should not coincide"
		);

		// Deterministic only up to the randomness source: same stream,
		// same field.
		let replay = OrbField::generate(1280.0, 720.0, stream(1));
		assert_eq!(first.orbs, replay.orbs);
	}
}
