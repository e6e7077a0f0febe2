//! Drifting, shimmering particles and the clouds behind them.

use fastrand::Rng;

use super::theme::{Color, CloudStyle, NebulaTheme, ParticleTier, Repulsion};

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	/// Current alpha, oscillating inside the theme's shimmer bounds.
	pub shimmer: f64,
	/// Signed per-frame change of `shimmer`.
	pub shimmer_rate: f64,
	/// Major particles are drawn with the tier's glow.
	pub major: bool,
}

impl Particle {
	fn spawn(
		rng: &mut Rng,
		theme: &NebulaTheme,
		tier: &ParticleTier,
		major: bool,
		width: f64,
		height: f64,
	) -> Self {
		let (lo, hi) = theme.shimmer_bounds;
		let (rate_min, rate_max) = theme.shimmer_rate;
		Self {
			x: rng.f64() * width,
			y: rng.f64() * height,
			vx: (rng.f64() - 0.5) * theme.drift,
			vy: (rng.f64() - 0.5) * theme.drift,
			size: tier.size_min + rng.f64() * (tier.size_max - tier.size_min),
			// Start inside the band so the triangle wave never gets stuck outside it
			shimmer: lo + rng.f64() * (hi - lo),
			shimmer_rate: rate_min + rng.f64() * (rate_max - rate_min),
			major,
		}
	}

	/// Push the particle away from the pointer.
	///
	/// The push is a positional impulse with linear falloff: full `strength`
	/// at the pointer, zero at `radius`. Velocity is left untouched, so the
	/// effect stops as soon as the pointer moves away.
	pub fn repel(&mut self, pointer: (f64, f64), repel: &Repulsion) {
		let (dx, dy) = (self.x - pointer.0, self.y - pointer.1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist >= repel.radius {
			return;
		}
		let push = (repel.radius - dist) / repel.radius * repel.strength;
		let angle = dy.atan2(dx);
		self.x += angle.cos() * push;
		self.y += angle.sin() * push;
	}

	/// Advance the shimmer triangle wave by one frame.
	pub fn advance_shimmer(&mut self, bounds: (f64, f64)) {
		self.shimmer += self.shimmer_rate;
		if self.shimmer > bounds.1 {
			self.shimmer_rate = -self.shimmer_rate.abs();
		} else if self.shimmer < bounds.0 {
			self.shimmer_rate = self.shimmer_rate.abs();
		}
	}

	/// Wrap the position onto the torus `[0, width) × [0, height)`.
	pub fn wrap(&mut self, width: f64, height: f64) {
		self.x = wrap_axis(self.x, width);
		self.y = wrap_axis(self.y, height);
	}
}

fn wrap_axis(v: f64, extent: f64) -> f64 {
	let w = v.rem_euclid(extent);
	// rem_euclid rounds tiny negatives up to `extent`
	if w >= extent { 0.0 } else { w }
}

/// Build the full particle batch for a surface: major tier first, then dust.
pub fn spawn_particles(
	rng: &mut Rng,
	theme: &NebulaTheme,
	width: f64,
	height: f64,
) -> Vec<Particle> {
	let mut particles = Vec::with_capacity(theme.particle_count());
	for _ in 0..theme.major.count {
		particles.push(Particle::spawn(rng, theme, &theme.major, true, width, height));
	}
	for _ in 0..theme.dust.count {
		particles.push(Particle::spawn(rng, theme, &theme.dust, false, width, height));
	}
	particles
}

/// A large soft gradient blob drifting behind the particles.
#[derive(Clone, Debug)]
pub struct Cloud {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: Color,
	pub vx: f64,
	pub vy: f64,
}

impl Cloud {
	/// Place a cloud proportionally to the surface size.
	pub fn from_style(style: &CloudStyle, width: f64, height: f64) -> Self {
		Self {
			x: width * style.anchor.0,
			y: height * style.anchor.1,
			radius: width.max(height) * style.radius_factor,
			color: style.color,
			vx: style.velocity.0,
			vy: style.velocity.1,
		}
	}

	/// Drift one frame, turning back once past `margin` beyond an edge.
	///
	/// The turn happens after the overshoot, so clouds leave the oversized
	/// bound by at most one step before heading back in.
	pub fn drift(&mut self, width: f64, height: f64, margin: f64) {
		self.x += self.vx;
		self.y += self.vy;
		if self.x < -width * margin {
			self.vx = self.vx.abs();
		} else if self.x > width * (1.0 + margin) {
			self.vx = -self.vx.abs();
		}
		if self.y < -height * margin {
			self.vy = self.vy.abs();
		} else if self.y > height * (1.0 + margin) {
			self.vy = -self.vy.abs();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn still_particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 1.0,
			shimmer: 0.5,
			shimmer_rate: 0.01,
			major: false,
		}
	}

	const REPEL: Repulsion = Repulsion {
		radius: 150.0,
		strength: 2.0,
	};

	#[test]
	fn repel_pushes_directly_away() {
		let mut p = still_particle(150.0, 100.0);
		p.repel((100.0, 100.0), &REPEL);
		let expected = 150.0 + (150.0 - 50.0) / 150.0 * 2.0;
		assert!((p.x - expected).abs() < 1e-9);
		assert!((p.y - 100.0).abs() < 1e-9);
	}

	#[test]
	fn repel_ignores_pointer_outside_radius() {
		let mut p = still_particle(400.0, 100.0);
		p.repel((100.0, 100.0), &REPEL);
		assert_eq!(p.x, 400.0);
	}

	#[test]
	fn shimmer_turns_at_bounds() {
		let mut p = still_particle(0.0, 0.0);
		p.shimmer = 0.995;
		p.shimmer_rate = 0.01;
		p.advance_shimmer((0.3, 1.0));
		assert!(p.shimmer_rate < 0.0);
		p.shimmer = 0.295;
		p.advance_shimmer((0.3, 1.0));
		assert!(p.shimmer_rate > 0.0);
	}

	#[test]
	fn wrap_stays_inside_half_open_range() {
		assert_eq!(wrap_axis(-1e-17, 100.0), 0.0);
		assert_eq!(wrap_axis(100.0, 100.0), 0.0);
		assert!((wrap_axis(-0.5, 100.0) - 99.5).abs() < 1e-9);
		assert!((wrap_axis(100.25, 100.0) - 0.25).abs() < 1e-9);
	}

	#[test]
	fn cloud_reverses_past_margin() {
		let style = CloudStyle {
			anchor: (1.0, 0.5),
			radius_factor: 0.5,
			color: Color::rgb(0, 0, 0),
			velocity: (5.0, 0.0),
		};
		let mut cloud = Cloud::from_style(&style, 100.0, 100.0);
		let mut max_x = cloud.x;
		for _ in 0..10 {
			cloud.drift(100.0, 100.0, 0.2);
			max_x = max_x.max(cloud.x);
		}
		assert!(cloud.vx < 0.0);
		assert!(max_x <= 120.0 + 5.0);
		assert!(cloud.x < max_x);
	}
}
