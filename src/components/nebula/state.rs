//! Nebula simulation state.
//!
//! Owns everything that evolves between frames: clouds, particles, the
//! shooting star and the last known pointer position. Created once when the
//! component mounts, rebuilt on resize, and advanced by [`NebulaState::tick`]
//! with the frame timestamp from `requestAnimationFrame`.

use fastrand::Rng;

use super::particles::{Cloud, Particle, spawn_particles};
use super::theme::{NebulaTheme, ShootingStarStyle};

/// A short-lived streak crossing the upper part of the surface.
#[derive(Clone, Debug)]
pub struct ShootingStar {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Remaining life, 1.0 at spawn, removed at 0.0.
	pub life: f64,
}

impl ShootingStar {
	fn spawn(rng: &mut Rng, width: f64, height: f64) -> Self {
		Self {
			x: rng.f64() * width * 0.8 + width * 0.1,
			y: rng.f64() * height * 0.3,
			vx: -3.0 - rng.f64() * 3.0,
			vy: 2.0 + rng.f64() * 2.0,
			life: 1.0,
		}
	}

	/// Tail end point, trailing behind the head along the velocity.
	pub fn tail(&self, tail_length: f64) -> (f64, f64) {
		(
			self.x - self.vx * tail_length,
			self.y - self.vy * tail_length,
		)
	}
}

/// Per-instance nebula simulation.
pub struct NebulaState {
	pub theme: NebulaTheme,
	pub width: f64,
	pub height: f64,
	pub clouds: Vec<Cloud>,
	pub particles: Vec<Particle>,
	/// The active shooting star, if any. At most one exists at a time.
	pub shooting_star: Option<ShootingStar>,
	/// Pointer in surface-local coordinates, `None` while outside the host.
	pub pointer: Option<(f64, f64)>,
	last_star_ms: f64,
	stars_spawned: usize,
	rng: Rng,
}

impl NebulaState {
	pub fn new(theme: NebulaTheme, width: f64, height: f64) -> Self {
		Self::with_rng(theme, width, height, Rng::new())
	}

	/// Build with a caller-provided generator (seeded in tests).
	pub fn with_rng(theme: NebulaTheme, width: f64, height: f64, rng: Rng) -> Self {
		let mut state = Self {
			theme,
			width: 0.0,
			height: 0.0,
			clouds: Vec::new(),
			particles: Vec::new(),
			shooting_star: None,
			pointer: None,
			last_star_ms: 0.0,
			stars_spawned: 0,
			rng,
		};
		state.resize(width, height);
		state
	}

	/// Rebuild clouds and particles for a new surface size.
	///
	/// Clouds are re-anchored proportionally, so bigger hosts get bigger
	/// clouds. The particle batch is recreated rather than rescaled.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		self.clouds = self
			.theme
			.clouds
			.iter()
			.map(|style| Cloud::from_style(style, self.width, self.height))
			.collect();
		self.particles = spawn_particles(&mut self.rng, &self.theme, self.width, self.height);
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Number of shooting stars spawned since creation.
	pub fn stars_spawned(&self) -> usize {
		self.stars_spawned
	}

	/// Advance one frame. `time_ms` is the frame timestamp.
	pub fn tick(&mut self, time_ms: f64) {
		self.tick_clouds();
		self.tick_particles();
		if let Some(style) = self.theme.shooting_star {
			self.tick_shooting_star(time_ms, &style);
		}
	}

	fn tick_clouds(&mut self) {
		let margin = self.theme.cloud_margin;
		for cloud in &mut self.clouds {
			cloud.drift(self.width, self.height, margin);
		}
	}

	fn tick_particles(&mut self) {
		if self.width <= 0.0 || self.height <= 0.0 {
			return;
		}
		let repel = self.theme.repel;
		let bounds = self.theme.shimmer_bounds;
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;
			if let Some(pointer) = self.pointer {
				p.repel(pointer, &repel);
			}
			p.wrap(self.width, self.height);
			p.advance_shimmer(bounds);
		}
	}

	fn tick_shooting_star(&mut self, time_ms: f64, style: &ShootingStarStyle) {
		if time_ms - self.last_star_ms > style.interval_ms {
			self.shooting_star = Some(ShootingStar::spawn(&mut self.rng, self.width, self.height));
			self.last_star_ms = time_ms;
			self.stars_spawned += 1;
		}

		if let Some(star) = &mut self.shooting_star {
			star.x += star.vx;
			star.y += star.vy;
			star.life -= style.life_step;
			if star.life <= 0.0 {
				self.shooting_star = None;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const FRAME_MS: f64 = 1000.0 / 60.0;

	fn seeded(theme: NebulaTheme, w: f64, h: f64) -> NebulaState {
		NebulaState::with_rng(theme, w, h, Rng::with_seed(7))
	}

	fn run(state: &mut NebulaState, frames: usize) {
		for i in 0..frames {
			state.tick(i as f64 * FRAME_MS);
		}
	}

	#[test]
	fn init_builds_batches_for_surface() {
		let state = seeded(NebulaTheme::sky(), 320.0, 200.0);
		assert_eq!(state.particles.len(), 215);
		assert_eq!(state.particles.iter().filter(|p| p.major).count(), 15);
		assert_eq!(state.clouds.len(), 3);
		assert!((state.clouds[1].radius - 320.0 * 0.8).abs() < 1e-9);
		assert!((state.clouds[0].x - 64.0).abs() < 1e-9);
	}

	#[test]
	fn resize_recreates_batches() {
		let mut state = seeded(NebulaTheme::sky(), 100.0, 100.0);
		state.resize(1000.0, 400.0);
		assert_eq!(state.particles.len(), 215);
		assert!((state.clouds[2].radius - 600.0).abs() < 1e-9);
		assert!(
			state.particles.iter().any(|p| p.x > 100.0),
			"particles should spread over the new width"
		);
	}

	#[test]
	fn particles_never_leave_surface() {
		let mut state = seeded(NebulaTheme::sky(), 240.0, 160.0);
		for i in 0..3000 {
			// Sweep the pointer around so repulsion pushes across edges too
			let t = i as f64 * 0.01;
			state.set_pointer(120.0 + 130.0 * t.cos(), 80.0 + 90.0 * t.sin());
			state.tick(i as f64 * FRAME_MS);
			for p in &state.particles {
				assert!((0.0..240.0).contains(&p.x), "x out of range: {}", p.x);
				assert!((0.0..160.0).contains(&p.y), "y out of range: {}", p.y);
			}
		}
	}

	#[test]
	fn shimmer_stays_near_bounds() {
		let theme = NebulaTheme::sky();
		let (lo, hi) = theme.shimmer_bounds;
		let eps = theme.shimmer_rate.1;
		let mut state = seeded(theme, 200.0, 200.0);
		for i in 0..2000 {
			state.tick(i as f64 * FRAME_MS);
			for p in &state.particles {
				assert!(p.shimmer >= lo - eps && p.shimmer <= hi + eps);
			}
		}
	}

	#[test]
	fn repulsion_increases_distance() {
		let mut state = seeded(NebulaTheme::mist(), 1000.0, 1000.0);
		state.particles.truncate(1);
		let p = &mut state.particles[0];
		p.x = 550.0;
		p.y = 500.0;
		state.set_pointer(500.0, 500.0);
		state.tick(0.0);
		let p = &state.particles[0];
		let dist = ((p.x - 500.0).powi(2) + (p.y - 500.0).powi(2)).sqrt();
		assert!(dist > 50.0, "distance shrank to {dist}");
	}

	#[test]
	fn leaving_host_disables_repulsion() {
		let mut state = seeded(NebulaTheme::mist(), 1000.0, 1000.0);
		state.particles.truncate(1);
		let p = &mut state.particles[0];
		p.x = 510.0;
		p.y = 500.0;
		p.vx = 0.0;
		p.vy = 0.0;
		state.set_pointer(500.0, 500.0);
		state.clear_pointer();
		state.tick(0.0);
		assert!((state.particles[0].x - 510.0).abs() < 1e-9);
	}

	#[test]
	fn shooting_stars_respect_interval() {
		let mut state = seeded(NebulaTheme::sky(), 400.0, 300.0);
		let mut spawn_times = Vec::new();
		let mut seen = 0;
		let mut frame = 0;
		loop {
			let t = frame as f64 * FRAME_MS;
			if t > 20_000.0 {
				break;
			}
			state.tick(t);
			if state.stars_spawned() > seen {
				seen = state.stars_spawned();
				spawn_times.push(t);
			}
			frame += 1;
		}
		let expected = (20_000.0_f64 / 8000.0).floor() as usize;
		assert!(seen.abs_diff(expected) <= 1, "spawned {seen}");
		for pair in spawn_times.windows(2) {
			assert!(pair[1] - pair[0] > 8000.0);
		}
	}

	#[test]
	fn shooting_star_burns_out() {
		let mut state = seeded(NebulaTheme::sky(), 400.0, 300.0);
		state.tick(8001.0);
		assert!(state.shooting_star.is_some());
		// life 1.0 at 0.02 per frame
		for i in 1..=60 {
			state.tick(8001.0 + i as f64 * FRAME_MS);
		}
		assert!(state.shooting_star.is_none());
		assert_eq!(state.stars_spawned(), 1);
	}

	#[test]
	fn themes_without_stars_never_spawn() {
		let mut state = seeded(NebulaTheme::mist(), 400.0, 300.0);
		run(&mut state, 1200);
		state.tick(30_000.0);
		assert_eq!(state.stars_spawned(), 0);
		assert!(state.shooting_star.is_none());
	}

	#[test]
	fn zero_area_surface_is_inert() {
		let mut state = seeded(NebulaTheme::sky(), 0.0, 0.0);
		state.set_pointer(0.0, 0.0);
		run(&mut state, 10);
		assert!(state.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}
}
