// Integration tests for the nebula simulation through the public API.
// Pure Rust: the canvas renderer is never invoked.

use fastrand::Rng;
use nebula_bento::{NebulaState, NebulaTheme};

const FRAME_MS: f64 = 1000.0 / 60.0;

#[test]
fn independent_instances_do_not_interfere() {
	let mut a = NebulaState::with_rng(NebulaTheme::sky(), 300.0, 200.0, Rng::with_seed(3));
	let mut b = NebulaState::with_rng(NebulaTheme::sky(), 300.0, 200.0, Rng::with_seed(3));

	a.set_pointer(150.0, 100.0);
	for i in 0..120 {
		let t = i as f64 * FRAME_MS;
		a.tick(t);
		b.tick(t);
	}

	assert!(b.pointer.is_none());
	let moved = a
		.particles
		.iter()
		.zip(&b.particles)
		.filter(|(pa, pb)| (pa.x - pb.x).abs() > 1e-6 || (pa.y - pb.y).abs() > 1e-6)
		.count();
	assert!(moved > 0, "pointer on one card must not be shared with another");
}

#[test]
fn twenty_seconds_of_frames() {
	let mut state = NebulaState::with_rng(NebulaTheme::sky(), 640.0, 360.0, Rng::with_seed(11));
	let (w, h) = (state.width, state.height);
	let frames = (20_000.0 / FRAME_MS) as usize;
	for i in 0..=frames {
		state.tick(i as f64 * FRAME_MS);
		assert!(
			state
				.particles
				.iter()
				.all(|p| p.x >= 0.0 && p.x < w && p.y >= 0.0 && p.y < h)
		);
	}
	assert!((1..=3).contains(&state.stars_spawned()));
}

#[test]
fn resize_follows_host() {
	let mut state = NebulaState::with_rng(NebulaTheme::mist(), 200.0, 100.0, Rng::with_seed(5));
	state.resize(50.0, 400.0);
	assert_eq!((state.width, state.height), (50.0, 400.0));
	assert_eq!(state.particles.len(), 30);
	assert!(state.particles.iter().all(|p| p.x < 50.0 && p.y < 400.0));
	assert!((state.clouds[0].radius - 400.0 * 0.6).abs() < 1e-9);
}
