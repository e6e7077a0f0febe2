// Integration tests for the loading sequence.
// Native-friendly: they drive the controller with simulated frame times and
// never touch wasm/browser APIs.

use std::cell::Cell;
use std::rc::Rc;

use fastrand::Rng;
use nebula_bento::components::loading::{
	LoadingConfig, LoadingController, LoadingPhase, SpawnPhase, TickOutcome,
};

fn controller(config: LoadingConfig) -> (LoadingController, Rc<Cell<u32>>) {
	let calls = Rc::new(Cell::new(0));
	let calls_cb = calls.clone();
	let ctrl = LoadingController::with_rng(config, 0.0, Rng::with_seed(1), move || {
		calls_cb.set(calls_cb.get() + 1);
	});
	(ctrl, calls)
}

#[test]
fn spawn_density_increases_over_time() {
	let (mut ctrl, _) = controller(LoadingConfig::default());
	let mut spawn_times = Vec::new();
	for ms in 0..=4500 {
		let t = ms as f64;
		if ctrl.tick(t) == TickOutcome::Spawned {
			spawn_times.push(t);
		}
	}

	let coarse = spawn_times.iter().filter(|t| **t < 2000.0).count();
	let fine = spawn_times
		.iter()
		.filter(|t| (3500.0..4500.0).contains(*t))
		.count();
	assert_eq!(coarse, 20, "coarse phase should spawn every 100ms");
	assert!((90..=100).contains(&fine), "fine phase spawned {fine}");
	assert!(fine > coarse * 4);
}

#[test]
fn end_to_end_regimes_then_single_completion() {
	let (mut ctrl, calls) = controller(LoadingConfig {
		duration_ms: 4500.0,
		..LoadingConfig::default()
	});

	let mut spawn_times = Vec::new();
	let mut finished_at = None;
	for ms in 0..=6000 {
		let t = ms as f64;
		match ctrl.tick(t) {
			TickOutcome::Spawned => {
				assert!(finished_at.is_none(), "spawned after completion at {t}");
				spawn_times.push(t);
			}
			TickOutcome::Finished => finished_at = Some(t),
			TickOutcome::Waiting | TickOutcome::Halted => {}
		}
	}

	let mut regimes: Vec<f64> = spawn_times.windows(2).map(|w| w[1] - w[0]).collect();
	regimes.dedup();
	assert_eq!(regimes, vec![100.0, 40.0, 10.0]);

	assert_eq!(calls.get(), 1);
	assert!(finished_at.is_some_and(|t| t >= 4500.0));
	assert_eq!(ctrl.phase(), LoadingPhase::Finished);
}

#[test]
fn completion_at_frame_rate() {
	let (mut ctrl, calls) = controller(LoadingConfig::default());
	let frame = 1000.0 / 60.0;
	let mut t = 0.0;
	while t <= 5000.0 {
		ctrl.tick(t);
		t += frame;
	}
	assert_eq!(calls.get(), 1);
	let spawned = ctrl.spawned();
	ctrl.tick(t + 100.0);
	assert_eq!(ctrl.spawned(), spawned);
}

#[test]
fn retention_window_caps_live_bubbles() {
	let (mut ctrl, _) = controller(LoadingConfig {
		duration_ms: 1_000_000.0,
		phases: vec![SpawnPhase {
			after_ms: 0.0,
			interval_ms: 1.0,
		}],
		lifetime_s: (100.0, 100.0),
		retention: 150,
		..LoadingConfig::default()
	});

	let mut t = 0.0;
	while ctrl.spawned() < 500 {
		ctrl.tick(t);
		assert!(ctrl.bubbles().len() <= 150);
		t += 1.0;
	}
	assert_eq!(ctrl.bubbles().len(), 150);
	// Most recent tail is what survives
	assert_eq!(ctrl.bubbles().back().map(|b| b.id), Some(499));
	assert_eq!(ctrl.bubbles().front().map(|b| b.id), Some(350));
}

#[test]
fn bubble_ids_are_unique() {
	let (mut ctrl, _) = controller(LoadingConfig::default());
	for ms in 0..4000 {
		ctrl.tick(ms as f64);
	}
	let ids: Vec<u64> = ctrl.bubbles().iter().map(|b| b.id).collect();
	let mut sorted = ids.clone();
	sorted.dedup();
	assert_eq!(ids, sorted);
}
