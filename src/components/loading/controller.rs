//! Loading sequence state machine.
//!
//! Polled once per animation frame. Emits bubbles at an interval that
//! shrinks as time passes, then finishes after a fixed duration and hands
//! control back to the host through a one-shot callback.

use std::collections::VecDeque;

use fastrand::Rng;

/// Spawn interval that applies once `elapsed > after_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnPhase {
	pub after_ms: f64,
	pub interval_ms: f64,
}

/// Timing and randomization parameters for the loading sequence.
#[derive(Clone, Debug)]
pub struct LoadingConfig {
	/// Total run time before the sequence finishes.
	pub duration_ms: f64,
	/// Interval schedule, ordered by `after_ms`. The first entry applies from
	/// the start regardless of its threshold.
	pub phases: Vec<SpawnPhase>,
	/// After this point bubbles start from a wider band.
	pub spread_widen_after_ms: f64,
	/// Start offset band width (vw) before and after widening.
	pub spread_vw: (f64, f64),
	/// Bubble diameter range in pixels, inclusive.
	pub size_px: (u32, u32),
	/// Sway target drawn from `[-sway_vw, sway_vw)`.
	pub sway_vw: f64,
	/// Rise time range in seconds.
	pub lifetime_s: (f64, f64),
	/// Maximum number of live bubbles.
	pub retention: usize,
}

impl Default for LoadingConfig {
	fn default() -> Self {
		Self {
			duration_ms: 4500.0,
			phases: vec![
				SpawnPhase {
					after_ms: 0.0,
					interval_ms: 100.0,
				},
				SpawnPhase {
					after_ms: 2000.0,
					interval_ms: 40.0,
				},
				SpawnPhase {
					after_ms: 3500.0,
					interval_ms: 10.0,
				},
			],
			spread_widen_after_ms: 3000.0,
			spread_vw: (30.0, 60.0),
			size_px: (4, 11),
			sway_vw: 5.0,
			lifetime_s: (2.0, 4.0),
			retention: 200,
		}
	}
}

/// One rising bubble on the loading screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
	/// Unique within one controller.
	pub id: u64,
	pub size_px: u32,
	/// Horizontal start offset from center, in vw.
	pub start_offset_vw: f64,
	/// Horizontal drift reached at the end of the rise, in vw.
	pub sway_end_vw: f64,
	pub lifetime_s: f64,
	/// Frame time at which the bubble was emitted.
	pub born_ms: f64,
}

impl Bubble {
	/// Inline style consumed by the `.bubble-particle` animation.
	pub fn style(&self) -> String {
		format!(
			"width: {size}px; height: {size}px; --life: {:.3}s; --start-offset: {:.3}vw; --sway-end: {:.3}vw;",
			self.lifetime_s,
			self.start_offset_vw,
			self.sway_end_vw,
			size = self.size_px,
		)
	}

	fn expired(&self, now_ms: f64) -> bool {
		now_ms - self.born_ms >= self.lifetime_s * 1000.0
	}
}

/// Lifecycle of the loading sequence. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
	Running,
	Finished,
}

/// What a single [`LoadingController::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
	/// Still running, nothing due this frame.
	Waiting,
	/// Still running, one bubble emitted.
	Spawned,
	/// The sequence just finished and the callback ran.
	Finished,
	/// Already finished earlier, nothing done.
	Halted,
}

/// Drives the loading sequence for one loading screen instance.
pub struct LoadingController {
	config: LoadingConfig,
	phase: LoadingPhase,
	start_ms: f64,
	next_spawn_ms: f64,
	next_id: u64,
	bubbles: VecDeque<Bubble>,
	on_finished: Option<Box<dyn FnOnce()>>,
	rng: Rng,
}

impl LoadingController {
	pub fn new(config: LoadingConfig, start_ms: f64, on_finished: impl FnOnce() + 'static) -> Self {
		Self::with_rng(config, start_ms, Rng::new(), on_finished)
	}

	/// Build with a caller-provided generator (seeded in tests).
	pub fn with_rng(
		config: LoadingConfig,
		start_ms: f64,
		rng: Rng,
		on_finished: impl FnOnce() + 'static,
	) -> Self {
		let retention = config.retention;
		Self {
			config,
			phase: LoadingPhase::Running,
			start_ms,
			next_spawn_ms: start_ms,
			next_id: 0,
			bubbles: VecDeque::with_capacity(retention),
			on_finished: Some(Box::new(on_finished)),
			rng,
		}
	}

	pub fn phase(&self) -> LoadingPhase {
		self.phase
	}

	pub fn config(&self) -> &LoadingConfig {
		&self.config
	}

	/// Live bubbles, oldest first.
	pub fn bubbles(&self) -> &VecDeque<Bubble> {
		&self.bubbles
	}

	/// Total bubbles emitted so far.
	pub fn spawned(&self) -> u64 {
		self.next_id
	}

	/// Spawn interval in effect `elapsed_ms` after the start.
	pub fn spawn_interval(&self, elapsed_ms: f64) -> f64 {
		let Some(first) = self.config.phases.first() else {
			return f64::INFINITY;
		};
		self.config
			.phases
			.iter()
			.skip(1)
			.rev()
			.find(|p| elapsed_ms > p.after_ms)
			.unwrap_or(first)
			.interval_ms
	}

	/// Advance the sequence to `now_ms` (same clock as `start_ms`).
	pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
		if self.phase == LoadingPhase::Finished {
			return TickOutcome::Halted;
		}

		let elapsed = now_ms - self.start_ms;
		if elapsed >= self.config.duration_ms {
			self.phase = LoadingPhase::Finished;
			if let Some(on_finished) = self.on_finished.take() {
				on_finished();
			}
			return TickOutcome::Finished;
		}

		if now_ms < self.next_spawn_ms {
			return TickOutcome::Waiting;
		}
		self.next_spawn_ms = now_ms + self.spawn_interval(elapsed);
		let bubble = self.make_bubble(now_ms, elapsed);
		self.retain_for(now_ms);
		if self.config.retention > 0 {
			self.bubbles.push_back(bubble);
		}
		TickOutcome::Spawned
	}

	/// Drop expired bubbles, then trim the oldest so one more fits the window.
	fn retain_for(&mut self, now_ms: f64) {
		self.bubbles.retain(|b| !b.expired(now_ms));
		let keep = self.config.retention.saturating_sub(1);
		while self.bubbles.len() > keep {
			self.bubbles.pop_front();
		}
	}

	fn make_bubble(&mut self, now_ms: f64, elapsed_ms: f64) -> Bubble {
		let cfg = &self.config;
		let spread = if elapsed_ms > cfg.spread_widen_after_ms {
			cfg.spread_vw.1
		} else {
			cfg.spread_vw.0
		};
		let (size_min, size_max) = cfg.size_px;
		let (life_min, life_max) = cfg.lifetime_s;

		let bubble = Bubble {
			id: self.next_id,
			size_px: self.rng.u32(size_min..=size_max.max(size_min)),
			start_offset_vw: self.rng.f64() * spread - spread / 2.0,
			sway_end_vw: (self.rng.f64() * 2.0 - 1.0) * cfg.sway_vw,
			lifetime_s: life_min + self.rng.f64() * (life_max - life_min),
			born_ms: now_ms,
		};
		self.next_id += 1;
		bubble
	}
}
