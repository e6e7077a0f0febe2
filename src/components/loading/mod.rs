//! Loading screen with an accelerating bubble bloom.
//!
//! [`LoadingController`] is the frame-polled state machine; [`LoadingScreen`]
//! drives it from `requestAnimationFrame` and renders the live bubbles.

mod component;
mod controller;

pub use component::LoadingScreen;
pub use controller::{
	Bubble, LoadingConfig, LoadingController, LoadingPhase, SpawnPhase, TickOutcome,
};
