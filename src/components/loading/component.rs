//! Leptos component for the loading screen.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;

use super::controller::{Bubble, LoadingConfig, LoadingController, TickOutcome};
use crate::components::frame::FrameLoop;

fn performance_now(window: &web_sys::Window) -> f64 {
	window.performance().map(|p| p.now()).unwrap_or(0.0)
}

/// Full-screen loader with blooming bubbles.
///
/// Calls `on_finished` exactly once when the configured duration has
/// elapsed; the host is expected to swap this view out at that point.
#[component]
pub fn LoadingScreen(
	#[prop(into)] on_finished: Callback<()>,
	#[prop(optional)] config: Option<LoadingConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let (bubbles, set_bubbles) = signal(Vec::<Bubble>::new());

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			warn!("loading: no window, finishing immediately");
			on_finished.run(());
			return;
		};

		let start = performance_now(&window);
		let controller = Rc::new(RefCell::new(LoadingController::new(
			config.clone(),
			start,
			move || {
				info!("loading: sequence finished");
				on_finished.run(());
			},
		)));

		let frames = FrameLoop::start(window, move |time| {
			let mut ctrl = controller.borrow_mut();
			match ctrl.tick(time) {
				TickOutcome::Spawned => {
					set_bubbles.set(ctrl.bubbles().iter().cloned().collect());
					true
				}
				TickOutcome::Waiting => true,
				TickOutcome::Finished | TickOutcome::Halted => false,
			}
		});

		let frames = SendWrapper::new(frames);
		on_cleanup(move || drop(frames.take()));
	});

	view! {
		<div class="clean-bg flex flex-col items-center justify-center relative w-screen h-screen">
			<div class="gray-overlay"></div>

			<div class="z-30 flex flex-col items-center justify-center gap-4 loader-pulse">
				<div class="w-12 h-12 rounded-full border-4 border-sky-100 border-t-sky-400 animate-spin"></div>
				<h1 class="text-sky-800 font-bold tracking-widest text-sm uppercase">"Loading..."</h1>
			</div>

			<div class="absolute bottom-0 left-0 right-0 h-full overflow-hidden z-10 pointer-events-none">
				<For each=move || bubbles.get() key=|b| b.id let:bubble>
					<div class="bubble-particle" style=bubble.style()></div>
				</For>
			</div>
		</div>
	}
}
