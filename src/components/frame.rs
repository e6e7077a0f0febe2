//! `requestAnimationFrame` loop with explicit cancellation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling animation frame loop.
///
/// Each frame calls `step` with the frame timestamp; returning `false` stops
/// the loop. Dropping the handle cancels the pending frame and releases the
/// callback, which otherwise keeps itself alive through its own reschedule.
pub struct FrameLoop {
	window: Window,
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	pub fn start(window: Window, mut step: impl FnMut(f64) -> bool + 'static) -> Self {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let (callback_inner, pending_inner, window_inner) =
			(callback.clone(), pending.clone(), window.clone());

		*callback.borrow_mut() = Some(Closure::new(move |time: f64| {
			pending_inner.set(None);
			if !step(time) {
				return;
			}
			if let Some(ref cb) = *callback_inner.borrow() {
				pending_inner.set(
					window_inner
						.request_animation_frame(cb.as_ref().unchecked_ref())
						.ok(),
				);
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}

		Self {
			window,
			callback,
			pending,
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let Some(id) = self.pending.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}
