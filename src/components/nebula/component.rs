//! Leptos component wrapping the nebula canvas.
//!
//! The canvas fills its parent (the host card). On mount the component sizes
//! the canvas to the host, wires pointer listeners on the host and a resize
//! listener on the window, and starts the frame loop. Everything is torn down
//! again when the component is disposed.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::NebulaState;
use super::theme::NebulaTheme;
use crate::components::frame::FrameLoop;
use crate::components::surface::Surface;

/// Host and window listeners feeding pointer and size changes into the state.
/// Detached on drop.
struct HostListeners {
	surface: Rc<Surface>,
	on_move: Closure<dyn FnMut(MouseEvent)>,
	on_leave: Closure<dyn FnMut(MouseEvent)>,
	on_resize: Closure<dyn FnMut()>,
}

impl HostListeners {
	fn attach(surface: Rc<Surface>, state: Rc<RefCell<NebulaState>>) -> Self {
		let (surface_mm, state_mm) = (surface.clone(), state.clone());
		let on_move: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			let (x, y) = surface_mm.to_local(ev.client_x(), ev.client_y());
			state_mm.borrow_mut().set_pointer(x, y);
		});

		let state_ml = state.clone();
		let on_leave: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |_: MouseEvent| {
			state_ml.borrow_mut().clear_pointer();
		});

		let (surface_rs, state_rs) = (surface.clone(), state);
		let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
			let (w, h) = surface_rs.fit_to_host();
			state_rs.borrow_mut().resize(w, h);
			debug!("nebula: resized to {}x{}", w, h);
		});

		let _ = surface
			.host
			.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
		let _ = surface
			.host
			.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
		let _ = surface
			.window
			.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

		Self {
			surface,
			on_move,
			on_leave,
			on_resize,
		}
	}
}

impl Drop for HostListeners {
	fn drop(&mut self) {
		let host = &self.surface.host;
		let _ = host
			.remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
		let _ = host.remove_event_listener_with_callback(
			"mouseleave",
			self.on_leave.as_ref().unchecked_ref(),
		);
		let _ = self
			.surface
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
	}
}

/// Renders an animated nebula behind its siblings.
///
/// Place it as the first child of a positioned container; the canvas is
/// absolutely positioned to cover that container and follows its size.
/// Without a 2d context or a parent element the component renders an inert
/// canvas and logs a warning.
#[component]
pub fn NebulaCanvas(#[prop(optional)] theme: Option<NebulaTheme>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let theme = theme.unwrap_or_default();
	let style = if theme.mix_blend_multiply {
		"position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; mix-blend-mode: multiply;"
	} else {
		"position: absolute; inset: 0; width: 100%; height: 100%;"
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let surface = match Surface::attach(canvas) {
			Ok(surface) => Rc::new(surface),
			Err(err) => {
				warn!("nebula: {}, background disabled", err);
				return;
			}
		};

		let (w, h) = surface.fit_to_host();
		let state = Rc::new(RefCell::new(NebulaState::new(theme.clone(), w, h)));
		info!(
			"nebula: '{}' started at {}x{} with {} particles",
			theme.name,
			w,
			h,
			theme.particle_count()
		);

		let listeners = HostListeners::attach(surface.clone(), state.clone());
		let frames = FrameLoop::start(surface.window.clone(), move |time| {
			let mut s = state.borrow_mut();
			s.tick(time);
			render::render(&s, &surface.ctx);
			true
		});

		let teardown = SendWrapper::new((listeners, frames));
		on_cleanup(move || {
			drop(teardown.take());
			debug!("nebula: stopped");
		});
	});

	view! { <canvas node_ref=canvas_ref class="nebula-canvas" style=style /> }
}
