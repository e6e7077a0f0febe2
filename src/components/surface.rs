//! Canvas surface acquisition shared by the animated components.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

/// Why a canvas could not be prepared for drawing.
///
/// None of these are fatal: callers log the error and skip animating.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no browser window")]
	NoWindow,
	#[error("canvas has no host element")]
	NoHost,
	#[error("2d drawing context unavailable")]
	NoContext,
	#[error("javascript error: {0}")]
	Js(String),
}

/// A canvas bound to its host element and 2d context.
pub struct Surface {
	pub window: Window,
	pub host: HtmlElement,
	pub canvas: HtmlCanvasElement,
	pub ctx: CanvasRenderingContext2d,
}

impl Surface {
	/// Resolve the host (the canvas' parent) and the 2d context.
	pub fn attach(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let host: HtmlElement = canvas
			.parent_element()
			.ok_or(SurfaceError::NoHost)?
			.dyn_into()
			.map_err(|_| SurfaceError::NoHost)?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.map_err(|e| SurfaceError::Js(format!("{e:?}")))?
			.ok_or(SurfaceError::NoContext)?
			.dyn_into()
			.map_err(|_| SurfaceError::NoContext)?;

		Ok(Self {
			window,
			host,
			canvas,
			ctx,
		})
	}

	/// Match the canvas backing store to the host's current client size.
	pub fn fit_to_host(&self) -> (f64, f64) {
		let (w, h) = (self.host.client_width().max(0), self.host.client_height().max(0));
		self.canvas.set_width(w as u32);
		self.canvas.set_height(h as u32);
		(w as f64, h as f64)
	}

	/// Translate client-space pointer coordinates into host-local ones.
	pub fn to_local(&self, client_x: i32, client_y: i32) -> (f64, f64) {
		let rect = self.host.get_bounding_client_rect();
		(client_x as f64 - rect.left(), client_y as f64 - rect.top())
	}
}
