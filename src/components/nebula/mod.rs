//! Animated nebula background for cards.
//!
//! Renders a continuously evolving backdrop on an HTML canvas with:
//! - Drifting gradient clouds blended onto a base color
//! - A shimmering particle field that wraps around the edges
//! - Local repulsion around the mouse pointer
//! - An occasional shooting star
//!
//! # Example
//!
//! ```ignore
//! use nebula_bento::components::nebula::{NebulaCanvas, NebulaTheme};
//!
//! view! {
//!     <div style="position: relative">
//!         <NebulaCanvas theme=NebulaTheme::mist() />
//!         <p>"Card content"</p>
//!     </div>
//! }
//! ```

mod component;
mod particles;
mod render;
mod state;
pub mod theme;

pub use component::NebulaCanvas;
pub use particles::{Cloud, Particle};
pub use state::{NebulaState, ShootingStar};
pub use theme::NebulaTheme;
