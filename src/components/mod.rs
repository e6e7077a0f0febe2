//! UI components.
//!
//! [`nebula`] and [`loading`] hold the animated parts; the rest is layout.

pub mod bento;
pub mod decor;
mod frame;
pub mod loading;
pub mod nebula;
pub mod portfolio;
pub mod surface;
