//! nebula-bento: single-page bento portfolio with animated canvas cards.
//!
//! This crate provides a WASM app that shows a timed loading screen with a
//! blooming bubble effect, then a grid of cards whose backgrounds are
//! animated nebulae reacting to the mouse pointer.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod types;

pub use components::loading::{LoadingConfig, LoadingController, LoadingScreen};
pub use components::nebula::{NebulaCanvas, NebulaState, NebulaTheme};
pub use types::{AnimeItem, Avatar, Profile, SocialLink};

use components::portfolio::Portfolio;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("nebula-bento: logging initialized");
}

/// Parse page content from its JSON text.
pub fn parse_profile(json: &str) -> Result<Profile, serde_json::Error> {
	serde_json::from_str(json)
}

/// Load page content from a script element with id="profile-data".
/// Expected format: JSON matching [`Profile`]; absent fields use defaults.
fn load_profile() -> Option<Profile> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("profile-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_profile(&json_text) {
		Ok(profile) => {
			info!(
				"nebula-bento: loaded profile '{}' ({} music, {} anime, {} links)",
				profile.name,
				profile.music.len(),
				profile.anime.len(),
				profile.socials.len()
			);
			Some(profile)
		}
		Err(e) => {
			warn!("nebula-bento: failed to parse profile data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Shows the loading screen first, then the portfolio built from DOM data.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let profile = load_profile().unwrap_or_default();
	let title = if profile.name.is_empty() {
		"Portfolio".to_string()
	} else {
		format!("{} | Portfolio", profile.name)
	};
	let (loading, set_loading) = signal(true);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{move || {
			if loading.get() {
				view! { <LoadingScreen on_finished=move |_| set_loading.set(false) /> }.into_any()
			} else {
				view! { <Portfolio profile=profile.clone() /> }.into_any()
			}
		}}
	}
}
