//! Page content supplied to the app as data.

use serde::Deserialize;

/// Avatar image with a fallback source used when the primary fails to load.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Avatar {
	pub src: String,
	pub fallback: String,
	pub alt: String,
}

impl Default for Avatar {
	fn default() -> Self {
		Self {
			src: String::new(),
			fallback: "https://picsum.photos/300/300".into(),
			alt: "Avatar".into(),
		}
	}
}

impl Avatar {
	/// Source to try first. An empty primary goes straight to the fallback.
	pub fn initial_source(&self) -> &str {
		if self.src.is_empty() { &self.fallback } else { &self.src }
	}

	/// Source to switch to after `failed` could not be loaded, if any.
	///
	/// Only the primary falls back, so a broken fallback never loops.
	pub fn after_error(&self, failed: &str) -> Option<&str> {
		(failed != self.fallback && !self.fallback.is_empty()).then_some(self.fallback.as_str())
	}
}

/// A favorite anime with its Font Awesome icon name (e.g. `fa-star`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AnimeItem {
	pub name: String,
	pub icon: String,
}

/// An outbound link on the contact card.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
	pub platform: String,
	pub url: String,
	/// Full Font Awesome class list, e.g. `fab fa-github`.
	pub icon_class: String,
}

/// Everything the page displays besides decoration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	/// Short badge under the name.
	pub role: String,
	/// Sentence under the badge. `highlight`, if present, is appended emphasized.
	pub tagline: String,
	pub highlight: Option<String>,
	pub avatar: Avatar,
	pub music: Vec<String>,
	pub anime: Vec<AnimeItem>,
	pub socials: Vec<SocialLink>,
	pub footer: Option<String>,
}
