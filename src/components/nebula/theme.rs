//! Visual theming for the nebula background.
//!
//! A [`NebulaTheme`] fully describes one animated background: base fill,
//! cloud layer, particle tiers, pointer repulsion and shooting stars. Named
//! presets cover the card styles used on the page.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// How the cloud layer is composed onto the base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
	/// Tint the layers below. Overlapping clouds deepen the color, white is neutral.
	Multiply,
	/// Plain alpha compositing, transparent is neutral.
	Normal,
}

impl BlendMode {
	/// Canvas `globalCompositeOperation` value for this mode.
	pub fn composite_op(self) -> &'static str {
		match self {
			BlendMode::Multiply => "multiply",
			BlendMode::Normal => "source-over",
		}
	}

	/// Outer gradient stop that leaves the base unchanged under this mode.
	pub fn neutral(self) -> Color {
		match self {
			BlendMode::Multiply => Color::rgb(255, 255, 255),
			BlendMode::Normal => Color::rgba(255, 255, 255, 0.0),
		}
	}
}

/// One drifting cloud, expressed relative to the surface size.
#[derive(Clone, Debug)]
pub struct CloudStyle {
	/// Initial center as fractions of (width, height).
	pub anchor: (f64, f64),
	/// Radius as a fraction of `max(width, height)`.
	pub radius_factor: f64,
	pub color: Color,
	/// Drift in pixels per frame.
	pub velocity: (f64, f64),
}

/// Soft halo drawn around a particle.
#[derive(Clone, Copy, Debug)]
pub struct Glow {
	pub blur: f64,
	pub color: Color,
}

/// A batch of particles sharing a size range.
#[derive(Clone, Debug)]
pub struct ParticleTier {
	pub count: usize,
	pub size_min: f64,
	pub size_max: f64,
	pub glow: Option<Glow>,
}

impl ParticleTier {
	pub const fn empty() -> Self {
		Self {
			count: 0,
			size_min: 0.0,
			size_max: 0.0,
			glow: None,
		}
	}
}

/// Pointer repulsion parameters.
#[derive(Clone, Copy, Debug)]
pub struct Repulsion {
	/// Distance in pixels beyond which the pointer has no effect.
	pub radius: f64,
	/// Push in pixels per frame at zero distance.
	pub strength: f64,
}

/// Shooting star accent configuration.
#[derive(Clone, Copy, Debug)]
pub struct ShootingStarStyle {
	/// Minimum frame-clock time between spawns.
	pub interval_ms: f64,
	/// Life lost per frame (life starts at 1.0).
	pub life_step: f64,
	/// Tail length as a multiple of the velocity vector.
	pub tail_length: f64,
	pub line_width: f64,
	pub color: Color,
}

/// Complete configuration of one nebula background.
#[derive(Clone, Debug)]
pub struct NebulaTheme {
	pub name: &'static str,
	/// Base fill. `None` clears the canvas to transparent each frame.
	pub base: Option<Color>,
	pub clouds: Vec<CloudStyle>,
	/// How far past each edge (fraction of that dimension) a cloud may drift.
	pub cloud_margin: f64,
	pub blend: BlendMode,
	pub major: ParticleTier,
	pub dust: ParticleTier,
	pub particle_color: Color,
	/// Velocity components are drawn from `[-drift / 2, drift / 2)`.
	pub drift: f64,
	/// Shimmer oscillates between these alpha bounds.
	pub shimmer_bounds: (f64, f64),
	/// Per-frame shimmer rate range `(min, max)`.
	pub shimmer_rate: (f64, f64),
	pub repel: Repulsion,
	pub shooting_star: Option<ShootingStarStyle>,
	/// Composite the whole canvas onto the card with CSS `mix-blend-mode: multiply`.
	pub mix_blend_multiply: bool,
}

impl NebulaTheme {
	/// Light sky-blue nebula with two particle tiers and shooting stars (default)
	pub fn sky() -> Self {
		Self {
			name: "sky",
			base: Some(Color::rgb(240, 249, 255)), // sky-50
			clouds: vec![
				CloudStyle {
					anchor: (0.2, 0.3),
					radius_factor: 0.7,
					color: Color::rgb(224, 242, 254), // sky-100
					velocity: (0.1, 0.05),
				},
				CloudStyle {
					anchor: (0.8, 0.7),
					radius_factor: 0.8,
					color: Color::rgb(186, 230, 253), // sky-200
					velocity: (-0.08, 0.08),
				},
				CloudStyle {
					anchor: (0.5, 0.5),
					radius_factor: 0.6,
					color: Color::rgb(219, 234, 254), // blue-100
					velocity: (0.05, -0.1),
				},
			],
			cloud_margin: 0.2,
			blend: BlendMode::Multiply,
			major: ParticleTier {
				count: 15,
				size_min: 1.0,
				size_max: 3.0,
				glow: Some(Glow {
					blur: 4.0,
					color: Color::rgba(14, 165, 233, 0.5),
				}),
			},
			dust: ParticleTier {
				count: 200,
				size_min: 0.5,
				size_max: 2.0,
				glow: None,
			},
			particle_color: Color::rgb(56, 189, 248), // sky-400
			drift: 0.2,
			shimmer_bounds: (0.3, 1.0),
			shimmer_rate: (0.005, 0.025),
			repel: Repulsion {
				radius: 150.0,
				strength: 2.0,
			},
			shooting_star: Some(ShootingStarStyle {
				interval_ms: 8000.0,
				life_step: 0.02,
				tail_length: 20.0,
				line_width: 2.0,
				color: Color::rgb(14, 165, 233), // sky-500
			}),
			mix_blend_multiply: false,
		}
	}

	/// Sparse translucent mist drawn over the card's own background
	pub fn mist() -> Self {
		Self {
			name: "mist",
			base: None,
			clouds: vec![
				CloudStyle {
					anchor: (0.3, 0.3),
					radius_factor: 0.6,
					color: Color::rgba(224, 242, 254, 0.5),
					velocity: (0.05, 0.02),
				},
				CloudStyle {
					anchor: (0.7, 0.7),
					radius_factor: 0.7,
					color: Color::rgba(186, 230, 253, 0.3),
					velocity: (-0.04, 0.04),
				},
				CloudStyle {
					anchor: (0.5, 0.5),
					radius_factor: 0.5,
					color: Color::rgba(125, 211, 252, 0.2),
					velocity: (0.02, -0.05),
				},
			],
			cloud_margin: 0.5,
			blend: BlendMode::Normal,
			major: ParticleTier::empty(),
			dust: ParticleTier {
				count: 30,
				size_min: 0.5,
				size_max: 2.5,
				glow: None,
			},
			particle_color: Color::rgb(14, 165, 233),
			drift: 0.3,
			shimmer_bounds: (0.2, 0.8),
			shimmer_rate: (0.005, 0.025),
			repel: Repulsion {
				radius: 150.0,
				strength: 2.0,
			},
			shooting_star: None,
			mix_blend_multiply: true,
		}
	}

	/// Total particles across both tiers.
	pub fn particle_count(&self) -> usize {
		self.major.count + self.dust.count
	}

	/// Glow of the tier a particle belongs to.
	pub fn glow_for(&self, major: bool) -> Option<Glow> {
		if major { self.major.glow } else { self.dust.glow }
	}
}

impl Default for NebulaTheme {
	fn default() -> Self {
		Self::sky()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(240, 249, 255).to_css(), "#f0f9ff");
		assert_eq!(
			Color::rgb(14, 165, 233).with_alpha(0.5).to_css(),
			"rgba(14, 165, 233, 0.5)"
		);
	}

	#[test]
	fn neutral_stop_matches_blend_mode() {
		assert_eq!(BlendMode::Multiply.neutral(), Color::rgb(255, 255, 255));
		assert_eq!(BlendMode::Normal.neutral().a, 0.0);
		assert_eq!(BlendMode::Multiply.composite_op(), "multiply");
	}

	#[test]
	fn presets_have_three_clouds() {
		for theme in [NebulaTheme::sky(), NebulaTheme::mist()] {
			assert_eq!(theme.clouds.len(), 3, "{}", theme.name);
			let (lo, hi) = theme.shimmer_bounds;
			assert!(lo < hi);
		}
		assert_eq!(NebulaTheme::sky().particle_count(), 215);
		assert_eq!(NebulaTheme::mist().particle_count(), 30);
	}

	#[test]
	fn glow_is_chosen_per_tier() {
		let mut theme = NebulaTheme::sky();
		assert!(theme.glow_for(true).is_some());
		assert!(theme.glow_for(false).is_none());

		let dust_glow = Glow {
			blur: 3.0,
			color: Color::rgb(14, 165, 233),
		};
		theme.dust.glow = Some(dust_glow);
		assert_eq!(theme.glow_for(false).map(|g| g.blur), Some(3.0));
		assert_eq!(theme.glow_for(true).map(|g| g.blur), theme.major.glow.map(|g| g.blur));
	}
}
