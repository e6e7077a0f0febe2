//! Canvas rendering for the nebula background.
//!
//! Layers are drawn back to front:
//! 1. Base fill (or a transparent clear)
//! 2. Clouds, composed with the theme's blend mode
//! 3. Particles, each with its tier's glow if any
//! 4. The shooting star, if one is active

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NebulaState;
use super::theme::NebulaTheme;

/// Renders one frame of the nebula to the canvas.
pub fn render(state: &NebulaState, ctx: &CanvasRenderingContext2d) {
	let theme = &state.theme;

	draw_base(state, ctx, theme);
	compose_clouds(state, ctx, theme);
	draw_particles(state, ctx, theme);
	draw_shooting_star(state, ctx, theme);
}

fn draw_base(state: &NebulaState, ctx: &CanvasRenderingContext2d, theme: &NebulaTheme) {
	match theme.base {
		Some(color) => {
			ctx.set_fill_style_str(&color.to_css());
			ctx.fill_rect(0.0, 0.0, state.width, state.height);
		}
		None => ctx.clear_rect(0.0, 0.0, state.width, state.height),
	}
}

/// Paints every cloud as a radial gradient from its color to the blend
/// mode's neutral stop, so overlapping clouds tint without occluding the base.
fn compose_clouds(state: &NebulaState, ctx: &CanvasRenderingContext2d, theme: &NebulaTheme) {
	let _ = ctx.set_global_composite_operation(theme.blend.composite_op());
	let neutral = theme.blend.neutral().to_css();

	for c in &state.clouds {
		if c.radius <= 0.0 {
			continue;
		}
		let Ok(gradient) = ctx.create_radial_gradient(c.x, c.y, 0.0, c.x, c.y, c.radius) else {
			continue;
		};
		let _ = gradient.add_color_stop(0.0, &c.color.to_css());
		let _ = gradient.add_color_stop(1.0, &neutral);

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.begin_path();
		let _ = ctx.arc(c.x, c.y, c.radius, 0.0, PI * 2.0);
		ctx.fill();
	}

	let _ = ctx.set_global_composite_operation("source-over");
}

fn draw_particles(state: &NebulaState, ctx: &CanvasRenderingContext2d, theme: &NebulaTheme) {
	let color = theme.particle_color;

	for p in &state.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&color.with_alpha(p.shimmer.abs()).to_css());

		match theme.glow_for(p.major) {
			Some(g) => {
				ctx.set_shadow_blur(g.blur);
				ctx.set_shadow_color(&g.color.to_css());
				ctx.fill();
				ctx.set_shadow_blur(0.0);
			}
			None => ctx.fill(),
		}
	}
}

fn draw_shooting_star(state: &NebulaState, ctx: &CanvasRenderingContext2d, theme: &NebulaTheme) {
	let (Some(star), Some(style)) = (&state.shooting_star, theme.shooting_star) else {
		return;
	};

	let (tail_x, tail_y) = star.tail(style.tail_length);
	let gradient = ctx.create_linear_gradient(star.x, star.y, tail_x, tail_y);
	let _ = gradient.add_color_stop(0.0, &style.color.with_alpha(star.life).to_css());
	let _ = gradient.add_color_stop(1.0, "transparent");

	ctx.begin_path();
	ctx.move_to(star.x, star.y);
	ctx.line_to(tail_x, tail_y);
	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_line_width(style.line_width);
	ctx.set_line_cap("round");
	ctx.stroke();
}
