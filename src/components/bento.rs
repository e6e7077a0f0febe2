//! Bento grid card with an optional nebula background.

use leptos::prelude::*;

use super::nebula::{NebulaCanvas, NebulaTheme};

const CARD_CLASS: &str = "relative overflow-hidden backdrop-blur-md rounded-3xl p-6 shadow-sm border border-sky-100 \
	hover:shadow-[0_10px_40px_-10px_rgba(14,165,233,0.2)] hover:border-sky-300 hover:ring-2 hover:ring-sky-100 \
	transition-all duration-300 hover:-translate-y-1";

/// Nebula layer wrapper, dimmed behind the card content.
const EFFECT_LAYER_CLASS: &str = "absolute inset-0 z-0 opacity-60";

/// A grid cell. Content sits above the nebula canvas when the effect is on.
#[component]
pub fn BentoCard(
	#[prop(optional, into)] title: Option<String>,
	#[prop(into, default = "col-span-1".into())] col_span: String,
	#[prop(into, default = "row-span-1".into())] row_span: String,
	#[prop(optional, into)] class: String,
	#[prop(optional)] theme: Option<NebulaTheme>,
	#[prop(default = true)] enable_effect: bool,
	children: Children,
) -> impl IntoView {
	let surface = if enable_effect { "bg-white" } else { "bg-white/80" };
	let card_class = format!("{CARD_CLASS} {col_span} {row_span} {class} {surface}");

	view! {
		<div class=card_class>
			{enable_effect
				.then(move || {
					view! {
						<div class=EFFECT_LAYER_CLASS>
							<NebulaCanvas theme=theme.unwrap_or_default() />
						</div>
					}
				})}
			<div class="relative z-10 h-full flex flex-col">
				{title
					.map(|t| {
						view! { <h2 class="text-xl font-bold mb-4 text-slate-700 tracking-tight">{t}</h2> }
					})}
				<div class="h-full">{children()}</div>
			</div>
		</div>
	}
}
