//! Small decorative pieces: avatar, floating cat, wind chime.

use leptos::prelude::*;
use log::debug;

use crate::types::Avatar;

/// Round avatar that swaps to its fallback source once if loading fails.
#[component]
pub fn AvatarImage(avatar: Avatar) -> impl IntoView {
	let (src, set_src) = signal(avatar.initial_source().to_string());
	let alt = avatar.alt.clone();

	let on_error = move |_| {
		let failed = src.get_untracked();
		if let Some(next) = avatar.after_error(&failed) {
			debug!("avatar: '{}' failed, using '{}'", failed, next);
			set_src.set(next.to_string());
		}
	};

	view! { <img src=move || src.get() alt=alt on:error=on_error class="w-full h-full object-cover" /> }
}

/// Mascot pinned to the bottom-right corner; perks up on hover.
#[component]
pub fn FloatingCat() -> impl IntoView {
	let (hovered, set_hovered) = signal(false);

	view! {
		<div
			class=move || {
				if hovered.get() {
					"fixed bottom-8 right-8 z-50 cursor-pointer transition-transform duration-300 scale-110"
				} else {
					"fixed bottom-8 right-8 z-50 cursor-pointer transition-transform duration-300 scale-100 animate-float"
				}
			}
			on:mouseenter=move |_| set_hovered.set(true)
			on:mouseleave=move |_| set_hovered.set(false)
			title="Meow!"
		>
			<div class="relative w-16 h-16">
				<svg viewBox="0 0 200 200" class="w-full h-full drop-shadow-lg">
					<g transform=move || if hovered.get() { "translate(0, -5)" } else { "translate(0, 0)" }>
						<path
							d="M160,150 Q190,120 170,100 T150,120"
							fill="none"
							stroke="#333"
							stroke-width="12"
							stroke-linecap="round"
							class="origin-bottom-left animate-wiggle"
							style=move || {
								if hovered.get() {
									"animation-play-state: running"
								} else {
									"animation-play-state: paused"
								}
							}
						/>
						<ellipse cx="100" cy="140" rx="60" ry="45" fill="#333" />
						<circle cx="100" cy="90" r="45" fill="#333" />
						<polygon points="70,60 60,20 100,50" fill="#333" />
						<polygon points="130,60 140,20 100,50" fill="#333" />
						<polygon points="72,58 65,30 90,52" fill="pink" class="opacity-60" />
						<polygon points="128,58 135,30 110,52" fill="pink" class="opacity-60" />
						<circle cx="85" cy="85" r="6" fill="#fff" class=move || if hovered.get() { "animate-pulse" } else { "" } />
						<circle cx="115" cy="85" r="6" fill="#fff" class=move || if hovered.get() { "animate-pulse" } else { "" } />
						<circle cx="85" cy="85" r="2" fill="#000" />
						<circle cx="115" cy="85" r="2" fill="#000" />
						<polygon points="95,95 105,95 100,102" fill="#ffb6c1" />
						<line x1="70" y1="95" x2="40" y2="90" stroke="#fff" stroke-width="2" />
						<line x1="70" y1="100" x2="40" y2="105" stroke="#fff" stroke-width="2" />
						<line x1="130" y1="95" x2="160" y2="90" stroke="#fff" stroke-width="2" />
						<line x1="130" y1="100" x2="160" y2="105" stroke="#fff" stroke-width="2" />
						<g class=move || {
							if hovered.get() {
								"transition-opacity duration-300 opacity-100"
							} else {
								"transition-opacity duration-300 opacity-0"
							}
						}>
							<path
								d="M150,40 Q170,40 170,60 Q170,80 150,80 Q140,80 130,70 L120,80 L125,65 Q110,65 110,50 Q110,40 150,40"
								fill="white"
								stroke="#333"
								stroke-width="2"
							/>
							<text x="140" y="65" font-family="Arial" font-size="14" fill="#333" text-anchor="middle">
								"Meow~"
							</text>
						</g>
					</g>
				</svg>
			</div>
		</div>
	}
}

/// Hanging glass wind chime in the top-right corner (hidden on small screens).
#[component]
pub fn WindChime() -> impl IntoView {
	view! {
		<div class="fixed top-0 right-10 z-40 pointer-events-none hidden sm:block">
			<div class="relative origin-top animate-sway">
				<div class="absolute left-1/2 -translate-x-1/2 top-0 w-[1px] h-16 bg-sky-200"></div>
				<div class="absolute top-16 left-1/2 -translate-x-1/2 w-14 h-12 bg-gradient-to-br from-white/90 to-sky-100/80 backdrop-blur-sm rounded-t-full border border-white/50 shadow-lg z-10 flex items-end justify-center">
					<div class="w-full h-1 bg-sky-100 rounded-full opacity-50 mb-1"></div>
				</div>
				<div class="absolute left-1/2 -translate-x-1/2 top-20 w-[1px] h-20 bg-sky-200 z-0"></div>
				<div class="absolute left-1/2 -translate-x-1/2 top-40 w-10 h-24 bg-white/90 border border-sky-100 shadow-sm origin-top animate-wiggle flex items-center justify-center rounded-sm">
					<span
						class="text-xs text-sky-400 font-serif tracking-widest opacity-80"
						style="writing-mode: vertical-rl"
					>
						"風鈴"
					</span>
				</div>
			</div>
		</div>
	}
}
