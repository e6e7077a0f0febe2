//! Main page content: the bento grid built from a [`Profile`].

use leptos::prelude::*;

use super::bento::BentoCard;
use super::decor::{AvatarImage, FloatingCat, WindChime};
use super::nebula::NebulaTheme;
use crate::types::Profile;

const SOCIAL_CLASS: &str = "flex items-center gap-3 px-6 py-3 rounded-full bg-white/20 hover:bg-white \
	transition-all duration-300 hover:scale-105 backdrop-blur-md w-full sm:w-auto justify-center \
	border border-white/20 text-white hover:text-blue-600 hover:shadow-md";

/// The portfolio grid with its floating decorations.
#[component]
pub fn Portfolio(profile: Profile) -> impl IntoView {
	let Profile {
		name,
		role,
		tagline,
		highlight,
		avatar,
		music,
		anime,
		socials,
		footer,
	} = profile;

	view! {
		<div class="min-h-screen w-full relative bg-gradient-to-br from-slate-50 via-sky-50 to-white p-4 sm:p-8 font-sans selection:bg-sky-200">
			<WindChime />

			<main class="max-w-5xl mx-auto mt-4 sm:mt-12 mb-24 relative z-10">
				<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 auto-rows-[minmax(180px,auto)]">
					<BentoCard col_span="col-span-1 md:col-span-2" class="group shadow-lg shadow-sky-100">
						<div class="flex flex-row items-center gap-4 sm:gap-8 h-full">
							<div class="relative shrink-0">
								<div class="w-24 h-24 sm:w-32 sm:h-32 rounded-full overflow-hidden border-4 border-white transition-transform duration-500 group-hover:rotate-3 group-hover:scale-105">
									<AvatarImage avatar=avatar />
								</div>
								<div
									class="absolute bottom-1 right-1 bg-sky-400 w-5 h-5 rounded-full border-2 border-white animate-pulse shadow-sm"
									title="Online"
								></div>
							</div>
							<div class="flex flex-col justify-center h-full space-y-2">
								<div>
									<h1 class="text-3xl sm:text-4xl font-black text-slate-800 tracking-tight leading-tight">
										{name}
									</h1>
									<div class="inline-block px-3 py-1 rounded-full bg-sky-100/50 border border-sky-200 text-xs font-bold text-sky-600 uppercase tracking-wider mt-2">
										{role}
									</div>
								</div>
								<p class="text-slate-600 text-sm sm:text-base font-medium leading-relaxed max-w-xs sm:max-w-sm">
									{tagline}
									{highlight
										.map(|h| {
											view! {
												" "
												<span class="text-sky-500 font-bold underline decoration-sky-300 decoration-2 underline-offset-2">
													{h}
												</span>
											}
										})}
								</p>
							</div>
						</div>
					</BentoCard>

					<BentoCard title="Music (Japanese)">
						<div class="space-y-3">
							{music
								.into_iter()
								.map(|item| {
									view! {
										<div class="flex items-center p-3 bg-white/50 rounded-xl border border-sky-100/50 hover:border-sky-200 hover:bg-white/80 transition-all cursor-default group shadow-sm">
											<div class="w-8 h-8 rounded-full bg-white flex items-center justify-center text-sky-400 mr-3 shadow-sm group-hover:scale-110 transition-transform border border-sky-50">
												<i class="fas fa-music text-xs"></i>
											</div>
											<span class="font-medium text-slate-700 text-sm">{item}</span>
										</div>
									}
								})
								.collect_view()}
						</div>
					</BentoCard>

					<BentoCard title="Anime Favorites" theme=NebulaTheme::mist()>
						<ul class="space-y-2">
							{anime
								.into_iter()
								.map(|item| {
									view! {
										<li class="flex items-center justify-between p-2 border-b border-sky-100 last:border-0 hover:bg-white/40 rounded-lg transition-colors">
											<span class="text-slate-700 font-medium text-sm">{item.name}</span>
											<i class=format!("fas {} text-sky-400 opacity-80", item.icon)></i>
										</li>
									}
								})
								.collect_view()}
						</ul>
					</BentoCard>

					<BentoCard
						title="Get in Touch"
						col_span="col-span-1 md:col-span-2"
						enable_effect=false
						class="bg-gradient-to-r from-cyan-500 to-blue-600 text-white shadow-xl shadow-cyan-200/50 border-none"
					>
						<div class="flex flex-col sm:flex-row items-center justify-around h-full gap-4">
							{socials
								.into_iter()
								.map(|link| {
									let external = !link.url.starts_with("mailto:");
									view! {
										<a
											href=link.url
											target=external.then_some("_blank")
											rel=external.then_some("noreferrer")
											class=SOCIAL_CLASS
										>
											<i class=format!("{} text-2xl", link.icon_class)></i>
											<span class="font-bold">{link.platform}</span>
										</a>
									}
								})
								.collect_view()}
						</div>
					</BentoCard>
				</div>

				{footer
					.map(|text| {
						view! {
							<div class="flex justify-center mt-16 mb-8">
								<div class="px-8 py-3 rounded-full bg-white/60 backdrop-blur-md border border-sky-100 shadow-sm hover:bg-white/80 transition-all duration-500 cursor-default">
									<p class="text-sm font-serif italic text-slate-500 hover:text-sky-600 transition-colors duration-300">
										{text}
									</p>
								</div>
							</div>
						}
					})}
			</main>

			<FloatingCat />
		</div>
	}
}
