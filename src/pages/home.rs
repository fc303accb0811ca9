use leptos::prelude::*;
use log::info;

use crate::components::constellation::ConstellationBackground;
use crate::components::navbar::{NAVBAR_OFFSET, Navbar, scroll_to_anchor};
use crate::components::sections::{
	AboutSection, Footer, PhilosophySection, ProjectsSection, SectionDivider, StackSection,
};
use crate::theme::{ThemeMode, apply_theme, initial_theme};

#[component]
fn Hero(theme: Signal<ThemeMode>) -> impl IntoView {
	view! {
		<section id="top" class="hero">
			<ConstellationBackground theme=theme />

			<div class="container hero-content">
				<span class="eyebrow">"FULL STACK WEB DEVELOPER"</span>
				<h1>"I build scalable, maintainable, results-driven applications."</h1>
				<p class="muted">
					"Graduate of the Universidad Tecnológica Nacional (UTN), with a solid software development background."
				</p>
				<div class="hero-actions">
					<a
						href="#projects"
						class="button primary"
						on:click=move |ev: web_sys::MouseEvent| {
							ev.prevent_default();
							scroll_to_anchor("#projects", NAVBAR_OFFSET);
						}
					>
						"See projects"
					</a>
					<a
						href="#contact"
						class="button"
						on:click=move |ev: web_sys::MouseEvent| {
							ev.prevent_default();
							scroll_to_anchor("#contact", NAVBAR_OFFSET);
						}
					>
						"Contact"
					</a>
				</div>
			</div>
		</section>
	}
}

/// Portfolio page; owns the theme for everything below it.
#[component]
pub fn Home() -> impl IntoView {
	let (theme, set_theme) = signal(initial_theme());
	info!("Starting in {} mode", theme.get_untracked());

	Effect::new(move |_| apply_theme(theme.get()));

	let theme: Signal<ThemeMode> = theme.into();
	view! {
		<main class="page" style=move || theme.get().inline_style()>
			<Navbar theme=theme set_theme=set_theme />
			<Hero theme=theme />
			<PhilosophySection />
			<SectionDivider />
			<AboutSection />
			<SectionDivider />
			<ProjectsSection />
			<SectionDivider />
			<StackSection />
			<SectionDivider />
			<Footer />
		</main>
	}
}
