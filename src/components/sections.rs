//! Static content sections below the hero.

use leptos::prelude::*;

pub struct Project {
	pub title: &'static str,
	pub problem: &'static str,
	pub solution: &'static str,
	pub decisions: &'static str,
	pub result: &'static str,
	pub tech: &'static [&'static str],
}

pub struct StackGroup {
	pub title: &'static str,
	pub items: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[Project {
	title: "Ampuero Accounting",
	problem: "The firm tracked purchases and sales in spreadsheets, which invited manual entry errors, made tax breakdowns hard to get right and left data open to accidental edits.",
	solution: "A web system that centralizes receipt entry, splits taxed and untaxed amounts automatically and produces clear tax reports for day-to-day accounting.",
	decisions: "Validation and a strict data model keep entry errors out. A controlled web environment replaces loose spreadsheets, protecting data integrity while staying easy to use and ready to grow.",
	result: "A working system that cuts entry errors, speeds up tax reporting and gives clients a modern, professional image of the firm.",
	tech: &["React", "Node.js", "Express", "MySQL", "JWT"],
}];

pub const STACK: &[StackGroup] = &[
	StackGroup {
		title: "Frontend",
		items: &["JavaScript / TypeScript", "Angular", "React", "Next.js"],
	},
	StackGroup {
		title: "Backend",
		items: &[".NET (ASP.NET)", "MySQL", "PostgreSQL"],
	},
	StackGroup {
		title: "Cloud & DevOps",
		items: &["Docker", "Google Cloud Platform"],
	},
	StackGroup {
		title: "Software Development",
		items: &["Full Stack", "Scalable architectures", "Data integration", "Production deployments"],
	},
];

pub const CONTACT_LINKS: &[(&str, &str)] = &[
	("GitHub", "https://github.com/ArriolaXY"),
	("LinkedIn", "https://www.linkedin.com/in/nahuel-arriola-6794b9355/"),
	("WhatsApp", "https://wa.me/543816439602"),
	("Email", "mailto:nahuel.arriola777@gmail.com"),
];

/// Links leaving the site open in a new tab.
pub fn is_external(href: &str) -> bool {
	href.starts_with("http://") || href.starts_with("https://")
}

#[component]
pub fn SectionDivider() -> impl IntoView {
	view! { <div class="section-divider" /> }
}

#[component]
fn SectionHeader(id: &'static str, title: &'static str) -> impl IntoView {
	view! {
		<header class="section-header">
			<h2 id=id>{title}</h2>
			<div class="section-accent" />
		</header>
	}
}

#[component]
pub fn PhilosophySection() -> impl IntoView {
	view! {
		<section id="philosophy" class="section" aria-labelledby="philosophy-title">
			<div class="container content two-column">
				<SectionHeader id="philosophy-title" title="Philosophy" />
				<div>
					<blockquote class="quote">
						"“Good software isn't only noticed at launch, but as time goes by.”"
					</blockquote>
					<p class="muted">
						"As a full stack web developer I build modern, fast and secure web applications designed to grow with your project, with a focus on performance, scalability and maintainability."
					</p>
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn AboutSection() -> impl IntoView {
	view! {
		<section id="about" class="section section-alt" aria-labelledby="about-title">
			<div class="container content two-column">
				<SectionHeader id="about-title" title="About" />
				<div class="muted stacked">
					<p>
						"I build functional, clear web applications meant to grow, working across frontend and backend so every part of the system stays understandable and useful to the business."
					</p>
					<p>
						"I approach projects by understanding the problem before writing code, choosing the right tool for each case rather than adding needless complexity."
					</p>
				</div>
			</div>
		</section>
	}
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
	let blocks = [
		("THE PROBLEM", project.problem, false),
		("THE SOLUTION", project.solution, false),
		("TECHNICAL DECISIONS", project.decisions, false),
		("RESULT", project.result, true),
	];
	view! {
		<article class="card project-card">
			<h3>{project.title}</h3>
			{blocks
				.into_iter()
				.map(|(label, text, highlight)| {
					view! {
						<div class="project-block">
							<p class="label">{label}</p>
							<p class:highlight=highlight>{text}</p>
						</div>
					}
				})
				.collect_view()}
			<div class="tags">
				{project.tech.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect_view()}
			</div>
		</article>
	}
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
	view! {
		<section id="projects" class="section" aria-labelledby="projects-title">
			<div class="container content">
				<SectionHeader id="projects-title" title="Featured Projects" />
				<div class="grid">
					{PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn StackSection() -> impl IntoView {
	view! {
		<section id="stack" class="section section-alt" aria-labelledby="stack-title">
			<div class="container content">
				<SectionHeader id="stack-title" title="Tech Stack" />
				<div class="grid">
					{STACK
						.iter()
						.map(|group| {
							view! {
								<article class="card stack-card">
									<h3>{group.title}</h3>
									<ul>
										{group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
									</ul>
								</article>
							}
						})
						.collect_view()}
				</div>
				<EducationSection />
			</div>
		</section>
	}
}

#[component]
fn EducationSection() -> impl IntoView {
	view! {
		<section class="education" aria-labelledby="education-title">
			<SectionHeader id="education-title" title="Education" />
			<div class="card">
				<h3>"Universidad Tecnológica Nacional"</h3>
				<p class="muted">"Higher Technical Degree in Programming"</p>
				<p class="accent">"2022–2025"</p>
			</div>
		</section>
	}
}

#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer id="contact" class="section footer" aria-labelledby="footer-title">
			<div class="container content">
				<h3 id="footer-title">"Nahuel Arriola"</h3>
				<p class="muted">"Full stack web developer"</p>
				<nav aria-label="Contact links">
					<ul class="footer-links">
						{CONTACT_LINKS
							.iter()
							.map(|&(label, href)| {
								let external = is_external(href);
								view! {
									<li>
										<a
											href=href
											aria-label=label
											target=external.then_some("_blank")
											rel=external.then_some("noopener noreferrer")
										>
											{label}
										</a>
									</li>
								}
							})
							.collect_view()}
					</ul>
				</nav>
				<div class="section-divider" />
				<p class="muted small">"© 2026 Nahuel Arriola. All rights reserved."</p>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn external_links_are_detected() {
		assert!(is_external("https://github.com/ArriolaXY"));
		assert!(is_external("http://example.com"));
		assert!(!is_external("#contact"));
		assert!(!is_external("mailto:someone@example.com"));
	}

	#[test]
	fn content_tables_are_filled() {
		assert!(!PROJECTS.is_empty());
		assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
		assert!(STACK.iter().all(|g| !g.items.is_empty()));
	}

	#[test]
	fn contact_links_cover_every_channel() {
		let labels: Vec<_> = CONTACT_LINKS.iter().map(|(label, _)| *label).collect();
		assert_eq!(labels, ["GitHub", "LinkedIn", "WhatsApp", "Email"]);
		for (label, href) in CONTACT_LINKS {
			if *label == "Email" {
				assert!(href.starts_with("mailto:"));
				assert!(!is_external(href));
			} else {
				assert!(is_external(href), "{label} should open in a new tab");
			}
		}
	}
}
