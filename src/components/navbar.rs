use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::theme::ThemeMode;

/// Height of the fixed navbar; anchor targets land just below it.
pub const NAVBAR_OFFSET: f64 = 64.0;

const LINKS: &[(&str, &str)] = &[
	("Philosophy", "#philosophy"),
	("About", "#about"),
	("Projects", "#projects"),
	("Contact", "#contact"),
];

/// Document-space scroll position that puts an element `offset` below the top.
pub fn scroll_target(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
	(element_top + scroll_y - offset).max(0.0)
}

fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

fn push_hash(window: &web_sys::Window, href: &str) {
	if let Ok(history) = window.history() {
		if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(href)) {
			warn!("Could not push {href} to history: {:?}", err);
		}
	}
}

/// Smooth-scroll to the element matching `href` (a `#id` selector) and record
/// the hash in history.
pub fn scroll_to_anchor(href: &str, offset: f64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let Ok(Some(target)) = document.query_selector(href) else {
		warn!("No element matches anchor {href}");
		return;
	};
	let top = scroll_target(
		target.get_bounding_client_rect().top(),
		window.scroll_y().unwrap_or(0.0),
		offset,
	);
	smooth_scroll_to(&window, top);
	push_hash(&window, href);
}

fn scroll_to_top() {
	let Some(window) = web_sys::window() else {
		return;
	};
	smooth_scroll_to(&window, 0.0);
	push_hash(&window, "#top");
}

#[component]
pub fn Navbar(theme: Signal<ThemeMode>, set_theme: WriteSignal<ThemeMode>) -> impl IntoView {
	let toggle_label = move || {
		if theme.get().is_dark() {
			"Switch to light mode"
		} else {
			"Switch to dark mode"
		}
	};

	view! {
		<header class="navbar">
			<nav class="navbar-inner container">
				<a
					href="#top"
					class="navbar-brand"
					on:click=move |ev: MouseEvent| {
						ev.prevent_default();
						scroll_to_top();
					}
				>
					"Nahuel Arriola"
				</a>

				<div class="navbar-actions">
					<ul class="navbar-links">
						{LINKS
							.iter()
							.map(|&(label, href)| {
								view! {
									<li>
										<a
											href=href
											on:click=move |ev: MouseEvent| {
												ev.prevent_default();
												scroll_to_anchor(href, NAVBAR_OFFSET);
											}
										>
											{label}
										</a>
									</li>
								}
							})
							.collect_view()}
					</ul>

					<button
						type="button"
						class="theme-toggle"
						aria-label=toggle_label
						on:click=move |_| set_theme.update(|t| *t = t.toggled())
					>
						{move || if theme.get().is_dark() { "☀" } else { "☾" }}
					</button>
				</div>
			</nav>
		</header>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn target_sits_below_navbar() {
		assert_eq!(scroll_target(500.0, 1200.0, NAVBAR_OFFSET), 1636.0);
		assert_eq!(scroll_target(-300.0, 1200.0, NAVBAR_OFFSET), 836.0);
	}

	#[test]
	fn target_never_scrolls_above_page() {
		assert_eq!(scroll_target(20.0, 0.0, NAVBAR_OFFSET), 0.0);
	}

	#[test]
	fn fixed_navbar_has_translucent_backdrop() {
		let css = include_str!("../../style/main.css");
		let rule = css
			.lines()
			.find(|line| line.starts_with(".navbar {"))
			.expect(".navbar rule present");
		assert!(rule.contains("position: fixed"));
		assert!(rule.contains("background: color-mix(in srgb, var(--bg) 80%, transparent)"));
	}

	#[test]
	fn links_are_hash_anchors() {
		assert!(LINKS.iter().all(|(_, href)| href.starts_with('#') && href.len() > 1));
	}
}
