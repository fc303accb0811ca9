//! Light/dark theme state: preference parsing, persistence and document wiring.
//!
//! The preference lives in `localStorage` under [`THEME_KEY`] as the plain
//! strings `"dark"` or `"light"`. Every browser call here degrades to a
//! sensible default instead of failing.

use std::fmt;

use log::warn;
use web_sys::{Storage, Window};

/// Storage key holding the persisted preference.
pub const THEME_KEY: &str = "na_theme";

/// Color scheme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
	#[default]
	Dark,
	Light,
}

impl ThemeMode {
	/// Parse a stored preference. Unknown values are rejected.
	pub fn from_preference(value: &str) -> Option<Self> {
		match value {
			"dark" => Some(Self::Dark),
			"light" => Some(Self::Light),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dark => "dark",
			Self::Light => "light",
		}
	}

	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Dark => Self::Light,
			Self::Light => Self::Dark,
		}
	}

	/// Page-level CSS custom properties for this theme.
	pub fn css_vars(self) -> &'static [(&'static str, &'static str)] {
		match self {
			Self::Dark => &[
				("--bg", "#05060c"),
				("--bg2", "#0a0b10"),
				("--bg3", "#090b18"),
				("--card", "rgba(255,255,255,0.02)"),
				("--text", "rgb(248 250 252)"),
				("--muted", "rgb(148 163 184)"),
				("--muted2", "rgb(100 116 139)"),
				("--border", "rgba(255,255,255,0.10)"),
				("--grid", "rgba(255,255,255,0.03)"),
			],
			Self::Light => &[
				("--bg", "#f8fafc"),
				("--bg2", "#ffffff"),
				("--bg3", "#eef2ff"),
				("--card", "rgba(2,6,23,0.03)"),
				("--text", "rgb(15 23 42)"),
				("--muted", "rgb(51 65 85)"),
				("--muted2", "rgb(71 85 105)"),
				("--border", "rgba(2,6,23,0.10)"),
				("--grid", "rgba(2,6,23,0.05)"),
			],
		}
	}

	/// The CSS variables joined into an inline `style` attribute value.
	pub fn inline_style(self) -> String {
		self.css_vars()
			.iter()
			.map(|(name, value)| format!("{name}: {value};"))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Pick the starting theme from a saved preference and the system color scheme.
///
/// A valid saved preference wins. Otherwise a dark system scheme gives
/// [`ThemeMode::Dark`] and anything else (including no media query support)
/// gives [`ThemeMode::Light`].
pub fn resolve_initial(saved: Option<&str>, prefers_dark: bool) -> ThemeMode {
	saved
		.and_then(ThemeMode::from_preference)
		.unwrap_or(if prefers_dark {
			ThemeMode::Dark
		} else {
			ThemeMode::Light
		})
}

fn local_storage(window: &Window) -> Option<Storage> {
	window.local_storage().ok().flatten()
}

fn system_prefers_dark(window: &Window) -> bool {
	window
		.match_media("(prefers-color-scheme: dark)")
		.ok()
		.flatten()
		.is_some_and(|query| query.matches())
}

/// Initial theme for this session. Without a window the page renders dark.
pub fn initial_theme() -> ThemeMode {
	let Some(window) = web_sys::window() else {
		return ThemeMode::Dark;
	};
	let saved = local_storage(&window).and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
	resolve_initial(saved.as_deref(), system_prefers_dark(&window))
}

/// Toggle the `dark` class on the root element and persist the preference.
pub fn apply_theme(theme: ThemeMode) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(root) = window.document().and_then(|doc| doc.document_element()) {
		if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
			warn!("Could not toggle document theme class: {:?}", err);
		}
	}
	match local_storage(&window) {
		Some(storage) => {
			if let Err(err) = storage.set_item(THEME_KEY, theme.as_str()) {
				warn!("Could not persist theme preference: {:?}", err);
			}
		}
		None => warn!("localStorage unavailable, theme preference not persisted"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_only_known_preferences() {
		assert_eq!(ThemeMode::from_preference("dark"), Some(ThemeMode::Dark));
		assert_eq!(ThemeMode::from_preference("light"), Some(ThemeMode::Light));
		assert_eq!(ThemeMode::from_preference("Dark"), None);
		assert_eq!(ThemeMode::from_preference(""), None);
		assert_eq!(ThemeMode::from_preference("system"), None);
	}

	#[test]
	fn preference_string_round_trips_through_display() {
		for theme in [ThemeMode::Dark, ThemeMode::Light] {
			assert_eq!(ThemeMode::from_preference(&theme.to_string()), Some(theme));
		}
	}

	#[test]
	fn toggle_flips_mode() {
		assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
		assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
		assert!(ThemeMode::Dark.is_dark());
		assert!(!ThemeMode::Light.is_dark());
	}

	#[test]
	fn saved_preference_beats_system_scheme() {
		assert_eq!(resolve_initial(Some("light"), true), ThemeMode::Light);
		assert_eq!(resolve_initial(Some("dark"), false), ThemeMode::Dark);
	}

	#[test]
	fn falls_back_to_system_scheme() {
		assert_eq!(resolve_initial(None, true), ThemeMode::Dark);
		assert_eq!(resolve_initial(None, false), ThemeMode::Light);
		assert_eq!(resolve_initial(Some("sepia"), true), ThemeMode::Dark);
		assert_eq!(resolve_initial(Some("sepia"), false), ThemeMode::Light);
	}

	#[test]
	fn css_vars_cover_same_names_in_both_modes() {
		let dark: Vec<_> = ThemeMode::Dark.css_vars().iter().map(|(n, _)| *n).collect();
		let light: Vec<_> = ThemeMode::Light.css_vars().iter().map(|(n, _)| *n).collect();
		assert_eq!(dark, light);
		assert!(dark.contains(&"--grid"));
	}

	#[test]
	fn inline_style_lists_every_var() {
		let style = ThemeMode::Light.inline_style();
		assert!(style.starts_with("--bg: #f8fafc;"));
		assert!(style.contains("--grid: rgba(2,6,23,0.05);"));
		assert_eq!(style.matches(';').count(), ThemeMode::Light.css_vars().len());
	}
}
