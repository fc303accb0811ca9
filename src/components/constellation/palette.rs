//! Colors handed to the rendering surface for each theme.

use crate::theme::ThemeMode;

/// Id of the blur filter applied to highlighted points.
pub const GLOW_FILTER_ID: &str = "constellation-glow";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
	pub point_fill: &'static str,
	pub highlight_fill: &'static str,
	/// Gradient stroke, `from` end then `to` end.
	pub edge_from: &'static str,
	pub edge_to: &'static str,
	pub grid_stroke: &'static str,
	pub glow_blur: f64,
}

impl Palette {
	pub const DARK: Palette = Palette {
		point_fill: "#a78bfa",
		highlight_fill: "#ddd6fe",
		edge_from: "#8b5cf6",
		edge_to: "#38bdf8",
		grid_stroke: "rgba(255,255,255,0.03)",
		glow_blur: 1.6,
	};

	pub const LIGHT: Palette = Palette {
		point_fill: "#7c3aed",
		highlight_fill: "#6d28d9",
		edge_from: "#7c3aed",
		edge_to: "#4f46e5",
		grid_stroke: "rgba(2,6,23,0.05)",
		glow_blur: 1.2,
	};

	pub fn for_theme(theme: ThemeMode) -> Self {
		match theme {
			ThemeMode::Dark => Self::DARK,
			ThemeMode::Light => Self::LIGHT,
		}
	}

	pub fn fill(&self, highlighted: bool) -> &'static str {
		if highlighted { self.highlight_fill } else { self.point_fill }
	}

	/// Filter reference for a point, if it glows.
	pub fn filter(&self, highlighted: bool) -> Option<String> {
		highlighted.then(|| format!("url(#{GLOW_FILTER_ID})"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn grid_matches_page_theme_vars() {
		for theme in [ThemeMode::Dark, ThemeMode::Light] {
			let grid = theme
				.css_vars()
				.iter()
				.find(|(name, _)| *name == "--grid")
				.map(|(_, value)| *value);
			assert_eq!(grid, Some(Palette::for_theme(theme).grid_stroke));
		}
	}

	#[test]
	fn palettes_differ_per_theme() {
		assert_eq!(Palette::for_theme(ThemeMode::Dark), Palette::DARK);
		assert_eq!(Palette::for_theme(ThemeMode::Light), Palette::LIGHT);
		assert_ne!(Palette::DARK, Palette::LIGHT);
		assert!(Palette::DARK.glow_blur > Palette::LIGHT.glow_blur);
	}

	#[test]
	fn only_highlighted_points_glow() {
		let palette = Palette::DARK;
		assert_eq!(palette.filter(true).as_deref(), Some("url(#constellation-glow)"));
		assert_eq!(palette.filter(false), None);
		assert_eq!(palette.fill(true), palette.highlight_fill);
		assert_eq!(palette.fill(false), palette.point_fill);
	}
}
