//! Procedural point and edge generation.
//!
//! Generation is a pure function of the area, the theme and the random
//! source. Every call re-rolls everything; nothing carries over between calls.

use log::debug;
use rand::Rng;

use super::types::{Area, Constellation, Edge, Point, SizeTier};
use crate::theme::ThemeMode;

/// Partner draws per point before giving up on its out-degree.
pub const MAX_CANDIDATES: usize = 14;

const SMALL_SHARE: f64 = 0.82;
const MEDIUM_SHARE: f64 = 0.08;

const SMALL_RADIUS: (f64, f64) = (0.6, 1.2);
const MEDIUM_RADIUS: (f64, f64) = (1.2, 1.9);
const LARGE_RADIUS: (f64, f64) = (1.9, 2.8);

const TWINKLE_DURATION: (f64, f64) = (2.8, 6.5);
const TWINKLE_DELAY: (f64, f64) = (0.0, 3.5);

const HIGHLIGHT_OPACITY_BOOST: f64 = 0.12;
const HIGHLIGHT_EDGE_BOOST: f64 = 1.6;

/// Out-degree weights, checked in order against a single uniform roll.
const DEGREE_WEIGHTS: [(usize, f64); 3] = [(1, 0.65), (0, 0.23), (2, 0.12)];

/// Per-theme generation constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeParams {
	/// Points per square pixel.
	pub density: f64,
	/// Connection distance as a fraction of the shorter side.
	pub reach: f64,
	pub highlight_chance: f64,
	pub small_opacity: (f64, f64),
	pub medium_opacity: (f64, f64),
	pub large_opacity: (f64, f64),
	pub edge_floor: f64,
	pub edge_ceiling: f64,
	pub edge_cap: f64,
}

impl ThemeParams {
	pub const DARK: ThemeParams = ThemeParams {
		density: 0.000055,
		reach: 0.12,
		highlight_chance: 0.14,
		small_opacity: (0.22, 0.50),
		medium_opacity: (0.38, 0.66),
		large_opacity: (0.52, 0.80),
		edge_floor: 0.04,
		edge_ceiling: 0.16,
		edge_cap: 0.26,
	};

	// Lighter backgrounds eat contrast, so light mode is denser and brighter.
	pub const LIGHT: ThemeParams = ThemeParams {
		density: 0.00007,
		reach: 0.13,
		highlight_chance: 0.18,
		small_opacity: (0.34, 0.62),
		medium_opacity: (0.50, 0.78),
		large_opacity: (0.64, 0.90),
		edge_floor: 0.07,
		edge_ceiling: 0.26,
		edge_cap: 0.42,
	};

	pub fn for_theme(theme: ThemeMode) -> Self {
		match theme {
			ThemeMode::Dark => Self::DARK,
			ThemeMode::Light => Self::LIGHT,
		}
	}

	fn opacity_range(&self, tier: SizeTier) -> (f64, f64) {
		match tier {
			SizeTier::Small => self.small_opacity,
			SizeTier::Medium => self.medium_opacity,
			SizeTier::Large => self.large_opacity,
		}
	}
}

/// Number of points for an area, `round(width * height * density)`.
pub fn point_count(area: Area, theme: ThemeMode) -> usize {
	let area = area.or_fallback();
	(area.width * area.height * ThemeParams::for_theme(theme).density).round() as usize
}

/// Maximum edge length for an area and theme.
pub fn max_distance(area: Area, theme: ThemeMode) -> f64 {
	area.or_fallback().min_side() * ThemeParams::for_theme(theme).reach
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

fn pick_tier<R: Rng + ?Sized>(rng: &mut R) -> SizeTier {
	let roll = rng.gen_range(0.0..1.0);
	if roll < SMALL_SHARE {
		SizeTier::Small
	} else if roll < SMALL_SHARE + MEDIUM_SHARE {
		SizeTier::Medium
	} else {
		SizeTier::Large
	}
}

fn tier_radius(tier: SizeTier) -> (f64, f64) {
	match tier {
		SizeTier::Small => SMALL_RADIUS,
		SizeTier::Medium => MEDIUM_RADIUS,
		SizeTier::Large => LARGE_RADIUS,
	}
}

/// Number of edges a point tries to originate.
pub fn pick_out_degree<R: Rng + ?Sized>(rng: &mut R) -> usize {
	let mut roll = rng.gen_range(0.0..1.0);
	for (degree, weight) in DEGREE_WEIGHTS {
		if roll < weight {
			return degree;
		}
		roll -= weight;
	}
	DEGREE_WEIGHTS[DEGREE_WEIGHTS.len() - 1].0
}

/// Edge opacity for a squared length `d2` under `max2`. Closer is brighter.
pub fn edge_opacity(params: &ThemeParams, d2: f64, max2: f64, both_highlighted: bool) -> f64 {
	let closeness = (1.0 - d2 / max2).clamp(0.0, 1.0);
	let base = params.edge_floor + (params.edge_ceiling - params.edge_floor) * closeness;
	if both_highlighted {
		(base * HIGHLIGHT_EDGE_BOOST).min(params.edge_cap)
	} else {
		base
	}
}

/// Sample the point set for an area.
pub fn generate_points<R: Rng + ?Sized>(area: Area, theme: ThemeMode, rng: &mut R) -> Vec<Point> {
	let area = area.or_fallback();
	let params = ThemeParams::for_theme(theme);
	(0..point_count(area, theme))
		.map(|id| {
			let x = rng.gen_range(0.0..area.width);
			let y = rng.gen_range(0.0..area.height);
			let tier = pick_tier(rng);
			let radius = sample(rng, tier_radius(tier));
			let opacity = sample(rng, params.opacity_range(tier));
			let highlighted = rng.gen_bool(params.highlight_chance);
			let opacity = if highlighted {
				(opacity + HIGHLIGHT_OPACITY_BOOST).min(1.0)
			} else {
				opacity
			};
			Point {
				id,
				x,
				y,
				tier,
				radius,
				opacity,
				highlighted,
				twinkle_duration: sample(rng, TWINKLE_DURATION),
				twinkle_delay: sample(rng, TWINKLE_DELAY),
			}
		})
		.collect()
}

/// Sample edges over `points` for an area.
///
/// Each point draws up to [`MAX_CANDIDATES`] random partners and keeps those
/// within reach until its out-degree is met. Reciprocal and repeated pairs are
/// kept as-is.
pub fn generate_edges<R: Rng + ?Sized>(
	points: &[Point],
	area: Area,
	theme: ThemeMode,
	rng: &mut R,
) -> Vec<Edge> {
	let params = ThemeParams::for_theme(theme);
	let max = max_distance(area, theme);
	let max2 = max * max;
	let mut edges = Vec::new();
	if points.len() < 2 {
		return edges;
	}

	for p in points {
		let wanted = pick_out_degree(rng);
		let mut made = 0;
		for attempt in 0..MAX_CANDIDATES {
			if made >= wanted {
				break;
			}
			let q = &points[rng.gen_range(0..points.len())];
			if q.id == p.id {
				continue;
			}
			let (dx, dy) = (q.x - p.x, q.y - p.y);
			let d2 = dx * dx + dy * dy;
			if d2 >= max2 {
				continue;
			}
			edges.push(Edge {
				id: format!("{}-{}-{}", p.id, q.id, attempt),
				from: p.id,
				to: q.id,
				opacity: edge_opacity(&params, d2, max2, p.highlighted && q.highlighted),
			});
			made += 1;
		}
	}
	edges
}

/// Generate a complete constellation. Degenerate areas are replaced by
/// [`Area::FALLBACK`].
pub fn generate<R: Rng + ?Sized>(area: Area, theme: ThemeMode, rng: &mut R) -> Constellation {
	let area = area.or_fallback();
	let points = generate_points(area, theme, rng);
	let edges = generate_edges(&points, area, theme, rng);
	debug!(
		"Generated constellation {}x{} ({}): {} points, {} edges",
		area.width,
		area.height,
		theme,
		points.len(),
		edges.len()
	);
	Constellation {
		area,
		points,
		edges,
	}
}
