use std::fmt::Write;

use super::palette::{GLOW_FILTER_ID, Palette};
use super::types::Constellation;
use crate::theme::ThemeMode;

const GRID_SIZE: f64 = 40.0;
const EDGE_WIDTH: f64 = 0.6;
const TWINKLE_DIM: f64 = 0.35;

/// Serialize a constellation to a standalone `<svg>` element.
pub fn render(constellation: &Constellation, theme: ThemeMode) -> String {
	let palette = Palette::for_theme(theme);
	let (w, h) = (constellation.area.width, constellation.area.height);
	let mut out = String::with_capacity(256 + constellation.points.len() * 160 + constellation.edges.len() * 320);

	let _ = write!(
		out,
		r#"<svg xmlns="http://www.w3.org/2000/svg" class="constellation-svg" width="100%" height="100%" viewBox="0 0 {w:.0} {h:.0}" preserveAspectRatio="xMidYMid slice" aria-hidden="true">"#
	);
	let _ = write!(
		out,
		"<style>@keyframes constellation-twinkle {{ 0%, 100% {{ opacity: var(--o); }} 50% {{ opacity: calc(var(--o) * {TWINKLE_DIM}); }} }}</style>"
	);
	draw_defs(constellation, &palette, &mut out);
	let _ = write!(out, r#"<rect width="{w:.0}" height="{h:.0}" fill="url(#constellation-grid)"/>"#);
	draw_edges(constellation, &mut out);
	draw_points(constellation, &palette, &mut out);
	out.push_str("</svg>");
	out
}

fn draw_defs(constellation: &Constellation, palette: &Palette, out: &mut String) {
	out.push_str("<defs>");
	let _ = write!(
		out,
		r#"<pattern id="constellation-grid" width="{GRID_SIZE}" height="{GRID_SIZE}" patternUnits="userSpaceOnUse"><path d="M {GRID_SIZE} 0 L 0 0 0 {GRID_SIZE}" fill="none" stroke="{}" stroke-width="1"/></pattern>"#,
		palette.grid_stroke
	);
	let _ = write!(
		out,
		r#"<filter id="{GLOW_FILTER_ID}" x="-200%" y="-200%" width="500%" height="500%"><feGaussianBlur stdDeviation="{}" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
		palette.glow_blur
	);

	// userSpaceOnUse keeps horizontal and vertical edges from collapsing the gradient box.
	for edge in &constellation.edges {
		let Some((a, b)) = constellation.endpoints(edge) else {
			continue;
		};
		let _ = write!(
			out,
			r#"<linearGradient id="edge-{}" gradientUnits="userSpaceOnUse" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"><stop offset="0" stop-color="{}" stop-opacity="{:.3}"/><stop offset="1" stop-color="{}" stop-opacity="{:.3}"/></linearGradient>"#,
			edge.id, a.x, a.y, b.x, b.y, palette.edge_from, edge.opacity, palette.edge_to, edge.opacity
		);
	}
	out.push_str("</defs>");
}

fn draw_edges(constellation: &Constellation, out: &mut String) {
	for edge in &constellation.edges {
		let Some((a, b)) = constellation.endpoints(edge) else {
			continue;
		};
		let _ = write!(
			out,
			r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="url(#edge-{})" stroke-width="{EDGE_WIDTH}" stroke-linecap="round"/>"#,
			a.x, a.y, b.x, b.y, edge.id
		);
	}
}

fn draw_points(constellation: &Constellation, palette: &Palette, out: &mut String) {
	for p in &constellation.points {
		let _ = write!(
			out,
			r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}""#,
			p.x,
			p.y,
			p.radius,
			palette.fill(p.highlighted)
		);
		if let Some(filter) = palette.filter(p.highlighted) {
			let _ = write!(out, r#" filter="{filter}""#);
		}
		let _ = write!(
			out,
			r#" style="--o: {:.3}; opacity: {:.3}; animation: constellation-twinkle {:.2}s ease-in-out {:.2}s infinite;"/>"#,
			p.opacity, p.opacity, p.twinkle_duration, p.twinkle_delay
		);
	}
}
