/// Smallest width or height the background is ever laid out at.
pub const MIN_EXTENT: f64 = 300.0;

/// Measured drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
	pub width: f64,
	pub height: f64,
}

impl Area {
	/// Used before the first measurement and whenever measuring is impossible.
	pub const FALLBACK: Area = Area {
		width: 1200.0,
		height: 800.0,
	};

	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Clamp a raw measurement to the minimum extent. NaN measurements clamp too.
	pub fn clamped(width: f64, height: f64) -> Self {
		Self::new(width.max(MIN_EXTENT), height.max(MIN_EXTENT))
	}

	pub fn is_valid(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}

	/// `self` if usable, otherwise [`Area::FALLBACK`].
	pub fn or_fallback(self) -> Self {
		if self.is_valid() { self } else { Self::FALLBACK }
	}

	pub fn min_side(&self) -> f64 {
		self.width.min(self.height)
	}
}

impl Default for Area {
	fn default() -> Self {
		Self::FALLBACK
	}
}

/// Size class a point was drawn from; drives radius and opacity ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeTier {
	Small,
	Medium,
	Large,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
	/// Index into the generation's point list, not a stable key.
	pub id: usize,
	pub x: f64,
	pub y: f64,
	pub tier: SizeTier,
	pub radius: f64,
	pub opacity: f64,
	pub highlighted: bool,
	pub twinkle_duration: f64,
	pub twinkle_delay: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// `"{from}-{to}-{attempt}"`
	pub id: String,
	pub from: usize,
	pub to: usize,
	pub opacity: f64,
}

/// One full generation: every point and every edge between them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Constellation {
	pub area: Area,
	pub points: Vec<Point>,
	pub edges: Vec<Edge>,
}

impl Constellation {
	/// Both endpoints of an edge from this generation.
	pub fn endpoints(&self, edge: &Edge) -> Option<(&Point, &Point)> {
		Some((self.points.get(edge.from)?, self.points.get(edge.to)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamps_collapsed_measurements() {
		assert_eq!(Area::clamped(10.0, 5.0), Area::new(300.0, 300.0));
		assert_eq!(Area::clamped(1024.0, 120.0), Area::new(1024.0, 300.0));
		assert_eq!(Area::clamped(f64::NAN, 640.0), Area::new(300.0, 640.0));
	}

	#[test]
	fn degenerate_areas_fall_back() {
		assert_eq!(Area::new(0.0, 800.0).or_fallback(), Area::FALLBACK);
		assert_eq!(Area::new(640.0, -1.0).or_fallback(), Area::FALLBACK);
		assert_eq!(Area::new(f64::INFINITY, 400.0).or_fallback(), Area::FALLBACK);
		assert_eq!(Area::new(640.0, 480.0).or_fallback(), Area::new(640.0, 480.0));
	}

	#[test]
	fn endpoints_resolve_within_generation() {
		let point = |id: usize| Point {
			id,
			x: id as f64,
			y: 0.0,
			tier: SizeTier::Small,
			radius: 1.0,
			opacity: 0.5,
			highlighted: false,
			twinkle_duration: 3.0,
			twinkle_delay: 0.0,
		};
		let constellation = Constellation {
			area: Area::FALLBACK,
			points: vec![point(0), point(1)],
			edges: Vec::new(),
		};
		let edge = Edge {
			id: "0-1-0".into(),
			from: 0,
			to: 1,
			opacity: 0.1,
		};
		let (a, b) = constellation.endpoints(&edge).unwrap();
		assert_eq!((a.id, b.id), (0, 1));

		let dangling = Edge { to: 7, ..edge };
		assert!(constellation.endpoints(&dangling).is_none());
	}
}
