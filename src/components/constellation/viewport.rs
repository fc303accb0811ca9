//! Tracks the size of the element hosting the background.
//!
//! [`ViewportObserver`] is plain state plus subscribers so it can be driven by
//! synthetic measurements. [`observe_element`] connects it to a browser
//! `ResizeObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

use super::types::Area;

type Listener = Box<dyn FnMut(Area)>;

pub struct ViewportObserver {
	area: Area,
	listeners: Vec<Listener>,
	detached: bool,
}

impl Default for ViewportObserver {
	fn default() -> Self {
		Self::new()
	}
}

impl ViewportObserver {
	/// Starts at [`Area::FALLBACK`] until the first measurement arrives.
	pub fn new() -> Self {
		Self {
			area: Area::FALLBACK,
			listeners: Vec::new(),
			detached: false,
		}
	}

	pub fn area(&self) -> Area {
		self.area
	}

	/// Register a callback run on every area change.
	pub fn subscribe(&mut self, listener: impl FnMut(Area) + 'static) {
		self.listeners.push(Box::new(listener));
	}

	/// Feed a raw measurement. Returns the clamped area if it changed, after
	/// notifying subscribers. Ignored once observation has failed.
	pub fn measure(&mut self, width: f64, height: f64) -> Option<Area> {
		if self.detached {
			return None;
		}
		self.emit(Area::clamped(width, height))
	}

	/// The host cannot be observed: pin the area to [`Area::FALLBACK`] for good.
	pub fn observation_failed(&mut self) -> Option<Area> {
		self.detached = true;
		self.emit(Area::FALLBACK)
	}

	pub fn is_detached(&self) -> bool {
		self.detached
	}

	fn emit(&mut self, area: Area) -> Option<Area> {
		if area == self.area {
			return None;
		}
		self.area = area;
		for listener in &mut self.listeners {
			listener(area);
		}
		Some(area)
	}
}

/// Keeps the browser observer and its callback alive.
pub struct ElementObservation {
	observer: ResizeObserver,
	_callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for ElementObservation {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Measure `element` now and on every resize, feeding `viewport`.
///
/// When the environment has no `ResizeObserver` the viewport is pinned to
/// [`Area::FALLBACK`] and `None` is returned.
pub fn observe_element(element: &Element, viewport: Rc<RefCell<ViewportObserver>>) -> Option<ElementObservation> {
	let vp = viewport.clone();
	let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
		for entry in entries.iter() {
			let entry: ResizeObserverEntry = entry.unchecked_into();
			let rect = entry.content_rect();
			if let Some(area) = vp.borrow_mut().measure(rect.width(), rect.height()) {
				debug!("Viewport resized to {}x{}", area.width, area.height);
			}
		}
	});

	match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
		Ok(observer) => {
			viewport
				.borrow_mut()
				.measure(element.client_width() as f64, element.client_height() as f64);
			observer.observe(element);
			Some(ElementObservation {
				observer,
				_callback: callback,
			})
		}
		Err(err) => {
			viewport.borrow_mut().observation_failed();
			warn!("ResizeObserver unavailable, using {:?}: {:?}", viewport.borrow().area(), err);
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn recording(observer: &mut ViewportObserver) -> Rc<RefCell<Vec<Area>>> {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		observer.subscribe(move |area| sink.borrow_mut().push(area));
		seen
	}

	#[test]
	fn starts_at_fallback() {
		assert_eq!(ViewportObserver::new().area(), Area::new(1200.0, 800.0));
	}

	#[test]
	fn collapsed_host_is_clamped() {
		let mut observer = ViewportObserver::new();
		let seen = recording(&mut observer);
		assert_eq!(observer.measure(10.0, 5.0), Some(Area::new(300.0, 300.0)));
		assert_eq!(observer.measure(0.0, 0.0), None);
		assert_eq!(*seen.borrow(), vec![Area::new(300.0, 300.0)]);
	}

	#[test]
	fn never_emits_below_minimum() {
		let mut observer = ViewportObserver::new();
		let seen = recording(&mut observer);
		for (w, h) in [(1.0, 2000.0), (250.0, 299.9), (1920.0, 1080.0), (-40.0, f64::NAN), (640.0, 480.0)] {
			observer.measure(w, h);
		}
		assert_eq!(seen.borrow().len(), 5);
		assert!(seen.borrow().iter().all(|a| a.width >= 300.0 && a.height >= 300.0));
	}

	#[test]
	fn unchanged_size_is_not_reemitted() {
		let mut observer = ViewportObserver::new();
		let seen = recording(&mut observer);
		assert_eq!(observer.measure(1200.0, 800.0), None);
		observer.measure(1280.0, 720.0);
		observer.measure(1280.0, 720.0);
		assert_eq!(*seen.borrow(), vec![Area::new(1280.0, 720.0)]);
		assert_eq!(observer.area(), Area::new(1280.0, 720.0));
	}

	#[test]
	fn failed_observation_pins_fallback() {
		let mut observer = ViewportObserver::new();
		let seen = recording(&mut observer);
		assert_eq!(observer.observation_failed(), None);
		assert!(observer.is_detached());
		assert_eq!(observer.measure(0.0, 0.0), None);
		assert_eq!(observer.measure(1920.0, 1080.0), None);
		assert_eq!(observer.area(), Area::new(1200.0, 800.0));
		assert!(seen.borrow().is_empty());
	}

	#[test]
	fn failure_after_measuring_restores_fallback() {
		let mut observer = ViewportObserver::new();
		let seen = recording(&mut observer);
		observer.measure(10.0, 5.0);
		assert_eq!(observer.observation_failed(), Some(Area::FALLBACK));
		assert_eq!(*seen.borrow(), vec![Area::new(300.0, 300.0), Area::FALLBACK]);
		assert_eq!(observer.measure(640.0, 480.0), None);
	}

	#[test]
	fn notifies_every_subscriber() {
		let mut observer = ViewportObserver::new();
		let first = recording(&mut observer);
		let second = recording(&mut observer);
		observer.measure(800.0, 600.0);
		assert_eq!(*first.borrow(), *second.borrow());
		assert_eq!(first.borrow().len(), 1);
	}
}
