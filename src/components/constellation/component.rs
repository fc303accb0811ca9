use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::generator::generate;
use super::render::render;
use super::types::{Area, Constellation};
use super::viewport::{ElementObservation, ViewportObserver, observe_element};
use crate::theme::ThemeMode;

/// Animated constellation filling its positioned parent.
///
/// Regenerates from scratch whenever the host size or the theme changes.
/// Pass `seed` for a reproducible sky.
#[component]
pub fn ConstellationBackground(
	#[prop(into)] theme: Signal<ThemeMode>,
	#[prop(default = None)] seed: Option<u64>,
) -> impl IntoView {
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let (area, set_area) = signal(Area::FALLBACK);
	let rng = StoredValue::new(seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64));
	let observation: Rc<RefCell<Option<ElementObservation>>> = Rc::new(RefCell::new(None));
	let viewport = Rc::new(RefCell::new(ViewportObserver::new()));
	viewport.borrow_mut().subscribe(move |area| set_area.set(area));

	Effect::new(move |_| {
		let Some(host) = host_ref.get() else {
			return;
		};
		if observation.borrow().is_some() || viewport.borrow().is_detached() {
			return;
		}
		*observation.borrow_mut() = observe_element(&host, viewport.clone());
	});

	let constellation = Memo::new(move |_| {
		let (area, theme) = (area.get(), theme.get());
		let mut out = Constellation::default();
		rng.update_value(|rng| out = generate(area, theme, rng));
		out
	});

	let markup = Memo::new(move |_| {
		let theme = theme.get();
		constellation.with(|c| render(c, theme))
	});

	view! {
		<div
			node_ref=host_ref
			class="constellation-host"
			style="position: absolute; inset: 0; z-index: 0; overflow: hidden; pointer-events: none;"
			inner_html=move || markup.get()
		/>
	}
}
