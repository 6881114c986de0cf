use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, MouseEvent,
	ResizeObserver, ResizeObserverEntry,
};

use super::config::LayoutConfig;
use super::coordinator::LayoutCoordinator;
use super::error::{Result, SiteMapError};
use super::render;
use super::state::SiteMapState;
use super::tree::build_site_tree;

type SharedState = Rc<RefCell<Option<SiteMapState>>>;

/// Native resize observer attached to the container, plus the callback it
/// invokes. The observer must be disconnected before the callback is freed.
struct ObserverBinding {
	observer: ResizeObserver,
	state: SharedState,
	_callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ObserverBinding {
	fn attach(container: &Element, state: SharedState, canvas: HtmlCanvasElement) -> Result<Self> {
		let state_cb = state.clone();
		let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
			let Ok(entry) = entries.get(0).dyn_into::<ResizeObserverEntry>() else {
				return;
			};
			let width = container_width(&entry.target());
			let Ok(mut slot) = state_cb.try_borrow_mut() else {
				warn!("site map state busy, dropping resize to {width}");
				return;
			};
			if let Some(s) = slot.as_mut() {
				if s.coordinator.on_resize(width) {
					repaint(s, &canvas);
				}
			}
		});
		let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
			.map_err(|e| SiteMapError::dom("ResizeObserver::new", e))?;
		observer.observe(container);
		Ok(Self {
			observer,
			state,
			_callback: callback,
		})
	}
}

impl Drop for ObserverBinding {
	fn drop(&mut self) {
		self.observer.disconnect();
		if let Ok(mut slot) = self.state.try_borrow_mut() {
			if let Some(s) = slot.as_mut() {
				s.coordinator.unmount();
			}
		}
	}
}

fn paint(state: &SiteMapState, canvas: &HtmlCanvasElement) -> Result<()> {
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(|e| SiteMapError::dom("getContext", e))?
		.ok_or_else(|| SiteMapError::Dom("canvas has no 2d context".into()))?
		.dyn_into()
		.map_err(|obj| SiteMapError::dom("2d context cast", obj.into()))?;

	let Some((width, height)) = state.canvas_size() else {
		ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
		return Ok(());
	};
	canvas.set_width(width);
	canvas.set_height(height);
	render::render(state, &ctx, state.coordinator.width());
	Ok(())
}

/// Border-box width of the container. Mount and the resize observer both
/// measure through this so an unchanged container never reads as a resize.
fn container_width(container: &Element) -> f64 {
	container.get_bounding_client_rect().width()
}

fn repaint(state: &SiteMapState, canvas: &HtmlCanvasElement) {
	if let Err(e) = paint(state, canvas) {
		error!("site map paint failed: {e}");
	}
}

fn canvas_point(ev: &MouseEvent, canvas: &HtmlCanvasElement) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn follow_anchor(href: &str) -> Result<()> {
	let window = web_sys::window().ok_or_else(|| SiteMapError::Dom("no window".into()))?;
	window
		.location()
		.set_hash(href)
		.map_err(|e| SiteMapError::dom("location.hash", e))
}

/// Interactive map of the site hierarchy, laid out to the container width.
#[component]
pub fn SiteMapCanvas(
	#[prop(into)] section_order: Signal<Vec<String>>,
	#[prop(optional)] config: LayoutConfig,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tree = Memo::new(move |_| build_site_tree(&section_order.get()));
	let state: SharedState = Rc::new(RefCell::new(None));
	let binding = StoredValue::new_local(None::<ObserverBinding>);

	let state_fx = state.clone();
	Effect::new(move |_| {
		let tree = tree.get();
		let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		{
			let mut slot = state_fx.borrow_mut();
			if let Some(s) = slot.as_mut() {
				if s.coordinator.set_tree(tree) {
					repaint(s, &canvas);
				}
				return;
			}
			let mut coordinator = LayoutCoordinator::new(tree, config.clone());
			coordinator.mount(container_width(&container));
			repaint(slot.insert(SiteMapState::new(coordinator)), &canvas);
		}

		match ObserverBinding::attach(&container, state_fx.clone(), canvas) {
			Ok(b) => binding.update_value(|slot| *slot = Some(b)),
			Err(e) => error!("site map will not follow resizes: {e}"),
		}
	});

	on_cleanup(move || {
		binding.try_update_value(|slot| slot.take());
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&ev, &canvas);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y).map(|n| n.id.clone());
			let cursor = if hovered.is_some() { "pointer" } else { "default" };
			let _ = HtmlElement::style(&canvas).set_property("cursor", cursor);
			if s.set_hover(hovered) {
				repaint(s, &canvas);
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			if s.set_hover(None) {
				repaint(s, &canvas);
			}
		}
	};

	let state_click = state.clone();
	let navigate = use_navigate();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&ev, &canvas);
		let target = state_click
			.borrow()
			.as_ref()
			.and_then(|s| s.node_at_position(x, y))
			.map(|n| (n.href.clone(), n.is_route));

		match target {
			Some((href, true)) => navigate(&href, Default::default()),
			Some((href, false)) => {
				if let Err(e) = follow_anchor(&href) {
					warn!("could not jump to {href}: {e}");
				}
			}
			None => {}
		}
	};

	view! {
		<div
			node_ref=container_ref
			class="site-map"
			style="width: 100%; padding: 0; border: 0; box-sizing: border-box;"
		>
			<canvas
				node_ref=canvas_ref
				class="site-map-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				on:click=on_click
				style="display: block;"
			/>
		</div>
	}
}
