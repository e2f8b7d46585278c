use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::{ForceGraphState, PointerRelease};
use super::types::{GraphCommand, GraphData, GraphHandle};
use crate::config::{GraphStyle, PhysicsConfig};

/// Longest simulated step after a stalled frame (tab in background etc).
const MAX_FRAME_DT: f64 = 0.1;
const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

type SharedState = Rc<RefCell<Option<ForceGraphState>>>;

/// Size of the element the canvas fills; a collapsed parent falls back to
/// `FALLBACK_SIZE` per axis.
fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let parent = canvas.parent_element();
	let measure = |get: fn(&web_sys::Element) -> i32, fallback: f64| {
		parent
			.as_ref()
			.map(|p| get(p) as f64)
			.filter(|v| *v > 0.0)
			.unwrap_or(fallback)
	};
	(
		measure(web_sys::Element::client_width, FALLBACK_SIZE.0),
		measure(web_sys::Element::client_height, FALLBACK_SIZE.1),
	)
}

fn local_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	style: GraphStyle,
	physics: PhysicsConfig,
	handle: GraphHandle,
	#[prop(into)] on_select: Callback<Vec<String>>,
	#[prop(into)] on_stabilized: Callback<()>,
	#[prop(into)] on_focus_missed: Callback<String>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::error!("canvas 2d context unavailable");
			return;
		};
		*state_init.borrow_mut() = Some(ForceGraphState::new(
			&data.get_untracked(),
			style.clone(),
			physics.clone(),
			w,
			h,
		));

		// The container follows the window, so re-measure it on window resize.
		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			if !canvas_resize.is_connected() {
				return;
			}
			let (nw, nh) = container_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let last_frame = Rc::new(Cell::new(js_sys::Date::now()));
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !canvas.is_connected() {
				state_anim.borrow_mut().take();
				return;
			}
			let now = js_sys::Date::now();
			let dt = ((now - last_frame.get()) / 1000.0).clamp(0.0, MAX_FRAME_DT);
			last_frame.set(now);

			let settled = match *state_anim.borrow_mut() {
				Some(ref mut s) => {
					let settled = s.tick(dt);
					render::render(s, &ctx);
					settled
				}
				None => false,
			};
			if settled {
				debug!("stabilization finished");
				on_stabilized.run(());
			}

			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_data = state.clone();
	Effect::new(move |_| {
		let next = data.get();
		if let Some(ref mut s) = *state_data.borrow_mut() {
			s.set_data(&next);
			debug!("graph view: {} nodes, {} drawable edges", s.node_count(), s.edge_count());
		}
	});

	let state_cmd = state.clone();
	Effect::new(move |_| {
		let commands = handle.drain();
		if commands.is_empty() {
			return;
		}
		let mut missed = Vec::new();
		{
			let mut guard = state_cmd.borrow_mut();
			let Some(s) = guard.as_mut() else {
				debug!("graph not ready, dropping {} commands", commands.len());
				return;
			};
			for command in commands {
				match command {
					GraphCommand::Focus(id) => {
						if !s.focus(&id) {
							debug!("focus target {id} is not visible");
							missed.push(id);
						}
					}
					GraphCommand::Select(ids) => {
						s.select(&ids);
					}
					GraphCommand::Fit => s.fit(),
					GraphCommand::Stabilize if s.is_stabilizing() => {}
					GraphCommand::Stabilize => s.start_stabilization(),
				}
			}
		}
		for id in missed {
			on_focus_missed.run(id);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = local_point(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = local_point(&canvas, &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
			let cursor = if s.hover.node.is_some() { "pointer" } else { "grab" };
			let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let release = state_mu.borrow_mut().as_mut().map(|s| s.pointer_up());
		let Some(PointerRelease::Click(target)) = release else {
			return;
		};
		let additive = ev.ctrl_key() || ev.meta_key();
		let selection = state_mu
			.borrow_mut()
			.as_mut()
			.and_then(|s| s.click(target, additive));
		if let Some(ids) = selection {
			debug!("selected {:?}", ids);
			on_select.run(ids);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = local_point(&canvas, &ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
