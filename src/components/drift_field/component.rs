use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::state::{DriftFieldState, SEED_HEIGHT, SEED_WIDTH};

#[component]
pub fn DriftFieldCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<DriftFieldState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let cancelled: Rc<Cell<bool>> = Rc::new(Cell::new(false));
	let (state_init, animate_init, cancelled_init) =
		(state.clone(), animate.clone(), cancelled.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				warn!("2d canvas context unavailable, background stays blank");
				return;
			}
		};

		// Nodes start in the canvas's default 300x150 coordinate space and are
		// rescaled to the real dimensions by the first frame's resize step.
		*state_init.borrow_mut() = Some(DriftFieldState::new(
			SEED_WIDTH,
			SEED_HEIGHT,
			&mut rand::thread_rng(),
		));

		let (state_anim, animate_inner, cancelled_anim) = (
			state_init.clone(),
			animate_init.clone(),
			cancelled_init.clone(),
		);
		let canvas_anim = canvas.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// Set on cleanup; once cancelled the loop neither draws nor
			// reschedules.
			if cancelled_anim.get() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				resize_to_window(&canvas_anim, s);
				s.step(&mut rand::thread_rng());
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// `on_cleanup` requires a `Send + Sync` closure; the flag is an
	// `Rc<Cell<bool>>` (single-threaded CSR), so wrap it to satisfy the
	// bound without changing the runtime behavior.
	let cancelled = leptos::__reexports::send_wrapper::SendWrapper::new(cancelled);
	on_cleanup(move || cancelled.set(true));

	view! { <canvas node_ref=canvas_ref class="drift-field-canvas" style="display: block;" /> }
}

// Syncs the canvas backing store to the window size; node positions are
// rescaled only when the dimensions actually changed.
fn resize_to_window(canvas: &HtmlCanvasElement, state: &mut DriftFieldState) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let (Some(w), Some(h)) = (
		window.inner_width().ok().and_then(|v| v.as_f64()),
		window.inner_height().ok().and_then(|v| v.as_f64()),
	) else {
		return;
	};
	let (nw, nh) = (w as u32, h as u32);
	if nw == canvas.width() && nh == canvas.height() {
		return;
	}
	canvas.set_width(nw);
	canvas.set_height(nh);
	state.resize(f64::from(nw), f64::from(nh));
}
