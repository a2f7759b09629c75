//! Leptos component owning the backdrop canvas.
//!
//! The component sizes a fixed canvas to the viewport and drives an
//! animation loop via `requestAnimationFrame`: advance the orb field,
//! paint it, reschedule. A window `resize` replaces the field wholesale at
//! the new dimensions before the next frame is consumed. Unmounting
//! cancels the pending frame and removes the listener, so nothing runs
//! past the view's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::OrbField;
use super::paint;
use super::theme::ThemeMode;

/// Full-viewport canvas rendering the drifting orb field.
///
/// The theme is threaded in as a signal and read untracked each frame;
/// painting is otherwise a pure function of the field.
#[component]
pub fn OrbBackdrop(#[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<OrbField>>> = Rc::new(RefCell::new(None));
	// `on_cleanup` requires Send captures, so everything teardown touches
	// sits behind arena handles rather than Rc: the latest frame id, and
	// the closures that must be deregistered and dropped.
	let animate: StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage> =
		StoredValue::new_local(None);
	let resize_cb: StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage> =
		StoredValue::new_local(None);
	let frame: StoredValue<Option<i32>> = StoredValue::new(None);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*field.borrow_mut() = Some(OrbField::generate(w, h, js_rand));

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		let cb: Closure<dyn FnMut()> = Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			// One assignment: the next frame sees either the old field or
			// the new one, never a half-built mix.
			*field_resize.borrow_mut() = Some(OrbField::generate(nw, nh, js_rand));
		});
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		resize_cb.set_value(Some(cb));

		let reschedule = move || {
			let handle = animate.with_value(|slot| {
				slot.as_ref().and_then(|cb| {
					web_sys::window()
						.unwrap()
						.request_animation_frame(cb.as_ref().unchecked_ref())
						.ok()
				})
			});
			if let Some(handle) = handle {
				frame.set_value(Some(handle));
			}
		};

		let field_anim = field.clone();
		animate.set_value(Some(Closure::new(move || {
			if let Some(ref mut field) = *field_anim.borrow_mut() {
				field.advance();
				paint::paint(&ctx, field, theme.get_untracked());
			}
			reschedule();
		})));
		reschedule();
	});

	on_cleanup(move || {
		let window = web_sys::window();
		if let Some(handle) = frame.try_get_value().flatten() {
			if let Some(ref win) = window {
				let _ = win.cancel_animation_frame(handle);
			}
		}
		let _ = resize_cb.try_update_value(|slot| {
			if let (Some(cb), Some(win)) = (slot.take(), window.as_ref()) {
				let _ =
					win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		});
		// The frame is cancelled, so the loop closure can drop safely.
		let _ = animate.try_update_value(|slot| {
			slot.take();
		});
	});

	view! { <canvas node_ref=canvas_ref class="bg-canvas" /> }
}

/// Randomness source for orb generation.
fn js_rand() -> f64 {
	js_sys::Math::random()
}
