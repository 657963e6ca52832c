//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the dragged payload `P` and the drop target type `T`; the
//! application decides what a target means.

mod state;

pub use state::DragState;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 8;

/// How long a click is suppressed after a drag ends
const CLICK_SUPPRESS_MS: i32 = 100;

/// DnD session signals
pub struct DndSignals<P: Send + Sync + 'static, T: Send + Sync + 'static> {
    pub state: RwSignal<DragState<P, T>>,
    /// Last pointer position while dragging (for the drag proxy)
    pub pointer: RwSignal<(i32, i32)>,
    /// True for a moment after a drag ends, so the trailing click can be ignored
    pub drag_just_ended: RwSignal<bool>,
    pub threshold: i32,
}

impl<P: Send + Sync + 'static, T: Send + Sync + 'static> Clone for DndSignals<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static, T: Send + Sync + 'static> Copy for DndSignals<P, T> {}

impl<P, T> DndSignals<P, T>
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    /// Tracked: is anything being dragged right now
    pub fn is_dragging(&self) -> bool {
        self.state.with(|s| s.is_dragging())
    }

    /// Tracked: is the active payload matching `pred`
    pub fn is_dragging_where(&self, pred: impl Fn(&P) -> bool) -> bool {
        self.state.with(|s| s.dragged().is_some_and(&pred))
    }

    /// Tracked: is `target` the current drop target
    pub fn is_over(&self, target: T) -> bool {
        self.state.with(|s| s.is_over(target))
    }

    /// Tracked: clone of the active payload
    pub fn dragged(&self) -> Option<P> {
        self.state.with(|s| s.dragged().cloned())
    }

    pub fn cancel(&self) {
        if self.state.with_untracked(|s| !matches!(s, DragState::Idle)) {
            self.state.update(|s| s.cancel());
        }
    }
}

pub fn create_dnd_signals<P, T>(threshold: i32) -> DndSignals<P, T>
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    DndSignals {
        state: RwSignal::new(DragState::Idle),
        pointer: RwSignal::new((0, 0)),
        drag_just_ended: RwSignal::new(false),
        threshold,
    }
}

/// Flag the end of a drag and clear the flag shortly after
fn mark_drag_ended<P: Send + Sync + 'static, T: Send + Sync + 'static>(dnd: &DndSignals<P, T>) {
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable elements
/// Arms a pending drag with start position
pub fn make_on_mousedown<P, T>(
    dnd: DndSignals<P, T>,
    payload: P,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is a control
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
        }
        let payload = payload.clone();
        dnd.state
            .update(|s| s.press(payload, ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<P, T>(
    dnd: DndSignals<P, T>,
    target: T,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.state.with_untracked(|s| s.is_dragging()) {
            dnd.state.update(|s| s.enter(target));
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_target_mouseleave<P, T>(
    dnd: DndSignals<P, T>,
    target: T,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.state.with_untracked(|s| s.is_over(target)) {
            dnd.state.update(|s| s.leave(target));
        }
    }
}

/// Bind document mousemove - starts drag once moved past the threshold and
/// tracks the pointer while dragging
fn bind_global_mousemove<P, T>(dnd: DndSignals<P, T>)
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let (x, y) = (ev.client_x(), ev.client_y());
        match dnd.state.with_untracked(|s| (matches!(s, DragState::Pressed { .. }), s.is_dragging())) {
            (true, _) => {
                let mut started = false;
                dnd.state.update(|s| started = s.pointer_moved(x, y, dnd.threshold));
                if started {
                    dnd.pointer.set((x, y));
                }
            }
            (_, true) => dnd.pointer.set((x, y)),
            _ => {}
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind cancellation: Escape while dragging, or the window losing focus
/// (the pointer is no longer ours)
fn bind_global_cancel<P, T>(dnd: DndSignals<P, T>)
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.state.with_untracked(|s| s.is_dragging()) {
            dnd.cancel();
            mark_drag_ended(&dnd);
        }
    });
    let on_blur = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        dnd.cancel();
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
    on_blur.forget();
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop` runs only when a real drag (past the threshold) is released over
/// a target; a plain click or a release over nothing ends the session silently.
pub fn bind_global_mouseup<P, T, F>(dnd: DndSignals<P, T>, on_drop: F)
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(P, T) + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let (idle, was_dragging) =
            dnd.state.with_untracked(|s| (matches!(s, DragState::Idle), s.is_dragging()));
        if idle {
            return;
        }

        let mut dropped = None;
        dnd.state.update(|s| dropped = s.release());

        if was_dragging {
            mark_drag_ended(&dnd);
        }
        if let Some((payload, target)) = dropped {
            on_drop(payload, target);
        }
        // Click event will fire naturally on the element when not dragging
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove and cancellation
    bind_global_mousemove(dnd);
    bind_global_cancel(dnd);
}
