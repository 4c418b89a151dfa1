//! `setTimeout` plumbing.
//!
//! Timers are fire-and-forget closures like the rest of the UI, but the
//! handles of those still pending are kept in the page's `TimerGroup` so they
//! can be cleared when the page is unloaded for good.

use kp_ui_core::Schedule;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::PageTransitionEvent;

use crate::dom;
use crate::events;
use crate::state;

/// Handles of timers that have not fired yet.
#[derive(Debug, Default)]
pub struct TimerGroup {
    handles: Vec<i32>,
}

impl TimerGroup {
    pub fn track(&mut self, handle: i32) {
        self.handles.push(handle);
    }

    /// Forget a handle once its timer has fired.
    pub fn untrack(&mut self, handle: i32) {
        self.handles.retain(|&h| h != handle);
    }

    /// Take every pending handle, leaving the group empty.
    fn drain(&mut self) -> Vec<i32> {
        std::mem::take(&mut self.handles)
    }
}

/// Schedule `f` after `delay_ms`, tracked in the page timer group until it fires.
pub fn after<F>(delay_ms: u32, f: F) -> Option<i32>
where
    F: FnOnce() + 'static,
{
    let slot: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let fired = slot.clone();
    let cb = Closure::once(move || {
        if let Some(id) = fired.get() {
            state::with_mut(|s| s.timers.untrack(id));
        }
        f();
    });
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    match dom::window().set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay,
    ) {
        Ok(id) => {
            cb.forget();
            slot.set(Some(id));
            state::with_mut(|s| s.timers.track(id));
            Some(id)
        }
        Err(e) => {
            gloo_console::warn!("kartu: setTimeout failed", e);
            None
        }
    }
}

/// Start every task of `schedule`, handing each action to `run`.
pub fn start<A, F>(schedule: Schedule<A>, run: F) -> usize
where
    A: 'static,
    F: Fn(A) + Clone + 'static,
{
    let mut started = 0;
    for task in schedule {
        let run = run.clone();
        let action = task.action;
        if after(task.delay_ms, move || run(action)).is_some() {
            started += 1;
        }
    }
    started
}

pub fn cancel_all() {
    let handles = state::with_mut(|s| s.timers.drain());
    let w = dom::window();
    for id in handles {
        w.clear_timeout_with_handle(id);
    }
}

/// A page entering the back-forward cache keeps its timers; they resume on
/// restore. Only a real unload clears them.
pub fn cancels_on_pagehide(persisted: bool) -> bool {
    !persisted
}

/// Clear pending timers on `pagehide`, unless the page is being cached.
pub fn bind_pagehide_cancel() {
    events::on_event(&dom::window(), "pagehide", |ev| {
        let persisted = ev
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(|ev| ev.persisted());
        if cancels_on_pagehide(persisted) {
            cancel_all();
        }
    });
}
