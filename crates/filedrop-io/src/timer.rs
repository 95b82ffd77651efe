//! Message dismissal timers.
//!
//! Timers are Dioxus tasks spawned in the zone's scope, so they are
//! dropped together with the zone and can never write to an unmounted
//! component. Starting a new timer cancels the pending one; the ticket
//! check in [`DropZone::dismiss`] covers a timer that already fired.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use filedrop_core::{DropZone, Scheduled};
use gloo_timers::future::TimeoutFuture;

/// Convert a dismissal delay to the `u32` milliseconds `setTimeout` takes.
#[must_use]
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Start the dismissal timer for a freshly shown message and return its
/// task, which is also left in `pending`.
///
/// Must be called from inside a component scope (e.g. an event handler).
pub fn schedule_dismissal(
    mut zone: Signal<DropZone>,
    mut pending: Signal<Option<Task>>,
    scheduled: Scheduled,
) -> Task {
    if let Some(task) = pending.take() {
        task.cancel();
    }
    let task = spawn(async move {
        TimeoutFuture::new(timeout_millis(scheduled.dismiss_after)).await;
        zone.write().dismiss(scheduled.ticket);
        pending.set(None);
    });
    pending.set(Some(task));
    task
}
