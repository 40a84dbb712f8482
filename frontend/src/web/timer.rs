//! Debounced callbacks on `gloo-timers`.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use seva_kendra::listing::Debouncer;

/// Returns a trigger that runs `action` once calls stop for `delay`.
///
/// Only the newest pending call fires; earlier timers see a stale ticket
/// and do nothing.
pub fn use_debounce<F>(delay: Duration, action: F) -> impl Fn() + Copy + 'static
where
    F: Fn() + Copy + 'static,
{
    let debouncer = StoredValue::new(Debouncer::default());
    on_cleanup(move || debouncer.update_value(Debouncer::cancel));

    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    move || {
        let Some(ticket) = debouncer.try_update_value(Debouncer::schedule) else {
            return;
        };
        Timeout::new(millis, move || {
            if debouncer.try_with_value(|d| d.is_current(ticket)) == Some(true) {
                action();
            }
        })
        .forget();
    }
}
