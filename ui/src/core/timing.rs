//! Timers owned by the component that starts them.
//!
//! Every helper here spawns a Dioxus task in the calling scope, so unmounting
//! the view drops the timer; nothing fires against a disposed component.

use std::ops::ControlFlow;

use dioxus::prelude::*;

/// Suspend for `ms` milliseconds on the current platform's timer.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Run `tick` every `period_ms` until it returns `ControlFlow::Break`.
/// The interval starts on first render; later renders reuse it.
pub fn use_interval(
    period_ms: u64,
    mut tick: impl FnMut() -> ControlFlow<()> + 'static,
) -> Task {
    use_hook(move || {
        spawn(async move {
            loop {
                sleep_ms(period_ms).await;
                if tick().is_break() {
                    break;
                }
            }
        })
    })
}

/// Fire `fire` once, `delay_ms` after first render.
pub fn use_timeout(delay_ms: u64, fire: impl FnOnce() + 'static) -> Task {
    use_hook(move || {
        spawn(async move {
            sleep_ms(delay_ms).await;
            fire();
        })
    })
}

/// A single pending timer; scheduling a new one cancels the previous.
#[derive(Clone, Copy, PartialEq)]
pub struct TimerSlot {
    pending: Signal<Option<Task>>,
}

pub fn use_timer_slot() -> TimerSlot {
    let pending = use_signal(|| None);
    TimerSlot { pending }
}

impl TimerSlot {
    pub fn schedule(&mut self, delay_ms: u64, fire: impl FnOnce() + 'static) {
        self.cancel();
        let mut pending = self.pending;
        let task = spawn(async move {
            sleep_ms(delay_ms).await;
            pending.set(None);
            fire();
        });
        self.pending.set(Some(task));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.write().take() {
            task.cancel();
        }
    }
}
