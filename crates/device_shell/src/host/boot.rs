use std::time::Duration;

use leptos::{
    leptos_dom::helpers::{IntervalHandle, TimeoutHandle},
    logging, on_cleanup, set_interval_with_handle, set_timeout_with_handle,
};

use crate::{
    boot::{BOOT_FAILSAFE_MS, BOOT_TICK_MS},
    reducer::ShellAction,
    runtime_context::ShellRuntimeContext,
};

/// Browser timer that can be cancelled once.
pub(crate) trait PendingTimer {
    fn cancel(self);
}

impl PendingTimer for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

impl PendingTimer for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Holds at most one pending timer; arming a new one or disarming cancels the previous one.
#[derive(Debug)]
pub(crate) struct TimerSlot<H> {
    pending: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: PendingTimer> TimerSlot<H> {
    pub(crate) fn arm(&mut self, handle: H) {
        if let Some(previous) = self.pending.replace(handle) {
            previous.cancel();
        }
    }

    pub(crate) fn disarm(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

pub(super) fn install_boot_sequencer(runtime: ShellRuntimeContext) {
    match set_interval_with_handle(
        move || runtime.dispatch_action(ShellAction::BootTick),
        Duration::from_millis(BOOT_TICK_MS.into()),
    ) {
        Ok(handle) => runtime.boot_ticker.update_value(|slot| slot.arm(handle)),
        Err(err) => {
            logging::warn!("boot ticker unavailable, skipping boot screen: {err:?}");
            runtime.dispatch_action(ShellAction::SkipBoot);
        }
    }

    if let Ok(failsafe) = set_timeout_with_handle(
        move || runtime.dispatch_action(ShellAction::SkipBoot),
        Duration::from_millis(BOOT_FAILSAFE_MS.into()),
    ) {
        on_cleanup(move || failsafe.clear());
    }
    on_cleanup(move || {
        stop_ticker(runtime);
        runtime.boot_settle.update_value(TimerSlot::disarm);
    });
}

pub(super) fn stop_ticker(runtime: ShellRuntimeContext) {
    runtime.boot_ticker.update_value(TimerSlot::disarm);
}

pub(super) fn schedule_completion(runtime: ShellRuntimeContext, delay_ms: u32) {
    match set_timeout_with_handle(
        move || runtime.dispatch_action(ShellAction::CompleteBoot),
        Duration::from_millis(delay_ms.into()),
    ) {
        Ok(handle) => runtime.boot_settle.update_value(|slot| slot.arm(handle)),
        Err(err) => {
            logging::warn!("boot settle timer unavailable, completing now: {err:?}");
            runtime.dispatch_action(ShellAction::CompleteBoot);
        }
    }
}

pub(super) fn log_ready() {
    logging::log!("device shell ready");
}
