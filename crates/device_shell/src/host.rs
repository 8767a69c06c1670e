//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; timers, logging, the contact relay, and viewport queries are
//! reached only from here.

mod boot;
mod host_ui;

use std::rc::Rc;

use platform_host::ContactRelayService;
use platform_host_web::contact_relay_service;

use crate::{reducer::ShellEffect, runtime_context::ShellRuntimeContext};

pub(crate) use self::boot::TimerSlot;

#[derive(Clone)]
/// Host service bundle for shell side effects.
pub struct ShellHostContext {
    contact: Rc<dyn ContactRelayService>,
}

impl Default for ShellHostContext {
    fn default() -> Self {
        Self {
            contact: Rc::new(contact_relay_service()),
        }
    }
}

impl ShellHostContext {
    /// Host bundle with an injected contact relay.
    pub fn with_contact_relay(contact: Rc<dyn ContactRelayService>) -> Self {
        Self { contact }
    }

    /// Returns the configured contact relay service.
    pub fn contact_relay(&self) -> Rc<dyn ContactRelayService> {
        self.contact.clone()
    }

    /// Starts the boot progress ticker and the boot-screen failsafe.
    pub fn install_boot_sequencer(&self, runtime: ShellRuntimeContext) {
        boot::install_boot_sequencer(runtime);
    }

    /// Executes a single [`ShellEffect`] emitted by the reducer.
    pub fn run_shell_effect(&self, runtime: ShellRuntimeContext, effect: ShellEffect) {
        match effect {
            ShellEffect::StopBootTicker => boot::stop_ticker(runtime),
            ShellEffect::ScheduleBootCompletion { delay_ms } => {
                boot::schedule_completion(runtime, delay_ms)
            }
            ShellEffect::BootCompleted => boot::log_ready(),
        }
    }

    /// Returns the current viewport width in CSS pixels.
    pub fn viewport_width(&self) -> i32 {
        host_ui::viewport_width()
    }
}
