//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::ShellRuntimeContext;

/// Installs the effect executor that drains reducer-emitted shell effects in order.
pub fn install(runtime: ShellRuntimeContext) {
    // Clear the queue before draining so effects that dispatch again enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_shell_effect(runtime, effect);
        }
    });
}
