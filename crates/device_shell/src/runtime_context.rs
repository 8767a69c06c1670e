//! Runtime provider and context wiring for the device shell.
//!
//! This module owns the shell state signal, the reducer dispatch callback, the effect queue, and
//! host bootstrap. UI composition stays in [`crate::components`].

use leptos::{
    leptos_dom::helpers::{IntervalHandle, TimeoutHandle},
    *,
};

use crate::{
    apps::AppRegistry,
    effect_executor,
    host::{ShellHostContext, TimerSlot},
    model::ShellState,
    reducer::{reduce_shell, ShellAction, ShellEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`] values.
pub struct ShellRuntimeContext {
    /// Host service bundle for executing effects and environment queries.
    pub host: StoredValue<ShellHostContext>,
    /// Installed apps and their detail records.
    pub registry: &'static AppRegistry,
    /// Reactive shell state signal.
    pub state: RwSignal<ShellState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<ShellEffect>>,
    /// Running boot ticker, cleared once boot progress is full.
    pub(crate) boot_ticker: StoredValue<TimerSlot<IntervalHandle>>,
    /// Pending settle timeout that completes the boot, cleared on unmount.
    pub(crate) boot_settle: StoredValue<TimerSlot<TimeoutHandle>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components and starts the boot sequencer.
pub fn ShellProvider(
    /// Host bundle; defaults to the browser adapters.
    #[prop(optional)]
    host: Option<ShellHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let registry = AppRegistry::builtin();
    let state = create_rw_signal(ShellState::default());
    let effects = create_rw_signal(Vec::<ShellEffect>::new());
    let boot_ticker = store_value(TimerSlot::<IntervalHandle>::default());
    let boot_settle = store_value(TimerSlot::<TimeoutHandle>::default());

    // Reduce a clone and publish it with a single write.
    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let previous = shell.clone();

        match reduce_shell(&mut shell, registry, action) {
            Ok(new_effects) => {
                if shell != previous {
                    state.set(shell);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("shell reducer rejected action: {err}"),
        }
    });

    let runtime = ShellRuntimeContext {
        host,
        registry,
        state,
        effects,
        boot_ticker,
        boot_settle,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    host.get_value().install_boot_sequencer(runtime);

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
