//! Reducer actions, side-effect intents, and transition logic for the device shell.

use thiserror::Error;

use crate::{
    apps::AppRegistry,
    boot::{advance_progress, BOOT_SETTLE_DELAY_MS},
    model::{AppId, BootPhase, DetailItem, Navigation, Overlay, ShellState, BOOT_PROGRESS_MAX},
};

/// Direction for stepping through apps in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStep {
    /// The app before the current one; stays put on the first app.
    Previous,
    /// The app after the current one; opens the first app from home.
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Show the notification shade. No-op when it is already showing.
    OpenNotifications,
    /// Status-bar tap: hide the shade when showing, otherwise open it.
    ToggleNotifications,
    /// Expand quick settings inside the notification shade.
    OpenQuickSettings,
    /// Flip the quick-settings panel inside the notification shade.
    ToggleQuickSettings,
    /// Show the recent-apps switcher. Requires no other overlay.
    OpenAppSwitcher,
    /// Hide whichever overlay is showing.
    DismissOverlay,
    /// Open an app from the switcher and close the switcher in the same step.
    SelectFromSwitcher {
        app_id: AppId,
    },
    /// Open an installed app. Requires no overlay.
    OpenApp {
        app_id: AppId,
    },
    /// Return from an open app to the home screen.
    CloseApp,
    /// Drill into a detail record of the currently open app.
    OpenDetail {
        item: DetailItem,
        from_app: AppId,
    },
    /// Back button: detail, then overlay, then app.
    GoBack,
    /// Home button: clear navigation and overlays.
    GoHome,
    /// Tablet nav bar: step to the neighbouring app in registry order.
    OpenAdjacentApp {
        step: AppStep,
    },
    /// Advance the boot progress bar by one step.
    BootTick,
    /// Leave the boot screen after the bar filled.
    CompleteBoot,
    /// Leave the boot screen immediately.
    SkipBoot,
}

impl ShellAction {
    fn name(&self) -> &'static str {
        match self {
            Self::OpenNotifications => "open-notifications",
            Self::ToggleNotifications => "toggle-notifications",
            Self::OpenQuickSettings => "open-quick-settings",
            Self::ToggleQuickSettings => "toggle-quick-settings",
            Self::OpenAppSwitcher => "open-app-switcher",
            Self::DismissOverlay => "dismiss-overlay",
            Self::SelectFromSwitcher { .. } => "select-from-switcher",
            Self::OpenApp { .. } => "open-app",
            Self::CloseApp => "close-app",
            Self::OpenDetail { .. } => "open-detail",
            Self::GoBack => "go-back",
            Self::GoHome => "go-home",
            Self::OpenAdjacentApp { .. } => "open-adjacent-app",
            Self::BootTick => "boot-tick",
            Self::CompleteBoot => "complete-boot",
            Self::SkipBoot => "skip-boot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_shell`] for the host runtime to execute.
pub enum ShellEffect {
    /// Stop the boot progress ticker.
    StopBootTicker,
    /// Dispatch [`ShellAction::CompleteBoot`] after the delay.
    ScheduleBootCompletion { delay_ms: u32 },
    /// The shell left the boot screen.
    BootCompleted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected transitions. The state is left exactly as it was.
pub enum ReducerError {
    #[error("app `{0}` is not installed")]
    UnknownApp(AppId),
    #[error("`{action}` rejected: {reason}")]
    InvalidTransition {
        action: &'static str,
        reason: &'static str,
    },
}

fn invalid(action: &ShellAction, reason: &'static str) -> ReducerError {
    ReducerError::InvalidTransition {
        action: action.name(),
        reason,
    }
}

/// Applies a [`ShellAction`] to the shell state and collects resulting side effects.
///
/// Every action is validated before anything is written, so an `Err` leaves `state` untouched.
/// Actions that would not change anything (opening a panel that is already open, ticking a
/// finished boot) succeed with no effects.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownApp`] when an action names an app missing from `registry`, and
/// [`ReducerError::InvalidTransition`] when the action is not legal from the current state.
pub fn reduce_shell(
    state: &mut ShellState,
    registry: &AppRegistry,
    action: ShellAction,
) -> Result<Vec<ShellEffect>, ReducerError> {
    let mut effects = Vec::new();
    match &action {
        ShellAction::OpenNotifications => open_notifications(state),
        ShellAction::ToggleNotifications => {
            if matches!(state.overlay, Overlay::Notifications { .. }) {
                state.overlay = Overlay::None;
            } else {
                open_notifications(state);
            }
        }
        ShellAction::OpenQuickSettings => match state.overlay {
            Overlay::Notifications { .. } => {
                state.overlay = Overlay::Notifications {
                    quick_settings_expanded: true,
                };
            }
            _ => return Err(invalid(&action, "notification shade is not open")),
        },
        ShellAction::ToggleQuickSettings => match state.overlay {
            Overlay::Notifications {
                quick_settings_expanded,
            } => {
                state.overlay = Overlay::Notifications {
                    quick_settings_expanded: !quick_settings_expanded,
                };
            }
            _ => return Err(invalid(&action, "notification shade is not open")),
        },
        ShellAction::OpenAppSwitcher => match state.overlay {
            Overlay::None => state.overlay = Overlay::AppSwitcher,
            Overlay::AppSwitcher => {}
            Overlay::Notifications { .. } => {
                return Err(invalid(&action, "another overlay is showing"))
            }
        },
        ShellAction::DismissOverlay => state.overlay = Overlay::None,
        ShellAction::SelectFromSwitcher { app_id } => {
            if state.overlay != Overlay::AppSwitcher {
                return Err(invalid(&action, "app switcher is not open"));
            }
            ensure_installed(registry, app_id)?;
            state.navigation = Navigation::AppOpen(app_id.clone());
            state.overlay = Overlay::None;
        }
        ShellAction::OpenApp { app_id } => {
            ensure_installed(registry, app_id)?;
            if state.overlay.is_active() {
                return Err(invalid(&action, "an overlay is showing"));
            }
            state.navigation = Navigation::AppOpen(app_id.clone());
        }
        ShellAction::CloseApp => match state.navigation {
            Navigation::AppOpen(_) => state.navigation = Navigation::Home,
            _ => return Err(invalid(&action, "no app is open")),
        },
        ShellAction::OpenDetail { item, from_app } => {
            let opened_from_app = matches!(
                &state.navigation,
                Navigation::AppOpen(open) if open == from_app
            );
            if !opened_from_app {
                return Err(invalid(&action, "source app is not the open app"));
            }
            state.navigation = Navigation::DetailOpen {
                item: item.clone(),
                return_to: from_app.clone(),
            };
        }
        ShellAction::GoBack => {
            if let Some(target) = state.navigation.return_target() {
                state.navigation = target;
            } else if state.overlay.is_active() {
                state.overlay = Overlay::None;
            } else if matches!(state.navigation, Navigation::AppOpen(_)) {
                state.navigation = Navigation::Home;
            }
        }
        ShellAction::GoHome => {
            state.navigation = Navigation::Home;
            state.overlay = Overlay::None;
        }
        ShellAction::OpenAdjacentApp { step } => {
            if state.overlay.is_active() {
                return Err(invalid(&action, "an overlay is showing"));
            }
            if let Some(target) = adjacent_app(registry, &state.navigation, *step)? {
                state.navigation = Navigation::AppOpen(target);
            }
        }
        ShellAction::BootTick => {
            if let BootPhase::Booting { progress } = state.boot {
                if progress < BOOT_PROGRESS_MAX {
                    let next = advance_progress(progress);
                    state.boot = BootPhase::Booting { progress: next };
                    if next == BOOT_PROGRESS_MAX {
                        effects.push(ShellEffect::StopBootTicker);
                        effects.push(ShellEffect::ScheduleBootCompletion {
                            delay_ms: BOOT_SETTLE_DELAY_MS,
                        });
                    }
                }
            }
        }
        ShellAction::CompleteBoot => match state.boot {
            BootPhase::Booting { progress } if progress >= BOOT_PROGRESS_MAX => {
                state.boot = BootPhase::Ready;
                effects.push(ShellEffect::BootCompleted);
            }
            BootPhase::Booting { .. } => {
                return Err(invalid(&action, "boot progress has not reached 100"))
            }
            BootPhase::Ready => {}
        },
        ShellAction::SkipBoot => {
            if !state.boot.is_ready() {
                state.boot = BootPhase::Ready;
                effects.push(ShellEffect::StopBootTicker);
                effects.push(ShellEffect::BootCompleted);
            }
        }
    }

    Ok(effects)
}

fn open_notifications(state: &mut ShellState) {
    if !matches!(state.overlay, Overlay::Notifications { .. }) {
        state.overlay = Overlay::Notifications {
            quick_settings_expanded: false,
        };
    }
}

fn ensure_installed(registry: &AppRegistry, app_id: &AppId) -> Result<(), ReducerError> {
    if registry.contains(app_id) {
        Ok(())
    } else {
        Err(ReducerError::UnknownApp(app_id.clone()))
    }
}

fn adjacent_app(
    registry: &AppRegistry,
    navigation: &Navigation,
    step: AppStep,
) -> Result<Option<AppId>, ReducerError> {
    let apps = registry.apps();
    let Some(current) = navigation.active_app() else {
        return Ok(match step {
            AppStep::Next => apps.first().map(|app| app.id.clone()),
            AppStep::Previous => None,
        });
    };
    let index = registry
        .position(current)
        .ok_or_else(|| ReducerError::UnknownApp(current.clone()))?;
    let target = match step {
        AppStep::Previous => index.checked_sub(1),
        AppStep::Next => Some(index + 1),
    };
    Ok(target
        .and_then(|idx| apps.get(idx))
        .map(|app| app.id.clone()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps::test_support::{detail, registry};

    fn app(id: &str) -> AppId {
        AppId::trusted(id)
    }

    fn apply(state: &mut ShellState, action: ShellAction) -> Vec<ShellEffect> {
        reduce_shell(state, &registry(), action).expect("transition accepted")
    }

    fn rejected(state: &mut ShellState, action: ShellAction) -> ReducerError {
        let before = state.clone();
        let err = reduce_shell(state, &registry(), action).expect_err("transition rejected");
        assert_eq!(*state, before);
        err
    }

    fn open_projects_detail(state: &mut ShellState) {
        apply(state, ShellAction::OpenApp { app_id: app("projects") });
        apply(
            state,
            ShellAction::OpenDetail {
                item: detail("p1"),
                from_app: app("projects"),
            },
        );
    }

    #[test]
    fn project_drill_down_scenario() {
        let mut state = ShellState::default();

        apply(&mut state, ShellAction::OpenApp { app_id: app("projects") });
        assert_eq!(state.navigation, Navigation::AppOpen(app("projects")));
        assert_eq!(state.overlay, Overlay::None);

        apply(
            &mut state,
            ShellAction::OpenDetail {
                item: detail("p1"),
                from_app: app("projects"),
            },
        );
        assert_eq!(
            state.navigation,
            Navigation::DetailOpen {
                item: detail("p1"),
                return_to: app("projects"),
            }
        );

        apply(&mut state, ShellAction::GoBack);
        assert_eq!(state.navigation, Navigation::AppOpen(app("projects")));

        apply(&mut state, ShellAction::CloseApp);
        assert_eq!(state.navigation, Navigation::Home);
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn opening_unknown_app_fails_and_leaves_state() {
        let mut state = ShellState::default();
        let err = rejected(
            &mut state,
            ShellAction::OpenApp {
                app_id: app("does-not-exist"),
            },
        );
        assert_eq!(err, ReducerError::UnknownApp(app("does-not-exist")));
    }

    #[test]
    fn open_app_requires_no_overlay() {
        let mut state = ShellState::default();
        apply(&mut state, ShellAction::OpenNotifications);
        let err = rejected(&mut state, ShellAction::OpenApp { app_id: app("about") });
        assert!(matches!(err, ReducerError::InvalidTransition { .. }));
    }

    #[test]
    fn back_pops_detail_before_overlay_then_dismisses_overlay() {
        let mut state = ShellState::default();
        open_projects_detail(&mut state);
        apply(&mut state, ShellAction::OpenAppSwitcher);
        assert_eq!(state.overlay, Overlay::AppSwitcher);

        apply(&mut state, ShellAction::GoBack);
        assert_eq!(state.navigation, Navigation::AppOpen(app("projects")));
        assert_eq!(state.overlay, Overlay::AppSwitcher);

        apply(&mut state, ShellAction::GoBack);
        assert_eq!(state.navigation, Navigation::AppOpen(app("projects")));
        assert_eq!(state.overlay, Overlay::None);

        apply(&mut state, ShellAction::GoBack);
        assert_eq!(state.navigation, Navigation::Home);

        let effects = apply(&mut state, ShellAction::GoBack);
        assert!(effects.is_empty());
        assert_eq!(state, ShellState::default());
    }

    #[test]
    fn go_home_is_idempotent() {
        let mut state = ShellState::default();
        open_projects_detail(&mut state);
        apply(&mut state, ShellAction::OpenNotifications);

        apply(&mut state, ShellAction::GoHome);
        let once = state.clone();
        apply(&mut state, ShellAction::GoHome);

        assert_eq!(state, once);
        assert_eq!(state.navigation, Navigation::Home);
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn quick_settings_only_exist_inside_notifications() {
        let mut state = ShellState::default();
        rejected(&mut state, ShellAction::OpenQuickSettings);
        rejected(&mut state, ShellAction::ToggleQuickSettings);

        apply(&mut state, ShellAction::OpenNotifications);
        apply(&mut state, ShellAction::OpenQuickSettings);
        assert!(state.overlay.quick_settings_expanded());

        // Re-opening the shade keeps the expanded panel.
        apply(&mut state, ShellAction::OpenNotifications);
        assert!(state.overlay.quick_settings_expanded());

        apply(&mut state, ShellAction::ToggleQuickSettings);
        assert!(!state.overlay.quick_settings_expanded());

        apply(&mut state, ShellAction::ToggleQuickSettings);
        apply(&mut state, ShellAction::DismissOverlay);
        assert_eq!(state.overlay, Overlay::None);
        assert!(!state.overlay.quick_settings_expanded());

        apply(&mut state, ShellAction::OpenNotifications);
        assert!(!state.overlay.quick_settings_expanded());
    }

    #[test]
    fn status_bar_toggle_opens_and_closes_the_shade() {
        let mut state = ShellState::default();
        apply(&mut state, ShellAction::ToggleNotifications);
        assert!(matches!(state.overlay, Overlay::Notifications { .. }));
        apply(&mut state, ShellAction::ToggleNotifications);
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn notifications_replace_the_switcher() {
        let mut state = ShellState::default();
        apply(&mut state, ShellAction::OpenAppSwitcher);
        apply(&mut state, ShellAction::OpenNotifications);
        assert_eq!(
            state.overlay,
            Overlay::Notifications {
                quick_settings_expanded: false
            }
        );
        rejected(&mut state, ShellAction::OpenAppSwitcher);
    }

    #[test]
    fn switcher_selection_opens_app_and_closes_switcher_together() {
        let mut state = ShellState::default();
        rejected(
            &mut state,
            ShellAction::SelectFromSwitcher {
                app_id: app("skills"),
            },
        );

        apply(&mut state, ShellAction::OpenAppSwitcher);
        let err = rejected(
            &mut state,
            ShellAction::SelectFromSwitcher {
                app_id: app("ghost"),
            },
        );
        assert_eq!(err, ReducerError::UnknownApp(app("ghost")));

        apply(
            &mut state,
            ShellAction::SelectFromSwitcher {
                app_id: app("skills"),
            },
        );
        assert_eq!(state.navigation, Navigation::AppOpen(app("skills")));
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn detail_requires_matching_open_app() {
        let mut state = ShellState::default();
        let from_home = ShellAction::OpenDetail {
            item: detail("p1"),
            from_app: app("projects"),
        };
        rejected(&mut state, from_home.clone());

        apply(&mut state, ShellAction::OpenApp { app_id: app("about") });
        rejected(&mut state, from_home);
    }

    #[test]
    fn close_app_requires_an_open_app() {
        let mut state = ShellState::default();
        rejected(&mut state, ShellAction::CloseApp);

        open_projects_detail(&mut state);
        rejected(&mut state, ShellAction::CloseApp);
    }

    #[test]
    fn adjacent_app_walks_registry_order() {
        let mut state = ShellState::default();
        apply(
            &mut state,
            ShellAction::OpenAdjacentApp {
                step: AppStep::Previous,
            },
        );
        assert_eq!(state.navigation, Navigation::Home);

        apply(&mut state, ShellAction::OpenAdjacentApp { step: AppStep::Next });
        assert_eq!(state.navigation, Navigation::AppOpen(app("about")));

        apply(&mut state, ShellAction::OpenAdjacentApp { step: AppStep::Next });
        apply(&mut state, ShellAction::OpenAdjacentApp { step: AppStep::Next });
        assert_eq!(state.navigation, Navigation::AppOpen(app("projects")));

        apply(
            &mut state,
            ShellAction::OpenDetail {
                item: detail("p2"),
                from_app: app("projects"),
            },
        );
        apply(
            &mut state,
            ShellAction::OpenAdjacentApp {
                step: AppStep::Previous,
            },
        );
        assert_eq!(state.navigation, Navigation::AppOpen(app("skills")));

        apply(&mut state, ShellAction::OpenApp { app_id: app("contact") });
        apply(&mut state, ShellAction::OpenAdjacentApp { step: AppStep::Next });
        assert_eq!(state.navigation, Navigation::AppOpen(app("contact")));
    }

    #[test]
    fn boot_progress_is_monotonic_and_ready_once() {
        let mut state = ShellState::default();
        let mut last = 0;
        let mut completion_scheduled = 0;
        while !matches!(state.boot, BootPhase::Booting { progress: 100 }) {
            let effects = apply(&mut state, ShellAction::BootTick);
            let progress = state.boot.progress();
            assert!(progress >= last);
            last = progress;
            completion_scheduled += effects
                .iter()
                .filter(|effect| matches!(effect, ShellEffect::ScheduleBootCompletion { .. }))
                .count();
        }
        assert_eq!(completion_scheduled, 1);
        assert!(apply(&mut state, ShellAction::BootTick).is_empty());

        let effects = apply(&mut state, ShellAction::CompleteBoot);
        assert_eq!(effects, vec![ShellEffect::BootCompleted]);
        assert_eq!(state.boot, BootPhase::Ready);

        assert!(apply(&mut state, ShellAction::BootTick).is_empty());
        assert!(apply(&mut state, ShellAction::CompleteBoot).is_empty());
        assert!(apply(&mut state, ShellAction::SkipBoot).is_empty());
        assert_eq!(state.boot, BootPhase::Ready);
    }

    #[test]
    fn boot_cannot_complete_early_but_can_be_skipped() {
        let mut state = ShellState::default();
        apply(&mut state, ShellAction::BootTick);
        rejected(&mut state, ShellAction::CompleteBoot);

        let effects = apply(&mut state, ShellAction::SkipBoot);
        assert_eq!(
            effects,
            vec![ShellEffect::StopBootTicker, ShellEffect::BootCompleted]
        );
        assert_eq!(state.boot, BootPhase::Ready);
    }

    #[test]
    fn invariants_hold_across_a_long_action_sequence() {
        let registry = registry();
        let actions = [
            ShellAction::OpenNotifications,
            ShellAction::OpenQuickSettings,
            ShellAction::OpenAppSwitcher,
            ShellAction::DismissOverlay,
            ShellAction::OpenApp { app_id: app("projects") },
            ShellAction::OpenDetail {
                item: detail("p1"),
                from_app: app("projects"),
            },
            ShellAction::ToggleNotifications,
            ShellAction::ToggleQuickSettings,
            ShellAction::OpenAppSwitcher,
            ShellAction::GoBack,
            ShellAction::GoBack,
            ShellAction::CloseApp,
            ShellAction::OpenAppSwitcher,
            ShellAction::SelectFromSwitcher { app_id: app("about") },
            ShellAction::OpenAdjacentApp { step: AppStep::Next },
            ShellAction::GoHome,
        ];
        let mut state = ShellState::default();
        for action in actions.iter().cycle().take(64) {
            let _ = reduce_shell(&mut state, &registry, action.clone());
            if let Navigation::DetailOpen { return_to, .. } = &state.navigation {
                assert!(registry.contains(return_to));
            }
            if let Navigation::AppOpen(app_id) = &state.navigation {
                assert!(registry.contains(app_id));
            }
        }
    }
}
