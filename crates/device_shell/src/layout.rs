//! Viewport-driven choice of device chrome.

use crate::{model::Overlay, reducer::ShellAction};

/// Viewports at least this wide get the tablet chrome.
pub const TABLET_BREAKPOINT_PX: i32 = 1200;

/// Device chrome wrapped around the shell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellLayout {
    /// Phone frame with status bar, overlays, and gesture surfaces.
    Phone,
    /// Tablet frame with a tab strip and previous/next navigation. It draws no overlays.
    Tablet,
}

impl ShellLayout {
    /// Root CSS class of the chrome.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Phone => "phone-portfolio",
            Self::Tablet => "desktop-portfolio",
        }
    }

    /// Returns `true` when the chrome renders the overlay panels.
    pub fn shows_overlays(self) -> bool {
        matches!(self, Self::Phone)
    }
}

/// Picks the chrome for a viewport width in CSS pixels.
pub fn select_layout(viewport_width: i32) -> ShellLayout {
    if viewport_width >= TABLET_BREAKPOINT_PX {
        ShellLayout::Tablet
    } else {
        ShellLayout::Phone
    }
}

/// Action to dispatch when the chrome switches to `next`.
///
/// Tablet chrome cannot show or close overlays, and an open overlay blocks its navigation, so
/// entering it with an overlay active dismisses the overlay.
pub fn layout_change_action(next: ShellLayout, overlay: Overlay) -> Option<ShellAction> {
    (!next.shows_overlays() && overlay.is_active()).then_some(ShellAction::DismissOverlay)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        apps::test_support::registry,
        model::{AppId, Navigation, ShellState},
        reducer::{reduce_shell, AppStep},
    };

    #[test]
    fn breakpoint_is_inclusive_for_tablet() {
        assert_eq!(select_layout(375), ShellLayout::Phone);
        assert_eq!(select_layout(1199), ShellLayout::Phone);
        assert_eq!(select_layout(1200), ShellLayout::Tablet);
        assert_eq!(select_layout(2560), ShellLayout::Tablet);
    }

    #[test]
    fn entering_tablet_dismisses_only_an_active_overlay() {
        let shade = Overlay::Notifications {
            quick_settings_expanded: true,
        };
        assert_eq!(
            layout_change_action(ShellLayout::Tablet, shade),
            Some(ShellAction::DismissOverlay)
        );
        assert_eq!(
            layout_change_action(ShellLayout::Tablet, Overlay::AppSwitcher),
            Some(ShellAction::DismissOverlay)
        );
        assert_eq!(layout_change_action(ShellLayout::Tablet, Overlay::None), None);
        assert_eq!(layout_change_action(ShellLayout::Phone, shade), None);
    }

    #[test]
    fn tablet_navigation_works_after_resizing_with_the_shade_open() {
        let registry = registry();
        let mut state = ShellState::default();
        reduce_shell(&mut state, &registry, ShellAction::OpenNotifications).expect("open shade");

        let action = layout_change_action(ShellLayout::Tablet, state.overlay).expect("dismiss");
        reduce_shell(&mut state, &registry, action).expect("dismiss shade");

        reduce_shell(
            &mut state,
            &registry,
            ShellAction::OpenApp {
                app_id: AppId::trusted("skills"),
            },
        )
        .expect("tab opens app");
        reduce_shell(
            &mut state,
            &registry,
            ShellAction::OpenAdjacentApp {
                step: AppStep::Next,
            },
        )
        .expect("next app");
        assert_eq!(state.overlay, Overlay::None);
        assert_eq!(state.navigation, Navigation::AppOpen(AppId::trusted("projects")));
    }
}
