//! Maps released drag gestures to shell actions without touching state.

use crate::{
    model::{Navigation, PointerPosition},
    reducer::ShellAction,
};

/// Vertical travel that pulls the notification shade down or flicks an app away.
pub const VERTICAL_SWIPE_THRESHOLD_PX: i32 = 100;
/// Upward travel that pushes the notification shade back up.
pub const SHADE_DISMISS_THRESHOLD_PX: i32 = 50;
/// Rightward travel that swipes an open app closed.
pub const HORIZONTAL_SWIPE_THRESHOLD_PX: i32 = 100;

/// Screen the drag happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSurface {
    /// Home screen, and the home indicator at the bottom of an open app.
    HomeScreen,
    NotificationsPanel,
    /// Body of an open app.
    AppScreen,
}

/// Total pointer travel between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragRelease {
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Tracks the press origin of one pointer drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragTracker {
    origin: Option<PointerPosition>,
}

impl DragTracker {
    /// Records the press position, replacing any unfinished drag.
    pub fn begin(&mut self, pointer: PointerPosition) {
        self.origin = Some(pointer);
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Drops the drag without reporting travel (pointer cancelled by the browser).
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    /// Ends the drag and returns the travel since [`DragTracker::begin`].
    pub fn release(&mut self, pointer: PointerPosition) -> Option<DragRelease> {
        let origin = self.origin.take()?;
        Some(DragRelease {
            offset_x: pointer.x - origin.x,
            offset_y: pointer.y - origin.y,
        })
    }
}

/// Returns the transition a drag requests, or `None` for sub-threshold travel (taps/scrolls).
pub fn interpret_gesture(
    surface: GestureSurface,
    navigation: &Navigation,
    release: DragRelease,
) -> Option<ShellAction> {
    match surface {
        GestureSurface::HomeScreen => {
            if release.offset_y > VERTICAL_SWIPE_THRESHOLD_PX {
                Some(ShellAction::OpenNotifications)
            } else if release.offset_y < -VERTICAL_SWIPE_THRESHOLD_PX
                && matches!(navigation, Navigation::AppOpen(_))
            {
                Some(ShellAction::CloseApp)
            } else {
                None
            }
        }
        GestureSurface::NotificationsPanel => {
            (release.offset_y < -SHADE_DISMISS_THRESHOLD_PX).then_some(ShellAction::DismissOverlay)
        }
        GestureSurface::AppScreen => (release.offset_x > HORIZONTAL_SWIPE_THRESHOLD_PX)
            .then_some(ShellAction::CloseApp),
    }
}
