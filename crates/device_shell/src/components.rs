//! Device shell UI composition: boot screen, phone chrome, and tablet chrome.

mod app_views;
mod boot_screen;
mod detail;
mod phone;
mod tablet;

use leptos::*;
use wasm_bindgen::JsCast;

use self::{boot_screen::BootScreen, phone::PhoneChrome, tablet::TabletChrome};

use crate::{
    gesture::{interpret_gesture, DragTracker, GestureSurface},
    layout::{layout_change_action, select_layout, ShellLayout},
    model::PointerPosition,
};

pub use self::app_views::render_app_contents;
pub use crate::runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};

const OWNER_NAME: &str = "Aditya Kashid";
const OWNER_ROLE: &str = "React Native Developer";
const OWNER_AVATAR: &str = "👨‍💻";

#[component]
/// Renders the boot screen until the shell is ready, then the chrome picked for the viewport.
pub fn DeviceShell() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let layout = create_rw_signal(select_layout(runtime.host.get_value().viewport_width()));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let next = select_layout(runtime.host.get_value().viewport_width());
        if layout.get_untracked() != next {
            let overlay = state.with_untracked(|shell| shell.overlay);
            if let Some(action) = layout_change_action(next, overlay) {
                runtime.dispatch_action(action);
            }
            layout.set(next);
        }
    });
    on_cleanup(move || resize_listener.remove());

    let clock = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        std::time::Duration::from_secs(CLOCK_REFRESH_SECS),
    ) {
        on_cleanup(move || interval.clear());
    }

    let ready = create_memo(move |_| state.with(|shell| shell.boot.is_ready()));

    view! {
        <div
            class=move || format!("device-shell {}", layout.get().css_class())
            data-ui-kind="device-root"
            data-layout=move || match layout.get() {
                ShellLayout::Phone => "phone",
                ShellLayout::Tablet => "tablet",
            }
        >
            <Show when=move || ready.get() fallback=move || view! { <BootScreen layout /> }>
                {move || match layout.get() {
                    ShellLayout::Phone => view! { <PhoneChrome clock /> }.into_view(),
                    ShellLayout::Tablet => view! { <TabletChrome clock /> }.into_view(),
                }}
            </Show>
        </div>
    }
}

const CLOCK_REFRESH_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    weekday: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 0,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

fn format_clock_date(snapshot: ClockSnapshot) -> String {
    const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let weekday = WEEKDAYS.get(snapshot.weekday as usize).copied().unwrap_or("");
    let month = MONTHS.get(snapshot.month as usize).copied().unwrap_or("");
    format!("{weekday}, {month} {}", snapshot.day)
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Starts tracking a drag and keeps pointer events on the pressed element until release.
fn begin_drag(tracker: StoredValue<DragTracker>, ev: &web_sys::PointerEvent) {
    if let Some(element) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    {
        let _ = element.set_pointer_capture(ev.pointer_id());
    }
    let pointer = pointer_from_pointer_event(ev);
    tracker.update_value(|drag| drag.begin(pointer));
}

/// Ends a drag on `surface` and dispatches the transition it maps to, if any.
fn finish_drag(
    runtime: ShellRuntimeContext,
    tracker: StoredValue<DragTracker>,
    surface: GestureSurface,
    ev: &web_sys::PointerEvent,
) {
    let pointer = pointer_from_pointer_event(ev);
    let mut released = None;
    tracker.update_value(|drag| released = drag.release(pointer));
    let Some(release) = released else {
        return;
    };

    let navigation = runtime.state.with_untracked(|shell| shell.navigation.clone());
    if let Some(action) = interpret_gesture(surface, &navigation, release) {
        runtime.dispatch_action(action);
    }
}

fn cancel_drag(tracker: StoredValue<DragTracker>) {
    tracker.update_value(DragTracker::cancel);
}
