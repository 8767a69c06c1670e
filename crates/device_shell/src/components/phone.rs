use super::{app_views::render_app_contents, detail::DetailView, *};
use crate::{
    model::{AppId, Navigation, Overlay},
    reducer::ShellAction,
};

const QUICK_TILES: [&str; 6] = [
    "📡 WiFi",
    "📱 Data",
    "🔊 Sound",
    "🔆 Bright",
    "✈️ Airplane",
    "🔵 Bluetooth",
];

#[component]
pub(super) fn PhoneChrome(clock: RwSignal<ClockSnapshot>) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let navigation = create_memo(move |_| state.with(|shell| shell.navigation.clone()));
    let overlay = create_memo(move |_| state.with(|shell| shell.overlay));

    view! {
        <div class="phone-frame">
            <div
                class="status-bar"
                role="button"
                aria-label="Toggle notifications"
                on:click=move |_| runtime.dispatch_action(ShellAction::ToggleNotifications)
            >
                <div class="status-left">
                    <span class="time">{move || format_clock_time(clock.get())}</span>
                </div>
                <div class="status-camera"></div>
                <div class="status-right" aria-hidden="true">
                    <span class="icon">"📶"</span>
                    <span class="icon">"📡"</span>
                    <span class="icon">"🔋"</span>
                </div>
            </div>

            <div class="phone-screen">
                {move || match navigation.get() {
                    Navigation::Home => view! { <HomeScreen clock /> }.into_view(),
                    Navigation::AppOpen(app_id) => view! { <AppScreen app_id /> }.into_view(),
                    Navigation::DetailOpen { item, .. } => view! { <DetailView item /> }.into_view(),
                }}
                {move || match overlay.get() {
                    Overlay::None => ().into_view(),
                    Overlay::Notifications { quick_settings_expanded } => {
                        view! { <NotificationsPanel quick_settings_expanded /> }.into_view()
                    }
                    Overlay::AppSwitcher => view! { <AppSwitcher /> }.into_view(),
                }}
            </div>

            <nav class="nav-bar" aria-label="Device navigation">
                <button
                    type="button"
                    class="nav-btn"
                    aria-label="Back"
                    on:click=move |_| runtime.dispatch_action(ShellAction::GoBack)
                >
                    "◁"
                </button>
                <button
                    type="button"
                    class="nav-btn"
                    aria-label="Home"
                    on:click=move |_| runtime.dispatch_action(ShellAction::GoHome)
                >
                    "○"
                </button>
                <button
                    type="button"
                    class="nav-btn"
                    aria-label="Recent apps"
                    on:click=move |_| runtime.dispatch_action(ShellAction::OpenAppSwitcher)
                >
                    "▭"
                </button>
            </nav>
        </div>
    }
}

#[component]
fn HomeScreen(clock: RwSignal<ClockSnapshot>) -> impl IntoView {
    let runtime = use_shell_runtime();
    let tracker = store_value(DragTracker::default());

    view! {
        <div
            class="home-screen"
            data-ui-kind="home-screen"
            on:pointerdown=move |ev: web_sys::PointerEvent| begin_drag(tracker, &ev)
            on:pointerup=move |ev: web_sys::PointerEvent| {
                finish_drag(runtime, tracker, GestureSurface::HomeScreen, &ev)
            }
            on:pointercancel=move |_| cancel_drag(tracker)
        >
            <div class="wallpaper">
                <div class="lock-widget">
                    <div class="date-time">
                        <div class="big-time">{move || format_clock_time(clock.get())}</div>
                        <div class="date">{move || format_clock_date(clock.get())}</div>
                    </div>
                    <div class="profile-card">
                        <div class="profile-avatar" aria-hidden="true">{OWNER_AVATAR}</div>
                        <h2 class="profile-name">{OWNER_NAME}</h2>
                        <p class="profile-role">{OWNER_ROLE}</p>
                    </div>
                </div>
            </div>

            <div class="app-drawer">
                <div class="drawer-handle"></div>
                <div class="app-grid">
                    {runtime
                        .registry
                        .apps()
                        .iter()
                        .map(|app| {
                            let app_id = app.id.clone();
                            view! {
                                <button
                                    type="button"
                                    class="app-item"
                                    on:click=move |_| {
                                        runtime.dispatch_action(ShellAction::OpenApp {
                                            app_id: app_id.clone(),
                                        })
                                    }
                                >
                                    <div class="app-icon-wrapper" style=format!("background:{};", app.accent)>
                                        <div class="app-icon-inner">{app.icon.glyph().to_string()}</div>
                                    </div>
                                    <span class="app-label">{app.name.clone()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn AppScreen(app_id: AppId) -> impl IntoView {
    let runtime = use_shell_runtime();
    let swipe = store_value(DragTracker::default());
    let flick = store_value(DragTracker::default());
    let title = runtime
        .registry
        .descriptor(&app_id)
        .map(|app| app.name.clone())
        .unwrap_or_else(|| app_id.to_string());

    view! {
        <div
            class="app-screen"
            data-ui-kind="app-screen"
            on:pointerdown=move |ev: web_sys::PointerEvent| begin_drag(swipe, &ev)
            on:pointerup=move |ev: web_sys::PointerEvent| {
                finish_drag(runtime, swipe, GestureSurface::AppScreen, &ev)
            }
            on:pointercancel=move |_| cancel_drag(swipe)
        >
            <div class="app-header">
                <button
                    type="button"
                    class="back-btn"
                    aria-label="Close app"
                    on:click=move |_| runtime.dispatch_action(ShellAction::CloseApp)
                >
                    "←"
                </button>
                <h3 class="app-title">{title}</h3>
                <div class="header-menu" aria-hidden="true">"⋮"</div>
            </div>

            <div class="app-content">{render_app_contents(&app_id)}</div>

            // Home indicator: flicking it up is the home-screen close gesture.
            <div
                class="gesture-bar"
                aria-hidden="true"
                on:pointerdown=move |ev: web_sys::PointerEvent| {
                    ev.stop_propagation();
                    begin_drag(flick, &ev)
                }
                on:pointerup=move |ev: web_sys::PointerEvent| {
                    ev.stop_propagation();
                    finish_drag(runtime, flick, GestureSurface::HomeScreen, &ev)
                }
                on:pointercancel=move |_| cancel_drag(flick)
            ></div>
        </div>
    }
}

#[component]
fn NotificationsPanel(quick_settings_expanded: bool) -> impl IntoView {
    let runtime = use_shell_runtime();
    let tracker = store_value(DragTracker::default());
    let project_count = runtime
        .registry
        .details_for(&AppId::trusted("projects"))
        .count();

    view! {
        <div
            class="notification-panel"
            data-ui-kind="notifications"
            on:pointerdown=move |ev: web_sys::PointerEvent| begin_drag(tracker, &ev)
            on:pointerup=move |ev: web_sys::PointerEvent| {
                finish_drag(runtime, tracker, GestureSurface::NotificationsPanel, &ev)
            }
            on:pointercancel=move |_| cancel_drag(tracker)
        >
            <div class="notification-header">
                <h3>"Notifications"</h3>
                <button
                    type="button"
                    aria-label="Quick settings"
                    aria-expanded=quick_settings_expanded.to_string()
                    on:click=move |_| runtime.dispatch_action(ShellAction::ToggleQuickSettings)
                >
                    "⚙️"
                </button>
            </div>

            <Show when=move || quick_settings_expanded fallback=|| ()>
                <div class="quick-settings">
                    {QUICK_TILES
                        .iter()
                        .map(|tile| view! { <div class="quick-tile">{*tile}</div> })
                        .collect_view()}
                </div>
            </Show>

            <div class="notifications-list">
                <div class="notification-item">
                    <div class="notif-icon" aria-hidden="true">{OWNER_AVATAR}</div>
                    <div class="notif-content">
                        <h4>"Portfolio"</h4>
                        <p>"Welcome to Aditya's Portfolio"</p>
                        <span class="notif-time">"Just now"</span>
                    </div>
                </div>
                <div class="notification-item">
                    <div class="notif-icon" aria-hidden="true">"🚀"</div>
                    <div class="notif-content">
                        <h4>"Projects"</h4>
                        <p>{format!("{project_count}+ Projects Available")}</p>
                        <span class="notif-time">"5 min ago"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AppSwitcher() -> impl IntoView {
    let runtime = use_shell_runtime();

    view! {
        <div class="app-switcher" data-ui-kind="app-switcher">
            <div class="switcher-header">
                <h3>"Recent Apps"</h3>
                <button
                    type="button"
                    aria-label="Close recent apps"
                    on:click=move |_| runtime.dispatch_action(ShellAction::DismissOverlay)
                >
                    "✕"
                </button>
            </div>
            <div class="recent-apps">
                {runtime
                    .registry
                    .switcher_apps()
                    .iter()
                    .map(|app| {
                        let app_id = app.id.clone();
                        view! {
                            <button
                                type="button"
                                class="recent-app-card"
                                on:click=move |_| {
                                    runtime.dispatch_action(ShellAction::SelectFromSwitcher {
                                        app_id: app_id.clone(),
                                    })
                                }
                            >
                                <div class="app-preview" style=format!("background:{};", app.accent)>
                                    <div class="preview-icon">{app.icon.glyph().to_string()}</div>
                                </div>
                                <span class="app-name">{app.name.clone()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
