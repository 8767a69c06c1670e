use super::{app_views::render_app_contents, detail::DetailView, *};
use crate::{
    model::Navigation,
    reducer::{AppStep, ShellAction},
};

#[component]
pub(super) fn TabletChrome(clock: RwSignal<ClockSnapshot>) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let navigation = create_memo(move |_| state.with(|shell| shell.navigation.clone()));
    let active_app = create_memo(move |_| navigation.with(|nav| nav.active_app().cloned()));

    view! {
        <div class="tablet-frame">
            <div class="tablet-camera"></div>
            <button
                type="button"
                class="tablet-home-button"
                aria-label="Home"
                on:click=move |_| runtime.dispatch_action(ShellAction::GoHome)
            ></button>

            <div class="tablet-screen">
                <div class="desktop-status-bar">
                    <div class="desktop-time">{move || format_clock_time(clock.get())}</div>
                    <div class="desktop-icons" aria-hidden="true">
                        <span>"📶"</span>
                        <span>"📡"</span>
                        <span>"🔋"</span>
                    </div>
                </div>

                <div class="desktop-wallpaper">
                    <div class="desktop-time-widget">
                        <div class="desktop-big-time">{move || format_clock_time(clock.get())}</div>
                        <div class="desktop-date">{move || format_clock_date(clock.get())}</div>
                    </div>
                    <div class="desktop-profile-card">
                        <div class="profile-avatar" aria-hidden="true">{OWNER_AVATAR}</div>
                        <h2 class="profile-name">{OWNER_NAME}</h2>
                        <p class="profile-role">{OWNER_ROLE}</p>
                    </div>
                </div>

                <div class="desktop-app-drawer">
                    <div class="desktop-drawer-handle"></div>
                    <div class="desktop-tabs" role="tablist">
                        {runtime
                            .registry
                            .apps()
                            .iter()
                            .map(|app| {
                                let app_id = app.id.clone();
                                let tab_id = app.id.clone();
                                let selected = create_memo(move |_| {
                                    active_app.with(|active| active.as_ref() == Some(&tab_id))
                                });
                                view! {
                                    <button
                                        type="button"
                                        role="tab"
                                        class="tab-btn"
                                        class:active=move || selected.get()
                                        aria-selected=move || selected.get().to_string()
                                        on:click=move |_| {
                                            runtime.dispatch_action(ShellAction::OpenApp {
                                                app_id: app_id.clone(),
                                            })
                                        }
                                    >
                                        <span aria-hidden="true">{app.icon.glyph().to_string()}</span>
                                        <span>{app.name.clone()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <nav class="desktop-nav-bar" aria-label="App navigation">
                    <button
                        type="button"
                        class="desktop-nav-btn"
                        aria-label="Previous app"
                        on:click=move |_| {
                            runtime.dispatch_action(ShellAction::OpenAdjacentApp {
                                step: AppStep::Previous,
                            })
                        }
                    >
                        "◁"
                    </button>
                    <button
                        type="button"
                        class="desktop-nav-btn"
                        aria-label="Home"
                        on:click=move |_| runtime.dispatch_action(ShellAction::GoHome)
                    >
                        "○"
                    </button>
                    <button
                        type="button"
                        class="desktop-nav-btn"
                        aria-label="Next app"
                        on:click=move |_| {
                            runtime.dispatch_action(ShellAction::OpenAdjacentApp {
                                step: AppStep::Next,
                            })
                        }
                    >
                        "▭"
                    </button>
                </nav>

                {move || match navigation.get() {
                    Navigation::Home => ().into_view(),
                    Navigation::AppOpen(app_id) => {
                        let title = runtime
                            .registry
                            .descriptor(&app_id)
                            .map(|app| app.name.clone())
                            .unwrap_or_else(|| app_id.to_string());
                        view! {
                            <TabletContent title>{render_app_contents(&app_id)}</TabletContent>
                        }
                            .into_view()
                    }
                    Navigation::DetailOpen { item, return_to } => {
                        let title = runtime
                            .registry
                            .descriptor(&return_to)
                            .map(|app| app.name.clone())
                            .unwrap_or_else(|| return_to.to_string());
                        view! {
                            <TabletContent title>
                                <DetailView item />
                            </TabletContent>
                        }
                            .into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn TabletContent(title: String, children: Children) -> impl IntoView {
    let runtime = use_shell_runtime();

    view! {
        <div class="desktop-content" data-ui-kind="app-screen">
            <div class="desktop-app-header">
                <button
                    type="button"
                    class="desktop-back-btn"
                    aria-label="Back"
                    on:click=move |_| runtime.dispatch_action(ShellAction::GoBack)
                >
                    "←"
                </button>
                <h2 class="desktop-app-title">{title}</h2>
            </div>
            <div class="desktop-app-content">{children()}</div>
        </div>
    }
}
