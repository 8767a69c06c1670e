use super::*;
use crate::reducer::ShellAction;

#[component]
pub(super) fn BootScreen(layout: RwSignal<ShellLayout>) -> impl IntoView {
    let runtime = use_shell_runtime();
    let progress = create_memo(move |_| runtime.state.with(|shell| shell.boot.progress()));

    view! {
        <div
            class=move || match layout.get() {
                ShellLayout::Phone => "phone-frame boot-frame",
                ShellLayout::Tablet => "tablet-frame boot-frame",
            }
        >
            <div class="boot-screen" role="progressbar" aria-valuemin="0" aria-valuemax="100"
                aria-valuenow=move || progress.get().to_string()
            >
                <div class="boot-content">
                    <div class="boot-logo" aria-hidden="true">{OWNER_AVATAR}</div>
                    <h1 class="boot-title">"Aditya's Portfolio"</h1>
                    <p class="boot-subtitle">"Loading..."</p>
                    <div class="boot-progress-container">
                        <div class="boot-progress-bar">
                            <div
                                class="boot-progress-fill"
                                style=move || format!("width:{}%;", progress.get())
                            ></div>
                        </div>
                        <span class="boot-percentage">{move || format!("{}%", progress.get())}</span>
                    </div>
                    <button
                        type="button"
                        class="boot-skip"
                        on:click=move |_| runtime.dispatch_action(ShellAction::SkipBoot)
                    >
                        "Skip"
                    </button>
                </div>
            </div>
        </div>
    }
}
