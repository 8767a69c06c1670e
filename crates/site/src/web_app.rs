use device_shell::{DeviceShell, ShellProvider};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Aditya Kashid | Portfolio" />
        <Meta name="description" content="A phone-style portfolio shell: about, skills, projects, education, and contact." />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=ShellEntry />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ShellEntry() -> impl IntoView {
    view! {
        <ShellProvider>
            <DeviceShell />
        </ShellProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Nothing here"</h1>
            <A href="/">"Back to the home screen"</A>
        </section>
    }
}
