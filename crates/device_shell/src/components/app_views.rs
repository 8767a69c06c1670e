//! Content rendered inside each installed app.

use super::*;
use crate::{
    contact::{ContactFormState, ContactStatus},
    model::AppId,
    reducer::ShellAction,
};

/// Renders the body of the app identified by `app_id`.
pub fn render_app_contents(app_id: &AppId) -> View {
    match app_id.as_str() {
        "about" => view! { <AboutApp /> }.into_view(),
        "skills" => view! { <SkillsApp /> }.into_view(),
        "projects" => view! { <ProjectsApp app_id=app_id.clone() /> }.into_view(),
        "education" => view! { <EducationApp /> }.into_view(),
        "contact" => view! { <ContactApp /> }.into_view(),
        other => {
            logging::warn!("no content registered for app `{other}`");
            view! { <p class="app-empty">"Nothing here yet."</p> }.into_view()
        }
    }
}

const ABOUT_CARDS: [(&str, &str, &str); 4] = [
    ("📍", "Location", "Surat, Gujarat | Nashik, Maharashtra"),
    ("💼", "Expertise", "Mobile App Development, Cross-Platform Solutions"),
    ("🎯", "Focus", "Creating innovative mobile applications with clean, scalable code"),
    ("🚀", "Passion", "Building production-ready apps that users love"),
];

#[component]
fn AboutApp() -> impl IntoView {
    view! {
        <div class="app-about">
            <div class="about-header">
                <div class="about-avatar-large" aria-hidden="true">{OWNER_AVATAR}</div>
                <h2>{OWNER_NAME}</h2>
                <p class="about-subtitle">"React Native Developer & IT Engineer"</p>
            </div>
            <div class="info-grid">
                {ABOUT_CARDS
                    .iter()
                    .map(|(icon, title, body)| {
                        view! {
                            <div class="info-card">
                                <div class="card-icon" aria-hidden="true">{*icon}</div>
                                <div class="card-content">
                                    <h4>{*title}</h4>
                                    <p>{*body}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

const SKILLS: [(&str, &str, &str); 8] = [
    ("React Native", "⚛️", "#61dafb"),
    ("TypeScript", "📘", "#3178c6"),
    ("JavaScript", "📜", "#f7df1e"),
    ("React.js", "⚛️", "#61dafb"),
    ("Node.js", "🟢", "#339933"),
    ("Firebase", "🔥", "#ffca28"),
    ("Expo", "📱", "#000020"),
    ("Redux", "🔄", "#764abc"),
];

#[component]
fn SkillsApp() -> impl IntoView {
    view! {
        <div class="app-skills">
            <div class="skills-grid">
                {SKILLS
                    .iter()
                    .map(|(name, icon, color)| {
                        view! {
                            <div class="skill-card">
                                <div class="skill-icon" style=format!("background-color:{color};")>
                                    {*icon}
                                </div>
                                <span class="skill-name">{*name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectsApp(app_id: AppId) -> impl IntoView {
    let runtime = use_shell_runtime();
    let registry = runtime.registry;
    let items: Vec<_> = registry.details_for(&app_id).cloned().collect();

    view! {
        <div class="app-projects">
            {items
                .into_iter()
                .map(|item| {
                    let from_app = app_id.clone();
                    let accent = item.accent.clone();
                    let icon = item.icon.glyph().to_string();
                    let name = item.name.clone();
                    let short_desc = item.short_desc.clone();
                    let stack = item.tags.join(", ");
                    view! {
                        <button
                            type="button"
                            class="project-card"
                            on:click=move |_| {
                                runtime.dispatch_action(ShellAction::OpenDetail {
                                    item: item.clone(),
                                    from_app: from_app.clone(),
                                });
                            }
                        >
                            <div class="project-icon" style=format!("background:{accent};")>{icon}</div>
                            <div class="project-details">
                                <h4>{name}</h4>
                                <p class="project-desc">{short_desc}</p>
                                <p class="project-tech">{stack}</p>
                            </div>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

const CERTIFICATIONS: [(&str, &str); 3] = [
    ("React Native Development", "Advanced Mobile App Development"),
    ("Full Stack JavaScript", "MERN Stack Specialization"),
    ("Firebase & Cloud", "Backend Services & Deployment"),
];

#[component]
fn EducationApp() -> impl IntoView {
    view! {
        <div class="app-education">
            <div class="edu-card">
                <div class="edu-icon" aria-hidden="true">"🎓"</div>
                <div class="edu-details">
                    <h3>"Bachelor of Engineering"</h3>
                    <p class="edu-field">"Information Technology"</p>
                    <p class="edu-year">"2020 - 2024"</p>
                </div>
            </div>
            <div class="cert-section">
                <h3 class="section-title">"Certifications"</h3>
                <div class="cert-list">
                    {CERTIFICATIONS
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="cert-item">
                                    <div class="cert-badge" aria-hidden="true">"✓"</div>
                                    <div>
                                        <h5>{*title}</h5>
                                        <p>{*body}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

const CONTACT_LINKS: [(&str, &str, &str, &str); 4] = [
    ("📧", "Email", "adityakashid21@gmail.com", "mailto:adityakashid21@gmail.com"),
    ("📱", "WhatsApp", "+91 98818 91277", "https://wa.me/919881891277"),
    ("💼", "LinkedIn", "Aditya Kashid", "https://www.linkedin.com/in/aditya-kashid-a1b0a5257/"),
    ("🔗", "GitHub", "adityakashid21", "https://github.com/adityakashid21"),
];

#[component]
fn ContactApp() -> impl IntoView {
    let runtime = use_shell_runtime();
    let form = create_rw_signal(ContactFormState::default());
    let validation = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = form.get_untracked();
        let submission = match next.begin_submit() {
            Ok(submission) => submission,
            Err(err) => {
                validation.set(Some(err.to_string()));
                return;
            }
        };
        validation.set(None);
        form.set(next);

        let relay = runtime.host.get_value().contact_relay();
        spawn_local(async move {
            let outcome = relay.submit(&submission).await;
            if let Err(err) = &outcome {
                logging::warn!("contact relay failed: {err}");
            }
            // The view may be gone by now; a disposed signal just drops the outcome.
            let _ = form.try_update(|state| state.finish_submit(outcome));
        });
    };

    let status_line = move || {
        form.with(|state| {
            state.status_message().map(|message| {
                let class = match state.status {
                    ContactStatus::Sent => "form-status success",
                    _ => "form-status error",
                };
                view! { <p class=class role="status">{message.to_string()}</p> }
            })
        })
    };

    view! {
        <div class="app-contact">
            <div class="contact-grid">
                {CONTACT_LINKS
                    .iter()
                    .map(|(icon, title, label, href)| {
                        view! {
                            <a href=*href target="_blank" rel="noopener noreferrer" class="contact-card">
                                <div class="contact-icon" aria-hidden="true">{*icon}</div>
                                <div class="contact-info">
                                    <h4>{*title}</h4>
                                    <p>{*label}</p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <form class="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    prop:value=move || form.with(|state| state.draft.name.clone())
                    on:input=move |ev| form.update(|state| state.draft.name = event_target_value(&ev))
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    prop:value=move || form.with(|state| state.draft.email.clone())
                    on:input=move |ev| form.update(|state| state.draft.email = event_target_value(&ev))
                />
                <textarea
                    name="message"
                    rows="5"
                    placeholder="Your Message"
                    prop:value=move || form.with(|state| state.draft.message.clone())
                    on:input=move |ev| {
                        form.update(|state| state.draft.message = event_target_value(&ev))
                    }
                ></textarea>
                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || form.with(ContactFormState::is_submitting)
                >
                    {move || {
                        if form.with(ContactFormState::is_submitting) {
                            "Sending..."
                        } else {
                            "Send Message"
                        }
                    }}
                </button>
                {move || validation.get().map(|message| view! { <p class="form-status error">{message}</p> })}
                {status_line}
            </form>
        </div>
    }
}
