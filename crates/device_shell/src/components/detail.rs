use super::*;
use crate::{model::DetailItem, reducer::ShellAction};

#[component]
/// Drill-down screen for one detail record; the back button pops to the app it was opened from.
pub(super) fn DetailView(item: DetailItem) -> impl IntoView {
    let runtime = use_shell_runtime();
    let DetailItem {
        name,
        short_desc,
        long_desc,
        tags,
        features,
        accent,
        icon,
        links,
        ..
    } = item;

    let repo_action = match links.repo_url {
        Some(url) => view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="detail-btn detail-btn-primary">
                <span aria-hidden="true">"⌥"</span>
                <span>"View Code"</span>
            </a>
        }
        .into_view(),
        None => view! {
            <div class="detail-btn detail-btn-disabled">
                <span aria-hidden="true">"🔒"</span>
                <span>"Code is Private"</span>
            </div>
        }
        .into_view(),
    };
    let demo_action = match links.demo_url {
        Some(url) => view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="detail-btn detail-btn-secondary">
                <span aria-hidden="true">"🚀"</span>
                <span>"Visit Live"</span>
            </a>
        }
        .into_view(),
        None => view! {
            <div class="detail-btn detail-btn-disabled">
                <span aria-hidden="true">"🔒"</span>
                <span>"Not Hosted Yet"</span>
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="project-detail" data-ui-kind="detail-view">
            <div class="detail-header">
                <button
                    type="button"
                    class="detail-back-btn"
                    on:click=move |_| runtime.dispatch_action(ShellAction::GoBack)
                >
                    "← Back"
                </button>
                <div class="detail-title-section">
                    <div class="detail-icon-large" style=format!("background:{accent};")>
                        {icon.glyph().to_string()}
                    </div>
                    <div class="detail-title-text">
                        <h2>{name}</h2>
                        <p class="detail-subtitle">{short_desc}</p>
                    </div>
                </div>
            </div>

            <div class="detail-content">
                <section class="detail-card">
                    <h3>"About This Project"</h3>
                    <p class="detail-description">{long_desc}</p>
                </section>
                <section class="detail-card">
                    <h3>"Tech Stack"</h3>
                    <div class="tech-badges">
                        {tags
                            .into_iter()
                            .map(|tag| view! { <span class="tech-badge">{tag}</span> })
                            .collect_view()}
                    </div>
                </section>
                <section class="detail-card">
                    <h3>"Key Features"</h3>
                    <ul class="features-grid">
                        {features
                            .into_iter()
                            .map(|feature| {
                                view! {
                                    <li class="feature-item">
                                        <span class="feature-check" aria-hidden="true">"✓"</span>
                                        <span class="feature-text">{feature}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
                <div class="detail-actions">{repo_action} {demo_action}</div>
            </div>
        </div>
    }
}
