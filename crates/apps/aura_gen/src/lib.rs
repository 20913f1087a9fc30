//! Aura Gen desktop app: turns a short theme into generated wallpapers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod state;

use std::rc::Rc;

use leptos::*;
use platform_host::ImageGenerationService;

pub use state::{GeneratorState, GENERATION_FAILED_MESSAGE, HISTORY_LIMIT};

const DOWNLOAD_FILE_NAME: &str = "aura-wallpaper.png";

#[component]
/// Wallpaper generator window contents.
pub fn AuraGenApp(
    /// Backend used to generate images.
    generator: Rc<dyn ImageGenerationService>,
    /// Whether the host reports the backend as configured.
    available: bool,
    /// Applies a generated image as the desktop wallpaper.
    #[prop(into)]
    set_wallpaper: Callback<String>,
) -> impl IntoView {
    let state = create_rw_signal(GeneratorState::new(available));
    let generator = store_value(generator);

    let generate = move || {
        let Some(prompt) = state.try_update(GeneratorState::begin_request).flatten() else {
            return;
        };
        let service = generator.get_value();
        spawn_local(async move {
            let result = service.generate_wallpaper(&prompt).await;
            if let Err(err) = &result {
                logging::warn!("wallpaper generation failed: {err}");
            }
            // The window may have closed while the request was in flight.
            let _ = state.try_update(|state| state.finish_request(result));
        });
    };

    let loading = move || state.with(|state| state.loading);
    let submit_disabled = move || !state.with(GeneratorState::can_submit);

    view! {
        <div class="app-aura-gen">
            <div class="aura-gen-heading">
                <h2>"Aura Generator"</h2>
                <p>"Design your next glassy experience with AI."</p>
            </div>

            <div class="aura-gen-prompt">
                <input
                    type="text"
                    placeholder="E.g., Neon purple ocean clouds..."
                    prop:value=move || state.with(|state| state.prompt.clone())
                    on:input=move |ev| state.update(|state| state.prompt = event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            generate();
                        }
                    }
                />
                <button class="aura-gen-submit" disabled=submit_disabled on:click=move |_| generate()>
                    <Show when=loading fallback=|| "Generate">
                        <i class="fa-solid fa-circle-notch fa-spin" aria-label="Generating"></i>
                    </Show>
                </button>
            </div>

            <Show when=move || !available fallback=|| ()>
                <div class="aura-gen-error" role="status">
                    "Image generation is not configured for this build."
                </div>
            </Show>

            {move || {
                state
                    .with(|state| state.error.clone())
                    .map(|error| view! { <div class="aura-gen-error" role="alert">{error}</div> })
            }}

            <div class="aura-gen-history">
                <h3>"Recent Generations"</h3>
                <div class="aura-gen-grid">
                    <Show when=move || state.with(GeneratorState::show_empty_placeholder) fallback=|| ()>
                        <div class="aura-gen-empty">
                            <i class="fa-solid fa-wand-magic-sparkles" aria-hidden="true"></i>
                            <span>"Your creations will appear here"</span>
                        </div>
                    </Show>
                    <Show when=loading fallback=|| ()>
                        <div class="aura-gen-pending">
                            <i class="fa-solid fa-spinner fa-spin" aria-hidden="true"></i>
                        </div>
                    </Show>
                    {move || {
                        state
                            .with(|state| state.history.clone())
                            .into_iter()
                            .map(|url| view! { <HistoryTile url=url set_wallpaper=set_wallpaper /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn HistoryTile(url: String, set_wallpaper: Callback<String>) -> impl IntoView {
    let apply_url = url.clone();

    view! {
        <div class="aura-gen-tile">
            <img src=url.clone() alt="Generated" />
            <div class="aura-gen-tile-actions">
                <button
                    title="Apply as Wallpaper"
                    on:click=move |_| set_wallpaper.call(apply_url.clone())
                >
                    <i class="fa-solid fa-desktop" aria-hidden="true"></i>
                </button>
                <a href=url download=DOWNLOAD_FILE_NAME title="Download">
                    <i class="fa-solid fa-download" aria-hidden="true"></i>
                </a>
            </div>
        </div>
    }
}
