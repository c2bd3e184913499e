use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, PredictionReport};
use crate::components::prediction_panel::PredictionPanel;

#[component]
pub fn HomePage() -> impl IntoView {
    // Query form state
    let (region_query, set_region_query) = signal(String::new());
    let (crop_query, set_crop_query) = signal(String::new());

    // Reference lists, each with its own loading flag
    let (regions, set_regions) = signal(Vec::<String>::new());
    let (loading_regions, set_loading_regions) = signal(true);
    let (crops, set_crops) = signal(Vec::<String>::new());
    let (loading_crops, set_loading_crops) = signal(true);

    // Prediction request state
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (report, set_report) = signal::<Option<PredictionReport>>(None);

    // Populate both selects on mount. A failed fetch is logged and leaves
    // that select empty; it never blocks the page.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_regions().await {
                Ok(list) => set_regions.set(list),
                Err(e) => leptos::logging::error!("Error fetching regions: {e}"),
            }
            set_loading_regions.set(false);
        });
        spawn_local(async move {
            match api::fetch_crops().await {
                Ok(list) => set_crops.set(list),
                Err(e) => leptos::logging::error!("Error fetching crops: {e}"),
            }
            set_loading_crops.set(false);
        });
    });

    let do_predict = move |ev: SubmitEvent| {
        ev.prevent_default();
        let region = region_query.get();
        let crop = crop_query.get();

        set_loading.set(true);
        set_error.set(None);
        set_report.set(None);

        spawn_local(async move {
            let crop = if crop.is_empty() {
                None
            } else {
                Some(crop.as_str())
            };
            match api::request_prediction(&region, crop).await {
                Ok(result) => set_report.set(Some(result)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page home-page">
            <style>{include_str!("home.css")}</style>

            <div class="home-intro">
                <h1>"Maximize Your Farm's Yield"</h1>
                <p class="page-description">
                    "Enter your farm details to get personalized predictions and \
                     recommendations"
                </p>
            </div>

            <div class="card query-card">
                <form on:submit=do_predict>
                    <div class="query-fields">
                        <div class="query-field">
                            <label>"Location/Region"</label>
                            <select
                                required
                                prop:value=move || region_query.get()
                                on:change=move |ev| set_region_query.set(event_target_value(&ev))
                                disabled=move || loading_regions.get()
                            >
                                <option value="" disabled=move || !loading_regions.get()>
                                    {move || {
                                        if loading_regions.get() {
                                            "Loading regions..."
                                        } else {
                                            "-- Select a Region --"
                                        }
                                    }}
                                </option>
                                {move || {
                                    regions
                                        .get()
                                        .into_iter()
                                        .map(|region| {
                                            view! { <option value=region.clone()>{region.clone()}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </div>
                        <div class="query-field">
                            <label>"Crop Type"</label>
                            <select
                                required
                                prop:value=move || crop_query.get()
                                on:change=move |ev| set_crop_query.set(event_target_value(&ev))
                                disabled=move || loading_crops.get()
                            >
                                <option value="" disabled>
                                    {move || {
                                        if loading_crops.get() {
                                            "Loading crops..."
                                        } else {
                                            "-- Select Crop --"
                                        }
                                    }}
                                </option>
                                {move || {
                                    crops
                                        .get()
                                        .into_iter()
                                        .map(|crop| {
                                            view! { <option value=crop.clone()>{crop.clone()}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </div>
                    </div>
                    <button type="submit" class="btn btn-primary btn-block">
                        "Get Predictions"
                    </button>
                </form>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-spinner">
                    <div class="spinner"></div>
                    <span>"Fetching predictions..."</span>
                </div>
            </Show>

            {move || {
                if loading.get() {
                    return None;
                }
                error.get().map(|e| {
                    view! {
                        <div class="error-message">
                            <strong>"Error: "</strong>
                            {e}
                        </div>
                    }
                })
            }}

            {move || {
                if loading.get() || error.get().is_some() {
                    return None;
                }
                report.get().map(|report| view! { <PredictionPanel report=report /> })
            }}
        </div>
    }
}
