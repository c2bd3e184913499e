use leptos::prelude::*;

use crate::models::Contribution;

/// Read-only card for one observation record.
#[component]
pub fn ContributionCard(
    record: Contribution,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="contribution-card">
            <div class="contribution-card-header">
                <h3 class="contribution-region">{record.region.clone()}</h3>
                <div class="contribution-card-actions">
                    <button
                        class="icon-btn"
                        title="Edit"
                        on:click=move |_| on_edit.run(())
                    >
                        "\u{270e}"
                    </button>
                    <button
                        class="icon-btn icon-btn-danger"
                        title="Delete"
                        on:click=move |_| on_delete.run(())
                    >
                        "\u{2715}"
                    </button>
                </div>
            </div>
            <p class="contribution-date">{record.date.clone()}</p>
            <div class="contribution-readings">
                <div>
                    <span class="reading-label">"Temperature:"</span>
                    <span class="reading-value">{format!("{}\u{00b0}F", record.avg_temp)}</span>
                </div>
                <div>
                    <span class="reading-label">"Wind Speed:"</span>
                    <span class="reading-value">{format!("{} mph", record.avg_wind_speed)}</span>
                </div>
                <div>
                    <span class="reading-label">"Soil Temp:"</span>
                    <span class="reading-value">{format!("{}\u{00b0}F", record.avg_soil_temp)}</span>
                </div>
                <div>
                    <span class="reading-label">"Precipitation:"</span>
                    <span class="reading-value">{format!("{}\"", record.precipitation)}</span>
                </div>
            </div>
        </div>
    }
}
