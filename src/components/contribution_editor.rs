use leptos::prelude::*;

use crate::models::{Contribution, ContributionDraft};

/// Inline editor for one record. The record is snapshotted into local field
/// signals on entry; nothing touches the list until Save sends the working
/// copy back up. Cancel discards it.
#[component]
pub fn ContributionEditor(
    record: Contribution,
    #[prop(into)] on_save: Callback<ContributionDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let snapshot = ContributionDraft::from_record(&record);

    let (region, set_region) = signal(snapshot.region);
    let (date, set_date) = signal(snapshot.date);
    let (avg_temp, set_avg_temp) = signal(snapshot.avg_temp);
    let (avg_wind_speed, set_avg_wind_speed) = signal(snapshot.avg_wind_speed);
    let (avg_soil_temp, set_avg_soil_temp) = signal(snapshot.avg_soil_temp);
    let (precipitation, set_precipitation) = signal(snapshot.precipitation);

    let do_save = move |_| {
        on_save.run(ContributionDraft {
            region: region.get(),
            date: date.get(),
            avg_temp: avg_temp.get(),
            avg_wind_speed: avg_wind_speed.get(),
            avg_soil_temp: avg_soil_temp.get(),
            precipitation: precipitation.get(),
        });
    };

    view! {
        <div class="contribution-editor">
            <div class="edit-fields-grid">
                {edit_field("Region", "text", None, region, set_region)}
                {edit_field("Date", "date", None, date, set_date)}
                {edit_field("Avg Temp (\u{00b0}F)", "number", None, avg_temp, set_avg_temp)}
                {edit_field("Wind Speed (mph)", "number", None, avg_wind_speed, set_avg_wind_speed)}
                {edit_field("Soil Temp (\u{00b0}F)", "number", None, avg_soil_temp, set_avg_soil_temp)}
                {edit_field("Precipitation (in)", "number", Some("0.1"), precipitation, set_precipitation)}
            </div>
            <div class="edit-actions">
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn-primary" on:click=do_save>
                    "Save"
                </button>
            </div>
        </div>
    }
}

fn edit_field(
    label: &'static str,
    input_type: &'static str,
    step: Option<&'static str>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="edit-field">
            <label class="edit-field-label">{label}</label>
            <input
                type=input_type
                step=step
                class="edit-field-input"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}
