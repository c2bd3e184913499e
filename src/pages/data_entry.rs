use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::app::Screen;
use crate::models::ContributionDraft;

#[component]
pub fn DataEntryPage(
    #[prop(into)] on_add: Callback<ContributionDraft>,
    set_screen: WriteSignal<Screen>,
) -> impl IntoView {
    let (region, set_region) = signal(String::new());
    let (date, set_date) = signal(today_iso());
    let (avg_temp, set_avg_temp) = signal(String::new());
    let (avg_wind_speed, set_avg_wind_speed) = signal(String::new());
    let (avg_soil_temp, set_avg_soil_temp) = signal(String::new());
    let (precipitation, set_precipitation) = signal(String::new());
    let (submitted, set_submitted) = signal(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        on_add.run(ContributionDraft {
            region: region.get(),
            date: date.get(),
            avg_temp: avg_temp.get(),
            avg_wind_speed: avg_wind_speed.get(),
            avg_soil_temp: avg_soil_temp.get(),
            precipitation: precipitation.get(),
        });

        set_region.set(String::new());
        set_date.set(today_iso());
        set_avg_temp.set(String::new());
        set_avg_wind_speed.set(String::new());
        set_avg_soil_temp.set(String::new());
        set_precipitation.set(String::new());
        set_submitted.set(true);
    };

    view! {
        <div class="page data-entry-page">
            <style>{include_str!("data_entry.css")}</style>

            <div class="page-header">
                <button class="back-link" on:click=move |_| set_screen.set(Screen::Home)>
                    "\u{2190} Back to home"
                </button>
                <h1>"Add Farming Data"</h1>
            </div>

            <div class="card entry-card">
                <p class="page-description">
                    "Contribute to our agricultural database by adding your local \
                     farming conditions. This helps improve predictions for all \
                     farmers in your region."
                </p>

                <Show when=move || submitted.get()>
                    <div class="success-message">"Data submitted successfully!"</div>
                </Show>

                <form on:submit=handle_submit>
                    <div class="entry-fields-grid">
                        {entry_field("Region/Location", "text", "e.g. Central Iowa", None, region, set_region)}
                        {entry_field("Date", "date", "", None, date, set_date)}
                        {entry_field("Average Temperature (\u{00b0}F)", "number", "e.g. 75", None, avg_temp, set_avg_temp)}
                        {entry_field("Average Wind Speed (mph)", "number", "e.g. 8", None, avg_wind_speed, set_avg_wind_speed)}
                        {entry_field("Average Soil Temperature (\u{00b0}F)", "number", "e.g. 65", None, avg_soil_temp, set_avg_soil_temp)}
                        {entry_field("Precipitation (inches)", "number", "e.g. 0.5", Some("0.1"), precipitation, set_precipitation)}
                    </div>
                    <button type="submit" class="btn btn-primary btn-block">
                        "Submit Data"
                    </button>
                </form>
            </div>
        </div>
    }
}

fn entry_field(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    step: Option<&'static str>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="entry-field">
            <label class="entry-field-label">{label}</label>
            <input
                type=input_type
                step=step
                class="entry-field-input"
                placeholder=placeholder
                required
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Today's date as `YYYY-MM-DD`, the date input's default.
fn today_iso() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.split('T').next().unwrap_or_default().to_string()
}
