use leptos::prelude::*;

use crate::api::PredictionReport;

/// Renders one prediction result: headline, recommendation grid, observed
/// station readings, and a summary blurb.
#[component]
pub fn PredictionPanel(report: PredictionReport) -> impl IntoView {
    let summary_risks = report.pest_risks.join(" and ");
    let location = report
        .station_location
        .clone()
        .unwrap_or_else(|| "Location details unavailable".to_string());

    let readings = [
        ("Avg air temp", report.weather_temp.map(|t| format!("{t}\u{00b0}F"))),
        ("Precipitation", report.weather_precip.clone()),
        ("Soil reading date", report.soil_date.clone()),
        ("Max soil temp", report.soil_max_temp.map(|t| format!("{t}\u{00b0}C"))),
        ("Min soil temp", report.soil_min_temp.map(|t| format!("{t}\u{00b0}C"))),
    ];
    let has_readings = readings.iter().any(|(_, value)| value.is_some());

    view! {
        <div class="prediction-panel">
            <h2 class="prediction-headline">{report.headline.clone()}</h2>
            <div class="prediction-grid">
                <div class="prediction-box prediction-box-highlight">
                    <h3>"Yield Prediction / Status"</h3>
                    <div class="prediction-yield">{report.yield_status.clone()}</div>
                    <p class="prediction-subtext">{location}</p>
                </div>
                <div class="prediction-box">
                    <h3>"Planting Schedule"</h3>
                    <p>
                        <strong>"Recommended planting date: "</strong>
                        {report.planting_date.clone()}
                    </p>
                    <p>
                        <strong>"Watering schedule: "</strong>
                        {report.watering_schedule.clone()}
                    </p>
                </div>
                <div class="prediction-box">
                    <h3>"Soil & Fertilizer"</h3>
                    <p>
                        <strong>"Soil health: "</strong>
                        {report.soil_health.clone()}
                    </p>
                    <p>
                        <strong>"Recommended fertilizer: "</strong>
                        {report.fertilizer.clone()}
                    </p>
                </div>
                <div class="prediction-box">
                    <h3>"Pest & Disease Risks"</h3>
                    <ul class="risk-list">
                        {report
                            .pest_risks
                            .iter()
                            .map(|risk| view! { <li>{risk.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>

            {has_readings.then(|| view! {
                <div class="station-readings">
                    <h3>"Station Readings"</h3>
                    <div class="readings-grid">
                        {readings
                            .iter()
                            .filter_map(|(label, value)| {
                                value.clone().map(|value| {
                                    view! {
                                        <div class="reading-cell">
                                            <span class="reading-label">{*label}</span>
                                            <span class="reading-value">{value}</span>
                                        </div>
                                    }
                                })
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            })}

            <div class="prediction-summary">
                <h3>"Recommendation Summary"</h3>
                <p>
                    "Based on your inputs and our prediction models, we recommend \
                     focusing on proper irrigation timing and monitoring for "
                    {summary_risks}
                    ". Apply the suggested fertilizer in early spring for optimal \
                     results."
                </p>
            </div>
        </div>
    }
}
