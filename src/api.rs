use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, UrlSearchParams};

/// Development backend address. The API is served separately from the
/// static frontend.
pub const API_BASE: &str = "http://127.0.0.1:5000";

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Run a fetch request and decode the body as JSON. Non-2xx statuses are
/// reported as errors; callers decide whether to surface or just log them.
async fn fetch_json(request: Request) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "Unexpected fetch response".to_string())?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)
}

/// Reference list of selectable region names.
pub async fn fetch_regions() -> Result<Vec<String>, String> {
    let request = Request::new_with_str(&format!("{API_BASE}/api/regions")).map_err(js_error)?;
    let json = fetch_json(request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Reference list of selectable crop names.
pub async fn fetch_crops() -> Result<Vec<String>, String> {
    let request = Request::new_with_str(&format!("{API_BASE}/api/crops")).map_err(js_error)?;
    let json = fetch_json(request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Submit a prediction query for a region (and optionally a crop) and map
/// the station data that comes back into a display-ready report.
pub async fn request_prediction(
    region: &str,
    crop: Option<&str>,
) -> Result<PredictionReport, String> {
    let params = UrlSearchParams::new().map_err(js_error)?;
    params.append("region", region);
    if let Some(crop) = crop {
        params.append("crop", crop);
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(params.as_ref());

    let request = Request::new_with_str_and_init(&format!("{API_BASE}/get_random_station"), &opts)
        .map_err(js_error)?;
    let json = fetch_json(request).await?;
    let response: PredictionResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;
    response.into_report()
}

// -- Wire types for the prediction endpoint --
//
// Every field is optional: the backend sends empty `weather`/`soil` objects
// when a station has no readings, and an `error` field instead of data when
// the query matches nothing.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub station: Option<StationInfo>,
    #[serde(default)]
    pub weather: Option<WeatherReading>,
    #[serde(default)]
    pub soil: Option<SoilReading>,
    #[serde(default)]
    pub crop: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherReading {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub avg_temp: Option<f64>,
    /// The backend stringifies precipitation while sending temperatures as
    /// numbers, so this stays a string on the wire.
    #[serde(default)]
    pub precipitation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoilReading {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub max_soil_temp: Option<f64>,
    #[serde(default)]
    pub min_soil_temp: Option<f64>,
}

/// Display-ready prediction result. Fields the backend did not supply are
/// rendered as "N/A" lines rather than omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub headline: String,
    pub yield_status: String,
    pub station_location: Option<String>,
    pub planting_date: String,
    pub watering_schedule: String,
    pub soil_health: String,
    pub fertilizer: String,
    pub pest_risks: Vec<String>,
    pub weather_temp: Option<f64>,
    pub weather_precip: Option<String>,
    pub soil_date: Option<String>,
    pub soil_max_temp: Option<f64>,
    pub soil_min_temp: Option<f64>,
}

impl PredictionResponse {
    /// An `error` field in an otherwise successful response counts as a
    /// failure; its text is shown to the user verbatim.
    pub fn into_report(self) -> Result<PredictionReport, String> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let station = self.station.unwrap_or_default();
        let weather = self.weather.unwrap_or_default();
        let soil = self.soil.unwrap_or_default();

        let headline = station
            .name
            .as_ref()
            .map(|name| format!("Data for {name}"))
            .unwrap_or_else(|| "Yield Predictions & Recommendations".to_string());
        let yield_status = station
            .name
            .as_ref()
            .map(|name| format!("Data for {name}"))
            .unwrap_or_else(|| "N/A".to_string());
        let planting_date = weather.date.clone().unwrap_or_else(|| "N/A".to_string());
        let watering_schedule = weather
            .precipitation
            .as_ref()
            .map(|p| format!("{p}mm precipitation"))
            .unwrap_or_else(|| "N/A".to_string());
        let soil_health = soil
            .max_soil_temp
            .map(|t| format!("Soil Temp: {t}\u{00b0}C"))
            .unwrap_or_else(|| "N/A".to_string());
        let pest_risks = match self.crop {
            Some(crop) => vec![format!("Risk info for {crop}")],
            None => vec!["N/A".to_string()],
        };

        Ok(PredictionReport {
            headline,
            yield_status,
            station_location: station.location,
            planting_date,
            watering_schedule,
            soil_health,
            fertilizer: "Check soil data".to_string(),
            pest_risks,
            weather_temp: weather.avg_temp,
            weather_precip: weather.precipitation,
            soil_date: soil.date,
            soil_max_temp: soil.max_soil_temp,
            soil_min_temp: soil.min_soil_temp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_maps_to_failure() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"error": "station not found"}"#).unwrap();
        let result = response.into_report();
        assert_eq!(result.unwrap_err(), "station not found");
    }

    #[test]
    fn test_full_response_maps_to_report() {
        let body = r#"{
            "station": {"name": "CHAMPAIGN 9SW", "location": "Champaign, IL"},
            "weather": {"date": "2023-6-14", "avg_temp": 71.2, "precipitation": "0.3"},
            "soil": {"date": "2023-6-14", "max_soil_temp": 24.5, "min_soil_temp": 18.1},
            "crop": "Corn"
        }"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        let report = response.into_report().unwrap();

        assert_eq!(report.headline, "Data for CHAMPAIGN 9SW");
        assert_eq!(report.yield_status, "Data for CHAMPAIGN 9SW");
        assert_eq!(report.station_location.as_deref(), Some("Champaign, IL"));
        assert_eq!(report.planting_date, "2023-6-14");
        assert_eq!(report.watering_schedule, "0.3mm precipitation");
        assert_eq!(report.soil_health, "Soil Temp: 24.5\u{00b0}C");
        assert_eq!(report.pest_risks, vec!["Risk info for Corn".to_string()]);
        assert_eq!(report.weather_temp, Some(71.2));
        assert_eq!(report.soil_min_temp, Some(18.1));
    }

    #[test]
    fn test_empty_sections_degrade_to_na() {
        let body = r#"{
            "station": {"name": "DIXON SPRINGS", "location": "Pope County, IL"},
            "weather": {},
            "soil": {}
        }"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        let report = response.into_report().unwrap();

        assert_eq!(report.headline, "Data for DIXON SPRINGS");
        assert_eq!(report.planting_date, "N/A");
        assert_eq!(report.watering_schedule, "N/A");
        assert_eq!(report.soil_health, "N/A");
        assert_eq!(report.pest_risks, vec!["N/A".to_string()]);
        assert!(report.weather_temp.is_none());
        assert!(report.soil_date.is_none());
    }

    #[test]
    fn test_missing_station_uses_generic_headline() {
        let response: PredictionResponse = serde_json::from_str("{}").unwrap();
        let report = response.into_report().unwrap();

        assert_eq!(report.headline, "Yield Predictions & Recommendations");
        assert_eq!(report.yield_status, "N/A");
        assert!(report.station_location.is_none());
    }
}
