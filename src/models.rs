use serde::{Deserialize, Serialize};

/// One user-submitted farm observation. Held only in memory; lost on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: u64,
    pub region: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub avg_temp: f64,
    pub avg_wind_speed: f64,
    pub avg_soil_temp: f64,
    pub precipitation: f64,
}

/// Working copy of a contribution's fields as they sit in form inputs.
/// Numeric fields stay raw strings until a submit/save coerces them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributionDraft {
    pub region: String,
    pub date: String,
    pub avg_temp: String,
    pub avg_wind_speed: String,
    pub avg_soil_temp: String,
    pub precipitation: String,
}

impl ContributionDraft {
    /// Snapshot an existing record into editable form state.
    pub fn from_record(record: &Contribution) -> Self {
        Self {
            region: record.region.clone(),
            date: record.date.clone(),
            avg_temp: record.avg_temp.to_string(),
            avg_wind_speed: record.avg_wind_speed.to_string(),
            avg_soil_temp: record.avg_soil_temp.to_string(),
            precipitation: record.precipitation.to_string(),
        }
    }

    pub fn into_record(self, id: u64) -> Contribution {
        Contribution {
            id,
            region: self.region,
            date: self.date,
            avg_temp: parse_measurement(&self.avg_temp),
            avg_wind_speed: parse_measurement(&self.avg_wind_speed),
            avg_soil_temp: parse_measurement(&self.avg_soil_temp),
            precipitation: parse_measurement(&self.precipitation),
        }
    }

    /// Overwrite a record's fields from this working copy, re-coercing the
    /// numeric ones. The record's id is untouched.
    pub fn apply_to(&self, record: &mut Contribution) {
        record.region = self.region.clone();
        record.date = self.date.clone();
        record.avg_temp = parse_measurement(&self.avg_temp);
        record.avg_wind_speed = parse_measurement(&self.avg_wind_speed);
        record.avg_soil_temp = parse_measurement(&self.avg_soil_temp);
        record.precipitation = parse_measurement(&self.precipitation);
    }
}

/// Numeric form fields coerce with a zero fallback: unparseable input is
/// silently stored as 0 rather than rejected. Inherited behavior, kept as-is.
pub fn parse_measurement(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Merge a working copy into the record with the matching id.
/// Unknown ids are a silent no-op.
pub fn update_record(records: &mut [Contribution], id: u64, draft: &ContributionDraft) {
    if let Some(record) = records.iter_mut().find(|r| r.id == id) {
        draft.apply_to(record);
    }
}

/// Remove the record with the matching id, keeping the rest in order.
/// Unknown ids are a silent no-op.
pub fn delete_record(records: &mut Vec<Contribution>, id: u64) {
    records.retain(|r| r.id != id);
}

/// Date-range filter for the contributions list. Empty string = unbounded
/// on that side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn is_active(&self) -> bool {
        !self.start.is_empty() || !self.end.is_empty()
    }

    /// Closed-interval test over whichever bounds are set. ISO dates
    /// compare lexicographically, so plain string comparison suffices.
    pub fn contains(&self, date: &str) -> bool {
        if !self.start.is_empty() && date < self.start.as_str() {
            return false;
        }
        if !self.end.is_empty() && date > self.end.as_str() {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(
        region: &str,
        date: &str,
        temp: &str,
        wind: &str,
        soil: &str,
        precip: &str,
    ) -> ContributionDraft {
        ContributionDraft {
            region: region.to_string(),
            date: date.to_string(),
            avg_temp: temp.to_string(),
            avg_wind_speed: wind.to_string(),
            avg_soil_temp: soil.to_string(),
            precipitation: precip.to_string(),
        }
    }

    fn record(id: u64, date: &str) -> Contribution {
        Contribution {
            id,
            region: "Central Iowa".to_string(),
            date: date.to_string(),
            avg_temp: 75.0,
            avg_wind_speed: 8.0,
            avg_soil_temp: 65.0,
            precipitation: 0.5,
        }
    }

    #[test]
    fn test_submission_parses_numeric_fields() {
        let d = draft("Central Iowa", "2024-05-01", "75", "8", "65", "0.5");
        let rec = d.into_record(1714521600000);

        assert_eq!(rec.region, "Central Iowa");
        assert_eq!(rec.date, "2024-05-01");
        assert_eq!(rec.avg_temp, 75.0);
        assert_eq!(rec.avg_wind_speed, 8.0);
        assert_eq!(rec.avg_soil_temp, 65.0);
        assert_eq!(rec.precipitation, 0.5);
        assert_eq!(rec.id, 1714521600000);
    }

    #[test]
    fn test_unparseable_measurement_falls_back_to_zero() {
        assert_eq!(parse_measurement(""), 0.0);
        assert_eq!(parse_measurement("abc"), 0.0);
        assert_eq!(parse_measurement("12.5.3"), 0.0);
        assert_eq!(parse_measurement(" 42.5 "), 42.5);
        assert_eq!(parse_measurement("-3"), -3.0);
    }

    #[test]
    fn test_snapshot_then_apply_is_lossless() {
        let original = record(7, "2024-05-01");
        let snapshot = ContributionDraft::from_record(&original);

        let mut copy = original.clone();
        snapshot.apply_to(&mut copy);
        assert_eq!(copy, original);
    }

    #[test]
    fn test_update_replaces_fields_and_recoerces() {
        let mut records = vec![record(1, "2024-05-01"), record(2, "2024-05-02")];
        let edit = draft("Southern Illinois", "2024-05-03", "80", "junk", "60", "1.2");

        update_record(&mut records, 2, &edit);

        assert_eq!(records[0], record(1, "2024-05-01"));
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].region, "Southern Illinois");
        assert_eq!(records[1].date, "2024-05-03");
        assert_eq!(records[1].avg_temp, 80.0);
        assert_eq!(records[1].avg_wind_speed, 0.0);
        assert_eq!(records[1].precipitation, 1.2);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut records = vec![record(1, "2024-05-01")];
        let before = records.clone();

        update_record(&mut records, 99, &draft("x", "2024-01-01", "1", "1", "1", "1"));
        assert_eq!(records, before);
    }

    #[test]
    fn test_delete_removes_only_matching_record() {
        let mut records = vec![
            record(1, "2024-05-01"),
            record(2, "2024-05-02"),
            record(3, "2024-05-03"),
        ];

        delete_record(&mut records, 2);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 3);

        delete_record(&mut records, 99);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_date_range_unset_passes_everything() {
        let range = DateRange::default();
        assert!(!range.is_active());
        assert!(range.contains("2024-05-01"));
        assert!(range.contains(""));
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let range = DateRange {
            start: "2024-05-01".to_string(),
            end: "2024-05-31".to_string(),
        };
        assert!(range.contains("2024-05-01"));
        assert!(range.contains("2024-05-15"));
        assert!(range.contains("2024-05-31"));
        assert!(!range.contains("2024-04-30"));
        assert!(!range.contains("2024-06-01"));
    }

    #[test]
    fn test_date_range_half_open_sides() {
        let from = DateRange {
            start: "2024-05-01".to_string(),
            end: String::new(),
        };
        assert!(from.is_active());
        assert!(from.contains("2099-01-01"));
        assert!(!from.contains("2024-04-30"));

        let until = DateRange {
            start: String::new(),
            end: "2024-05-01".to_string(),
        };
        assert!(until.contains("1990-01-01"));
        assert!(!until.contains("2024-05-02"));
    }
}
