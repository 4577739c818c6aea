use serde::{ Serialize, Deserialize };
use chrono::{NaiveDate, DateTime, Utc};

pub type Id = u32;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub has_pcos: bool,
    pub pcos_type: Option<String>,
    pub language: String,
    pub dark_mode: bool,
    pub google_fit_connected: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub has_pcos: bool,
    pub pcos_type: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub google_fit_connected: bool,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    #[serde(default, deserialize_with = "patch::required")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "patch::required")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "patch::required")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub height: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub weight: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::required")]
    pub has_pcos: Option<bool>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub pcos_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::required")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "patch::required")]
    pub dark_mode: Option<bool>,
    #[serde(default, deserialize_with = "patch::required")]
    pub google_fit_connected: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowLevel {
    Spotting,
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodLog {
    pub id: Id,
    pub user_id: Id,
    pub date: NaiveDate,
    pub period_started: bool,
    pub flow_level: Option<FlowLevel>,
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPeriodLog {
    pub user_id: Id,
    #[serde(deserialize_with = "day::deserialize")]
    pub date: NaiveDate,
    #[serde(default)]
    pub period_started: bool,
    pub flow_level: Option<FlowLevel>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodLogPatch {
    #[serde(default, deserialize_with = "day::deserialize_option")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "patch::required")]
    pub period_started: Option<bool>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub flow_level: Option<Option<FlowLevel>>,
    #[serde(default, deserialize_with = "patch::required")]
    pub symptoms: Option<Vec<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyLog {
    pub id: Id,
    pub user_id: Id,
    pub date: NaiveDate,
    pub mood: String,
    pub energy: u8,
    pub sleep_hours: Option<f32>,
    pub exercised: bool,
    pub exercise_type: Option<String>,
    pub exercise_duration: Option<u32>,
    pub diet: Option<serde_json::Value>,
    pub supplements: Vec<String>,
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDailyLog {
    pub user_id: Id,
    #[serde(deserialize_with = "day::deserialize")]
    pub date: NaiveDate,
    pub mood: String,
    pub energy: u8,
    pub sleep_hours: Option<f32>,
    #[serde(default)]
    pub exercised: bool,
    pub exercise_type: Option<String>,
    pub exercise_duration: Option<u32>,
    pub diet: Option<serde_json::Value>,
    #[serde(default)]
    pub supplements: Vec<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DailyLogPatch {
    #[serde(default, deserialize_with = "day::deserialize_option")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "patch::required")]
    pub mood: Option<String>,
    #[serde(default, deserialize_with = "patch::required")]
    pub energy: Option<u8>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub sleep_hours: Option<Option<f32>>,
    #[serde(default, deserialize_with = "patch::required")]
    pub exercised: Option<bool>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub exercise_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub exercise_duration: Option<Option<u32>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub diet: Option<Option<serde_json::Value>>,
    #[serde(default, deserialize_with = "patch::required")]
    pub supplements: Option<Vec<String>>,
    #[serde(default, deserialize_with = "patch::required")]
    pub symptoms: Option<Vec<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MentalHealthLog {
    pub id: Id,
    pub user_id: Id,
    pub date: NaiveDate,
    pub stress_level: u8,
    pub anxiety_level: u8,
    pub mood_level: u8,
    pub sleep_quality: u8,
    pub journal: Option<String>,
    pub gratitude: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMentalHealthLog {
    pub user_id: Id,
    #[serde(deserialize_with = "day::deserialize")]
    pub date: NaiveDate,
    pub stress_level: u8,
    pub anxiety_level: u8,
    pub mood_level: u8,
    pub sleep_quality: u8,
    pub journal: Option<String>,
    #[serde(default)]
    pub gratitude: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MentalHealthLogPatch {
    #[serde(default, deserialize_with = "day::deserialize_option")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "patch::required")]
    pub stress_level: Option<u8>,
    #[serde(default, deserialize_with = "patch::required")]
    pub anxiety_level: Option<u8>,
    #[serde(default, deserialize_with = "patch::required")]
    pub mood_level: Option<u8>,
    #[serde(default, deserialize_with = "patch::required")]
    pub sleep_quality: Option<u8>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub journal: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::required")]
    pub gratitude: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationalContent {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub content_type: String,
    pub category: String,
    pub image_url: String,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewEducationalContent {
    pub title: String,
    pub description: String,
    pub content_type: String,
    pub category: String,
    pub image_url: String,
    pub video_url: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MotivationalQuote {
    pub id: Id,
    pub quote: String,
    pub author: String,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct NewMotivationalQuote {
    pub quote: String,
    pub author: String,
    pub category: String,
}

/// Calendar-day deserialization. Accepts `YYYY-MM-DD` or an RFC 3339
/// timestamp; the time of day is dropped.
pub mod day {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| timestamp(raw))
            .or_else(|| {
                // an undecoded `+` in a query string offset arrives as a space
                let (head, offset) = raw.rsplit_once(' ')?;
                timestamp(&format!("{head}+{offset}"))
            })
    }

    fn timestamp(raw: &str) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.date_naive())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            de::Error::custom(format!("invalid date `{raw}` (expected YYYY-MM-DD)"))
        })
    }

    /// For optional fields; `null` is rejected like any other non-date.
    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        deserialize(deserializer).map(Some)
    }
}

/// Field helpers for partial payloads. An absent field stays `None`
/// through `#[serde(default)]`; these only run for fields that are present.
pub mod patch {
    use serde::{Deserialize, Deserializer};

    /// Clearable field: an explicit `null` becomes `Some(None)`.
    pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }

    /// Field the record always carries: an explicit `null` is an error.
    pub fn required<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Some)
    }
}
