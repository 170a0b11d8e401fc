//! Shared data models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fitness plan as submitted by the storefront quiz.
///
/// Every field is optional; absent sections are simply left out of the
/// rendered document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Plan {
    pub summary: Option<String>,
    pub warmup: Option<String>,
    pub cardio: Option<String>,
    pub cooldown: Option<String>,
    pub notes: Option<String>,
    pub targets: Option<Targets>,
    pub schedule: Option<Vec<Day>>,
}

/// Daily nutrition and activity targets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Targets {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub steps: Option<f64>,
}

/// One day of the weekly schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    /// Day heading; some clients send `day` or `label` instead
    #[serde(default, alias = "day", alias = "label")]
    pub title: String,
    /// Exercises for the day; some clients send `blocks`
    #[serde(default, alias = "blocks")]
    pub exercises: Vec<Exercise>,
}

/// A single exercise entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: Option<TextOrNumber>,
    pub reps: Option<TextOrNumber>,
    pub time: Option<String>,
    /// Free-text instructions, possibly multi-line
    #[serde(default, alias = "howTo")]
    pub how_to: Option<String>,
}

/// A value clients send either as a JSON string or a JSON number.
///
/// Rendered as plain text with no locale formatting; whole numbers print
/// without a trailing `.0`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(f64),
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrNumber::Text(s) => f.write_str(s),
            TextOrNumber::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

/// Quiz answers; only the name is used, for greeting personalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Answers {
    pub name: Option<String>,
}

/// Send-plan request payload.
///
/// `email` and `plan` are required; presence is checked by the handler, not
/// by serde, so a missing field yields a descriptive 400 instead of a parse
/// error. Field-name variants observed from different storefront versions
/// are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendPlanRequest {
    pub email: Option<String>,
    #[serde(default)]
    pub answers: Option<Answers>,
    #[serde(default, alias = "user_name", alias = "firstName")]
    pub name: Option<String>,
    #[serde(default, alias = "plan_data")]
    pub plan: Option<Plan>,
}

impl SendPlanRequest {
    /// Display name for greeting personalization, whichever field carried it.
    pub fn display_name(&self) -> Option<&str> {
        self.answers
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .or(self.name.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Send-plan response payload.
#[derive(Debug, Serialize)]
pub struct SendPlanResponse {
    pub message: String,
}

/// Standard API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
