use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod config;
pub mod dashboard;
pub mod form;
pub mod format;
pub mod gateway;
pub mod period;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{ClientConfig, ConfigError};
pub use dashboard::{Dashboard, RefreshedViews, SubmissionError};
pub use form::{ExpenseForm, FormField, FormFields, FormStatus, PendingSubmission};
pub use gateway::{ApiRequest, ExpenseApi, GatewayError, Method, RequestGateway};
pub use period::{ReportingPeriod, StatisticsWindow};
pub use views::{ExpenseRow, ExpensesView, StatisticsLine, StatisticsTable, StatisticsView};

/// Reference data grouping expenses. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Backend identifier; numeric ids are normalised to their decimal text
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// Free-form label attached to an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_id"
    )]
    pub id: Option<String>,
    pub name: String,
}

impl Tag {
    /// Parse a comma-separated tag list as typed into the form.
    /// Blank entries are dropped and surrounding whitespace is trimmed.
    pub fn parse_list(input: &str) -> Vec<Tag> {
        input
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| Tag {
                id: None,
                name: name.to_string(),
            })
            .collect()
    }
}

/// Payload for `POST /expense`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub name: String,
    /// Resolved from the selected category id before submission
    pub category: Category,
    /// Purchase date as `YYYY-MM-DD`
    pub purchase_date: String,
    /// Cost exactly as typed into the form
    pub cost: String,
    pub tags: Vec<Tag>,
}

/// A single row of `GET /expenses/{limit}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    pub date: String,
    pub name: String,
    /// Older backends only send the raw category id
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub cost: f64,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl ExpenseRecord {
    /// Display name of the category: the nested category name when present,
    /// otherwise the raw category id, otherwise empty.
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(|category| category.name.as_str())
            .or(self.category_id.as_deref())
            .unwrap_or("")
    }
}

/// Response envelope of `GET /expenses/{limit}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpensesResponse {
    pub results: Vec<ExpenseRecord>,
}

/// Category reference inside a statistics row; only the name is guaranteed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatisticsCategory {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    pub name: String,
}

/// A single row of `GET /statistics/{start}/{end}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatisticsRow {
    pub category: StatisticsCategory,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total: f64,
    /// Month the total belongs to (`YYYY-MM`) when the backend reports it
    #[serde(default)]
    pub month: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Integer(i64),
}

impl fmt::Display for IdRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdRepr::Text(text) => write!(f, "{}", text),
            IdRepr::Integer(value) => write!(f, "{}", value),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    IdRepr::deserialize(deserializer).map(|id| id.to_string())
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IdRepr>::deserialize(deserializer).map(|id| id.map(|id| id.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Number(f64),
    Text(String),
}

/// Amounts arrive either as JSON numbers or as numeric strings
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Number(value) => Ok(value),
        AmountRepr::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {:?}", text))),
    }
}
