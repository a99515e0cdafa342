use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of financial entry as stored by the remote backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Fixed monthly entry, repeated every month from its start date
    #[serde(rename = "Fixa")]
    Recurring,
    /// Single entry on one date
    #[serde(rename = "Pontual")]
    OneOff,
}

impl EntryType {
    /// Label used by the backend and the expense table
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Recurring => "Fixa",
            EntryType::OneOff => "Pontual",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Financial entry row as fetched from the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialEntry {
    /// Row id; the backend may send it as a number or a string
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Entry date in YYYY-MM-DD format
    pub entry_date: String,
    #[serde(default)]
    pub description: String,
    /// Signed amount (positive for revenue, negative for expense)
    pub value: f64,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// Status of a scheduled appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "Agendado")]
    Scheduled,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

/// Appointment row as fetched from the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Appointment date in YYYY-MM-DD format
    pub appointment_date: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub service: String,
    pub price: f64,
    pub status: AppointmentStatus,
}

/// Flattened expense row for tabular display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub id: String,
    /// Occurrence date in YYYY-MM-DD format
    pub date: String,
    pub description: String,
    /// Signed amount, always negative for expenses
    pub value: f64,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// True for occurrences derived from a recurring entry
    #[serde(rename = "isVirtual")]
    pub is_virtual: bool,
}

/// Revenue, expenses and net profit for one month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub revenue: f64,
    pub expenses: f64,
    #[serde(rename = "netProfit")]
    pub net_profit: f64,
}

/// Per-month revenue and expenses for one year, ready for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSummary {
    pub year: i32,
    /// Twelve month abbreviations, January first
    pub labels: Vec<String>,
    /// Twelve revenue totals, zero for months without revenue
    pub revenue_data: Vec<f64>,
    /// Twelve expense totals (absolute values), zero for months without expenses
    pub expense_data: Vec<f64>,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
}

/// Everything the financial tab renders for a given reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialOverview {
    /// Reference date in YYYY-MM-DD format
    pub reference_date: String,
    pub month: MonthlySummary,
    pub year: AnnualSummary,
    pub expenses: Vec<ExpenseRow>,
}

/// CSV export of the expense table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseExport {
    pub csv_content: String,
    pub filename: String,
    pub row_count: usize,
}

/// Whether a picker selects one date or a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    Single,
    Range,
}

/// Value handed to a picker when it opens
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PickerInitialValue {
    /// Start (or single) date in YYYY-MM-DD format
    pub start: Option<String>,
    /// End date in YYYY-MM-DD format, range mode only
    pub end: Option<String>,
}

impl PickerInitialValue {
    pub fn single(date: &str) -> Self {
        Self {
            start: Some(date.to_string()),
            end: None,
        }
    }

    pub fn range(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }
}

/// Display locale for dates and month labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

/// First column of the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Weekday index of the first grid column (0 = Sunday)
    pub fn offset(&self) -> u32 {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(number) => number.to_string(),
        RawId::Float(number) => number.to_string(),
    })
}
