use chrono::NaiveDate;
use leptos::*;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Hr,
    Manager,
    TechLead,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Employee, Role::Hr, Role::Manager, Role::TechLead];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Hr => "HR",
            Role::Manager => "Manager",
            Role::TechLead => "Tech Lead",
        }
    }

    /// Where a freshly logged-in user of this role lands.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Employee => "/employee/dashboard",
            Role::Hr => "/hr/dashboard",
            Role::Manager => "/manager/dashboard",
            Role::TechLead => "/tech-lead/dashboard",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Profile fields tolerate nulls and junk; a bad value reads as its default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, deserialize_with = "lenient")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub join_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub social_links: SocialLinks,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar: Option<String>,
}

impl User {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// Job title, falling back to the role label for accounts without one.
    pub fn display_position(&self) -> &str {
        if self.position.trim().is_empty() {
            self.role.label()
        } else {
            &self.position
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    Annual,
    Sick,
    Casual,
    Maternity,
}

impl LeaveType {
    /// Options offered by the application form, in display order.
    pub const APPLICABLE: [LeaveType; 4] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Casual,
        LeaveType::Maternity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual",
            LeaveType::Sick => "Sick",
            LeaveType::Casual => "Casual",
            LeaveType::Maternity => "Maternity",
        }
    }

    pub fn form_label(&self) -> &'static str {
        match self {
            LeaveType::Maternity => "Maternity/Paternity",
            other => other.label(),
        }
    }

    pub fn from_form_label(value: &str) -> Option<Self> {
        Self::APPLICABLE
            .into_iter()
            .find(|kind| kind.form_label() == value || kind.label() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    pub fn pill_class(&self) -> &'static str {
        match self {
            LeaveStatus::Approved => "bg-green-100 text-green-800",
            LeaveStatus::Pending => "bg-yellow-100 text-yellow-800",
            LeaveStatus::Rejected => "bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub balance: u32,
    pub total: u32,
}

impl LeaveBalance {
    /// Remaining share in percent. Not clamped: a balance above its total
    /// yields more than 100.
    pub fn percentage(&self) -> f64 {
        f64::from(self.balance) * 100.0 / f64::from(self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Birthday,
    Anniversary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub user_id: String,
    pub date: NaiveDate,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSchedule {
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LeaveSchedule {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Announcement,
    Workshop,
    Event,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrActivity {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AssetUnavailable(String),
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn asset_unavailable(msg: impl Into<String>) -> Self {
        Self::AssetUnavailable(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AssetUnavailable(_) => "ASSET_UNAVAILABLE",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}

impl IntoView for AppError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}
