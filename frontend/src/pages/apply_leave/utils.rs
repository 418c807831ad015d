use chrono::NaiveDate;

use crate::{
    data::{LeaveRequest, LeaveStatus, LeaveType},
    utils::{time, validation::FieldErrors},
};

pub const FIELD_TYPE: &str = "leave_type";
pub const FIELD_START: &str = "start_date";
pub const FIELD_END: &str = "end_date";
pub const FIELD_REASON: &str = "reason";

pub const SUBMITTED_MESSAGE: &str = "Leave application submitted successfully!";

/// Raw form values as typed; dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveDraft {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLeave {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

pub fn type_options() -> Vec<(String, String)> {
    LeaveType::APPLICABLE
        .iter()
        .map(|kind| (kind.form_label().to_string(), kind.form_label().to_string()))
        .collect()
}

/// Accepts a `?date=` value only when it is a real calendar date.
pub fn prefill_date(raw: Option<String>) -> String {
    raw.filter(|value| time::parse_input_date(value).is_some())
        .unwrap_or_default()
}

/// Required fields first, then the date ordering check. A single day
/// (end equal to start) is allowed.
pub fn validate(draft: &LeaveDraft) -> Result<ValidLeave, FieldErrors> {
    let mut errors = FieldErrors::new();

    let leave_type = LeaveType::from_form_label(draft.leave_type.trim());
    if leave_type.is_none() {
        errors.insert(FIELD_TYPE, "Leave type is required");
    }
    let start = time::parse_input_date(&draft.start_date);
    if start.is_none() {
        errors.insert(FIELD_START, "Start date is required");
    }
    let end = time::parse_input_date(&draft.end_date);
    if end.is_none() {
        errors.insert(FIELD_END, "End date is required");
    }
    if draft.reason.trim().is_empty() {
        errors.insert(FIELD_REASON, "Reason is required");
    }
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.insert(FIELD_END, "End date must be after start date");
        }
    }

    match (leave_type, start, end) {
        (Some(leave_type), Some(start_date), Some(end_date)) if errors.is_empty() => Ok(ValidLeave {
            leave_type,
            start_date,
            end_date,
            reason: draft.reason.trim().to_string(),
        }),
        _ => Err(errors),
    }
}

pub fn pending_request(leave: ValidLeave, user_id: &str, sequence: usize) -> LeaveRequest {
    LeaveRequest {
        id: format!("local-{sequence}"),
        user_id: user_id.to_string(),
        leave_type: leave.leave_type,
        start_date: leave.start_date,
        end_date: leave.end_date,
        status: LeaveStatus::Pending,
        reason: Some(leave.reason),
    }
}
