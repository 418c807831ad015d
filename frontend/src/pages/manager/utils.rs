use crate::data::{DataClient, LeaveRequest, LeaveStatus};

pub const STATUSES: [LeaveStatus; 3] = [
    LeaveStatus::Pending,
    LeaveStatus::Approved,
    LeaveStatus::Rejected,
];

pub fn status_counts(requests: &[LeaveRequest]) -> Vec<(LeaveStatus, usize)> {
    STATUSES
        .iter()
        .map(|status| (*status, requests.iter().filter(|r| r.status == *status).count()))
        .collect()
}

/// A pending request with its requester's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingApproval {
    pub request: LeaveRequest,
    pub requester: String,
}

pub fn pending_approvals(data: &DataClient) -> Vec<PendingApproval> {
    data.leave_requests_with_status(LeaveStatus::Pending)
        .into_iter()
        .map(|request| PendingApproval {
            requester: data.user_name(&request.user_id),
            request,
        })
        .collect()
}
