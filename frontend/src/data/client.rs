use std::rc::Rc;

use chrono::NaiveDate;

use super::{fixtures, types::*};

/// The tables a [`DataClient`] answers from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub leave_requests: Vec<LeaveRequest>,
    pub leave_balances: Vec<LeaveBalance>,
    pub notifications: Vec<Notification>,
    pub leave_schedules: Vec<LeaveSchedule>,
    pub public_holidays: Vec<NaiveDate>,
    pub hr_activities: Vec<HrActivity>,
}

impl Dataset {
    pub fn demo() -> Self {
        Self {
            users: fixtures::users(),
            leave_requests: fixtures::leave_requests(),
            leave_balances: fixtures::leave_balances(),
            notifications: fixtures::notifications(),
            leave_schedules: fixtures::leave_schedules(),
            public_holidays: fixtures::public_holidays(),
            hr_activities: fixtures::hr_activities(),
        }
    }
}

/// Read-only access to the demo tables. Cheap to clone; pages pull it from
/// context and fall back to the bundled demo data.
#[derive(Debug, Clone)]
pub struct DataClient {
    data: Rc<Dataset>,
}

impl Default for DataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DataClient {
    pub fn new() -> Self {
        Self::with_dataset(Dataset::demo())
    }

    pub fn with_dataset(data: Dataset) -> Self {
        Self {
            data: Rc::new(data),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.data.users
    }

    pub fn find_user(&self, id: &str) -> Result<User, AppError> {
        self.data
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("No colleague found with ID: {id}")))
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.data.users.iter().find(|u| u.email == email).cloned()
    }

    pub fn user_name(&self, id: &str) -> String {
        self.data
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| format!("User {id}"))
    }

    /// Everyone except `current_user_id`, in table order.
    pub fn colleagues_of(&self, current_user_id: Option<&str>) -> Vec<User> {
        self.data
            .users
            .iter()
            .filter(|u| Some(u.id.as_str()) != current_user_id)
            .cloned()
            .collect()
    }

    pub fn users_with_role(&self, role: Role) -> Vec<User> {
        self.data
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect()
    }

    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.data.leave_requests
    }

    pub fn leave_requests_with_status(&self, status: LeaveStatus) -> Vec<LeaveRequest> {
        self.data
            .leave_requests
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect()
    }

    pub fn leave_balances(&self) -> &[LeaveBalance] {
        &self.data.leave_balances
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.data.notifications
    }

    pub fn leave_schedules(&self) -> &[LeaveSchedule] {
        &self.data.leave_schedules
    }

    pub fn schedules_for(&self, user_id: &str) -> Vec<LeaveSchedule> {
        self.data
            .leave_schedules
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn public_holidays(&self) -> &[NaiveDate] {
        &self.data.public_holidays
    }

    pub fn hr_activities(&self) -> &[HrActivity] {
        &self.data.hr_activities
    }
}
