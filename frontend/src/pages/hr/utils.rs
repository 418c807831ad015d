use crate::data::{Notification, Role, User};

/// Head count per role, every role listed even when empty.
pub fn headcount_by_role(users: &[User]) -> Vec<(Role, usize)> {
    Role::ALL
        .iter()
        .map(|role| (*role, users.iter().filter(|u| u.role == *role).count()))
        .collect()
}

/// Notifications ordered by date, earliest first.
pub fn celebrations(notifications: &[Notification]) -> Vec<Notification> {
    let mut sorted = notifications.to_vec();
    sorted.sort_by_key(|n| n.date);
    sorted
}
