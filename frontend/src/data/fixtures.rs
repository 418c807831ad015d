//! Static demo tables backing every page.

use super::types::*;
use chrono::NaiveDate;

pub const DEMO_PASSWORD: &str = "password";

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn links(handle: &str) -> SocialLinks {
    SocialLinks {
        linkedin: Some(format!("https://linkedin.com/in/{handle}")),
        instagram: Some(format!("https://instagram.com/{handle}")),
    }
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    email: &str,
    name: &str,
    role: Role,
    position: &str,
    birthday: NaiveDate,
    join_date: NaiveDate,
    tech_stack: &[&str],
    education: &str,
    location: &str,
    mobile: &str,
    handle: &str,
) -> User {
    User {
        id: id.into(),
        email: email.into(),
        name: name.into(),
        role,
        position: position.into(),
        birthday: Some(birthday),
        join_date: Some(join_date),
        tech_stack: tech_stack.iter().map(|s| s.to_string()).collect(),
        education: Some(education.into()),
        location: Some(location.into()),
        mobile: Some(mobile.into()),
        social_links: links(handle),
        avatar: None,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "1",
            "john.doe@example.com",
            "John Doe",
            Role::Employee,
            "Junior Developer",
            day(1990, 4, 25),
            day(2023, 4, 20),
            &["JavaScript", "React", "Node.js"],
            "B.Sc. Computer Science, Stanford University",
            "San Francisco, USA",
            "+1-555-123-4567",
            "johndoe",
        ),
        user(
            "2",
            "jane.smith@example.com",
            "Jane Smith",
            Role::Employee,
            "Senior Developer",
            day(1992, 6, 15),
            day(2022, 6, 10),
            &["TypeScript", "React", "GraphQL", "AWS"],
            "M.Sc. Software Engineering, MIT",
            "New York, USA",
            "+1-555-234-5678",
            "janesmith",
        ),
        user(
            "3",
            "alice.jones@example.com",
            "Alice Jones",
            Role::Hr,
            "HR Manager",
            day(1988, 8, 30),
            day(2021, 8, 15),
            &[],
            "M.B.A., Harvard Business School",
            "Boston, USA",
            "+1-555-345-6789",
            "alicejones",
        ),
        user(
            "4",
            "bob.wilson@example.com",
            "Bob Wilson",
            Role::Manager,
            "Tech Lead",
            day(1985, 3, 12),
            day(2020, 3, 1),
            &["Python", "Django", "Docker", "Kubernetes"],
            "B.Sc. Computer Engineering, Caltech",
            "Seattle, USA",
            "+1-555-456-7890",
            "bobwilson",
        ),
        user(
            "5",
            "carol.brown@example.com",
            "Carol Brown",
            Role::TechLead,
            "DevOps Engineer",
            day(1991, 11, 5),
            day(2022, 11, 1),
            &["AWS", "Terraform", "Jenkins", "Linux"],
            "B.Sc. Information Technology, UC Berkeley",
            "Austin, USA",
            "+1-555-567-8901",
            "carolbrown",
        ),
    ]
}

fn request(
    id: &str,
    leave_type: LeaveType,
    start: NaiveDate,
    end: NaiveDate,
    status: LeaveStatus,
) -> LeaveRequest {
    LeaveRequest {
        id: id.into(),
        user_id: "1".into(),
        leave_type,
        start_date: start,
        end_date: end,
        status,
        reason: None,
    }
}

pub fn leave_requests() -> Vec<LeaveRequest> {
    use LeaveStatus::*;
    use LeaveType::*;
    vec![
        request("1", Annual, day(2025, 5, 1), day(2025, 5, 5), Pending),
        request("2", Sick, day(2025, 4, 10), day(2025, 4, 12), Approved),
        request("3", Casual, day(2025, 3, 15), day(2025, 3, 16), Rejected),
        request("4", Casual, day(2025, 3, 15), day(2025, 3, 16), Rejected),
        request("5", Sick, day(2025, 4, 10), day(2025, 4, 12), Approved),
        request("6", Sick, day(2025, 4, 10), day(2025, 4, 12), Approved),
        request("7", Sick, day(2025, 4, 10), day(2025, 4, 12), Approved),
    ]
}

pub fn leave_balances() -> Vec<LeaveBalance> {
    vec![
        LeaveBalance {
            leave_type: LeaveType::Annual,
            balance: 15,
            total: 20,
        },
        LeaveBalance {
            leave_type: LeaveType::Sick,
            balance: 7,
            total: 10,
        },
        LeaveBalance {
            leave_type: LeaveType::Casual,
            balance: 5,
            total: 7,
        },
    ]
}

/// Shown on the employee dashboard in addition to the regular balances.
pub fn maternity_balance() -> LeaveBalance {
    LeaveBalance {
        leave_type: LeaveType::Maternity,
        balance: 60,
        total: 90,
    }
}

pub fn notifications() -> Vec<Notification> {
    let note = |id: &str, kind, user_id: &str, date, message: &str| Notification {
        id: id.into(),
        kind,
        user_id: user_id.into(),
        date,
        message: message.into(),
    };
    vec![
        note(
            "1",
            NotificationKind::Birthday,
            "1",
            day(2025, 4, 25),
            "John Doe's Birthday",
        ),
        note(
            "2",
            NotificationKind::Anniversary,
            "1",
            day(2025, 4, 20),
            "John Doe's 2nd Work Anniversary",
        ),
        note(
            "3",
            NotificationKind::Birthday,
            "2",
            day(2025, 6, 15),
            "Jane Smith's Birthday",
        ),
        note(
            "4",
            NotificationKind::Anniversary,
            "3",
            day(2025, 8, 15),
            "Alice Jones's 4th Work Anniversary",
        ),
    ]
}

pub fn leave_schedules() -> Vec<LeaveSchedule> {
    let schedule = |user_id: &str, start, end| LeaveSchedule {
        user_id: user_id.into(),
        start_date: start,
        end_date: end,
    };
    vec![
        schedule("1", day(2025, 4, 20), day(2025, 4, 22)),
        schedule("2", day(2025, 4, 23), day(2025, 4, 24)),
        schedule("3", day(2025, 4, 21), day(2025, 4, 21)),
    ]
}

pub fn public_holidays() -> Vec<NaiveDate> {
    vec![day(2025, 4, 15)]
}

pub fn hr_activities() -> Vec<HrActivity> {
    vec![
        HrActivity {
            id: 1,
            kind: ActivityKind::Announcement,
            title: "Company Picnic".into(),
            date: day(2025, 5, 15),
            description: "Join us for a fun day at the park with food and games!".into(),
        },
        HrActivity {
            id: 2,
            kind: ActivityKind::Workshop,
            title: "Diversity Workshop".into(),
            date: day(2025, 5, 10),
            description: "Learn about inclusivity in the workplace.".into(),
        },
        HrActivity {
            id: 3,
            kind: ActivityKind::Event,
            title: "Q2 Performance Reviews".into(),
            date: day(2025, 6, 1),
            description: "Schedule your 1:1 with your manager.".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn user_ids_and_emails_are_unique() {
        let users = users();
        let ids: HashSet<_> = users.iter().map(|u| u.id.as_str()).collect();
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(ids.len(), users.len());
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn every_role_has_a_demo_account() {
        let users = users();
        for role in Role::ALL {
            assert!(users.iter().any(|u| u.role == role), "missing {role:?}");
        }
    }

    #[test]
    fn schedules_are_well_ordered() {
        for schedule in leave_schedules() {
            assert!(schedule.start_date <= schedule.end_date);
        }
    }
}
