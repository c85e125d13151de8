use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use meetnotify_core::FixedClock;
use meetnotify_domain::{Meeting, NewParticipant, NewUser, Participant, User, UserRole};

/// "Now" used throughout the scenarios: 2025-06-15 12:00.
pub fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(noon()))
}

pub fn meeting(id: u64, date: &str, start: &str, end: &str) -> Meeting {
    Meeting {
        id,
        title: format!("Meeting {id}"),
        description: None,
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        location: None,
        participant_ids: Vec::new(),
        attachments: Vec::new(),
        status: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn titled(mut meeting: Meeting, title: &str, location: Option<&str>) -> Meeting {
    meeting.title = title.to_string();
    meeting.location = location.map(str::to_string);
    meeting
}

pub fn participant(id: u64, name: &str, number: &str, seksi: &str) -> Participant {
    Participant {
        id,
        name: name.to_string(),
        whatsapp_number: number.to_string(),
        seksi: seksi.to_string(),
        position: None,
        email: None,
    }
}

pub fn new_participant(name: &str, number: &str, seksi: &str) -> NewParticipant {
    NewParticipant {
        name: name.to_string(),
        whatsapp_number: number.to_string(),
        seksi: seksi.to_string(),
        position: None,
        email: None,
    }
}

pub fn user(id: u64, username: &str, role: UserRole) -> User {
    User {
        id,
        username: username.to_string(),
        name: username.to_uppercase(),
        email: None,
        role,
    }
}

pub fn new_user(username: &str, password: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        name: "New User".to_string(),
        email: None,
        password: password.to_string(),
        role: UserRole::Operator,
    }
}
