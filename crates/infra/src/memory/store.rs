//! Seeded in-memory data store
//!
//! Backs the memory repositories used for local development and demos when no
//! REST backend is configured. All collections sit behind one
//! `parking_lot::RwLock`; readers always receive clones.

use chrono::{Days, NaiveDate};
use meetnotify_domain::{Meeting, NotificationSettings, Participant, User, UserRole};
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) meetings: Vec<Meeting>,
    pub(crate) participants: Vec<Participant>,
    pub(crate) users: Vec<User>,
    pub(crate) settings: NotificationSettings,
    next_meeting_id: u64,
    next_participant_id: u64,
    next_user_id: u64,
}

impl StoreState {
    pub(crate) fn next_meeting_id(&mut self) -> u64 {
        self.next_meeting_id += 1;
        self.next_meeting_id
    }

    pub(crate) fn next_participant_id(&mut self) -> u64 {
        self.next_participant_id += 1;
        self.next_participant_id
    }

    pub(crate) fn next_user_id(&mut self) -> u64 {
        self.next_user_id += 1;
        self.next_user_id
    }

    fn reset_counters(&mut self) {
        self.next_meeting_id = self.meetings.iter().map(|m| m.id).max().unwrap_or(0);
        self.next_participant_id = self.participants.iter().map(|p| p.id).max().unwrap_or(0);
        self.next_user_id = self.users.iter().map(|u| u.id).max().unwrap_or(0);
    }
}

/// Thread-safe in-memory store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    /// Empty store with default notification settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the given records; ID counters continue after
    /// the highest existing ID.
    pub fn with_data(
        meetings: Vec<Meeting>,
        participants: Vec<Participant>,
        users: Vec<User>,
    ) -> Self {
        let mut state = StoreState {
            meetings,
            participants,
            users,
            settings: NotificationSettings::default(),
            ..StoreState::default()
        };
        state.reset_counters();
        Self { state: RwLock::new(state) }
    }

    /// Demo data laid out around `today`: two meetings ahead, two behind,
    /// one later today.
    pub fn seeded(today: NaiveDate) -> Self {
        let day = |offset: i64| {
            let shifted = if offset >= 0 {
                today.checked_add_days(Days::new(offset.unsigned_abs()))
            } else {
                today.checked_sub_days(Days::new(offset.unsigned_abs()))
            };
            shifted.unwrap_or(today).format("%Y-%m-%d").to_string()
        };

        let meetings = vec![
            demo_meeting(
                1,
                "Rapat koordinasi mingguan",
                &day(-7),
                "09:00",
                "10:30",
                Some("Aula Utama"),
                &[1, 2, 3],
            ),
            demo_meeting(
                2,
                "Evaluasi anggaran triwulan",
                &day(3),
                "13:00",
                "15:00",
                Some("Ruang Rapat 2"),
                &[1, 4],
            ),
            demo_meeting(
                3,
                "Sosialisasi SOP pelayanan",
                &day(-1),
                "08:00",
                "09:00",
                Some("Aula Utama"),
                &[2, 3, 5],
            ),
            demo_meeting(4, "Briefing pimpinan", &day(0), "23:00", "23:30", None, &[1]),
            demo_meeting(
                5,
                "Rapat persiapan audit",
                &day(10),
                "10:00",
                "12:00",
                Some("Zoom"),
                &[4, 5],
            ),
        ];

        let participants = vec![
            demo_participant(
                1,
                "Siti Rahmawati",
                "6281234567890",
                "Keuangan",
                Some("Kepala Seksi"),
            ),
            demo_participant(
                2,
                "Budi Santoso",
                "6281298765432",
                "Umum",
                Some("Staf"),
            ),
            demo_participant(
                3,
                "Andi Wijaya",
                "6285711112222",
                "Pelayanan",
                None,
            ),
            demo_participant(
                4,
                "Dewi Lestari",
                "6281355556666",
                "Keuangan",
                Some("Bendahara"),
            ),
            demo_participant(
                5,
                "Rudi Hartono",
                "6287877778888",
                "Pelayanan",
                Some("Koordinator"),
            ),
        ];

        let users = vec![
            User {
                id: 1,
                username: "admin".into(),
                name: "Administrator".into(),
                email: Some("admin@example.com".into()),
                role: UserRole::Admin,
            },
            User {
                id: 2,
                username: "operator".into(),
                name: "Operator Rapat".into(),
                email: None,
                role: UserRole::Operator,
            },
        ];

        Self::with_data(meetings, participants, users)
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        f(&self.state.read())
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        f(&mut self.state.write())
    }
}

fn demo_meeting(
    id: u64,
    title: &str,
    date: &str,
    start_time: &str,
    end_time: &str,
    location: Option<&str>,
    participant_ids: &[u64],
) -> Meeting {
    Meeting {
        id,
        title: title.to_string(),
        description: None,
        date: date.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        location: location.map(str::to_string),
        participant_ids: participant_ids.to_vec(),
        attachments: Vec::new(),
        status: None,
        created_at: None,
        updated_at: None,
    }
}

fn demo_participant(
    id: u64,
    name: &str,
    whatsapp_number: &str,
    seksi: &str,
    position: Option<&str>,
) -> Participant {
    Participant {
        id,
        name: name.to_string(),
        whatsapp_number: whatsapp_number.to_string(),
        seksi: seksi.to_string(),
        position: position.map(str::to_string),
        email: None,
    }
}
