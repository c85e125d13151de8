//! Integration tests for `MeetingService` over an in-memory repository.

mod support;

use std::sync::Arc;

use meetnotify_core::{MeetingService, TemporalClassifier};
use meetnotify_domain::{
    MeetNotifyError, Meeting, MeetingFilter, MeetingUpdate, NewMeeting, TemporalStatus,
};
use support::fixtures::{fixed_clock, meeting, titled};
use support::repositories::MockMeetingRepository;

fn seeded() -> Vec<Meeting> {
    vec![
        titled(meeting(1, "2025-06-10", "09:00", "10:00"), "Rapat koordinasi", Some("Aula")),
        titled(meeting(2, "2025-06-20", "09:00", "10:00"), "Evaluasi anggaran", Some("Ruang 2")),
        titled(meeting(3, "2025-06-15", "13:00", "14:00"), "Briefing pagi", None),
        titled(meeting(4, "2025-06-01", "08:00", "09:00"), "Sosialisasi SOP", Some("Aula")),
        titled(meeting(5, "2025-07-01", "10:00", "11:00"), "Rapat bulanan", Some("Zoom")),
    ]
}

fn service_with(meetings: Vec<Meeting>) -> (MeetingService, MockMeetingRepository) {
    let repo = MockMeetingRepository::new(meetings);
    let service =
        MeetingService::new(Arc::new(repo.clone()), TemporalClassifier::default(), fixed_clock());
    (service, repo)
}

fn ids(meetings: &[Meeting]) -> Vec<u64> {
    meetings.iter().map(|m| m.id).collect()
}

fn new_meeting(title: &str, start: &str, end: &str) -> NewMeeting {
    NewMeeting {
        title: title.to_string(),
        description: None,
        date: "2025-06-18".to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        location: None,
        participant_ids: vec![1, 2],
    }
}

#[tokio::test]
async fn list_arranges_upcoming_then_completed() {
    let (service, _) = service_with(seeded());
    let page = service.list(&MeetingFilter::default()).await.unwrap();

    assert_eq!(ids(&page.items), vec![3, 2, 5, 1, 4]);
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.divider_index, Some(3));
}

#[tokio::test]
async fn list_filters_by_status() {
    let (service, _) = service_with(seeded());

    let upcoming = service
        .list(&MeetingFilter::default().with_status(TemporalStatus::Upcoming))
        .await
        .unwrap();
    assert_eq!(ids(&upcoming.items), vec![3, 2, 5]);
    assert_eq!(upcoming.divider_index, None);

    let completed = service
        .list(&MeetingFilter::default().with_status(TemporalStatus::Completed))
        .await
        .unwrap();
    assert_eq!(ids(&completed.items), vec![1, 4]);
    assert_eq!(completed.total, 2);
    assert_eq!(completed.status_at(1), Some(TemporalStatus::Completed));
}

#[tokio::test]
async fn list_searches_title_and_location_case_insensitively() {
    let (service, _) = service_with(seeded());

    let rapat = service.list(&MeetingFilter::default().with_search("RAPAT")).await.unwrap();
    assert_eq!(ids(&rapat.items), vec![5, 1]);

    let aula = service.list(&MeetingFilter::default().with_search("  aula ")).await.unwrap();
    assert_eq!(ids(&aula.items), vec![1, 4]);
}

#[tokio::test]
async fn list_paginates_and_reports_page_relative_divider() {
    let (service, _) = service_with(seeded());

    let first = service
        .list(&MeetingFilter::default().with_per_page(2).with_page(1))
        .await
        .unwrap();
    assert_eq!(ids(&first.items), vec![3, 2]);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.divider_index, None);

    let second = service
        .list(&MeetingFilter::default().with_per_page(2).with_page(2))
        .await
        .unwrap();
    assert_eq!(ids(&second.items), vec![5, 1]);
    assert_eq!(second.divider_index, Some(1));
    assert_eq!(second.status_at(0), Some(TemporalStatus::Upcoming));
    assert_eq!(second.status_at(1), Some(TemporalStatus::Completed));

    let third = service
        .list(&MeetingFilter::default().with_per_page(2).with_page(3))
        .await
        .unwrap();
    assert_eq!(ids(&third.items), vec![4]);
    assert_eq!(third.divider_index, None);
    assert_eq!(third.status_at(0), Some(TemporalStatus::Completed));

    let beyond = service
        .list(&MeetingFilter::default().with_per_page(2).with_page(9))
        .await
        .unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 5);
}

#[tokio::test]
async fn get_missing_meeting_is_not_found() {
    let (service, _) = service_with(seeded());
    assert!(matches!(service.get(99).await, Err(MeetNotifyError::NotFound(_))));
    assert_eq!(service.get(2).await.unwrap().title, "Evaluasi anggaran");
}

#[tokio::test]
async fn status_of_uses_clock() {
    let (service, _) = service_with(seeded());
    let briefing = service.get(3).await.unwrap();
    assert_eq!(service.status_of(&briefing), TemporalStatus::Upcoming);
    let old = service.get(4).await.unwrap();
    assert_eq!(service.status_of(&old), TemporalStatus::Completed);
}

#[tokio::test]
async fn create_validates_fields() {
    let (service, repo) = service_with(Vec::new());

    let created = service.create(new_meeting("Rapat staf", "09:00", "10:30")).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(repo.snapshot().len(), 1);

    for bad in [
        new_meeting("   ", "09:00", "10:00"),
        new_meeting("Rapat", "9 pagi", "10:00"),
        new_meeting("Rapat", "10:00", "10:00"),
        new_meeting("Rapat", "11:00", "10:00"),
        NewMeeting { date: "18/06/2025".into(), ..new_meeting("Rapat", "09:00", "10:00") },
    ] {
        assert!(matches!(service.create(bad).await, Err(MeetNotifyError::InvalidInput(_))));
    }
    assert_eq!(repo.snapshot().len(), 1);
}

#[tokio::test]
async fn update_validates_merged_meeting() {
    let (service, _) = service_with(seeded());

    let moved = service
        .update(
            4,
            MeetingUpdate { date: Some("2025-06-30".into()), ..Default::default() },
        )
        .await
        .unwrap();
    assert_eq!(moved.date, "2025-06-30");
    assert_eq!(service.status_of(&moved), TemporalStatus::Upcoming);

    let reversed = service
        .update(4, MeetingUpdate { end_time: Some("07:00".into()), ..Default::default() })
        .await;
    assert!(matches!(reversed, Err(MeetNotifyError::InvalidInput(_))));

    let empty = service.update(4, MeetingUpdate::default()).await;
    assert!(matches!(empty, Err(MeetNotifyError::InvalidInput(_))));

    let missing = service
        .update(99, MeetingUpdate { title: Some("x".into()), ..Default::default() })
        .await;
    assert!(matches!(missing, Err(MeetNotifyError::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_meeting() {
    let (service, repo) = service_with(seeded());
    service.delete(3).await.unwrap();
    assert!(!ids(&repo.snapshot()).contains(&3));
    assert!(matches!(service.delete(3).await, Err(MeetNotifyError::NotFound(_))));
}

#[tokio::test]
async fn arranged_counts_groups() {
    let (service, _) = service_with(seeded());
    let arranged = service.arranged().await.unwrap();
    assert_eq!(arranged.upcoming_count, 3);
    assert_eq!(arranged.completed_count, 2);
    assert_eq!(arranged.unparsed_count, 0);
}
