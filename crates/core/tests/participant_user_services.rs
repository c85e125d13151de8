//! Integration tests for participant and user management services.

mod support;

use std::sync::Arc;

use meetnotify_core::{ParticipantService, UserService};
use meetnotify_domain::{
    MeetNotifyError, ParticipantFilter, ParticipantUpdate, UserRole, UserUpdate,
};
use support::fixtures::{new_participant, new_user, participant, user};
use support::repositories::{MockParticipantRepository, MockUserRepository};

fn participant_service() -> (ParticipantService, MockParticipantRepository) {
    let repo = MockParticipantRepository::new(vec![
        participant(1, "Siti Rahma", "6281234567890", "Keuangan"),
        participant(2, "budi santoso", "6281298765432", "Umum"),
        participant(3, "Andi Wijaya", "6285711112222", "keuangan"),
    ]);
    (ParticipantService::new(Arc::new(repo.clone())), repo)
}

fn user_service(users: Vec<meetnotify_domain::User>) -> (UserService, MockUserRepository) {
    let repo = MockUserRepository::new(users);
    (UserService::new(Arc::new(repo.clone())), repo)
}

#[tokio::test]
async fn participants_sorted_by_name_and_filtered_by_seksi() {
    let (service, _) = participant_service();

    let all = service.list(&ParticipantFilter::default()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Andi Wijaya", "budi santoso", "Siti Rahma"]);

    let keuangan = service
        .list(&ParticipantFilter { seksi: Some("KEUANGAN".into()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(keuangan.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 1]);

    let by_number = service
        .list(&ParticipantFilter { search: Some("98765".into()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(by_number.len(), 1);
    assert_eq!(by_number[0].id, 2);
}

#[tokio::test]
async fn seksi_names_are_distinct_and_sorted() {
    let (service, _) = participant_service();
    assert_eq!(service.seksi_names().await.unwrap(), vec!["Keuangan", "Umum", "keuangan"]);
}

#[tokio::test]
async fn create_participant_normalizes_number() {
    let (service, repo) = participant_service();
    let created = service
        .create(new_participant("Dewi", "0812-3456-7000", "Umum"))
        .await
        .unwrap();
    assert_eq!(created.whatsapp_number, "6281234567000");
    assert_eq!(repo.snapshot().len(), 4);
}

#[tokio::test]
async fn create_participant_rejects_duplicate_number() {
    let (service, _) = participant_service();
    let duplicate = service.create(new_participant("Rina", "+62 812 3456 7890", "Umum")).await;
    assert!(matches!(duplicate, Err(MeetNotifyError::Conflict(_))));
}

#[tokio::test]
async fn create_participant_rejects_invalid_fields() {
    let (service, repo) = participant_service();
    for bad in [
        new_participant("", "081234567001", "Umum"),
        new_participant("Rina", "081234567001", "  "),
        new_participant("Rina", "bukan nomor", "Umum"),
    ] {
        assert!(matches!(service.create(bad).await, Err(MeetNotifyError::InvalidInput(_))));
    }
    let mut with_email = new_participant("Rina", "081234567001", "Umum");
    with_email.email = Some("rina.example.com".into());
    assert!(matches!(service.create(with_email).await, Err(MeetNotifyError::InvalidInput(_))));
    assert_eq!(repo.snapshot().len(), 3);
}

#[tokio::test]
async fn update_participant_allows_keeping_own_number() {
    let (service, _) = participant_service();
    let updated = service
        .update(
            1,
            ParticipantUpdate {
                whatsapp_number: Some("081234567890".into()),
                position: Some("Kasubag".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.whatsapp_number, "6281234567890");
    assert_eq!(updated.position.as_deref(), Some("Kasubag"));

    let stolen = service
        .update(
            2,
            ParticipantUpdate { whatsapp_number: Some("081234567890".into()), ..Default::default() },
        )
        .await;
    assert!(matches!(stolen, Err(MeetNotifyError::Conflict(_))));
}

#[tokio::test]
async fn delete_participant() {
    let (service, repo) = participant_service();
    service.delete(2).await.unwrap();
    assert_eq!(repo.snapshot().len(), 2);
    assert!(matches!(service.get(2).await, Err(MeetNotifyError::NotFound(_))));
}

#[tokio::test]
async fn users_sorted_by_username() {
    let (service, _) = user_service(vec![
        user(1, "zaki", UserRole::Operator),
        user(2, "Admin", UserRole::Admin),
        user(3, "budi", UserRole::Operator),
    ]);
    let usernames: Vec<String> =
        service.list().await.unwrap().into_iter().map(|u| u.username).collect();
    assert_eq!(usernames, vec!["Admin", "budi", "zaki"]);
}

#[tokio::test]
async fn create_user_validates_and_rejects_taken_username() {
    let (service, repo) = user_service(vec![user(1, "admin", UserRole::Admin)]);

    let created = service.create(new_user("  operator1 ", "rahasia123")).await.unwrap();
    assert_eq!(created.username, "operator1");
    assert_eq!(created.role, UserRole::Operator);

    let taken = service.create(new_user("ADMIN", "rahasia123")).await;
    assert!(matches!(taken, Err(MeetNotifyError::Conflict(_))));

    for bad in [new_user("two words", "rahasia123"), new_user("", "rahasia123"), new_user("ok", "short")]
    {
        assert!(matches!(service.create(bad).await, Err(MeetNotifyError::InvalidInput(_))));
    }
    assert_eq!(repo.snapshot().len(), 2);
}

#[tokio::test]
async fn last_admin_cannot_be_demoted_or_deleted() {
    let (service, _) = user_service(vec![
        user(1, "admin", UserRole::Admin),
        user(2, "operator", UserRole::Operator),
    ]);

    let demote = service
        .update(1, UserUpdate { role: Some(UserRole::Operator), ..Default::default() })
        .await;
    assert!(matches!(demote, Err(MeetNotifyError::Conflict(_))));
    assert!(matches!(service.delete(1).await, Err(MeetNotifyError::Conflict(_))));

    service
        .update(2, UserUpdate { role: Some(UserRole::Admin), ..Default::default() })
        .await
        .unwrap();
    service.delete(1).await.unwrap();
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_user_rejects_short_password() {
    let (service, _) = user_service(vec![user(1, "admin", UserRole::Admin)]);
    let result = service
        .update(1, UserUpdate { password: Some("123".into()), ..Default::default() })
        .await;
    assert!(matches!(result, Err(MeetNotifyError::InvalidInput(_))));
}
