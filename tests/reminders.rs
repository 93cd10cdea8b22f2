mod helpers;

use chrono::{Duration, Utc};
use helpers::setup::spawn_app;
use helpers::utils::{assert_reminder_labels, date, make_token};
use memora_sdk::{
    CreateReminderDateInput, CreateReminderDaysInput, DeleteReminderInput, DeleteRemindersInput,
    GetExpiredRemindersInput, MemoraSDK, UpdateReminderDateInput, UpdateReminderDaysInput, ID,
};

const JWT_SECRET: &str = "yoyoyoyoyoyoyoyoyo";

/// Spawns the application with one account and one user of that
/// account which is allowed to perform the given reminder permissions.
async fn spawn_app_with_user(allow: Option<Vec<&str>>) -> (MemoraSDK, MemoraSDK, ID) {
    let (app, sdk, address) = spawn_app().await;
    let res = sdk
        .account
        .create(&app.config.create_account_secret_code)
        .await
        .expect("Expected to create account");

    let admin_client = MemoraSDK::new(address.clone(), res.secret_api_key);
    admin_client
        .account
        .set_jwt_secret(Some(JWT_SECRET.into()))
        .await
        .expect("Expected to set account jwt secret");

    let user_id = ID::default();
    let token = make_token(JWT_SECRET, &user_id, allow);
    let user_client = MemoraSDK::with_token(address, res.account.id.to_string(), token);

    (admin_client, user_client, user_id)
}

fn date_input(label: &str, created: &str, expires: &str) -> CreateReminderDateInput {
    CreateReminderDateInput {
        label: label.into(),
        notes: None,
        created: Some(date(created)),
        expires: date(expires),
        next: None,
    }
}

#[actix_web::main]
#[test]
async fn test_create_reminder_with_expiration_date() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let res = client
        .reminder
        .create_with_date(CreateReminderDateInput {
            label: "pay rent".into(),
            notes: Some("before the first".into()),
            created: Some(date("2024-06-01")),
            expires: date("2024-06-30"),
            next: None,
        })
        .await
        .expect("Expected to create reminder");

    assert_eq!(res.reminder.label, "pay rent");
    assert_eq!(res.reminder.notes, "before the first");
    assert_eq!(res.reminder.created, date("2024-06-01"));
    assert_eq!(res.reminder.expires, date("2024-06-30"));
    assert_eq!(res.notice, "Reminder \"pay rent\" created successfully.");
    assert_eq!(res.redirect_to, "/");
}

#[actix_web::main]
#[test]
async fn test_create_reminder_with_day_count() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let res = client
        .reminder
        .create_with_days(CreateReminderDaysInput {
            label: "water plants".into(),
            notes: None,
            created: Some(date("2024-06-01")),
            days: 10,
            next: None,
        })
        .await
        .expect("Expected to create reminder");
    assert_eq!(res.reminder.notes, "");
    assert_eq!(res.reminder.expires, date("2024-06-11"));

    // A negative day count gives an expiration before the creation date
    let res = client
        .reminder
        .create_with_days(CreateReminderDaysInput {
            label: "already late".into(),
            notes: None,
            created: Some(date("2024-06-01")),
            days: -1,
            next: None,
        })
        .await
        .expect("Expected to create reminder");
    assert_eq!(res.reminder.expires, date("2024-05-31"));

    // Absurd day counts are rejected
    for days in [36501, -36501, i64::MAX, i64::MIN] {
        assert!(client
            .reminder
            .create_with_days(CreateReminderDaysInput {
                label: "the far future".into(),
                notes: None,
                created: Some(date("2024-06-01")),
                days,
                next: None,
            })
            .await
            .is_err());
    }
}

#[actix_web::main]
#[test]
async fn test_create_reminder_stamps_today_when_no_creation_date_given() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let res = client
        .reminder
        .create_with_days(CreateReminderDaysInput {
            label: "water plants".into(),
            notes: None,
            created: None,
            days: 7,
            next: None,
        })
        .await
        .expect("Expected to create reminder");

    let today = Utc::now().date_naive();
    assert_eq!(res.reminder.created, today);
    assert_eq!(res.reminder.expires, today + Duration::days(7));
}

#[actix_web::main]
#[test]
async fn test_create_reminder_rejects_invalid_labels() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let res = client
        .reminder
        .create_with_date(date_input(" ", "2024-06-01", "2024-06-30"))
        .await;
    assert!(res.is_err());

    let res = client
        .reminder
        .create_with_date(date_input(&"x".repeat(65), "2024-06-01", "2024-06-30"))
        .await;
    assert!(res.is_err());

    let reminders = client.reminder.list().await.unwrap().reminders;
    assert!(reminders.is_empty());
}

#[actix_web::main]
#[test]
async fn test_list_reminders_newest_first() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    for (label, created) in [
        ("clean gutters", "2024-03-05"),
        ("book dentist", "2024-03-05"),
        ("renew passport", "2024-01-01"),
        ("water plants", "2024-06-01"),
    ] {
        client
            .reminder
            .create_with_date(date_input(label, created, "2024-12-24"))
            .await
            .expect("Expected to create reminder");
    }

    let res = client.reminder.list().await.expect("Expected reminders");
    assert_eq!(res.title, "reminders");
    // Newest first, ties broken alphabetically
    assert_reminder_labels(
        &res.reminders,
        &[
            "water plants",
            "book dentist",
            "clean gutters",
            "renew passport",
        ],
    );
}

#[actix_web::main]
#[test]
async fn test_expired_reminders() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let today = Utc::now().date_naive();
    let created = today - Duration::days(30);
    for (label, expires) in [
        ("overdue", today - Duration::days(1)),
        ("due today", today),
        ("upcoming", today + Duration::days(5)),
    ] {
        client
            .reminder
            .create_with_date(CreateReminderDateInput {
                label: label.into(),
                notes: None,
                created: Some(created),
                expires,
                next: None,
            })
            .await
            .expect("Expected to create reminder");
    }

    // A reminder expiring today has not expired yet
    let res = client
        .reminder
        .expired(GetExpiredRemindersInput { at: None })
        .await
        .expect("Expected expired reminders");
    assert_eq!(res.title, "expired reminders");
    assert_eq!(res.reminders.len(), 1);
    assert_eq!(res.reminders[0].reminder.label, "overdue");
    assert_eq!(res.reminders[0].days_expired, 1);

    // With a reference date the cutoff moves, but how long ago a
    // reminder expired is still counted from today
    let res = client
        .reminder
        .expired(GetExpiredRemindersInput {
            at: Some(today + Duration::days(1)),
        })
        .await
        .expect("Expected expired reminders");
    assert_eq!(res.reminders.len(), 2);
    assert_eq!(res.reminders[0].reminder.label, "due today");
    assert_eq!(res.reminders[0].days_expired, 0);
    assert_eq!(res.reminders[1].reminder.label, "overdue");
    assert_eq!(res.reminders[1].days_expired, 1);
}

#[actix_web::main]
#[test]
async fn test_get_reminder_detail() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let today = Utc::now().date_naive();
    let expired = client
        .reminder
        .create_with_date(CreateReminderDateInput {
            label: "taxes".into(),
            notes: None,
            created: Some(today - Duration::days(10)),
            expires: today - Duration::days(3),
            next: None,
        })
        .await
        .unwrap()
        .reminder;
    let active = client
        .reminder
        .create_with_date(CreateReminderDateInput {
            label: "groceries".into(),
            notes: None,
            created: Some(today),
            expires: today + Duration::days(3),
            next: None,
        })
        .await
        .unwrap()
        .reminder;

    let res = client
        .reminder
        .get(expired.id.clone())
        .await
        .expect("Expected reminder");
    assert_eq!(res.reminder.id, expired.id);
    assert_eq!(res.title, "Detail for reminder \"taxes\" (expired 3 days)");
    assert_eq!(res.days, 7);

    let res = client
        .reminder
        .get(active.id.clone())
        .await
        .expect("Expected reminder");
    assert_eq!(res.title, "Detail for reminder \"groceries\"");
    assert_eq!(res.days, 3);
}

#[actix_web::main]
#[test]
async fn test_update_reminder_keeps_the_creation_date() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let reminder = client
        .reminder
        .create_with_date(date_input("draft", "2024-01-01", "2024-01-05"))
        .await
        .unwrap()
        .reminder;

    let res = client
        .reminder
        .update_with_date(UpdateReminderDateInput {
            reminder_id: reminder.id.clone(),
            label: "final".into(),
            notes: Some("done".into()),
            expires: date("2024-02-01"),
            next: Some("/inbox".into()),
        })
        .await
        .expect("Expected to update reminder");
    assert_eq!(res.notice, "Reminder \"final\" edited successfully.");
    assert_eq!(res.redirect_to, "/inbox");
    assert_eq!(res.reminder.label, "final");
    assert_eq!(res.reminder.notes, "done");
    assert_eq!(res.reminder.created, date("2024-01-01"));
    assert_eq!(res.reminder.expires, date("2024-02-01"));

    // A day count keeps counting from the original creation date
    let res = client
        .reminder
        .update_with_days(UpdateReminderDaysInput {
            reminder_id: reminder.id.clone(),
            label: "final".into(),
            notes: None,
            days: 10,
            next: None,
        })
        .await
        .expect("Expected to update reminder");
    assert_eq!(res.reminder.created, date("2024-01-01"));
    assert_eq!(res.reminder.expires, date("2024-01-11"));
}

#[actix_web::main]
#[test]
async fn test_reminders_are_scoped_to_the_account() {
    let (app, sdk, address) = spawn_app().await;

    let mut clients = Vec::new();
    for _ in 0..2 {
        let res = sdk
            .account
            .create(&app.config.create_account_secret_code)
            .await
            .expect("Expected to create account");
        let admin_client = MemoraSDK::new(address.clone(), res.secret_api_key);
        admin_client
            .account
            .set_jwt_secret(Some(JWT_SECRET.into()))
            .await
            .expect("Expected to set account jwt secret");
        let user_id = ID::default();
        let token = make_token(JWT_SECRET, &user_id, Some(vec!["*"]));
        clients.push(MemoraSDK::with_token(
            address.clone(),
            res.account.id.to_string(),
            token,
        ));
    }

    let reminder = clients[0]
        .reminder
        .create_with_date(date_input("mine", "2024-01-01", "2024-06-01"))
        .await
        .unwrap()
        .reminder;

    // The other account cannot see or touch it
    assert!(clients[1].reminder.get(reminder.id.clone()).await.is_err());
    assert!(clients[1]
        .reminder
        .update_with_date(UpdateReminderDateInput {
            reminder_id: reminder.id.clone(),
            label: "stolen".into(),
            notes: None,
            expires: date("2024-06-01"),
            next: None,
        })
        .await
        .is_err());
    assert!(clients[1]
        .reminder
        .delete(DeleteReminderInput {
            reminder_id: reminder.id.clone(),
            next: None,
            previous: None,
        })
        .await
        .is_err());
    assert!(clients[1].reminder.list().await.unwrap().reminders.is_empty());

    let res = clients[0].reminder.get(reminder.id.clone()).await;
    assert!(res.is_ok());
}

#[actix_web::main]
#[test]
async fn test_delete_reminder() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let reminder = client
        .reminder
        .create_with_date(date_input("old chores", "2024-01-01", "2024-06-01"))
        .await
        .unwrap()
        .reminder;
    client
        .reminder
        .create_with_date(date_input("keep me", "2024-01-02", "2024-06-01"))
        .await
        .unwrap();

    let res = client
        .reminder
        .delete_confirmation(DeleteReminderInput {
            reminder_id: reminder.id.clone(),
            next: None,
            previous: None,
        })
        .await
        .expect("Expected delete confirmation");
    assert_eq!(
        res.title,
        "Are you sure you wish to delete the reminder \"old chores\"?"
    );
    assert_reminder_labels(&res.reminders, &["old chores"]);
    // Falls back to the reminder list page when the client gave no target
    assert_eq!(res.next, "/api/v1/reminders");
    assert_eq!(res.previous, "/");

    let res = client
        .reminder
        .delete(DeleteReminderInput {
            reminder_id: reminder.id.clone(),
            next: Some("/inbox".into()),
            previous: None,
        })
        .await
        .expect("Expected to delete reminder");
    assert_eq!(
        res.notices,
        vec!["Reminder \"old chores\" deleted successfully."]
    );
    assert!(res.errors.is_empty());
    assert_eq!(res.redirect_to, "/inbox");

    assert!(client.reminder.get(reminder.id.clone()).await.is_err());
    let res = client.reminder.list().await.unwrap();
    assert_reminder_labels(&res.reminders, &["keep me"]);

    // Deleting it again is an error
    assert!(client
        .reminder
        .delete(DeleteReminderInput {
            reminder_id: reminder.id,
            next: None,
            previous: None,
        })
        .await
        .is_err());
}

#[actix_web::main]
#[test]
async fn test_delete_many_reminders() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let mut ids = Vec::new();
    for (label, created) in [
        ("a", "2024-01-01"),
        ("b", "2024-01-02"),
        ("c", "2024-01-03"),
    ] {
        let reminder = client
            .reminder
            .create_with_date(date_input(label, created, "2024-06-01"))
            .await
            .unwrap()
            .reminder;
        ids.push(reminder.id);
    }

    // The confirmation lists the reminders in the order they were asked for
    let res = client
        .reminder
        .delete_many_confirmation(DeleteRemindersInput {
            reminder_ids: vec![ids[1].clone(), ids[0].clone()],
            next: None,
            previous: None,
        })
        .await
        .expect("Expected delete confirmation");
    assert_eq!(
        res.title,
        "Are you sure you wish to delete the reminders: b, a?"
    );
    assert_reminder_labels(&res.reminders, &["b", "a"]);
    assert_eq!(res.next, "/");

    let res = client
        .reminder
        .delete_many(DeleteRemindersInput {
            reminder_ids: vec![ids[1].clone(), ids[0].clone()],
            next: None,
            previous: None,
        })
        .await
        .expect("Expected to delete reminders");
    assert_eq!(
        res.notices,
        vec![
            "Reminder \"b\" deleted successfully.",
            "Reminder \"a\" deleted successfully.",
        ]
    );
    assert!(res.errors.is_empty());

    let res = client.reminder.list().await.unwrap();
    assert_reminder_labels(&res.reminders, &["c"]);
}

#[actix_web::main]
#[test]
async fn test_delete_many_fails_when_any_reminder_is_unknown() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let reminder = client
        .reminder
        .create_with_date(date_input("survivor", "2024-01-01", "2024-06-01"))
        .await
        .unwrap()
        .reminder;

    let res = client
        .reminder
        .delete_many(DeleteRemindersInput {
            reminder_ids: vec![reminder.id, ID::default()],
            next: None,
            previous: None,
        })
        .await;
    assert!(res.is_err());

    // Nothing was deleted
    let res = client.reminder.list().await.unwrap();
    assert_reminder_labels(&res.reminders, &["survivor"]);
}

#[actix_web::main]
#[test]
async fn test_delete_many_requires_at_least_one_reminder() {
    let (_, client, _) = spawn_app_with_user(Some(vec!["*"])).await;

    let res = client
        .reminder
        .delete_many(DeleteRemindersInput {
            reminder_ids: Vec::new(),
            next: None,
            previous: None,
        })
        .await
        .expect("Expected a deletion response");
    assert!(res.notices.is_empty());
    assert_eq!(res.errors, vec!["Must provide at least one reminder."]);
    assert_eq!(res.redirect_to, "/");
}

#[actix_web::main]
#[test]
async fn test_reminder_permissions() {
    // No policy in the token allows nothing
    let (admin_client, client, _) = spawn_app_with_user(None).await;
    assert!(client.user.me().await.is_ok());
    assert!(client.reminder.list().await.is_err());
    assert!(client
        .reminder
        .create_with_date(date_input("nope", "2024-01-01", "2024-06-01"))
        .await
        .is_err());

    // The account api key does not authenticate user routes
    assert!(admin_client.reminder.list().await.is_err());

    // A view only user can look but not touch
    let (_, client, _) = spawn_app_with_user(Some(vec!["ViewReminder"])).await;
    assert!(client.reminder.list().await.is_ok());
    assert!(client
        .reminder
        .expired(GetExpiredRemindersInput { at: None })
        .await
        .is_ok());
    assert!(client
        .reminder
        .create_with_date(date_input("nope", "2024-01-01", "2024-06-01"))
        .await
        .is_err());
}
