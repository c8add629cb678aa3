//! Integration tests for `taskdeck`: the full lifecycle against the real
//! `SQLite`-backed store.

use chrono::{NaiveDate, NaiveTime};
use taskdeck::settings::{FontSize, SettingsStore, Theme};
use taskdeck::storage::SqliteKvStore;
use taskdeck::tasks::{TaskEvent, TaskStore, Urgency};
use taskdeck::testing::MockBiometricProbe;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_version_exists() {
    assert!(!taskdeck::VERSION.is_empty());
}

#[test]
fn test_task_lifecycle_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = SqliteKvStore::in_dir(dir.path()).unwrap();
    let tasks = TaskStore::new(store.clone());
    let events = tasks.subscribe();

    tasks.add_task("Buy milk", Urgency::Low, date(2024, 5, 1), time(9, 0)).unwrap();
    tasks.add_task("Ship release", Urgency::High, date(2024, 6, 15), time(17, 30)).unwrap();
    assert_eq!(tasks.count().unwrap(), 2);

    tasks.complete_task(0).unwrap();

    // A fresh store over the same file sees the persisted state
    let reopened = TaskStore::new(SqliteKvStore::in_dir(dir.path()).unwrap());
    let listed = reopened.tasks().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].to_string(), "\u{2705} Buy milk - [Low] - Due: May 1, 2024 at 09:00 AM");
    assert_eq!(listed[1].to_string(), "Ship release - [High] - Due: Jun 15, 2024 at 05:30 PM");

    reopened.delete_task(0).unwrap();
    assert_eq!(reopened.count().unwrap(), 1);
    assert_eq!(reopened.tasks().unwrap()[0].task.as_ref().unwrap().title, "Ship release");

    reopened.clear_all().unwrap();
    assert_eq!(reopened.count().unwrap(), 0);

    // The first store observed its own mutations
    let seen: Vec<TaskEvent> = events.try_iter().collect();
    assert_eq!(seen, vec![TaskEvent::Added, TaskEvent::Added, TaskEvent::Completed]);
}

#[test]
fn test_settings_and_tasks_share_bulk_clear() {
    let dir = TempDir::new().unwrap();
    let store = SqliteKvStore::in_dir(dir.path()).unwrap();
    let tasks = TaskStore::new(store.clone());
    let settings = SettingsStore::new(store);

    tasks.add_task("Buy milk", Urgency::Low, date(2024, 5, 1), time(9, 0)).unwrap();
    settings.set_dark_mode_enabled(true).unwrap();
    settings.set_font_size(FontSize::Large).unwrap();
    settings.set_theme(Theme::Light).unwrap();
    settings.set_biometric_enabled(&MockBiometricProbe::available(), true).unwrap();

    settings.clear_all_data().unwrap();

    assert_eq!(tasks.count().unwrap(), 0);
    assert!(!settings.dark_mode_enabled().unwrap());
    assert_eq!(settings.font_size().unwrap(), FontSize::Medium);
    assert_eq!(settings.theme().unwrap(), Theme::System);
    assert!(!settings.biometric_enabled().unwrap());
}

#[test]
fn test_clearing_tasks_leaves_settings_alone() {
    let dir = TempDir::new().unwrap();
    let store = SqliteKvStore::in_dir(dir.path()).unwrap();
    let tasks = TaskStore::new(store.clone());
    let settings = SettingsStore::new(store);

    settings.set_notifications_enabled(true).unwrap();
    tasks.add_task("Buy milk", Urgency::Low, date(2024, 5, 1), time(9, 0)).unwrap();

    tasks.clear_all().unwrap();

    assert_eq!(tasks.count().unwrap(), 0);
    assert!(settings.notifications_enabled().unwrap());
}
