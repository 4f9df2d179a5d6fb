use std::collections::HashSet;
use std::fs;

use wedding_manager::domain::app_data::AppData;
use wedding_manager::domain::guest::{NewGuest, Rsvp};
use wedding_manager::domain::suit::{NewSuit, SuitStatus, UpdateSuit};
use wedding_manager::domain::task::NewTask;
use wedding_manager::domain::vendor::{NewVendor, UpdateVendor, Vendor};
use wedding_manager::store::Store;
use wedding_manager::store::errors::StoreError;

mod common;

#[test]
fn test_create_fills_defaults_and_unique_ids() {
    let fixture = common::TestFixture::new();
    let mut store = Store::with_data(fixture.cache(), AppData::default());

    for name in ["Chacha Bashir", "Phupho Nasreen", "Ahmed"] {
        store
            .create_guest(NewGuest {
                name: name.into(),
                ..Default::default()
            })
            .unwrap();
    }

    let guests = &store.data().guests;
    assert_eq!(guests.len(), 3);
    let ids: HashSet<&str> = guests.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert!(guests.iter().all(|g| g.rsvp == Rsvp::Pending));
    assert!(guests.iter().all(|g| g.events.is_empty()));

    let task = store
        .create_task(NewTask {
            name: "Book Qari Sahab".into(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(task.assigned_to, "Unassigned");
    assert!(!task.completed);
}

#[test]
fn test_empty_name_is_rejected() {
    let fixture = common::TestFixture::new();
    let mut store = Store::with_data(fixture.cache(), AppData::default());

    let result = store.create_guest(NewGuest {
        name: "   ".into(),
        ..Default::default()
    });
    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert!(store.data().guests.is_empty());
}

#[test]
fn test_disjoint_updates_merge_onto_one_record() {
    let fixture = common::TestFixture::new();
    let mut store = Store::with_data(fixture.cache(), AppData::default());

    let vendor = store
        .create_vendor(NewVendor {
            name: "Spice Catering".into(),
            ..Default::default()
        })
        .unwrap();

    store
        .update_vendor(
            &vendor.id,
            UpdateVendor {
                cost: Some(100.0),
                ..Default::default()
            },
        )
        .unwrap();
    let updated = store
        .update_vendor(
            &vendor.id,
            UpdateVendor {
                paid_amount: Some(40.0),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.cost, 100.0);
    assert_eq!(updated.paid_amount, 40.0);
    assert_eq!(updated.balance(), 60.0);
    assert_eq!(store.data().vendors.len(), 1);
}

#[test]
fn test_update_and_delete_report_not_found() {
    let fixture = common::TestFixture::new();
    let mut store = Store::with_data(fixture.cache(), AppData::default());

    let result = store.update_vendor("missing", UpdateVendor::default());
    assert!(matches!(result, Err(StoreError::NotFound)));
    assert!(matches!(
        store.delete_vendor("missing"),
        Err(StoreError::NotFound)
    ));
}

#[test]
fn test_replace_overwrites_a_collection() {
    let fixture = common::TestFixture::new();
    let mut store = Store::with_data(fixture.cache(), AppData::seed());
    assert_eq!(store.data().vendors.len(), 2);

    let replacement = vec![Vendor {
        id: "9".into(),
        name: "Dera Lighting".into(),
        service_type: "Decor".into(),
        cost: 60_000.0,
        paid_amount: 70_000.0,
        contact: "0333...".into(),
    }];
    store.replace_vendors(replacement.clone()).unwrap();
    assert_eq!(store.data().vendors, replacement);

    store.replace_vendors(Vec::new()).unwrap();
    assert!(store.data().vendors.is_empty());
}

#[test]
fn test_state_survives_reopen() {
    let fixture = common::TestFixture::new();

    let guest_id = {
        let mut store = Store::with_data(fixture.cache(), AppData::default());
        let guest = store
            .create_guest(NewGuest {
                name: "Ahmed (Colleague)".into(),
                village: "Islamabad".into(),
                ..Default::default()
            })
            .unwrap();
        let suit = store
            .create_suit(NewSuit {
                owner: "Groom".into(),
                ..Default::default()
            })
            .unwrap();
        store
            .update_suit(
                &suit.id,
                UpdateSuit {
                    status: Some(SuitStatus::AtTailor),
                    ..Default::default()
                },
            )
            .unwrap();
        guest.id
    };

    let reopened = Store::open(fixture.cache());
    assert_eq!(reopened.data().guests.len(), 1);
    assert_eq!(reopened.data().guests[0].id, guest_id);
    assert_eq!(reopened.data().guests[0].village, "Islamabad");
    // Suits never touch the tabular store but must survive locally.
    assert_eq!(reopened.data().suits.len(), 1);
    assert_eq!(reopened.data().suits[0].status, SuitStatus::AtTailor);
}

#[test]
fn test_missing_or_corrupt_cache_falls_back_to_seed() {
    let fixture = common::TestFixture::new();

    let fresh = Store::open(fixture.cache());
    assert_eq!(fresh.data(), &AppData::seed());

    fs::write(fixture.cache_path(), "{ not json").unwrap();
    let recovered = Store::open(fixture.cache());
    assert_eq!(recovered.data(), &AppData::seed());
}

#[test]
fn test_pull_replacement_preserves_local_suits() {
    let fixture = common::TestFixture::new();
    let mut store = Store::with_data(fixture.cache(), AppData::default());
    store
        .create_suit(NewSuit {
            owner: "Bride".into(),
            ..Default::default()
        })
        .unwrap();

    let remote = AppData::seed();
    store.apply_remote(remote.clone()).unwrap();

    assert_eq!(store.data().guests, remote.guests);
    assert_eq!(store.data().tasks, remote.tasks);
    assert_eq!(store.data().suits.len(), 1);
}
