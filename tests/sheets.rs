use std::fs;

use wedding_manager::domain::gift::{GiftLog, GiftType};
use wedding_manager::domain::guest::{Gender, Guest, Rsvp};
use wedding_manager::domain::vendor::Vendor;
use wedding_manager::dto::api::SyncPayload;
use wedding_manager::services::sync::{pull_all, sync_data};

mod common;

fn sample_vendors() -> Vec<Vendor> {
    (1..=3)
        .map(|i| Vendor {
            id: i.to_string(),
            name: format!("Vendor {i}"),
            service_type: "Catering".into(),
            cost: 1000.0 * i as f64,
            paid_amount: 100.0 * i as f64,
            contact: format!("0300-{i}"),
        })
        .collect()
}

#[test]
fn test_guest_push_pull_round_trip() {
    let fixture = common::TestFixture::new();
    let mut sheets = fixture.sheet_store();

    let guest = Guest {
        id: "1".into(),
        name: "A".into(),
        village: "V".into(),
        phone: "p".into(),
        rsvp: Rsvp::Pending,
        gender: Gender::Male,
        events: vec![],
    };
    let payload = SyncPayload {
        guests: Some(vec![guest.clone()]),
        ..Default::default()
    };
    sync_data(&mut sheets, &payload).unwrap();

    let pulled = pull_all(&sheets).unwrap();
    assert_eq!(pulled.guests, vec![guest]);
    // The events column decodes as a list, not the raw string "[]".
    assert!(pulled.guests[0].events.is_empty());
}

#[test]
fn test_empty_push_clears_stale_rows() {
    let fixture = common::TestFixture::new();
    let mut sheets = fixture.sheet_store();

    sync_data(
        &mut sheets,
        &SyncPayload {
            vendors: Some(sample_vendors()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(pull_all(&sheets).unwrap().vendors.len(), 3);

    sync_data(
        &mut sheets,
        &SyncPayload {
            vendors: Some(vec![]),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(pull_all(&sheets).unwrap().vendors.is_empty());
}

#[test]
fn test_double_push_is_idempotent() {
    let fixture = common::TestFixture::new();
    let mut sheets = fixture.sheet_store();

    let payload = SyncPayload {
        vendors: Some(sample_vendors()),
        gifts: Some(vec![GiftLog {
            id: "1".into(),
            guest_name: "Chacha Bashir".into(),
            amount: 5000.0,
            gift_type: GiftType::Salami,
            event: "Barat".into(),
            notes: "Given on stage".into(),
        }]),
        ..Default::default()
    };

    sync_data(&mut sheets, &payload).unwrap();
    let first = fs::read_to_string(fixture.sheet_path("Vendors")).unwrap();
    sync_data(&mut sheets, &payload).unwrap();
    let second = fs::read_to_string(fixture.sheet_path("Vendors")).unwrap();
    assert_eq!(first, second);

    let pulled = pull_all(&sheets).unwrap();
    assert_eq!(pulled.vendors, sample_vendors());
    assert_eq!(pulled.gifts.len(), 1);
    assert_eq!(pulled.gifts[0].gift_type, GiftType::Salami);
}

#[test]
fn test_replace_then_pull_is_exact_for_any_size() {
    let fixture = common::TestFixture::new();
    let mut sheets = fixture.sheet_store();

    for size in [0usize, 1, 3] {
        let vendors: Vec<Vendor> = sample_vendors().into_iter().take(size).collect();
        sync_data(
            &mut sheets,
            &SyncPayload {
                vendors: Some(vendors.clone()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(pull_all(&sheets).unwrap().vendors, vendors);
    }
}

#[test]
fn test_missing_sheet_pulls_as_empty_collection() {
    let fixture = common::TestFixture::new();
    let mut sheets = fixture.sheet_store();
    sync_data(
        &mut sheets,
        &SyncPayload {
            vendors: Some(sample_vendors()),
            ..Default::default()
        },
    )
    .unwrap();

    fs::remove_file(fixture.sheet_path("Gifts")).unwrap();
    let pulled = pull_all(&sheets).unwrap();
    assert!(pulled.gifts.is_empty());
    assert_eq!(pulled.vendors.len(), 3);
}

#[test]
fn test_push_to_missing_sheet_is_a_no_op() {
    let fixture = common::TestFixture::new();
    let mut sheets = fixture.sheet_store();
    fs::remove_file(fixture.sheet_path("Tasks")).unwrap();

    sync_data(
        &mut sheets,
        &SyncPayload {
            tasks: Some(vec![]),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(!fixture.sheet_path("Tasks").exists());
}

#[test]
fn test_malformed_rows_degrade_to_empty() {
    let fixture = common::TestFixture::new();
    let sheets = fixture.sheet_store();

    fs::write(
        fixture.sheet_path("Vendors"),
        "id,name,serviceType,cost,paidAmount,contact\n1,Spice,Catering,not-a-number,0,c\n",
    )
    .unwrap();

    let pulled = pull_all(&sheets).unwrap();
    assert!(pulled.vendors.is_empty());
}

#[test]
fn test_suits_never_reach_the_sheets() {
    let fixture = common::TestFixture::new();
    let mut sheets = fixture.sheet_store();

    let mut data = wedding_manager::domain::app_data::AppData::seed();
    data.suits.push(wedding_manager::domain::suit::Suit {
        id: "s1".into(),
        owner: "Groom".into(),
        ..Default::default()
    });

    sync_data(&mut sheets, &SyncPayload::from(&data)).unwrap();

    let suits_sheet = fs::read_to_string(fixture.sheet_path("Suits")).unwrap();
    assert_eq!(suits_sheet.lines().count(), 1, "header row only");
    assert!(pull_all(&sheets).unwrap().suits.is_empty());
}
