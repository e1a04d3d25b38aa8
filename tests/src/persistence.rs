#![cfg(test)]
use std::fs;

use shipbox_common::shipping::country::Country;
use shipbox_common::shipping::parcel::{BoxDraft, ShippingBox};
use shipbox_common::storage::BOXES_SLOT;
use shipbox_core::pricing::calculate_shipping_cost;
use shipbox_core::storage::FileStorage;
use shipbox_core::store::BoxStore;

fn draft(name: &str, weight: f64, country: Country) -> BoxDraft {
    BoxDraft {
        receiver_name: name.to_string(),
        weight,
        box_color: "10, 20, 30".to_string(),
        destination_country: country,
        shipping_cost: calculate_shipping_cost(weight, country),
    }
}

/// Any sequence of adds and deletes reloads to the same list.
#[test]
fn file_slot_round_trips_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = BoxStore::open(FileStorage::new(dir.path()));

    let ada = store.add_box(draft("Ada", 5.0, Country::Sweden));
    store.add_box(draft("Bo", 10.0, Country::China));
    store.add_box(draft("Cy", 3.0, Country::Brazil));
    store.delete_box(&ada.id);
    store.delete_box("not-there");
    store.add_box(draft("Di", 2.0, Country::Australia));

    let reopened = BoxStore::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.boxes(), store.boxes());
    let names: Vec<&str> = reopened.boxes().iter().map(|b| b.receiver_name.as_str()).collect();
    assert_eq!(names, ["Bo", "Cy", "Di"]);
}

#[test]
fn slot_holds_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let path = storage.slot_path(BOXES_SLOT);
    let mut store = BoxStore::open(storage);
    let parcel = store.add_box(draft("Ada", 2.5, Country::China));

    let text = fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], parcel.id.as_str());
    assert_eq!(records[0]["receiverName"], "Ada");
    assert_eq!(records[0]["destinationCountry"], "China");
    assert_eq!(records[0]["shippingCost"], 28.83);
}

#[test]
fn corrupt_file_is_discarded_then_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("shippingBoxes.json"), "[{\"id\": ").unwrap();

    let mut store = BoxStore::open(FileStorage::new(dir.path()));
    assert!(store.is_empty());

    store.add_box(draft("Ada", 1.0, Country::Sweden));
    let reopened = BoxStore::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn unknown_country_in_slot_is_a_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let json = r#"[{"id":"1","receiverName":"Ada","weight":1,"boxColor":"0, 0, 0",
        "destinationCountry":"Norway","shippingCost":5}]"#;
    fs::write(dir.path().join("shippingBoxes.json"), json).unwrap();

    let store = BoxStore::open(FileStorage::new(dir.path()));
    assert!(store.is_empty());
}

#[test]
fn stored_cost_is_not_recomputed_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let frozen = ShippingBox {
        id: "legacy".to_string(),
        receiver_name: "Old".to_string(),
        weight: 1.0,
        box_color: "0, 0, 0".to_string(),
        destination_country: Country::Sweden,
        shipping_cost: 5.0,
    };
    let json = serde_json::to_string(&vec![frozen.clone()]).unwrap();
    fs::write(dir.path().join("shippingBoxes.json"), json).unwrap();

    let store = BoxStore::open(FileStorage::new(dir.path()));
    assert_eq!(store.get("legacy"), Some(&frozen));
    assert_eq!(store.total_cost(), 5.0);
}

/// Two sessions on one slot: the last writer wins.
#[test]
fn concurrent_sessions_last_writer_wins() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = BoxStore::open(FileStorage::new(dir.path()));
    let mut second = BoxStore::open(FileStorage::new(dir.path()));

    first.add_box(draft("Ada", 1.0, Country::Sweden));
    second.add_box(draft("Bo", 1.0, Country::China));

    let reopened = BoxStore::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.boxes(), second.boxes());
    assert_eq!(reopened.len(), 1);
}

/// Weights written with every significant digit reload bit for bit.
#[test]
fn precise_and_extreme_weights_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = BoxStore::open(FileStorage::new(dir.path()));

    for raw in ["462.82968484924083", "987.6543210987654", "0.30000000000000004"] {
        store.add_box(draft("Ada", raw.parse().unwrap(), Country::Brazil));
    }
    store.add_box(draft("Tiny", f64::MIN_POSITIVE, Country::China));
    store.add_box(draft("Huge", 1e300, Country::Sweden));
    assert_eq!(store.last_persist_error(), None);

    let reopened = BoxStore::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.boxes(), store.boxes());
    let weights: Vec<u64> = reopened.boxes().iter().map(|b| b.weight.to_bits()).collect();
    let expected: Vec<u64> = store.boxes().iter().map(|b| b.weight.to_bits()).collect();
    assert_eq!(weights, expected);
}

/// A box whose cost overflows keeps the rest of the inventory loadable.
#[test]
fn overflowing_cost_does_not_wipe_saved_boxes() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = BoxStore::open(FileStorage::new(dir.path()));
    let ada = store.add_box(draft("Ada", 5.0, Country::Sweden));
    store.add_box(draft("Bo", 1e306, Country::Australia));
    assert!(store.last_persist_error().is_some());

    let text = fs::read_to_string(dir.path().join("shippingBoxes.json")).unwrap();
    assert!(!text.contains("null"));
    let reopened = BoxStore::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.boxes(), &[ada]);
}

#[test]
fn non_utf8_slot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("shippingBoxes.json"), [0xff, 0xfe, b'[', 0x80, b']']).unwrap();

    let mut store = BoxStore::open(FileStorage::new(dir.path()));
    assert!(store.is_empty());

    store.add_box(draft("Ada", 1.0, Country::Sweden));
    let reopened = BoxStore::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.len(), 1);
}
