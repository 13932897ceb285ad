use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use expense_ledger::models::{Money, Record, RecordId};
use expense_ledger::services::LedgerStore;
use tempfile::TempDir;

const CATEGORIES: [&str; 4] = ["Makanan", "Transport", "Belanja", "Lainnya"];

fn open(temp_dir: &TempDir) -> LedgerStore {
    LedgerStore::new(temp_dir.path().join("records.json"), CATEGORIES)
}

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn daily_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);

    assert!(store.add(Record::new(
        "Makan siang",
        Money::from_units(25_000),
        "Makanan",
        jan(10)
    )));
    assert!(store.add(Record::new(
        "Bensin",
        Money::from_units(50_000),
        "Transport",
        jan(10)
    )));

    assert_eq!(
        store.total_expenditure(Some(jan(10))).unwrap(),
        Money::from_units(75_000)
    );

    let expected: HashMap<String, Money> = [
        ("Makanan".to_string(), Money::from_units(25_000)),
        ("Transport".to_string(), Money::from_units(50_000)),
    ]
    .into_iter()
    .collect();
    assert_eq!(store.expenditure_by_category(Some(jan(10))).unwrap(), expected);

    assert!(store.delete(RecordId::new(1)));
    assert_eq!(
        store.total_expenditure(Some(jan(10))).unwrap(),
        Money::from_units(50_000)
    );
}

#[test]
fn ids_strictly_increase_across_deletions() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);
    let mut issued = Vec::new();

    for round in 0..4 {
        let record = store
            .try_add(Record::new(
                format!("Parkir {}", round),
                Money::from_units(2_000),
                "Transport",
                jan(12),
            ))
            .unwrap();
        let id = record.id.unwrap();
        issued.push(id);

        // Delete every other record, including the newest one
        if round % 2 == 1 {
            assert!(store.delete(id));
        }
    }

    assert!(issued.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(issued.last(), Some(&RecordId::new(4)));

    let remaining: Vec<RecordId> = store.list().unwrap().iter().filter_map(|r| r.id).collect();
    assert_eq!(remaining, vec![RecordId::new(1), RecordId::new(3)]);
}

#[test]
fn list_is_in_insertion_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);

    // Dates deliberately out of order
    for (description, day) in [("C", 20), ("A", 5), ("B", 12)] {
        assert!(store.add(Record::new(description, Money::from_units(1_000), "Lainnya", jan(day))));
    }

    let descriptions: Vec<String> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|r| r.description)
        .collect();
    assert_eq!(descriptions, vec!["C", "A", "B"]);
}

#[test]
fn invalid_candidates_never_persist() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);

    let candidates = [
        Record::new("Gratis", Money::zero(), "Makanan", jan(10)),
        Record::new("Minus", Money::from_units(-1), "Makanan", jan(10)),
        Record::new("", Money::from_units(1_000), "Makanan", jan(10)),
        Record::new("Tiket", Money::from_units(1_000), "Liburan", jan(10)),
    ];

    for candidate in candidates {
        assert!(!store.add(candidate));
    }

    assert!(store.list().unwrap().is_empty());
    assert!(!temp_dir.path().join("records.json").exists());
}

#[test]
fn fresh_store_sees_persisted_records() {
    let temp_dir = TempDir::new().unwrap();

    let written = {
        let store = open(&temp_dir);
        store
            .try_add(Record::new(
                "Belanja bulanan",
                Money::from_cents(35_075_050),
                "Belanja",
                jan(15),
            ))
            .unwrap()
    };

    let reopened = open(&temp_dir);
    assert_eq!(reopened.list().unwrap(), vec![written]);

    // The id counter survives the restart too
    let next = reopened
        .try_add(Record::new("Kopi", Money::from_units(18_000), "Makanan", jan(15)))
        .unwrap();
    assert_eq!(next.id, Some(RecordId::new(2)));
}

#[test]
fn records_file_uses_documented_layout() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);
    store.add(Record::new("Bensin", Money::from_units(50_000), "Transport", jan(10)));

    let raw = std::fs::read_to_string(temp_dir.path().join("records.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json["next_id"], 2);
    let record = &json["records"][0];
    assert_eq!(record["id"], 1);
    assert_eq!(record["description"], "Bensin");
    assert_eq!(record["category"], "Transport");
    assert_eq!(record["date"], "2024-01-10");
}

#[test]
fn concurrent_adds_on_one_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);
    let threads = 8;
    let per_thread = 10;

    std::thread::scope(|s| {
        for t in 0..threads {
            let store = &store;
            s.spawn(move || {
                for n in 0..per_thread {
                    assert!(store.add(Record::new(
                        format!("Jajan {}-{}", t, n),
                        Money::from_units(1_000),
                        "Makanan",
                        jan(10),
                    )));
                }
            });
        }
    });

    let records = store.list().unwrap();
    assert_eq!(records.len(), threads * per_thread);

    let ids: HashSet<RecordId> = records.iter().filter_map(|r| r.id).collect();
    assert_eq!(ids.len(), threads * per_thread);
    assert_eq!(
        store.total_expenditure(Some(jan(10))).unwrap(),
        Money::from_units(1_000 * (threads * per_thread) as i64)
    );
}

#[test]
fn add_refuses_amount_that_would_overflow_the_total() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);
    let big = Money::parse("90000000000000000").unwrap();

    assert!(store.add(Record::new("Rumah", big, "Lainnya", jan(10))));
    assert!(!store.add(Record::new("Rumah", big, "Lainnya", jan(10))));

    assert_eq!(store.total_expenditure(None).unwrap(), big);
    assert_eq!(store.list().unwrap().len(), 1);
}
