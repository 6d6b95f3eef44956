//! End-to-end cleaning of the mock catalog exports.

use std::path::PathBuf;

use apps_ingest::read_app_table;
use apps_model::{AppTable, Marketplace};
use apps_transform::{
    CleaningStage, RejectReason, clean, clean_through, rows_named, validate_rows,
};

fn mockdata(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../mockdata")
        .join(file)
}

fn load(marketplace: Marketplace) -> AppTable {
    let file = match marketplace {
        Marketplace::GooglePlay => "googleplaystore.csv",
        Marketplace::AppStore => "AppleStore.csv",
    };
    read_app_table(&mockdata(file), marketplace).unwrap()
}

#[test]
fn validation_removes_only_the_malformed_row() {
    let table = load(Marketplace::GooglePlay);
    let validated = validate_rows(&table);

    assert_eq!(validated.table.len(), table.len() - 1);
    assert_eq!(validated.rejected.len(), 1);
    let rejected = &validated.rejected[0];
    assert_eq!(rejected.index, 5);
    assert_eq!(rejected.name, "Life Made WI-Fi Touchscreen Photo Frame");
    assert_eq!(
        rejected.reason,
        RejectReason::Arity {
            expected: 13,
            found: 12
        }
    );

    let mut expected = table.rows.clone();
    expected.remove(5);
    assert_eq!(validated.table.rows, expected);
}

#[test]
fn google_play_stage_counts() {
    let cleaned = clean(&load(Marketplace::GooglePlay)).unwrap();
    let report = &cleaned.report;

    assert_eq!(report.rows_after(CleaningStage::Loaded), Some(14));
    assert_eq!(report.rows_after(CleaningStage::Validated), Some(13));
    assert_eq!(report.rows_after(CleaningStage::Deduplicated), Some(10));
    assert_eq!(report.rows_after(CleaningStage::English), Some(9));
    assert_eq!(report.rows_after(CleaningStage::Free), Some(8));
    assert_eq!(report.final_rows(), cleaned.table.len());

    let duplicates = report.duplicates.as_ref().unwrap();
    assert_eq!(duplicates.duplicate_count, 3);
    assert_eq!(duplicates.examples, vec!["Instagram"; 3]);

    let instagram: Vec<_> = cleaned
        .table
        .rows
        .iter()
        .filter(|row| row[0] == "Instagram")
        .collect();
    assert_eq!(instagram.len(), 1);
    assert_eq!(instagram[0][3], "66577446");
    assert!(cleaned.table.rows.iter().all(|row| row[7] == "0"));
}

#[test]
fn app_store_skips_deduplication() {
    let cleaned = clean(&load(Marketplace::AppStore)).unwrap();
    let report = &cleaned.report;

    assert!(report.duplicates.is_none());
    assert_eq!(report.rows_after(CleaningStage::Deduplicated), None);
    assert_eq!(report.rows_after(CleaningStage::Validated), Some(8));
    assert_eq!(report.rows_after(CleaningStage::English), Some(7));
    assert_eq!(report.final_rows(), 6);
    assert_eq!(report.rejected[0].name, "Broken Rating Export");
    assert!(matches!(
        report.rejected[0].reason,
        RejectReason::OutOfRange {
            column: "user_rating",
            ..
        }
    ));

    let names: Vec<&str> = cleaned.table.rows.iter().map(|row| row[1].as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Facebook",
            "Instagram",
            "Waze - GPS Navigation & Live Traffic",
            "Google Maps - Navigation & Transit",
            "Bible",
            "Clash of Clans",
        ]
    );
}

#[test]
fn clean_through_stops_after_requested_stage() {
    let table = load(Marketplace::GooglePlay);

    let loaded = clean_through(&table, CleaningStage::Loaded).unwrap();
    assert_eq!(loaded.table, table);
    assert!(loaded.report.rejected.is_empty());

    let english = clean_through(&table, CleaningStage::English).unwrap();
    assert_eq!(english.table.len(), 9);
    assert_eq!(english.report.rows_after(CleaningStage::Free), None);
    assert!(english.table.rows.iter().any(|row| row[0] == "Minecraft"));

    let full = clean_through(&table, CleaningStage::Free).unwrap();
    assert_eq!(full.table, clean(&table).unwrap().table);
}

#[test]
fn app_store_deduplicated_stage_is_the_validated_table() {
    let table = load(Marketplace::AppStore);
    let through = clean_through(&table, CleaningStage::Deduplicated).unwrap();

    assert_eq!(through.table, validate_rows(&table).table);
    assert_eq!(through.report.final_rows(), 8);
}

#[test]
fn raw_export_keeps_every_instagram_row() {
    let table = load(Marketplace::GooglePlay);
    let rows = rows_named(&table, table.layout().name, "Instagram");

    let indices: Vec<usize> = rows.iter().map(|(index, _)| *index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);
    let reviews: Vec<&str> = rows.iter().map(|(_, row)| row[3].as_str()).collect();
    assert_eq!(reviews, vec!["66577313", "66577446", "66577313", "66577446"]);
}
