//! Integration tests for loading catalog exports.

use std::io::Cursor;

use apps_ingest::{explore, read_app_table_from_reader, with_header};
use apps_model::Marketplace;

const APP_STORE: &str = "\
id,track_name,size_bytes,currency,price,rating_count_tot,rating_count_ver,user_rating,user_rating_ver,ver,cont_rating,prime_genre,sup_devices.num,ipadSc_urls.num,lang.num,vpp_lic
284882215,Facebook,389879808,USD,0.0,2974676,212,3.5,3.5,95.0,4+,Social Networking,37,1,29,1
389801252,Instagram,113954816,USD,0.0,2161558,1289,4.5,4.0,10.23,12+,Photo & Video,37,0,29,1
";

#[test]
fn app_store_rows_match_layout() {
    let table = read_app_table_from_reader(Cursor::new(APP_STORE), Marketplace::AppStore).unwrap();
    let layout = table.layout();

    assert_eq!(table.header.len(), layout.arity());
    assert_eq!(table.len(), 2);
    for row in &table.rows {
        assert_eq!(row.len(), layout.arity());
    }
    let genre = layout.resolve(layout.category).unwrap();
    assert_eq!(table.rows[0][genre], "Social Networking");
    assert_eq!(table.name_of(&table.rows[1]), "Instagram");
}

#[test]
fn explore_with_header_counts_header_as_row() {
    let table = read_app_table_from_reader(Cursor::new(APP_STORE), Marketplace::AppStore).unwrap();
    let all = with_header(&table);
    let window = explore(&all, 0, 1, true);

    assert_eq!(window.rows[0][1], "track_name");
    assert_eq!(window.counts, Some((3, 16)));
}

#[test]
fn malformed_utf8_is_a_parse_error() {
    let bytes: &[u8] = b"App,Price\n\xff\xfe,0\n";
    let result = read_app_table_from_reader(bytes, Marketplace::GooglePlay);

    assert!(matches!(
        result,
        Err(apps_ingest::IngestError::CsvParse { .. })
    ));
}
