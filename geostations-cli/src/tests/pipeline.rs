//! End-to-end export over an on-disk shapefile fixture.

use super::*;
use rstest::rstest;
use shapefile::dbase::{FieldValue, Record, TableWriterBuilder};
use tempfile::TempDir;

/// One point feature at (lon 39.76, lat 47.15) with no NAME_ZH attribute.
fn write_station_dataset(dir: &TempDir) -> Utf8PathBuf {
    let path = dir.path().join("station.shp");
    let name_field = "NAME".try_into().expect("field name");
    let table = TableWriterBuilder::new().add_character_field(name_field, 50);
    let mut writer = shapefile::Writer::from_path(&path, table).expect("create writer");
    let mut record = Record::default();
    record.insert(
        "NAME".to_owned(),
        FieldValue::Character(Some("East".to_owned())),
    );
    writer
        .write_shape_and_record(&shapefile::Point::new(39.76, 47.15), &record)
        .expect("write feature");
    drop(writer);
    Utf8PathBuf::from_path_buf(path).expect("utf8 path")
}

fn export_to_string(dataset: Utf8PathBuf, format: RecordFormat) -> String {
    let config = ExportConfig { dataset, format };
    let mut out = Vec::new();
    export(&config, &mut out).expect("export");
    String::from_utf8(out).expect("utf-8 output")
}

#[rstest]
fn delimited_export_writes_one_line_per_feature() {
    let dir = TempDir::new().expect("tempdir");
    let dataset = write_station_dataset(&dir);
    assert_eq!(
        export_to_string(dataset, RecordFormat::Delimited),
        "1;No Name found.;47.15,39.76\n"
    );
}

#[rstest]
fn sql_export_writes_one_insert_per_feature() {
    let dir = TempDir::new().expect("tempdir");
    let dataset = write_station_dataset(&dir);
    assert_eq!(
        export_to_string(dataset, RecordFormat::Sql),
        "INSERT INTO stations (countryCode, id, uicibnr, title, lat, lon) \
         VALUES ('cn', '1', NULL, 'No Name found.', 47.15, 39.76);\n"
    );
}
