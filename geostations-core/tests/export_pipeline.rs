//! End-to-end behaviour of the walk → title → record pipeline over an
//! in-memory source.

use geo::{Geometry, Point};
use geostations_core::{
    EncodingRepairError, Feature, FeatureSource, FeatureSourceError, Features, RecordError,
    RecordFormat, Transliterator, ZH_NAME, build_title, walk,
};
use rstest::rstest;

struct MemorySource(Vec<Feature>);

impl FeatureSource for MemorySource {
    fn features(&mut self) -> Result<Features<'_>, FeatureSourceError> {
        Ok(Features::new(self.0.clone().into_iter().map(Ok)))
    }
}

/// Echoes the repaired text upper-cased, standing in for the real engine.
struct Upper;

impl Transliterator for Upper {
    fn translate(&self, text: &str) -> String {
        text.to_uppercase()
    }
}

#[derive(Debug, thiserror::Error)]
enum ExportError {
    #[error(transparent)]
    Source(#[from] FeatureSourceError),
    #[error(transparent)]
    Repair(#[from] EncodingRepairError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

fn mangle(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

fn export(features: Vec<Feature>, format: RecordFormat) -> Result<String, ExportError> {
    let mut source = MemorySource(features);
    let mut out = Vec::new();
    walk(&mut source, |feature| {
        let title = build_title(&Upper, feature)?;
        format.write_record(&mut out, feature, &title)?;
        Ok::<(), ExportError>(())
    })?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

fn station(id: &str, name: Option<&str>, lon: f64, lat: f64) -> Feature {
    let attributes = name
        .map(|value| vec![(ZH_NAME, mangle(value))])
        .unwrap_or_default();
    Feature::new(id, attributes, Geometry::Point(Point::new(lon, lat)))
}

#[rstest]
fn delimited_records_follow_dataset_order() {
    let output = export(
        vec![
            station("station.7", None, 39.76, 47.15),
            station("station.8", Some("南京南"), 118.8, 31.97),
        ],
        RecordFormat::Delimited,
    )
    .expect("export");
    assert_eq!(
        output,
        "7;No Name found.;47.15,39.76\n8;南京南 (南京南);31.97,118.8\n"
    );
}

#[rstest]
fn sql_records_follow_dataset_order() {
    let output = export(
        vec![station("station.7", None, 39.76, 47.15)],
        RecordFormat::Sql,
    )
    .expect("export");
    assert_eq!(
        output,
        "INSERT INTO stations (countryCode, id, uicibnr, title, lat, lon) \
         VALUES ('cn', '7', NULL, 'No Name found.', 47.15, 39.76);\n"
    );
}

#[rstest]
fn repair_failure_aborts_with_partial_output_kept() {
    let mut source = MemorySource(vec![
        station("station.1", None, 1.0, 2.0),
        Feature::new(
            "station.2",
            vec![(ZH_NAME, "\u{ff}".into())],
            Geometry::Point(Point::new(0.0, 0.0)),
        ),
        station("station.3", None, 3.0, 4.0),
    ]);
    let mut out = Vec::new();
    let result = walk(&mut source, |feature| {
        let title = build_title(&Upper, feature)?;
        RecordFormat::Delimited.write_record(&mut out, feature, &title)?;
        Ok::<(), ExportError>(())
    });
    assert!(matches!(result, Err(ExportError::Repair(_))));
    // Records written before the failure stay in the stream.
    assert_eq!(
        String::from_utf8(out).expect("utf-8 output"),
        "1;No Name found.;2,1\n"
    );
}
