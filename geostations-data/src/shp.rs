//! Shapefile-backed [`FeatureSource`].
//!
//! Container parsing is delegated to the `shapefile` crate; this module only
//! adapts its shapes and DBF records into [`Feature`]s. A shapefile exposes
//! one logical collection, named by the dataset file stem, and features are
//! identified as `"<collection>.<record number>"` with 1-based numbering.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use geo::Geometry;
use geostations_core::{AttributeName, Feature, FeatureSource, FeatureSourceError, Features};
use log::debug;
use shapefile::dbase::{FieldValue, Record};

type ShpReader = shapefile::Reader<BufReader<File>, BufReader<File>>;

/// Feature source reading a `.shp` dataset and its sidecar `.dbf` table.
///
/// Each call to [`FeatureSource::features`] re-opens a fresh pass over the
/// dataset; the previous pass's file handles are released when replaced or
/// when the source is dropped.
pub struct ShapefileSource {
    path: PathBuf,
    collection: String,
    reader: ShpReader,
}

impl std::fmt::Debug for ShapefileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapefileSource")
            .field("path", &self.path)
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

impl ShapefileSource {
    /// Open a shapefile dataset and resolve its logical collection name.
    ///
    /// # Errors
    /// Returns [`FeatureSourceError::NoCollection`] when the path has no
    /// file stem and [`FeatureSourceError::Open`] when the dataset or its
    /// sidecar files cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FeatureSourceError> {
        let path = path.as_ref().to_path_buf();
        let collection = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_owned)
            .ok_or(FeatureSourceError::NoCollection)?;
        let reader = open_reader(&path)?;
        debug!(
            "opened shapefile dataset {} (collection {collection})",
            path.display()
        );
        Ok(Self {
            path,
            collection,
            reader,
        })
    }
}

impl FeatureSource for ShapefileSource {
    fn features(&mut self) -> Result<Features<'_>, FeatureSourceError> {
        // Fresh pass per call; the shape iterator is not restartable.
        self.reader = open_reader(&self.path)?;
        let collection = self.collection.clone();
        let iter = self
            .reader
            .iter_shapes_and_records()
            .enumerate()
            .map(move |(index, entry)| {
                let (shape, record) = entry.map_err(read_error)?;
                let geometry = Geometry::try_from(shape)
                    .map_err(|text| FeatureSourceError::Read { source: text.into() })?;
                Ok(Feature::new(
                    format!("{collection}.{}", index + 1),
                    character_attributes(record),
                    geometry,
                ))
            });
        Ok(Features::new(iter))
    }
}

fn open_reader(path: &Path) -> Result<ShpReader, FeatureSourceError> {
    shapefile::Reader::from_path(path).map_err(|source| FeatureSourceError::Open {
        source: Box::new(source),
    })
}

fn read_error<E>(source: E) -> FeatureSourceError
where
    E: std::error::Error + Send + Sync + 'static,
{
    FeatureSourceError::Read {
        source: Box::new(source),
    }
}

/// Character fields become attributes; other field types do not take part in
/// name lookup and are skipped.
fn character_attributes(record: Record) -> Vec<(AttributeName, String)> {
    record
        .into_iter()
        .filter_map(|(name, value)| match value {
            FieldValue::Character(Some(text)) => Some((AttributeName::new(name), text)),
            _ => None,
        })
        .collect()
}
