//! Output record rendering.
//!
//! Two formats share identifier stripping and coordinate extraction and
//! differ only in their textual shape: a delimited line or a single-row SQL
//! INSERT. The format is chosen once per run and applied uniformly to every
//! feature.

use std::io::Write;

use geo::{Geometry, Point};
use thiserror::Error;

use crate::feature::Feature;

/// Errors raised while rendering one output record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The feature's default geometry was not a single point.
    #[error("default geometry of feature {id} is not a point")]
    GeometryNotPoint {
        /// Identifier of the offending feature.
        id: String,
    },
    /// Writing to the output stream failed.
    #[error("failed to write record")]
    Io(#[from] std::io::Error),
}

/// Strip the collection prefix from a feature identifier.
///
/// Keeps the text after the first `'.'`; an identifier without a separator
/// is returned whole, replicating "index of separator plus one" semantics
/// where a missing separator yields offset zero.
///
/// # Examples
/// ```
/// use geostations_core::local_id;
///
/// assert_eq!(local_id("stations.7"), "7");
/// assert_eq!(local_id("7"), "7");
/// ```
#[must_use]
pub fn local_id(id: &str) -> &str {
    id.split_once('.').map_or(id, |(_, local)| local)
}

/// Textual shape of one output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFormat {
    /// `<id>;<title>;<lat>,<lon>` followed by a newline.
    #[default]
    Delimited,
    /// A single-row `INSERT INTO stations` statement followed by a newline.
    Sql,
}

impl RecordFormat {
    /// Render one feature into `writer`.
    ///
    /// Latitude is read from the point's Y ordinate and longitude from X,
    /// emitted in their natural numeric text form with no bounds validation.
    /// Neither format escapes single quotes in the identifier or title; the
    /// SQL output therefore assumes a curated dataset.
    ///
    /// # Errors
    /// Returns [`RecordError::GeometryNotPoint`] when the default geometry
    /// is not a single point and [`RecordError::Io`] on stream failures.
    pub fn write_record<W: Write>(
        self,
        writer: &mut W,
        feature: &Feature,
        title: &str,
    ) -> Result<(), RecordError> {
        let point = point_of(feature)?;
        let (lat, lon) = (point.y(), point.x());
        let id = local_id(feature.id());
        match self {
            Self::Delimited => writeln!(writer, "{id};{title};{lat},{lon}")?,
            Self::Sql => writeln!(
                writer,
                "INSERT INTO stations (countryCode, id, uicibnr, title, lat, lon) \
                 VALUES ('cn', '{id}', NULL, '{title}', {lat}, {lon});"
            )?,
        }
        Ok(())
    }
}

fn point_of(feature: &Feature) -> Result<Point<f64>, RecordError> {
    match feature.geometry() {
        Geometry::Point(point) => Ok(*point),
        _ => Err(RecordError::GeometryNotPoint {
            id: feature.id().to_owned(),
        }),
    }
}
