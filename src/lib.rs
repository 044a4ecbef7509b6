//! Facade crate for the geostations export pipeline.
//!
//! This crate re-exports the core pipeline types and exposes the
//! shapefile-backed data layer behind a feature flag.

#![forbid(unsafe_code)]

pub use geostations_core::{
    AttributeName, EncodingRepairError, Feature, FeatureSource, FeatureSourceError, Features,
    NO_NAME_FALLBACK, RecordError, RecordFormat, Transliterator, ZH_NAME, build_title, local_id,
    repair_double_decoded, walk,
};

#[cfg(feature = "shapefile")]
pub use geostations_data::{MandarinTransliterator, ShapefileSource};
