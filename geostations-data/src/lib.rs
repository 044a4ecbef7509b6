//! External collaborators for the geostations pipeline: shapefile-backed
//! dataset access and the Mandarin transliteration engine.

#![forbid(unsafe_code)]

pub mod mandarin;
pub mod shp;

pub use mandarin::MandarinTransliterator;
pub use shp::ShapefileSource;
