//! Core pipeline for exporting station records from vector datasets.
//!
//! Each feature read from a dataset carries a stable identifier, a set of
//! named attributes, and one default geometry. The pipeline repairs the
//! double-decoded Chinese name attribute, builds a bilingual title through a
//! pluggable [`Transliterator`], and renders one output record per feature.
//! Dataset access itself lives behind the [`FeatureSource`] trait so the
//! container format stays out of this crate.

#![forbid(unsafe_code)]

pub mod encoding;
pub mod feature;
pub mod record;
pub mod source;
pub mod title;
pub mod transliterate;

pub use encoding::{EncodingRepairError, repair_double_decoded};
pub use feature::{AttributeName, Feature, ZH_NAME};
pub use record::{RecordError, RecordFormat, local_id};
pub use source::{FeatureSource, FeatureSourceError, Features, walk};
pub use title::{NO_NAME_FALLBACK, build_title};
pub use transliterate::Transliterator;
