//! Dataset access seam and feature walking.
//!
//! [`FeatureSource`] abstracts the vector-dataset access layer: it yields the
//! full feature sequence with no spatial or attribute predicate. The handle
//! returned by [`FeatureSource::features`] owns whatever per-pass resources
//! the layer needs and releases them on drop, so [`walk`] releases the
//! sequence on every exit path, including consumer failure.

use std::error::Error;

use thiserror::Error as ThisError;

use crate::feature::Feature;

/// Errors surfaced by the dataset access layer.
#[derive(Debug, ThisError)]
pub enum FeatureSourceError {
    /// The dataset could not be opened.
    #[error("failed to open dataset: {source}")]
    Open {
        /// Underlying access-layer error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The dataset exposes no logical feature collection.
    #[error("dataset exposes no feature collection")]
    NoCollection,
    /// A feature could not be read or converted.
    #[error("failed to read feature from dataset: {source}")]
    Read {
        /// Underlying access-layer error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

/// Owning handle over one pass of a dataset's feature sequence.
///
/// Dropping the handle releases the underlying per-pass resources; the
/// sequence is not restartable through this handle.
pub struct Features<'a> {
    inner: Box<dyn Iterator<Item = Result<Feature, FeatureSourceError>> + 'a>,
}

impl std::fmt::Debug for Features<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Features").finish_non_exhaustive()
    }
}

impl<'a> Features<'a> {
    /// Wrap an iterator yielding features in dataset order.
    pub fn new<I>(inner: I) -> Self
    where
        I: Iterator<Item = Result<Feature, FeatureSourceError>> + 'a,
    {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Iterator for Features<'_> {
    type Item = Result<Feature, FeatureSourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Access layer yielding the full feature sequence of one dataset.
pub trait FeatureSource {
    /// Open a fresh pass over every feature, in the dataset's natural order.
    ///
    /// No filter is applied; every feature is included. Each call re-opens a
    /// fresh sequence.
    ///
    /// # Errors
    /// Returns [`FeatureSourceError`] when the dataset cannot be opened or
    /// exposes no feature collection.
    fn features(&mut self) -> Result<Features<'_>, FeatureSourceError>;
}

/// Apply `consumer` to every feature of `source`, in dataset order.
///
/// One feature is fully processed before the next is fetched. The sequence
/// handle is released exactly once regardless of how the walk exits; a
/// consumer error propagates immediately with no per-record recovery.
///
/// # Errors
/// Propagates [`FeatureSourceError`] from opening or reading the sequence
/// and any error returned by the consumer.
pub fn walk<E, F>(source: &mut dyn FeatureSource, mut consumer: F) -> Result<(), E>
where
    F: FnMut(&Feature) -> Result<(), E>,
    E: From<FeatureSourceError>,
{
    let features = source.features()?;
    for entry in features {
        let feature = entry?;
        consumer(&feature)?;
    }
    Ok(())
}
