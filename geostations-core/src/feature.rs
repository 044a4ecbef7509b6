//! Feature records and attribute identity.
//!
//! A [`Feature`] mirrors one record of a vector dataset: a stable string
//! identifier, an ordered attribute collection, and one default geometry.
//! Attributes are looked up by [`AttributeName`] identity, compared as a
//! whole token rather than by substring matching.

use std::borrow::Cow;

use geo::Geometry;

/// Identity of a named attribute within a feature's attribute collection.
///
/// Equality is exact-match over the whole token. Well-known attributes are
/// declared as constants so call sites compare against one identity value
/// instead of repeating free-text labels.
///
/// # Examples
/// ```
/// use geostations_core::{AttributeName, ZH_NAME};
///
/// assert_eq!(AttributeName::new("NAME_ZH"), ZH_NAME);
/// assert_ne!(AttributeName::new("NAME"), ZH_NAME);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeName(Cow<'static, str>);

/// Attribute carrying the station's Chinese name.
pub const ZH_NAME: AttributeName = AttributeName::from_static("NAME_ZH");

impl AttributeName {
    /// Construct an identity from a static label.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Construct an identity from an owned label, e.g. a DBF field name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The attribute label as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One record of a vector dataset.
///
/// Identifier, attributes, and geometry are fixed at construction; the
/// pipeline only ever reads from a feature.
///
/// # Examples
/// ```
/// use geo::{Geometry, Point};
/// use geostations_core::{AttributeName, Feature};
///
/// let feature = Feature::new(
///     "stations.7",
///     vec![(AttributeName::new("NAME"), "Rostov".into())],
///     Geometry::Point(Point::new(39.76, 47.15)),
/// );
/// assert_eq!(feature.id(), "stations.7");
/// assert_eq!(feature.attribute(&AttributeName::new("NAME")), Some("Rostov"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id: String,
    attributes: Vec<(AttributeName, String)>,
    geometry: Geometry<f64>,
}

impl Feature {
    /// Construct a feature from its identifier, attributes, and geometry.
    pub fn new(
        id: impl Into<String>,
        attributes: Vec<(AttributeName, String)>,
        geometry: Geometry<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            attributes,
            geometry,
        }
    }

    /// The dataset-assigned identifier, possibly prefixed with the
    /// collection name and a `'.'` separator.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The default geometry attached to this feature.
    #[must_use]
    pub fn geometry(&self) -> &Geometry<f64> {
        &self.geometry
    }

    /// Find-first lookup of an attribute value by identity.
    ///
    /// Returns the first match when the name occurs more than once;
    /// multiplicity is not an error.
    #[must_use]
    pub fn attribute(&self, name: &AttributeName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value.as_str())
    }
}
