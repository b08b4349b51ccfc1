//! # Configuration Snapshots
//!
//! Three views of a factory's configuration:
//!
//! - [`FactoryConfig`]: the declarative, human-editable form loaded from
//!   YAML or JSON. Colors may use any supported text encoding and the
//!   blend method any accepted alias.
//! - [`Snapshot`]: the deterministic structured listing. Blend method,
//!   then each dimension in order with its exponent and its points in
//!   ascending order. Reals are rendered as shortest round-trip decimal
//!   strings so the listing canonicalizes without floats, and colors as
//!   `#RRGGBB`.
//! - [`dump_lines`](MultiDimension::dump_lines): a human-readable listing
//!   that names each anchor color.
//!
//! Two factories with equal snapshots compute identical colors for every
//! query, and [`MultiDimension::fingerprint`] is the SHA-256 digest of the
//! snapshot's canonical bytes.

use serde::{Deserialize, Serialize};

use datacolor_core::{
    canonical_real, sha256_digest, BlendMethod, CanonicalBytes, Color, ColorNames, ContentDigest,
};

use crate::dimension::Dimension;
use crate::error::GradientError;
use crate::factory::MultiDimension;

fn default_blend_method() -> String {
    BlendMethod::default().as_str().to_string()
}

fn default_exponent() -> f64 {
    1.0
}

/// Declarative factory configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Blend method identifier. Validated when the factory is built.
    #[serde(default = "default_blend_method")]
    pub blend_method: String,
    /// Dimensions in query-tuple order.
    #[serde(default)]
    pub dimensions: Vec<DimensionConfig>,
}

/// Declarative configuration of one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionConfig {
    #[serde(default = "default_exponent")]
    pub exponent: f64,
    #[serde(default)]
    pub points: Vec<PointConfig>,
}

/// One `(determiner, color)` anchor in text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    pub determiner: f64,
    /// `#RRGGBB`, `rgb(r,g,b)` or a color name.
    pub color: String,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            blend_method: default_blend_method(),
            dimensions: Vec::new(),
        }
    }
}

/// Deterministic structured listing of a factory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub blend_method: BlendMethod,
    pub dimensions: Vec<DimensionSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionSnapshot {
    pub exponent: String,
    pub points: Vec<PointSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointSnapshot {
    pub determiner: String,
    pub color: Color,
}

impl Snapshot {
    /// JCS canonical form of the snapshot.
    pub fn canonical_bytes(&self) -> Result<CanonicalBytes, GradientError> {
        Ok(CanonicalBytes::new(self)?)
    }
}

impl From<&Dimension> for DimensionSnapshot {
    fn from(d: &Dimension) -> Self {
        Self {
            exponent: canonical_real(d.exponent()),
            points: d
                .points()
                .iter()
                .map(|p| PointSnapshot {
                    determiner: canonical_real(p.determiner()),
                    color: p.color(),
                })
                .collect(),
        }
    }
}

impl MultiDimension {
    /// Build a factory from a declarative configuration.
    ///
    /// Either the whole configuration is applied or an error is returned;
    /// no partially built factory escapes.
    pub fn from_config(config: &FactoryConfig) -> Result<Self, GradientError> {
        let method: BlendMethod = config.blend_method.parse()?;
        let mut factory = MultiDimension::new(method);
        for dim in &config.dimensions {
            let mut handle = factory.add_dimension(dim.exponent)?;
            for point in &dim.points {
                let color = Color::parse(&point.color)?;
                handle.add_config(point.determiner, color)?;
            }
        }
        tracing::info!(
            blend_method = %method,
            dimensions = factory.num_dimensions(),
            state = %factory.state(),
            "factory built from config"
        );
        Ok(factory)
    }

    /// The declarative configuration that rebuilds this factory.
    pub fn to_config(&self) -> FactoryConfig {
        FactoryConfig {
            blend_method: self.blend_method().as_str().to_string(),
            dimensions: self
                .dimensions()
                .iter()
                .map(|d| DimensionConfig {
                    exponent: d.exponent(),
                    points: d
                        .points()
                        .iter()
                        .map(|p| PointConfig {
                            determiner: p.determiner(),
                            color: p.color().to_hex(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            blend_method: self.blend_method(),
            dimensions: self.dimensions().iter().map(DimensionSnapshot::from).collect(),
        }
    }

    /// SHA-256 digest of the canonical snapshot.
    pub fn fingerprint(&self) -> Result<ContentDigest, GradientError> {
        let bytes = self.snapshot().canonical_bytes()?;
        let digest = sha256_digest(&bytes);
        tracing::debug!(
            version = self.version(),
            fingerprint = %digest.short_hex(),
            "fingerprint computed"
        );
        Ok(digest)
    }

    /// Human-readable listing with the nearest name of every anchor color.
    pub fn dump_lines(&self, names: &impl ColorNames) -> Vec<String> {
        let mut lines = Vec::with_capacity(2 + self.num_dimensions() * 4);
        lines.push(format!("MultiDimension (version {})", self.version()));
        lines.push(format!(
            "  ready: {}; dimensions: {}; blend method: {}",
            self.is_ready(),
            self.num_dimensions(),
            self.blend_method()
        ));
        for (i, d) in self.dimensions().iter().enumerate() {
            let real = |x: Option<f64>| x.map_or_else(|| "-".to_string(), canonical_real);
            lines.push(format!("  Dimension {i}:"));
            lines.push(format!(
                "    ready: {}; configs: {}; min/max: {}/{}; range {}; exp: {}",
                d.is_ready(),
                d.len(),
                real(d.min()),
                real(d.max()),
                real(d.range()),
                canonical_real(d.exponent())
            ));
            for (j, p) in d.points().iter().enumerate() {
                let similar = p
                    .color()
                    .similar_to(names)
                    .map_or_else(|| "unnamed".to_string(), |m| m.to_string());
                lines.push(format!(
                    "      ConfigPoint {j}: {}; {} ({similar})",
                    canonical_real(p.determiner()),
                    p.color()
                ));
            }
        }
        lines
    }
}
