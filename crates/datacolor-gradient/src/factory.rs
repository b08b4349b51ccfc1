//! # Multi-Dimension Color Factory
//!
//! A [`MultiDimension`] maps an n-tuple of determiners to one color. Each
//! tuple component is evaluated by the dimension at the same position
//! (dimensions keep insertion order), and the per-dimension colors are
//! folded with the factory's [`BlendMethod`].
//!
//! ## States
//!
//! ```text
//! Unconfigured ──add_dimension──▶ PartiallyConfigured ──add_config (last empty dim)──▶ Ready
//!                                          ▲                                            │
//!                                          └──────────── add_dimension ◀────────────────┘
//! ```
//!
//! Adding a dimension to a ready factory yields a new empty dimension, so
//! the factory is partially configured until that dimension gets its first
//! point. Dimensions and points are never removed.
//!
//! ## Caching
//!
//! Every successful structural mutation (new dimension, new point, new
//! blend method) increments [`MultiDimension::version`] by exactly one and
//! clears the result cache. Queries memoize by `(version, tuple)`, so a
//! cached color is never served for a configuration it was not computed
//! against. Failed mutations change nothing, including the version.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use datacolor_core::{BlendMethod, Color};

use crate::cache::{ResultCache, DEFAULT_CACHE_CAPACITY};
use crate::dimension::{Dimension, DimensionId};
use crate::error::GradientError;

/// Configuration progress of a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactoryState {
    /// No dimensions yet.
    Unconfigured,
    /// At least one dimension has no config point.
    PartiallyConfigured,
    /// Every dimension has at least one config point.
    Ready,
}

impl fmt::Display for FactoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unconfigured => "unconfigured",
            Self::PartiallyConfigured => "partially configured",
            Self::Ready => "ready",
        })
    }
}

/// The color factory.
pub struct MultiDimension {
    blend_method: BlendMethod,
    dimensions: Vec<Dimension>,
    next_id: u32,
    version: u64,
    cache: Mutex<ResultCache>,
}

impl MultiDimension {
    /// Create an empty factory with the default cache capacity.
    pub fn new(blend_method: BlendMethod) -> Self {
        Self {
            blend_method,
            dimensions: Vec::new(),
            next_id: 0,
            version: 0,
            cache: Mutex::new(ResultCache::new(DEFAULT_CACHE_CAPACITY)),
        }
    }

    /// Replace the result cache with one of `capacity` entries.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = Mutex::new(ResultCache::new(capacity));
        self
    }

    pub fn blend_method(&self) -> BlendMethod {
        self.blend_method
    }

    /// Change the blend method. Setting the current method is a no-op.
    pub fn set_blend_method(&mut self, method: BlendMethod) {
        if method == self.blend_method {
            return;
        }
        tracing::debug!(from = %self.blend_method, to = %method, "blend method changed");
        self.blend_method = method;
        self.bump_version();
    }

    /// Append an empty dimension and return a handle for configuring it.
    ///
    /// # Errors
    ///
    /// `InvalidConfigPoint` if `exponent` is negative or not finite.
    pub fn add_dimension(&mut self, exponent: f64) -> Result<DimensionMut<'_>, GradientError> {
        let id = DimensionId(self.next_id);
        let dimension = Dimension::new(exponent)?.with_id(id);
        self.next_id += 1;
        self.dimensions.push(dimension);
        self.bump_version();
        tracing::debug!(dimension = %id, exponent, total = self.dimensions.len(), "dimension added");

        let index = self.dimensions.len() - 1;
        Ok(DimensionMut {
            factory: self,
            index,
        })
    }

    /// Re-acquire a configuration handle for an existing dimension.
    pub fn dimension_mut(&mut self, id: DimensionId) -> Result<DimensionMut<'_>, GradientError> {
        let index = self.index_of(id)?;
        Ok(DimensionMut {
            factory: self,
            index,
        })
    }

    /// Add a config point to the dimension `id`.
    pub fn add_config(
        &mut self,
        id: DimensionId,
        determiner: f64,
        color: Color,
    ) -> Result<(), GradientError> {
        self.dimension_mut(id)?.add_config(determiner, color)?;
        Ok(())
    }

    pub fn dimension(&self, id: DimensionId) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.id() == id)
    }

    /// Dimensions in insertion (query-tuple) order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn num_dimensions(&self) -> usize {
        self.dimensions.len()
    }

    /// Incremented once per successful structural mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn state(&self) -> FactoryState {
        if self.dimensions.is_empty() {
            FactoryState::Unconfigured
        } else if self.dimensions.iter().all(Dimension::is_ready) {
            FactoryState::Ready
        } else {
            FactoryState::PartiallyConfigured
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == FactoryState::Ready
    }

    /// Number of memoized results currently held.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Map a determiner tuple to a color.
    ///
    /// # Errors
    ///
    /// - `NotReady` unless every dimension has a config point (and there is
    ///   at least one dimension).
    /// - `DimensionArityMismatch` if `determiners.len()` differs from the
    ///   number of dimensions.
    /// - Any error from [`Dimension::get_color`].
    pub fn get_color(&self, determiners: &[f64]) -> Result<Color, GradientError> {
        self.check_query(determiners)?;

        if let Some(hit) = self.cache.lock().get(self.version, determiners) {
            tracing::trace!(version = self.version, ?determiners, "color cache hit");
            return Ok(hit);
        }
        tracing::trace!(version = self.version, ?determiners, "color cache miss");

        let color = self.compute(determiners)?;
        self.cache.lock().put(self.version, determiners, color);
        Ok(color)
    }

    /// Evaluate without touching the cache.
    pub fn compute(&self, determiners: &[f64]) -> Result<Color, GradientError> {
        self.check_query(determiners)?;
        let colors = self
            .dimensions
            .iter()
            .zip(determiners)
            .map(|(d, &x)| d.get_color(x))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Color::blend(&colors, self.blend_method)?)
    }

    fn check_query(&self, determiners: &[f64]) -> Result<(), GradientError> {
        if !self.is_ready() {
            return Err(GradientError::NotReady {
                ready: self.dimensions.iter().filter(|d| d.is_ready()).count(),
                total: self.dimensions.len(),
            });
        }
        if determiners.len() != self.dimensions.len() {
            return Err(GradientError::DimensionArityMismatch {
                expected: self.dimensions.len(),
                actual: determiners.len(),
            });
        }
        Ok(())
    }

    fn index_of(&self, id: DimensionId) -> Result<usize, GradientError> {
        self.dimensions
            .iter()
            .position(|d| d.id() == id)
            .ok_or(GradientError::UnknownDimension(id))
    }

    fn bump_version(&mut self) {
        self.version += 1;
        self.cache.get_mut().clear();
    }
}

impl Default for MultiDimension {
    fn default() -> Self {
        Self::new(BlendMethod::default())
    }
}

// Clones share configuration and version but start with an empty cache.
impl Clone for MultiDimension {
    fn clone(&self) -> Self {
        Self {
            blend_method: self.blend_method,
            dimensions: self.dimensions.clone(),
            next_id: self.next_id,
            version: self.version,
            cache: Mutex::new(ResultCache::new(self.cache.lock().capacity())),
        }
    }
}

impl fmt::Debug for MultiDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiDimension")
            .field("blend_method", &self.blend_method)
            .field("dimensions", &self.dimensions)
            .field("version", &self.version)
            .field("state", &self.state())
            .finish()
    }
}

/// Mutable handle to one dimension of a factory.
///
/// Mutations made through the handle bump the owning factory's version.
pub struct DimensionMut<'a> {
    factory: &'a mut MultiDimension,
    index: usize,
}

impl DimensionMut<'_> {
    pub fn id(&self) -> DimensionId {
        self.get().id()
    }

    pub fn get(&self) -> &Dimension {
        &self.factory.dimensions[self.index]
    }

    /// Add a config point; see [`Dimension::add_config`]. Chainable.
    pub fn add_config(&mut self, determiner: f64, color: Color) -> Result<&mut Self, GradientError> {
        self.factory.dimensions[self.index].add_config(determiner, color)?;
        self.factory.bump_version();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::rgb(r, g, b)
    }

    #[test]
    fn test_state_progression() {
        let mut f = MultiDimension::default();
        assert_eq!(f.state(), FactoryState::Unconfigured);

        let id = f.add_dimension(1.0).unwrap().id();
        assert_eq!(f.state(), FactoryState::PartiallyConfigured);

        f.add_config(id, 0.0, Color::BLACK).unwrap();
        assert_eq!(f.state(), FactoryState::Ready);

        f.add_dimension(1.0).unwrap();
        assert_eq!(f.state(), FactoryState::PartiallyConfigured);
    }

    #[test]
    fn test_ids_are_per_factory() {
        let mut a = MultiDimension::default();
        let mut b = MultiDimension::default();
        assert_eq!(a.add_dimension(1.0).unwrap().id(), DimensionId(0));
        assert_eq!(a.add_dimension(1.0).unwrap().id(), DimensionId(1));
        assert_eq!(b.add_dimension(1.0).unwrap().id(), DimensionId(0));
    }

    #[test]
    fn test_version_bumps_once_per_mutation() {
        let mut f = MultiDimension::default();
        assert_eq!(f.version(), 0);
        let id = f.add_dimension(1.0).unwrap().id();
        assert_eq!(f.version(), 1);
        f.dimension_mut(id)
            .unwrap()
            .add_config(0.0, Color::BLACK)
            .unwrap()
            .add_config(1.0, Color::WHITE)
            .unwrap();
        assert_eq!(f.version(), 3);
        f.set_blend_method(BlendMethod::Additive);
        assert_eq!(f.version(), 4);
        f.set_blend_method(BlendMethod::Additive);
        assert_eq!(f.version(), 4);
    }

    #[test]
    fn test_failed_mutations_leave_version_alone() {
        let mut f = MultiDimension::default();
        let id = f.add_dimension(1.0).unwrap().id();
        f.add_config(id, 0.0, Color::BLACK).unwrap();
        let v = f.version();

        assert!(f.add_dimension(-1.0).is_err());
        assert!(f.add_config(id, 0.0, Color::WHITE).is_err());
        assert!(f.add_config(id, f64::NAN, Color::WHITE).is_err());
        assert!(matches!(
            f.add_config(DimensionId(9), 1.0, Color::WHITE),
            Err(GradientError::UnknownDimension(DimensionId(9)))
        ));

        assert_eq!(f.version(), v);
        assert_eq!(f.num_dimensions(), 1);
        assert_eq!(f.dimension(id).unwrap().len(), 1);
    }

    #[test]
    fn test_not_ready_errors() {
        let f = MultiDimension::default();
        assert!(matches!(
            f.get_color(&[]),
            Err(GradientError::NotReady { ready: 0, total: 0 })
        ));

        let mut f = MultiDimension::default();
        let id = f.add_dimension(1.0).unwrap().id();
        f.add_config(id, 0.0, Color::BLACK).unwrap();
        f.add_dimension(1.0).unwrap();
        assert!(matches!(
            f.get_color(&[0.0, 0.0]),
            Err(GradientError::NotReady { ready: 1, total: 2 })
        ));
    }

    #[test]
    fn test_arity_mismatch() {
        let mut f = MultiDimension::default();
        f.add_dimension(1.0).unwrap().add_config(0.0, Color::BLACK).unwrap();
        f.add_dimension(1.0).unwrap().add_config(0.0, Color::WHITE).unwrap();
        for bad in [&[1.0][..], &[1.0, 2.0, 3.0][..], &[][..]] {
            assert!(matches!(
                f.get_color(bad),
                Err(GradientError::DimensionArityMismatch { expected: 2, .. })
            ));
        }
    }

    #[test]
    fn test_additive_single_configs() {
        let mut f = MultiDimension::new(BlendMethod::Additive);
        f.add_dimension(1.0).unwrap().add_config(0.0, rgb(100, 0, 0)).unwrap();
        f.add_dimension(1.0).unwrap().add_config(0.0, rgb(0, 100, 0)).unwrap();
        for (x, y) in [(0.0, 0.0), (-5.0, 1e9), (42.0, -42.0)] {
            assert_eq!(f.get_color(&[x, y]).unwrap(), rgb(100, 100, 0));
        }
    }

    #[test]
    fn test_positional_mapping() {
        let mut f = MultiDimension::new(BlendMethod::Additive);
        f.add_dimension(1.0)
            .unwrap()
            .add_config(0.0, rgb(0, 0, 0))
            .unwrap()
            .add_config(10.0, rgb(200, 0, 0))
            .unwrap();
        f.add_dimension(1.0)
            .unwrap()
            .add_config(0.0, rgb(0, 0, 0))
            .unwrap()
            .add_config(10.0, rgb(0, 0, 200))
            .unwrap();
        assert_eq!(f.get_color(&[10.0, 0.0]).unwrap(), rgb(200, 0, 0));
        assert_eq!(f.get_color(&[0.0, 10.0]).unwrap(), rgb(0, 0, 200));
        assert_eq!(f.get_color(&[5.0, 5.0]).unwrap(), rgb(100, 0, 100));
    }

    #[test]
    fn test_cache_is_used_and_cleared_on_mutation() {
        let mut f = MultiDimension::default();
        let id = f.add_dimension(1.0).unwrap().id();
        f.add_config(id, 0.0, Color::BLACK).unwrap();
        f.add_config(id, 100.0, Color::WHITE).unwrap();

        let first = f.get_color(&[50.0]).unwrap();
        assert_eq!(f.cache_len(), 1);
        assert_eq!(f.get_color(&[50.0]).unwrap(), first);
        assert_eq!(f.cache_len(), 1);

        f.add_config(id, 50.0, rgb(255, 0, 0)).unwrap();
        assert_eq!(f.cache_len(), 0);
        assert_eq!(f.get_color(&[50.0]).unwrap(), rgb(255, 0, 0));
    }

    #[test]
    fn test_blend_method_change_invalidates_cache() {
        let mut f = MultiDimension::new(BlendMethod::Lerp);
        f.add_dimension(1.0).unwrap().add_config(0.0, rgb(100, 0, 0)).unwrap();
        f.add_dimension(1.0).unwrap().add_config(0.0, rgb(0, 100, 0)).unwrap();
        assert_eq!(f.get_color(&[0.0, 0.0]).unwrap(), rgb(50, 50, 0));
        f.set_blend_method(BlendMethod::Additive);
        assert_eq!(f.get_color(&[0.0, 0.0]).unwrap(), rgb(100, 100, 0));
    }

    #[test]
    fn test_cache_capacity_is_bounded() {
        let mut f = MultiDimension::default().with_cache_capacity(3);
        f.add_dimension(1.0)
            .unwrap()
            .add_config(0.0, Color::BLACK)
            .unwrap()
            .add_config(10.0, Color::WHITE)
            .unwrap();
        for i in 0..10 {
            f.get_color(&[f64::from(i)]).unwrap();
        }
        assert_eq!(f.cache_len(), 3);
    }

    #[test]
    fn test_compute_matches_get_color() {
        let mut f = MultiDimension::new(BlendMethod::Overlay);
        f.add_dimension(2.0)
            .unwrap()
            .add_config(-10.0, rgb(0, 0, 255))
            .unwrap()
            .add_config(30.0, rgb(255, 0, 0))
            .unwrap();
        f.add_dimension(0.5)
            .unwrap()
            .add_config(0.0, rgb(255, 255, 0))
            .unwrap()
            .add_config(100.0, rgb(46, 139, 87))
            .unwrap();
        for q in [[0.0, 0.0], [12.5, 80.0], [-100.0, 1000.0]] {
            assert_eq!(f.get_color(&q).unwrap(), f.compute(&q).unwrap());
        }
    }

    #[test]
    fn test_clone_keeps_configuration_with_fresh_cache() {
        let mut f = MultiDimension::default().with_cache_capacity(7);
        f.add_dimension(1.0).unwrap().add_config(0.0, Color::WHITE).unwrap();
        f.get_color(&[0.0]).unwrap();
        let g = f.clone();
        assert_eq!(g.version(), f.version());
        assert_eq!(g.cache_len(), 0);
        assert_eq!(g.get_color(&[0.0]).unwrap(), Color::WHITE);
    }
}
