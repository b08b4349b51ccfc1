//! # Shared Factory
//!
//! A cloneable handle to one factory behind a `parking_lot::RwLock`.
//! Queries take the read lock and run in parallel; structural mutations
//! take the write lock. A query therefore always observes one version of
//! the configuration from its readiness check through its cache lookup,
//! and a mutation can never land between the two.

use std::sync::Arc;

use parking_lot::RwLock;

use datacolor_core::{BlendMethod, Color, ContentDigest};

use crate::dimension::DimensionId;
use crate::error::GradientError;
use crate::factory::{FactoryState, MultiDimension};
use crate::snapshot::Snapshot;

/// Thread-safe, cloneable handle to a [`MultiDimension`].
#[derive(Debug, Clone, Default)]
pub struct SharedFactory {
    inner: Arc<RwLock<MultiDimension>>,
}

impl SharedFactory {
    pub fn new(factory: MultiDimension) -> Self {
        Self {
            inner: Arc::new(RwLock::new(factory)),
        }
    }

    pub fn get_color(&self, determiners: &[f64]) -> Result<Color, GradientError> {
        self.inner.read().get_color(determiners)
    }

    pub fn css_bg(&self, determiners: &[f64]) -> Result<String, GradientError> {
        self.inner.read().css_bg(determiners)
    }

    pub fn css_fg_bg(&self, determiners: &[f64]) -> Result<String, GradientError> {
        self.inner.read().css_fg_bg(determiners)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.read().snapshot()
    }

    pub fn fingerprint(&self) -> Result<ContentDigest, GradientError> {
        self.inner.read().fingerprint()
    }

    pub fn version(&self) -> u64 {
        self.inner.read().version()
    }

    pub fn state(&self) -> FactoryState {
        self.inner.read().state()
    }

    /// Append an empty dimension, returning its identifier.
    pub fn add_dimension(&self, exponent: f64) -> Result<DimensionId, GradientError> {
        Ok(self.inner.write().add_dimension(exponent)?.id())
    }

    pub fn add_config(
        &self,
        id: DimensionId,
        determiner: f64,
        color: Color,
    ) -> Result<(), GradientError> {
        self.inner.write().add_config(id, determiner, color)
    }

    pub fn set_blend_method(&self, method: BlendMethod) {
        self.inner.write().set_blend_method(method);
    }

    /// Run several mutations under one write lock.
    ///
    /// No query observes the configuration between the closure's steps.
    /// Steps that succeeded before an error stay applied.
    pub fn update<R>(
        &self,
        f: impl FnOnce(&mut MultiDimension) -> Result<R, GradientError>,
    ) -> Result<R, GradientError> {
        f(&mut self.inner.write())
    }

    /// Run a read-only closure under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&MultiDimension) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<MultiDimension> for SharedFactory {
    fn from(factory: MultiDimension) -> Self {
        Self::new(factory)
    }
}
