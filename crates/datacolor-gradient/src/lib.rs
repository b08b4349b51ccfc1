//! # datacolor-gradient: The Color Factory
//!
//! Maps points of an n-dimensional dataspace to colors.
//!
//! - **`Dimension`** (`dimension.rs`, `point.rs`): sorted anchors plus a
//!   curve exponent; turns one determiner into one color.
//! - **`MultiDimension`** (`factory.rs`, `cache.rs`): ordered dimensions
//!   plus a blend method; turns a determiner tuple into one color and
//!   memoizes results by `(version, tuple)`.
//! - **Snapshots** (`snapshot.rs`): declarative `FactoryConfig`, canonical
//!   `Snapshot`, SHA-256 fingerprint, and the human-readable dump.
//! - **CSS** (`css.rs`): style fragments for rendered cells.
//! - **`SharedFactory`** (`shared.rs`): `Arc<RwLock<_>>` handle for use
//!   from several threads.
//!
//! ## Example
//!
//! ```
//! use datacolor_core::{BlendMethod, Color};
//! use datacolor_gradient::MultiDimension;
//!
//! let mut factory = MultiDimension::new(BlendMethod::Additive);
//! factory.add_dimension(1.0)?.add_config(0.0, Color::rgb(100, 0, 0))?;
//! factory.add_dimension(1.0)?.add_config(0.0, Color::rgb(0, 100, 0))?;
//! assert_eq!(factory.get_color(&[3.0, -7.0])?, Color::rgb(100, 100, 0));
//! # Ok::<(), datacolor_gradient::GradientError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `datacolor-core` within the workspace.
//! - No I/O. Nothing here reads or writes files.
//! - No `.unwrap()` outside tests.

pub mod cache;
pub mod css;
pub mod dimension;
pub mod error;
pub mod factory;
pub mod point;
pub mod presets;
pub mod shared;
pub mod snapshot;

pub use cache::{ResultCache, DEFAULT_CACHE_CAPACITY};
pub use dimension::{Dimension, DimensionId};
pub use error::GradientError;
pub use factory::{DimensionMut, FactoryState, MultiDimension};
pub use point::ConfigPoint;
pub use presets::testable_factory;
pub use shared::SharedFactory;
pub use snapshot::{
    DimensionConfig, DimensionSnapshot, FactoryConfig, PointConfig, PointSnapshot, Snapshot,
};
