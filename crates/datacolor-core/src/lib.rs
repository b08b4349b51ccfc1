//! # datacolor-core: Color Primitives
//!
//! The leaf crate of the datacolor workspace. It defines the value types
//! every other crate builds on:
//!
//! - **`Color`** (`color.rs`, `parse.rs`): an immutable RGB triple with
//!   validated constructors for channel integers, `#RRGGBB`, `rgb(r,g,b)`
//!   text, and symbolic names.
//! - **Named colors** (`names.rs`): the [`ColorNames`] table seam, the
//!   built-in CSS table, and nearest-name lookup.
//! - **Blending** (`blend.rs`): the closed [`BlendMethod`] enumeration, the
//!   six pairwise primitives, and the list reducer [`Color::blend`].
//! - **Canonical digests** (`canonical.rs`, `digest.rs`): `CanonicalBytes`
//!   and SHA-256 `ContentDigest`, used to fingerprint configurations.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `datacolor-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod blend;
pub mod canonical;
pub mod color;
pub mod digest;
pub mod error;
pub mod names;
pub mod parse;

pub use blend::{BlendMethod, REDUCER_ALPHA};
pub use canonical::{canonical_real, CanonicalBytes};
pub use color::Color;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{CanonicalizationError, ColorError, DigestError};
pub use names::{ColorNames, CssColorNames, NameMatch, WHITE_BLACK_DISTANCE};
