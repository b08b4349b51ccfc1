//! # Snapshot Subcommand
//!
//! Prints the deterministic snapshot of a factory configuration with its
//! SHA-256 fingerprint. Two configuration files describe the same factory
//! exactly when their fingerprints match, regardless of point order,
//! color spelling, or file format.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use datacolor_core::ContentDigest;
use datacolor_gradient::{MultiDimension, Snapshot};

/// Arguments for the `datacolor snapshot` subcommand.
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Factory configuration (YAML or JSON).
    #[arg(long, value_name = "FILE")]
    pub config: PathBuf,

    /// Print the canonical (JCS) bytes instead of pretty JSON.
    #[arg(long, conflicts_with = "expect")]
    pub canonical: bool,

    /// Only verify: exit 1 unless the fingerprint equals this digest.
    #[arg(long, value_name = "DIGEST")]
    pub expect: Option<ContentDigest>,
}

/// Snapshot together with its fingerprint.
#[derive(Debug, Serialize)]
pub struct SnapshotReport {
    pub fingerprint: ContentDigest,
    pub snapshot: Snapshot,
}

impl SnapshotReport {
    pub fn new(factory: &MultiDimension) -> Result<Self> {
        let fingerprint = factory
            .fingerprint()
            .context("failed to fingerprint factory")?;
        Ok(Self {
            fingerprint,
            snapshot: factory.snapshot(),
        })
    }
}

/// Execute the snapshot subcommand.
pub fn run_snapshot(args: &SnapshotArgs, cache_capacity: usize) -> Result<u8> {
    let factory = crate::load_factory(&args.config, cache_capacity)?;
    if let Some(expected) = &args.expect {
        return verify(&factory, expected);
    }
    if args.canonical {
        let bytes = factory
            .snapshot()
            .canonical_bytes()
            .context("failed to canonicalize snapshot")?;
        println!("{}", bytes.as_str());
    } else {
        let report = SnapshotReport::new(&factory)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(0)
}

/// Compare the factory fingerprint against `expected`.
fn verify(factory: &MultiDimension, expected: &ContentDigest) -> Result<u8> {
    let actual = factory
        .fingerprint()
        .context("failed to fingerprint factory")?;
    if actual == *expected {
        println!("OK: {actual}");
        Ok(0)
    } else {
        println!("MISMATCH: expected {expected}, computed {actual}");
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn equivalent_files_share_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = write(
            &dir,
            "a.yaml",
            "dimensions:\n  - points:\n      - {determiner: 10, color: white}\n      - {determiner: 0, color: black}\n",
        );
        let json = write(
            &dir,
            "b.json",
            r##"{"blend_method":"alpha","dimensions":[{"exponent":1,"points":[{"determiner":0,"color":"rgb(0,0,0)"},{"determiner":10.0,"color":"#ffffff"}]}]}"##,
        );
        let a = SnapshotReport::new(&crate::load_factory(&yaml, 4).unwrap()).unwrap();
        let b = SnapshotReport::new(&crate::load_factory(&json, 4).unwrap()).unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        assert!(a.fingerprint.to_string().starts_with("sha256:"));
    }

    #[test]
    fn run_snapshot_both_forms() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "c.json", r#"{"blend_method":"overlay"}"#);
        for canonical in [false, true] {
            let args = SnapshotArgs {
                config: path.clone(),
                canonical,
                expect: None,
            };
            assert_eq!(run_snapshot(&args, 4).unwrap(), 0);
        }
    }

    #[test]
    fn expect_checks_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "d.json", r#"{"blend_method":"multiplicative"}"#);
        let actual = crate::load_factory(&path, 4)
            .unwrap()
            .fingerprint()
            .unwrap();

        let mut args = SnapshotArgs {
            config: path,
            canonical: false,
            expect: Some(actual),
        };
        assert_eq!(run_snapshot(&args, 4).unwrap(), 0);

        args.expect = Some("0".repeat(64).parse().unwrap());
        assert_eq!(run_snapshot(&args, 4).unwrap(), 1);
    }
}
