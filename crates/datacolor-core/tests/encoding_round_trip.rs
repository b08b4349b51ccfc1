//! # Color Encoding Round-Trip Tests
//!
//! Every in-range channel triple must survive construction, `#RRGGBB`
//! text, and `rgb(r,g,b)` text bit-exactly. The exhaustive checks below
//! walk each channel independently; the property tests cover random
//! triples.

use datacolor_core::{Color, ColorError};
use proptest::prelude::*;

#[test]
fn test_every_channel_value_round_trips() {
    for v in 0..=255u8 {
        for c in [Color::rgb(v, 0, 0), Color::rgb(0, v, 0), Color::rgb(0, 0, v)] {
            assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
            assert_eq!(Color::from_text(&c.to_string()).unwrap(), c);
        }
    }
}

#[test]
fn test_lower_case_hex_is_accepted() {
    let c = Color::rgb(0xDE, 0xAD, 0xBE);
    assert_eq!(Color::from_hex(&c.to_hex().to_lowercase()).unwrap(), c);
}

#[test]
fn test_out_of_range_text_is_invalid_color() {
    for bad in ["rgb(0,0,256)", "rgb(300, 1, 1)", "rgb(1, 1000, 1)"] {
        assert!(matches!(Color::parse(bad), Err(ColorError::InvalidColor(_))));
    }
}

proptest! {
    #[test]
    fn channels_identity(r in 0i64..=255, g in 0i64..=255, b in 0i64..=255) {
        let c = Color::from_rgb(r, g, b).unwrap();
        prop_assert_eq!(
            (i64::from(c.red()), i64::from(c.green()), i64::from(c.blue())),
            (r, g, b)
        );
    }

    #[test]
    fn hex_round_trip(rgb in any::<[u8; 3]>()) {
        let c = Color::from(rgb);
        let hex = c.to_hex();
        prop_assert!(hex.starts_with('#'));
        prop_assert_eq!(hex.to_uppercase(), hex.clone());
        prop_assert_eq!(Color::from_hex(&hex).unwrap(), c);
    }

    #[test]
    fn rgb_text_round_trip(rgb in any::<[u8; 3]>()) {
        let c = Color::from(rgb);
        prop_assert_eq!(Color::parse(&c.to_string()).unwrap(), c);
    }

    #[test]
    fn out_of_range_channels_rejected(r in 256i64..10_000, g in 0i64..=255) {
        prop_assert!(Color::from_rgb(r, g, 0).is_err());
        prop_assert!(Color::from_rgb(g, -r, 0).is_err());
    }
}
