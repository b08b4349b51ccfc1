//! Small ready-made factories for demos and tests.

use datacolor_core::{Color, CssColorNames};

use crate::error::GradientError;
use crate::factory::MultiDimension;

/// Number of available presets. Valid indices are `0..PRESET_COUNT`.
pub const PRESET_COUNT: usize = 3;

/// Build preset `n`:
///
/// - `0`: one dimension, blue at -10, beige at 5, red at 30.
/// - `1`: preset 0 plus a second dimension, yellow at 0, seagreen at 100.
/// - `2`: white to red over 0..100 crossed with white to blue over 0..100.
///
/// Returns `None` for any other index.
pub fn testable_factory(n: usize) -> Option<MultiDimension> {
    let table: &[&[(f64, &str)]] = match n {
        0 => &[&[(-10.0, "blue"), (5.0, "beige"), (30.0, "red")]],
        1 => &[
            &[(-10.0, "blue"), (5.0, "beige"), (30.0, "red")],
            &[(0.0, "yellow"), (100.0, "seagreen")],
        ],
        2 => &[
            &[(0.0, "white"), (100.0, "red")],
            &[(0.0, "white"), (100.0, "blue")],
        ],
        _ => return None,
    };
    // the preset tables only use valid names and distinct determiners
    build(table).ok()
}

fn build(dimensions: &[&[(f64, &str)]]) -> Result<MultiDimension, GradientError> {
    let mut factory = MultiDimension::default();
    for points in dimensions {
        let mut handle = factory.add_dimension(1.0)?;
        for &(determiner, name) in *points {
            let color = Color::from_name(name, &CssColorNames)?;
            handle.add_config(determiner, color)?;
        }
    }
    Ok(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::FactoryState;

    #[test]
    fn test_presets_are_ready() {
        for n in 0..PRESET_COUNT {
            let f = testable_factory(n).unwrap();
            assert_eq!(f.state(), FactoryState::Ready, "preset {n}");
        }
        assert!(testable_factory(PRESET_COUNT).is_none());
    }

    #[test]
    fn test_preset_zero_anchors() {
        let f = testable_factory(0).unwrap();
        assert_eq!(f.num_dimensions(), 1);
        assert_eq!(f.get_color(&[-100.0]).unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(f.get_color(&[5.0]).unwrap(), Color::rgb(245, 245, 220));
        assert_eq!(f.get_color(&[30.0]).unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_preset_two_corners() {
        let f = testable_factory(2).unwrap();
        assert_eq!(f.get_color(&[0.0, 0.0]).unwrap(), Color::WHITE);
        // lerp reducer halfway between red and blue
        assert_eq!(f.get_color(&[100.0, 100.0]).unwrap(), Color::rgb(127, 0, 127));
    }
}
