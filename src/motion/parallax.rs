use super::Vec2;
use crate::config;

pub fn parallax_offset(pointer: Vec2, width: f64, height: f64) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let normalised = Vec2::new(pointer.x / width, pointer.y / height);
    Some(Vec2::new(
        map_unit(normalised.x, config::PARALLAX_RANGE),
        map_unit(normalised.y, config::PARALLAX_RANGE),
    ))
}

fn map_unit(t: f64, range: f64) -> f64 {
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    -range + t * 2.0 * range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_centre() {
        assert_eq!(
            parallax_offset(Vec2::ZERO, 1000.0, 800.0),
            Some(Vec2::new(-60.0, -60.0))
        );
        assert_eq!(
            parallax_offset(Vec2::new(1000.0, 800.0), 1000.0, 800.0),
            Some(Vec2::new(60.0, 60.0))
        );
        assert_eq!(
            parallax_offset(Vec2::new(500.0, 400.0), 1000.0, 800.0),
            Some(Vec2::ZERO)
        );
    }

    #[test]
    fn quarter_way_is_linear() {
        let offset = parallax_offset(Vec2::new(250.0, 600.0), 1000.0, 800.0).unwrap();
        assert!((offset.x + 30.0).abs() < 1e-9);
        assert!((offset.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn outside_viewport_is_clamped() {
        let offset = parallax_offset(Vec2::new(-200.0, 5000.0), 1000.0, 800.0).unwrap();
        assert_eq!(offset, Vec2::new(-60.0, 60.0));
    }

    #[test]
    fn empty_viewport_is_skipped() {
        assert_eq!(parallax_offset(Vec2::new(1.0, 1.0), 0.0, 800.0), None);
        assert_eq!(parallax_offset(Vec2::new(1.0, 1.0), 1000.0, f64::NAN), None);
    }
}
