use log::debug;

use super::spring::{Spring, SpringConfig};
use super::{Rect, Vec2};
use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub struct Magnet {
    pull: f64,
    target: Vec2,
    x: Spring,
    y: Spring,
    hovered: bool,
}

impl Default for Magnet {
    fn default() -> Self {
        Self::new(config::MAGNET_PULL, SpringConfig::default())
    }
}

impl Magnet {
    pub fn new(pull: f64, spring: SpringConfig) -> Self {
        Self {
            pull,
            target: Vec2::ZERO,
            x: Spring::new(spring),
            y: Spring::new(spring),
            hovered: false,
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn rendered(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position())
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[cfg(test)]
    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_move(&mut self, pointer: Vec2, bounds: Option<Rect>) {
        let Some(bounds) = bounds else {
            debug!("No bounds for magnetic element, ignoring pointer move");
            return;
        };
        self.set_target((pointer - bounds.center()) * self.pull);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.set_target(Vec2::ZERO);
    }

    pub fn tick(&mut self, dt: f64) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }

    fn set_target(&mut self, target: Vec2) {
        if !(target.x.is_finite() && target.y.is_finite()) {
            return;
        }
        self.target = target;
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon_box() -> Rect {
        Rect {
            left: 100.0,
            top: 200.0,
            width: 74.0,
            height: 74.0,
        }
    }

    fn settle(magnet: &mut Magnet) {
        for _ in 0..600 {
            if !magnet.tick(1.0 / 60.0) {
                break;
            }
        }
    }

    #[test]
    fn target_is_scaled_offset_from_centre() {
        let mut magnet = Magnet::default();
        magnet.pointer_enter();
        magnet.pointer_move(Vec2::new(137.0 + 50.0, 237.0 - 25.0), Some(icon_box()));
        let target = magnet.target();
        assert!((target.x - 6.0).abs() < 1e-9);
        assert!((target.y + 3.0).abs() < 1e-9);
        assert!(magnet.is_hovered());
    }

    #[test]
    fn pointer_on_centre_targets_origin() {
        let mut magnet = Magnet::default();
        magnet.pointer_move(icon_box().center(), Some(icon_box()));
        assert_eq!(magnet.target(), Vec2::ZERO);
    }

    #[test]
    fn rendered_offset_follows_target() {
        let mut magnet = Magnet::default();
        magnet.pointer_move(Vec2::new(237.0, 337.0), Some(icon_box()));
        assert!(magnet.tick(1.0 / 60.0));
        let mid = magnet.rendered();
        assert!(mid.x > 0.0 && mid.x < magnet.target().x);

        settle(&mut magnet);
        assert_eq!(magnet.rendered(), magnet.target());
        assert!(magnet.is_at_rest());
    }

    #[test]
    fn leave_always_resets_target_to_origin() {
        for pointer in [
            Vec2::new(0.0, 0.0),
            Vec2::new(5000.0, -5000.0),
            Vec2::new(137.0, 237.0),
        ] {
            let mut magnet = Magnet::default();
            magnet.pointer_enter();
            magnet.pointer_move(pointer, Some(icon_box()));
            magnet.tick(1.0 / 60.0);
            magnet.pointer_leave();
            assert_eq!(magnet.target(), Vec2::ZERO);
            assert!(!magnet.is_hovered());

            settle(&mut magnet);
            assert_eq!(magnet.rendered(), Vec2::ZERO);
        }
    }

    #[test]
    fn missing_bounds_drops_the_update() {
        let mut magnet = Magnet::default();
        magnet.pointer_move(Vec2::new(237.0, 337.0), Some(icon_box()));
        let before = magnet.target();
        magnet.pointer_move(Vec2::new(0.0, 0.0), None);
        assert_eq!(magnet.target(), before);
    }

    #[test]
    fn non_finite_pointer_keeps_target_and_springs_in_step() {
        let mut magnet = Magnet::default();
        magnet.pointer_move(Vec2::new(237.0, 337.0), Some(icon_box()));
        let before = magnet.target();

        magnet.pointer_move(Vec2::new(f64::INFINITY, 337.0), Some(icon_box()));
        magnet.pointer_move(Vec2::new(237.0, f64::NAN), Some(icon_box()));
        assert_eq!(magnet.target(), before);

        settle(&mut magnet);
        assert_eq!(magnet.rendered(), before);
    }

    #[test]
    fn hover_flag_tracks_enter_and_leave() {
        let mut magnet = Magnet::default();
        assert!(!magnet.is_hovered());
        magnet.pointer_enter();
        assert!(magnet.is_hovered());
        magnet.pointer_leave();
        assert!(!magnet.is_hovered());
    }

    #[test]
    fn instances_are_independent() {
        let mut first = Magnet::default();
        let second = Magnet::default();
        first.pointer_move(Vec2::new(237.0, 337.0), Some(icon_box()));
        first.tick(1.0 / 60.0);
        assert_eq!(second.target(), Vec2::ZERO);
        assert_eq!(second.rendered(), Vec2::ZERO);
    }
}
