use crate::config;

const MAX_SUBSTEP: f64 = 1.0 / 240.0;
const MAX_FRAME: f64 = 1.0 / 15.0; // backgrounded tabs
const REST_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: config::SPRING_STIFFNESS,
            damping: config::SPRING_DAMPING,
            mass: config::SPRING_MASS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Advances by `dt` seconds in semi-implicit Euler sub-steps of at most
    /// `MAX_SUBSTEP`. Returns true while the spring is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if dt.is_nan() || dt <= 0.0 {
            return !self.is_at_rest();
        }

        let mut remaining = dt.min(MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            false
        } else {
            true
        }
    }
}
