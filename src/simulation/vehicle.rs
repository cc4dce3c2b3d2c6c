//! Drift-capable kinematic car model.
//!
//! Heading and velocity are independent: friction depends on the angle
//! between them, so steering at speed makes the car slide sideways.

use serde::{Deserialize, Serialize};

use super::params::Params;
use super::vector2::Vector2;

/// Physical state of one car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Current position.
    pub position: Vector2,
    /// Position before the most recent update.
    pub previous_position: Vector2,
    /// Direction and speed of travel.
    pub velocity: Vector2,
    /// Direction the wheels point, in radians. Never wrapped.
    pub heading: f64,
}

impl VehicleState {
    /// A car at rest at `origin`, pointing along +x.
    pub fn new(origin: Vector2) -> Self {
        Self {
            position: origin,
            previous_position: origin,
            velocity: Vector2::zero(),
            heading: 0.0,
        }
    }

    /// Puts the car back at rest at `origin`.
    pub fn reset(&mut self, origin: Vector2) {
        *self = Self::new(origin);
    }

    /// Unit vector the wheels point along.
    pub fn direction(&self) -> Vector2 {
        Vector2::from_angle(self.heading)
    }

    /// Velocity projected onto the heading axis and its left perpendicular.
    pub fn local_velocity(&self) -> (f64, f64) {
        let direction = self.direction();
        (
            self.velocity.dot(direction),
            self.velocity.dot(direction.perpendicular()),
        )
    }

    /// Angle between heading and velocity, `None` while at rest.
    pub fn drift_angle(&self) -> Option<f64> {
        if self.velocity.equals(Vector2::zero()) {
            return None;
        }
        let cos_theta = self.velocity.dot(self.direction()) / self.velocity.magnitude();
        Some(cos_theta.clamp(-1.0, 1.0).acos())
    }

    /// Distance covered by the most recent update.
    pub fn last_step_distance(&self) -> f64 {
        self.position.distance(self.previous_position)
    }

    /// Applies throttle and steering for `delta` seconds, then integrates
    /// position. Both inputs are clamped to `[-1, 1]`.
    pub fn update(&mut self, forward: f64, turn: f64, delta: f64, params: &Params) {
        self.accelerate(forward.clamp(-1.0, 1.0), turn.clamp(-1.0, 1.0), delta, params);

        self.previous_position = self.position;
        self.position = self.position + self.velocity * delta;
    }

    fn accelerate(&mut self, forward: f64, turn: f64, delta: f64, params: &Params) {
        let scaled_forward = if forward > 0.0 {
            forward * params.accel_forward
        } else {
            forward * params.accel_backward
        };
        let scaled_turn = turn * params.turn_scalar;

        let direction = self.direction();

        if let Some(drift) = self.drift_angle() {
            let coef = friction_coefficient(drift, params);
            let friction = self
                .velocity
                .normalized()
                .scale(-coef * params.friction_strength * delta);
            // friction only brakes, it never reverses the car
            if friction.magnitude() > self.velocity.magnitude() {
                self.velocity = Vector2::zero();
            } else {
                self.velocity = self.velocity + friction;
            }
        }

        self.velocity = self.velocity + direction * (scaled_forward * delta);
        self.heading += scaled_turn * delta;

        let cap = params.speed_max * delta;
        if self.velocity.magnitude() > cap {
            self.velocity = self.velocity.normalized() * cap;
        }
    }
}

/// Friction coefficient for a given drift angle.
///
/// The radius of an ellipse with semi-axes `friction_parallel` (wheels
/// aligned with travel) and `friction_perpendicular` (wheels side-on).
pub fn friction_coefficient(drift_angle: f64, params: &Params) -> f64 {
    let parallel = params.friction_parallel * drift_angle.cos();
    let perpendicular = params.friction_perpendicular * drift_angle.sin();
    parallel.hypot(perpendicular)
}
