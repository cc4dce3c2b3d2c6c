//! Keyboard state for driving a single car by hand.

/// Directional key state for driving a single car by hand.
///
/// Owned by the driver and passed into [`super::world::World::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualInput {
    /// Accelerate.
    pub up: bool,
    /// Brake / reverse.
    pub down: bool,
    /// Steer counter-clockwise.
    pub left: bool,
    /// Steer clockwise.
    pub right: bool,
}

impl ManualInput {
    /// Maps the key state to `(forward, turn)`, each in `{-1, 0, 1}`.
    ///
    /// Opposite keys held together cancel out.
    pub fn controls(&self) -> (f64, f64) {
        let axis = |positive: bool, negative: bool| match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        (axis(self.up, self.down), axis(self.right, self.left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_axes() {
        let input = ManualInput {
            up: true,
            right: true,
            ..ManualInput::default()
        };
        assert_eq!(input.controls(), (1.0, 1.0));
        assert_eq!(ManualInput::default().controls(), (0.0, 0.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let input = ManualInput {
            up: true,
            down: true,
            left: true,
            right: false,
        };
        assert_eq!(input.controls(), (0.0, -1.0));
    }
}
