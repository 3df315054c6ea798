use glam::Vec3;

use crate::math::bob;

pub const PHONE_POSITION: Vec3 = Vec3::new(2.0, 0.0, -2.0);
const PHASE_STEP: f32 = 0.01;
const SPIN_STEP: f32 = 0.01;
const BOB_AMPLITUDE: f32 = 0.08;
const BOB_FREQUENCY: f32 = 2.5;
const REST_HEIGHT: f32 = 0.75;

/// Spinning, bobbing motion of the phone, advanced once per frame
///
/// Frame-counted rather than time-based: every call to [`PhoneMotion::advance`]
/// moves the phase by a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneMotion {
    phase: f32,
    spin: f32,
    base: Vec3,
}

impl PhoneMotion {
    pub fn new(base: Vec3, initial_spin: f32) -> Self {
        Self {
            phase: 0.0,
            spin: initial_spin,
            base,
        }
    }

    pub fn advance(&mut self) {
        self.phase += PHASE_STEP;
        self.spin += SPIN_STEP;
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.base.x,
            bob(BOB_AMPLITUDE, BOB_FREQUENCY, self.phase, REST_HEIGHT),
            self.base.z,
        )
    }

    /// Rotation about the phone's local z axis
    pub fn spin(&self) -> f32 {
        self.spin
    }
}

impl Default for PhoneMotion {
    fn default() -> Self {
        Self::new(PHONE_POSITION, std::f32::consts::PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest_height() {
        let motion = PhoneMotion::default();
        assert_eq!(motion.position(), Vec3::new(2.0, 0.75, -2.0));
    }

    #[test]
    fn advance_spins_and_bobs() {
        let mut motion = PhoneMotion::default();
        motion.advance();
        assert!((motion.spin() - (std::f32::consts::PI + 0.01)).abs() < 1e-6);
        let expected = 0.08 * (2.5f32 * 0.01).sin() + 0.75;
        assert!((motion.position().y - expected).abs() < 1e-6);
    }

    #[test]
    fn bob_stays_in_band() {
        let mut motion = PhoneMotion::default();
        for _ in 0..1000 {
            motion.advance();
            let y = motion.position().y;
            assert!((0.67 - 1e-5..=0.83 + 1e-5).contains(&y));
        }
    }
}
