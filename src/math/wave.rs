/// Height of the rippling surface at grid point (x, z)
///
/// `shift` advances the ripple outward; the radial term is `x² + z²`.
pub fn surface_height(x: f32, z: f32, shift: f32, frequency: f32, amplitude: f32) -> f32 {
    ((x * x + z * z + shift) * frequency).sin() * amplitude
}

/// Vertical offset for a bobbing object at phase `time`
pub fn bob(amplitude: f32, frequency: f32, time: f32, rest: f32) -> f32 {
    amplitude * (frequency * time).sin() + rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_is_flat_at_origin_without_shift() {
        assert_eq!(surface_height(0.0, 0.0, 0.0, 0.004, 5.0), 0.0);
    }

    #[test]
    fn surface_is_radially_symmetric() {
        let a = surface_height(3.0, -6.0, 45.0, 0.004, 5.0);
        let b = surface_height(-6.0, 3.0, 45.0, 0.004, 5.0);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn surface_stays_within_amplitude() {
        for i in 0..50 {
            let h = surface_height(i as f32 * 1.7, -(i as f32), i as f32 * 15.0, 0.004, 5.0);
            assert!(h.abs() <= 5.0 + 1e-5);
        }
    }

    #[test]
    fn bob_rests_at_phase_zero() {
        assert_eq!(bob(0.08, 2.5, 0.0, 0.75), 0.75);
    }

    #[test]
    fn bob_peaks_at_quarter_period() {
        let t = std::f32::consts::FRAC_PI_2 / 2.5;
        assert!((bob(0.08, 2.5, t, 0.75) - 0.83).abs() < 1e-5);
    }
}
