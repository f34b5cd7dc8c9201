use super::CubicModel;

/// The Peng-Robinson equation of state.
pub struct PengRobinson;

impl CubicModel for PengRobinson {
    const OMEGA_A: f64 = 0.45724;
    const OMEGA_B: f64 = 0.07780;

    fn m(acentric_factor: f64) -> f64 {
        0.37464 + (1.54226 - 0.26992 * acentric_factor) * acentric_factor
    }

    fn z_coefficients(a: f64, b: f64) -> [f64; 4] {
        [
            1.0,
            -(1.0 - b),
            a - 3.0 * b.powi(2) - 2.0 * b,
            -(a * b - b.powi(2) - b.powi(3)),
        ]
    }
}
