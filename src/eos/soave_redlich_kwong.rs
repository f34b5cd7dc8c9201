use super::CubicModel;

/// The Soave-Redlich-Kwong equation of state.
pub struct SoaveRedlichKwong;

impl CubicModel for SoaveRedlichKwong {
    const OMEGA_A: f64 = 0.42748;
    const OMEGA_B: f64 = 0.08664;

    fn m(acentric_factor: f64) -> f64 {
        0.48 + (1.574 - 0.176 * acentric_factor) * acentric_factor
    }

    fn z_coefficients(a: f64, b: f64) -> [f64; 4] {
        [1.0, -1.0, a - b - b.powi(2), -a * b]
    }
}
