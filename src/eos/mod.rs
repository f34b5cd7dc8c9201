//! Cubic equations of state and fugacity coefficients.

use crate::cubic::real_roots;
use crate::errors::{EosError, EosResult};
use crate::parameter::ComponentRecord;
use ndarray::Array1;
use std::f64::consts::SQRT_2;
use std::marker::PhantomData;

mod peng_robinson;
mod soave_redlich_kwong;
pub use peng_robinson::PengRobinson;
pub use soave_redlich_kwong::SoaveRedlichKwong;

/// Universal gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;

/// Phase tag used to select the compressibility root.
///
/// The vapor phase is the least dense and corresponds to the largest
/// real root of the compressibility cubic, the liquid phase to the
/// smallest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Vapor,
    Liquid,
}

/// A family of cubic equations of state.
///
/// The families share the alpha correction form (1 + m(ω)(1 − √Tr))²
/// and the departure function; they differ only in the hooks below.
pub trait CubicModel {
    /// Constant Ωa of the energy parameter a = Ωa R²Tc²/Pc.
    const OMEGA_A: f64;
    /// Constant Ωb of the co-volume b = Ωb RTc/Pc.
    const OMEGA_B: f64;

    /// Slope m(ω) of the alpha correction.
    fn m(acentric_factor: f64) -> f64;

    /// Coefficients of the compressibility cubic in Z for the
    /// nondimensionalized parameters A and B.
    fn z_coefficients(a: f64, b: f64) -> [f64; 4];
}

/// A cubic equation of state bound to a component set, temperature, and
/// pressure.
///
/// The per-component energy and co-volume parameters are evaluated once
/// at construction; only mixture level quantities depend on the
/// composition a fugacity calculation is invoked with.
pub struct CubicEos<M> {
    components: Vec<ComponentRecord>,
    temperature: f64,
    pressure: f64,
    /// energy parameter aᵢ·α(T) per component, in construction order
    a: Array1<f64>,
    /// co-volume bᵢ per component, in construction order
    b: Array1<f64>,
    model: PhantomData<M>,
}

impl<M: CubicModel> CubicEos<M> {
    /// Creates an equation of state for the given conditions.
    ///
    /// Validates the records and conditions and evaluates the
    /// per-component parameters.
    pub fn new(
        components: Vec<ComponentRecord>,
        temperature: f64,
        pressure: f64,
    ) -> EosResult<Self> {
        if temperature <= 0.0 {
            return Err(EosError::InvalidState(
                String::from("CubicEos"),
                String::from("temperature"),
                temperature,
            ));
        }
        if pressure <= 0.0 {
            return Err(EosError::InvalidState(
                String::from("CubicEos"),
                String::from("pressure"),
                pressure,
            ));
        }
        for record in &components {
            record.validate()?;
        }
        let a = components
            .iter()
            .map(|c| {
                let tr = temperature / c.tc;
                let alpha = (1.0 + M::m(c.acentric_factor) * (1.0 - tr.sqrt())).powi(2);
                M::OMEGA_A * GAS_CONSTANT.powi(2) * c.tc.powi(2) / c.pc * alpha
            })
            .collect();
        let b = components
            .iter()
            .map(|c| M::OMEGA_B * GAS_CONSTANT * c.tc / c.pc)
            .collect();
        Ok(Self {
            components,
            temperature,
            pressure,
            a,
            b,
            model: PhantomData,
        })
    }

    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Compressibility factor for the nondimensionalized mixture
    /// parameters A and B.
    pub fn compressibility(&self, a: f64, b: f64, phase: Phase) -> EosResult<f64> {
        let roots = real_roots(M::z_coefficients(a, b));
        match phase {
            Phase::Vapor => roots.into_iter().reduce(f64::max),
            Phase::Liquid => roots.into_iter().reduce(f64::min),
        }
        .ok_or(EosError::NoRealRoot)
    }

    /// Fugacity coefficients of all components in a phase of the given
    /// composition.
    ///
    /// Applies the quadratic mixing rule with geometric mean combining
    /// (no binary interaction parameters) for the energy parameter and
    /// the linear rule for the co-volume, then evaluates the departure
    /// function at the compressibility root selected by `phase`.
    pub fn fugacity_coefficients(
        &self,
        molefracs: &Array1<f64>,
        phase: Phase,
    ) -> EosResult<Array1<f64>> {
        if molefracs.len() != self.components.len() {
            return Err(EosError::IncompatibleComponents(
                self.components.len(),
                molefracs.len(),
            ));
        }

        let mut a_mix = 0.0;
        let mut b_mix = 0.0;
        for (i, xi) in molefracs.iter().enumerate() {
            b_mix += xi * self.b[i];
            for (j, xj) in molefracs.iter().enumerate() {
                a_mix += xi * xj * (self.a[i] * self.a[j]).sqrt();
            }
        }
        if b_mix <= 0.0 {
            return Err(EosError::InvalidState(
                String::from("fugacity coefficients"),
                String::from("mixture co-volume"),
                b_mix,
            ));
        }

        let a = a_mix * self.pressure / (GAS_CONSTANT.powi(2) * self.temperature.powi(2));
        let b = b_mix * self.pressure / (GAS_CONSTANT * self.temperature);
        let z = self.compressibility(a, b, phase)?;
        if z - b <= 0.0 {
            return Err(EosError::IterationFailed(String::from(
                "fugacity coefficients",
            )));
        }

        let ln_phi = Array1::from_shape_fn(molefracs.len(), |i| {
            let sum_a: f64 = molefracs
                .iter()
                .zip(self.a.iter())
                .map(|(xj, aj)| xj * (self.a[i] * aj).sqrt())
                .sum();
            let bi = self.b[i] / b_mix;
            bi * (z - 1.0) - (z - b).ln()
                - a / (2.0 * SQRT_2 * b)
                    * (2.0 * sum_a / a_mix - bi)
                    * ((z + (1.0 + SQRT_2) * b) / (z + (1.0 - SQRT_2) * b)).ln()
        });
        Ok(ln_phi.mapv(f64::exp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    fn methane() -> ComponentRecord {
        ComponentRecord::new("methane", 190.6, 4.5992e6, 0.011, 8.07131, 1730.63, 233.426)
    }

    fn ethane() -> ComponentRecord {
        ComponentRecord::new("ethane", 305.4, 4.872e6, 0.099, 8.21201, 1652.57, 229.387)
    }

    #[test]
    fn parameters_follow_component_order() {
        let eos = CubicEos::<PengRobinson>::new(vec![methane(), ethane()], 300.0, 5e6).unwrap();
        // b is composition independent and monotonic in Tc/Pc
        let b_methane = 0.07780 * GAS_CONSTANT * 190.6 / 4.5992e6;
        let b_ethane = 0.07780 * GAS_CONSTANT * 305.4 / 4.872e6;
        assert_relative_eq!(eos.b[0], b_methane, max_relative = 1e-12);
        assert_relative_eq!(eos.b[1], b_ethane, max_relative = 1e-12);
    }

    #[test]
    fn ideal_gas_limit() {
        // at very low pressure both phases collapse onto the ideal gas
        let eos = CubicEos::<PengRobinson>::new(vec![methane()], 300.0, 100.0).unwrap();
        let x = arr1(&[1.0]);
        let phi = eos.fugacity_coefficients(&x, Phase::Vapor).unwrap();
        assert_relative_eq!(phi[0], 1.0, max_relative = 1e-4);
    }

    #[test]
    fn vapor_root_is_largest() {
        let eos = CubicEos::<SoaveRedlichKwong>::new(vec![ethane()], 280.0, 2e6).unwrap();
        let a_mix = eos.a[0] * eos.pressure / (GAS_CONSTANT.powi(2) * eos.temperature.powi(2));
        let b_mix = eos.b[0] * eos.pressure / (GAS_CONSTANT * eos.temperature);
        let zv = eos.compressibility(a_mix, b_mix, Phase::Vapor).unwrap();
        let zl = eos.compressibility(a_mix, b_mix, Phase::Liquid).unwrap();
        assert!(zv >= zl);
        assert!(zv > 0.0);
    }

    #[test]
    fn invalid_conditions_are_rejected() {
        assert!(CubicEos::<PengRobinson>::new(vec![methane()], -10.0, 1e5).is_err());
        assert!(CubicEos::<PengRobinson>::new(vec![methane()], 300.0, 0.0).is_err());
    }

    #[test]
    fn composition_length_is_checked() {
        let eos = CubicEos::<PengRobinson>::new(vec![methane(), ethane()], 300.0, 5e6).unwrap();
        let result = eos.fugacity_coefficients(&arr1(&[1.0]), Phase::Vapor);
        assert!(matches!(
            result,
            Err(EosError::IncompatibleComponents(2, 1))
        ));
    }
}
