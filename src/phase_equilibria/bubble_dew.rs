use crate::errors::{EosError, EosResult};
use crate::parameter::ComponentRecord;
use ndarray::Array1;

/// Reference pressure for the Wilson K values in the bubble and dew
/// point estimates.
const P_REF: f64 = 1e5;

/// Wilson correlation for the equilibrium ratio of a component.
///
/// Requires only critical properties and the acentric factor, which
/// makes it a cheap seed for the flash iteration.
pub fn wilson_k(component: &ComponentRecord, temperature: f64, pressure: f64) -> f64 {
    ((component.pc / pressure).ln()
        + 5.373 * (1.0 + component.acentric_factor) * (1.0 - component.tc / temperature))
        .exp()
}

/// Non-iterative estimate of the bubble point pressure of a liquid of
/// composition `liquid` at the given temperature.
pub fn bubble_point_pressure(
    components: &[ComponentRecord],
    liquid: &Array1<f64>,
    temperature: f64,
) -> EosResult<f64> {
    weighted_pressure_estimate(components, liquid, temperature)
}

/// Non-iterative estimate of the dew point pressure of a vapor of
/// composition `vapor` at the given temperature.
pub fn dew_point_pressure(
    components: &[ComponentRecord],
    vapor: &Array1<f64>,
    temperature: f64,
) -> EosResult<f64> {
    weighted_pressure_estimate(components, vapor, temperature)
}

fn weighted_pressure_estimate(
    components: &[ComponentRecord],
    molefracs: &Array1<f64>,
    temperature: f64,
) -> EosResult<f64> {
    if molefracs.len() != components.len() {
        return Err(EosError::IncompatibleComponents(
            components.len(),
            molefracs.len(),
        ));
    }
    let p_sat: f64 = components
        .iter()
        .zip(molefracs.iter())
        .map(|(c, xi)| xi * c.saturation_pressure(temperature))
        .sum();
    let k_sum: f64 = components
        .iter()
        .zip(molefracs.iter())
        .map(|(c, xi)| xi * wilson_k(c, temperature, P_REF))
        .sum();
    if k_sum == 0.0 {
        return Err(EosError::InvalidState(
            String::from("pressure estimate"),
            String::from("weighted K sum"),
            k_sum,
        ));
    }
    Ok(p_sat / k_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    fn ethane() -> ComponentRecord {
        ComponentRecord::new("ethane", 305.4, 4.872e6, 0.099, 8.21201, 1652.57, 229.387)
    }

    #[test]
    fn wilson_k_is_one_at_the_critical_point() {
        let record = ethane();
        assert_relative_eq!(
            wilson_k(&record, record.tc, record.pc),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn wilson_k_grows_with_temperature() {
        let record = ethane();
        let cold = wilson_k(&record, 250.0, 1e5);
        let hot = wilson_k(&record, 300.0, 1e5);
        assert!(hot > cold);
    }

    #[test]
    fn pure_component_estimate_scales_the_saturation_pressure() {
        let record = ethane();
        let t = 280.0;
        let z = arr1(&[1.0]);
        let expected = record.saturation_pressure(t) / wilson_k(&record, t, P_REF);
        let bubble = bubble_point_pressure(&[record], &z, t).unwrap();
        assert_relative_eq!(bubble, expected, max_relative = 1e-12);
    }

    #[test]
    fn estimates_check_composition_length() {
        let result = bubble_point_pressure(&[ethane()], &arr1(&[0.5, 0.5]), 280.0);
        assert!(matches!(result, Err(EosError::IncompatibleComponents(1, 2))));
    }
}
