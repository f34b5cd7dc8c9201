use super::{wilson_k, PhaseSplit, SolverOptions};
use crate::eos::{CubicEos, CubicModel, Phase};
use crate::errors::{EosError, EosResult};
use crate::{log_iter, log_result};
use ndarray::Array1;

const MAX_ITER_TP: usize = 100;
const TOL_TP: f64 = 1e-6;
const MAX_ITER_BISECTION: usize = 100;

/// Rachford-Rice residual for a vapor fraction `v`.
fn rachford_rice(feed: &Array1<f64>, k: &Array1<f64>, v: f64) -> f64 {
    feed.iter()
        .zip(k.iter())
        .map(|(zi, ki)| zi * (ki - 1.0) / (1.0 + v * (ki - 1.0)))
        .sum()
}

/// Solves the Rachford-Rice equation for the vapor fraction by bisection
/// over [0, 1].
///
/// The residual decreases monotonically in the vapor fraction for
/// positive K values, so a positive residual moves the lower bound up
/// and a negative one moves the upper bound down. If the residual never
/// changes sign (all K on the same side of 1) the bisection walks to the
/// corresponding boundary.
fn bisect_vapor_fraction(feed: &Array1<f64>, k: &Array1<f64>, tol: f64) -> f64 {
    let mut lower = 0.0;
    let mut upper = 1.0;
    let mut v = 0.5;
    for _ in 0..MAX_ITER_BISECTION {
        v = 0.5 * (lower + upper);
        let residual = rachford_rice(feed, k, v);
        if residual.abs() < tol {
            break;
        }
        if residual > 0.0 {
            lower = v;
        } else {
            upper = v;
        }
    }
    v
}

/// # Flash calculations
impl<M: CubicModel> CubicEos<M> {
    /// Performs a Tp flash calculation for the given feed composition.
    ///
    /// K values are seeded with the Wilson correlation and updated by
    /// successive substitution from the fugacity coefficients of the
    /// candidate phases until the largest componentwise relative change
    /// drops below the tolerance. If the iteration budget runs out
    /// first, the last iterate is returned with
    /// [converged](PhaseSplit::converged) set to `false`.
    pub fn tp_flash(&self, feed: &Array1<f64>, options: SolverOptions) -> EosResult<PhaseSplit> {
        let components = self.components();
        if feed.len() != components.len() {
            return Err(EosError::IncompatibleComponents(
                components.len(),
                feed.len(),
            ));
        }
        for &zi in feed {
            if !(0.0..=1.0).contains(&zi) {
                return Err(EosError::InvalidState(
                    String::from("Tp flash"),
                    String::from("feed mole fraction"),
                    zi,
                ));
            }
        }
        let total = feed.sum();
        if (total - 1.0).abs() > 1e-8 {
            return Err(EosError::InvalidState(
                String::from("Tp flash"),
                String::from("feed composition sum"),
                total,
            ));
        }

        let (max_iter, tol, verbosity) = options.unwrap_or(MAX_ITER_TP, TOL_TP);

        let mut k = Array1::from_shape_fn(components.len(), |i| {
            wilson_k(&components[i], self.temperature(), self.pressure())
        });
        if !k.iter().all(|ki| ki.is_finite() && *ki > 0.0) {
            return Err(EosError::IterationFailed(String::from("Tp flash")));
        }

        log_iter!(verbosity, " iter |   K residual   | vapor fraction");
        log_iter!(verbosity, "{:-<40}", "");

        let mut iteration = 0;
        loop {
            iteration += 1;
            let v = bisect_vapor_fraction(feed, &k, tol);
            let x = Array1::from_shape_fn(feed.len(), |i| feed[i] / (1.0 + v * (k[i] - 1.0)));
            let y = &k * &x;

            let phi_liquid = self.fugacity_coefficients(&x, Phase::Liquid)?;
            let phi_vapor = self.fugacity_coefficients(&y, Phase::Vapor)?;
            let k_new = phi_liquid / phi_vapor;
            if !k_new.iter().all(|ki| ki.is_finite() && *ki > 0.0) {
                return Err(EosError::IterationFailed(String::from("Tp flash")));
            }

            let residual = k_new
                .iter()
                .zip(k.iter())
                .map(|(kn, ko)| ((kn - ko) / ko).abs())
                .fold(0.0, f64::max);
            log_iter!(verbosity, " {:4} | {:14.8e} | {:.12}", iteration, residual, v);

            let converged = residual < tol;
            if converged || iteration >= max_iter {
                if converged {
                    log_result!(
                        verbosity,
                        "Tp flash: calculation converged in {} step(s)\n",
                        iteration
                    );
                } else {
                    log_result!(
                        verbosity,
                        "Tp flash: exhausted the iteration budget of {} step(s)\n",
                        max_iter
                    );
                }
                return Ok(PhaseSplit {
                    vapor_fraction: v,
                    liquid: x,
                    vapor: y,
                    converged,
                    iterations: iteration,
                });
            }
            k = k_new;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr1;

    #[test]
    fn all_k_below_one_drives_vapor_fraction_to_zero() {
        let feed = arr1(&[0.4, 0.6]);
        let k = arr1(&[0.3, 0.8]);
        let v = bisect_vapor_fraction(&feed, &k, 1e-6);
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn all_k_above_one_drives_vapor_fraction_to_one() {
        let feed = arr1(&[0.4, 0.6]);
        let k = arr1(&[1.5, 4.0]);
        let v = bisect_vapor_fraction(&feed, &k, 1e-6);
        assert_abs_diff_eq!(v, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn bisection_finds_the_rachford_rice_root() {
        let feed = arr1(&[0.5, 0.5]);
        let k = arr1(&[2.0, 0.5]);
        let v = bisect_vapor_fraction(&feed, &k, 1e-10);
        assert_abs_diff_eq!(rachford_rice(&feed, &k, v), 0.0, epsilon = 1e-9);
        // symmetric K values around 1 put the split in the middle
        assert_abs_diff_eq!(v, 0.5, epsilon = 1e-6);
    }
}
