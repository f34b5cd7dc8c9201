//! Analytic solution of cubic equations.

/// Returns all real roots of the cubic a x³ + b x² + c x + d = 0.
///
/// The cubic is depressed to t³ + f t + g = 0 and solved in closed form:
/// Cardano's formula on the one-real-root branch, the trigonometric
/// identity on the three-real-roots branch. Non-finite results are
/// filtered out, so the returned vector contains one or three roots in
/// unspecified order.
///
/// The caller is responsible for a ≠ 0.
pub fn real_roots(coefficients: [f64; 4]) -> Vec<f64> {
    let [a, b, c, d] = coefficients;
    let f = (3.0 * c / a - b.powi(2) / a.powi(2)) / 3.0;
    let g = (2.0 * b.powi(3) / a.powi(3) - 9.0 * b * c / a.powi(2) + 27.0 * d / a) / 27.0;
    let h = 0.25 * g.powi(2) + f.powi(3) / 27.0;
    let shift = -b / (3.0 * a);

    let roots = if h > 0.0 {
        // one real root, two complex conjugates
        let s = (-0.5 * g + h.sqrt()).cbrt();
        let t = (-0.5 * g - h.sqrt()).cbrt();
        vec![s + t + shift]
    } else {
        // three real roots
        let i = (0.25 * g.powi(2) - h).sqrt();
        let j = i.cbrt();
        // clamp against floating point overshoot; for i = 0 the cubic has a
        // triple root at the shift and the angle is irrelevant
        let arg = if i > 0.0 {
            (-0.5 * g / i).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let k = arg.acos();
        let m = (k / 3.0).cos();
        let n = 3.0_f64.sqrt() * (k / 3.0).sin();
        vec![
            2.0 * j * m + shift,
            -j * (m + n) + shift,
            -j * (m - n) + shift,
        ]
    };

    roots.into_iter().filter(|r| r.is_finite()).collect()
}

#[cfg(test)]
mod tests {
    use super::real_roots;
    use approx::assert_relative_eq;

    fn sorted(mut roots: Vec<f64>) -> Vec<f64> {
        roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
        roots
    }

    #[test]
    fn three_distinct_roots() {
        // (x - 1)(x - 2)(x - 3) = x³ - 6x² + 11x - 6
        let roots = sorted(real_roots([1.0, -6.0, 11.0, -6.0]));
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 1.0, max_relative = 1e-12);
        assert_relative_eq!(roots[1], 2.0, max_relative = 1e-12);
        assert_relative_eq!(roots[2], 3.0, max_relative = 1e-12);
    }

    #[test]
    fn single_real_root() {
        // (x - 1)(x² + 1) = x³ - x² + x - 1
        let roots = real_roots([1.0, -1.0, 1.0, -1.0]);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0, max_relative = 1e-12);
    }

    #[test]
    fn triple_root() {
        // (x - 2)³ = x³ - 6x² + 12x - 8
        let roots = real_roots([1.0, -6.0, 12.0, -8.0]);
        assert!(!roots.is_empty());
        for r in roots {
            assert_relative_eq!(r, 2.0, max_relative = 1e-6);
        }
    }

    #[test]
    fn non_monic_coefficients() {
        // 2(x + 1)(x - 4)(x - 5) = 2x³ - 16x² + 22x + 40
        let roots = sorted(real_roots([2.0, -16.0, 22.0, 40.0]));
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], -1.0, max_relative = 1e-12);
        assert_relative_eq!(roots[1], 4.0, max_relative = 1e-12);
        assert_relative_eq!(roots[2], 5.0, max_relative = 1e-12);
    }

    #[test]
    fn negative_single_root() {
        // (x + 3)(x² + x + 1) = x³ + 4x² + 4x + 3
        let roots = real_roots([1.0, 4.0, 4.0, 3.0]);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], -3.0, max_relative = 1e-12);
    }
}
