//! Composite Simpson quadrature on a uniform midpoint grid over `[0, 1]`.
//!
//! Filament samples sit at `t_i = (i + 0.5) / n`, so neither end of the
//! parameter range is a node. The rule is assembled from three pieces:
//!
//! - composite Simpson across the interior `[t_0, t_{n-1}]`; when the
//!   interval count is odd, the two one-sided closures (Simpson followed by
//!   a 3/8 panel, and a 3/8 panel followed by Simpson) are averaged,
//! - one half-cell at each end, integrated exactly for the quadratic through
//!   the three nearest nodes.
//!
//! The resulting weights sum to one, read the same forwards and backwards,
//! and integrate quadratics exactly for `n >= 3`.

use std::ops::{AddAssign, Mul};

/// End-cap weights in units of `h`: integral over `[-h/2, 0]` of the
/// quadratic interpolating nodes `0, h, 2h`.
const CAP: [f64; 3] = [17.0 / 24.0, -7.0 / 24.0, 2.0 / 24.0];

/// Quadrature weights for `n` midpoint nodes on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidpointSimpson {
    n: usize,
}

impl MidpointSimpson {
    /// Creates the rule for `n` nodes. `n` must be at least one.
    #[must_use]
    pub fn new(n: usize) -> Self {
        debug_assert!(n >= 1, "quadrature needs at least one node");
        Self { n }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false; a rule has at least one node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Node spacing `h = 1 / n`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn spacing(&self) -> f64 {
        1.0 / self.n as f64
    }

    /// Parameter value of node `i`, `(i + 0.5) / n`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn node(&self, i: usize) -> f64 {
        (i as f64 + 0.5) / self.n as f64
    }

    /// Weight of node `i`, including the factor `h`.
    #[must_use]
    pub fn weight(&self, i: usize) -> f64 {
        if i >= self.n {
            return 0.0;
        }
        match self.n {
            1 => 1.0,
            2 => 0.5,
            n => {
                let m = n - 1;
                let interior = if m % 2 == 0 {
                    simpson(i, 0, m)
                } else {
                    let tail_closed = simpson(i, 0, m - 3) + three_eighths(i, m - 3);
                    let head_closed = three_eighths(i, 0) + simpson(i, 3, m);
                    0.5 * (tail_closed + head_closed)
                };
                (interior + cap(i) + cap(m - i)) * self.spacing()
            }
        }
    }

    /// Iterates over all weights in node order.
    pub fn weights(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.n).map(|i| self.weight(i))
    }

    /// Integrates `f` over `[0, 1]`, where `f(i, t_i)` returns the integrand
    /// at node `i`. Terms are accumulated in node order starting from `zero`.
    pub fn integrate<T, F>(&self, zero: T, mut f: F) -> T
    where
        T: AddAssign + Mul<f64, Output = T>,
        F: FnMut(usize, f64) -> T,
    {
        let mut acc = zero;
        for i in 0..self.n {
            acc += f(i, self.node(i)) * self.weight(i);
        }
        acc
    }
}

/// Composite Simpson coefficient of node `i` over nodes `a..=b`, in units of `h`.
/// `b - a` must be even; an empty panel (`a == b`) contributes nothing.
fn simpson(i: usize, a: usize, b: usize) -> f64 {
    if a == b || i < a || i > b {
        0.0
    } else if i == a || i == b {
        1.0 / 3.0
    } else if (i - a) % 2 == 1 {
        4.0 / 3.0
    } else {
        2.0 / 3.0
    }
}

/// Simpson 3/8 coefficient of node `i` over nodes `a..=a+3`, in units of `h`.
fn three_eighths(i: usize, a: usize) -> f64 {
    if i == a || i == a + 3 {
        3.0 / 8.0
    } else if i == a + 1 || i == a + 2 {
        9.0 / 8.0
    } else {
        0.0
    }
}

/// Half-cell coefficient of the node `k` places in from an end.
fn cap(k: usize) -> f64 {
    CAP.get(k).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn integrate_scalar(rule: &MidpointSimpson, f: impl Fn(f64) -> f64) -> f64 {
        rule.integrate(0.0, |_, t| f(t))
    }

    #[test]
    fn single_node_is_midpoint_rule() {
        let rule = MidpointSimpson::new(1);
        assert_relative_eq!(rule.node(0), 0.5);
        assert_relative_eq!(integrate_scalar(&rule, |t| 3.0 * t), 1.5);
    }

    #[test]
    fn two_nodes_integrate_linear_exactly() {
        let rule = MidpointSimpson::new(2);
        assert_relative_eq!(integrate_scalar(&rule, |t| 2.0 * t + 1.0), 2.0);
    }

    #[test]
    fn three_node_weights() {
        let rule = MidpointSimpson::new(3);
        let w: Vec<f64> = rule.weights().collect();
        assert_relative_eq!(w[0], 3.0 / 8.0, epsilon = 1e-15);
        assert_relative_eq!(w[1], 1.0 / 4.0, epsilon = 1e-15);
        assert_relative_eq!(w[2], 3.0 / 8.0, epsilon = 1e-15);
    }

    #[test]
    fn weights_sum_to_one() {
        for n in 1..40 {
            let total: f64 = MidpointSimpson::new(n).weights().sum();
            assert!((total - 1.0).abs() < 1e-13, "n = {n}: sum = {total}");
        }
    }

    #[test]
    fn weights_are_palindromic() {
        for n in 1..40 {
            let rule = MidpointSimpson::new(n);
            for i in 0..n {
                let (a, b) = (rule.weight(i), rule.weight(n - 1 - i));
                assert!((a - b).abs() < 1e-15, "n = {n}, i = {i}: {a} != {b}");
            }
        }
    }

    #[test]
    fn quadratics_are_exact_for_even_and_odd_counts() {
        for n in [3, 4, 5, 6, 7, 10, 11, 64] {
            let rule = MidpointSimpson::new(n);
            let got = integrate_scalar(&rule, |t| 3.0 * t * t - t + 2.0);
            assert!((got - 2.5).abs() < 1e-13, "n = {n}: {got}");
        }
    }

    #[test]
    fn cubics_are_exact_by_symmetry() {
        for n in [3, 4, 9, 12] {
            let rule = MidpointSimpson::new(n);
            let got = integrate_scalar(&rule, |t| t * t * t);
            assert!((got - 0.25).abs() < 1e-13, "n = {n}: {got}");
        }
    }

    #[test]
    fn smooth_integrand_converges() {
        let exact = 1.0 - 1.0_f64.cos();
        let coarse = integrate_scalar(&MidpointSimpson::new(11), f64::sin);
        let fine = integrate_scalar(&MidpointSimpson::new(101), f64::sin);
        assert!((fine - exact).abs() < (coarse - exact).abs());
        assert!((fine - exact).abs() < 1e-7);
    }

    #[test]
    fn vector_integrand() {
        let rule = MidpointSimpson::new(8);
        let v = rule.integrate(crate::math::Vector3::zeros(), |_, t| {
            crate::math::Vector3::new(1.0, t, t * t)
        });
        assert_relative_eq!(v, crate::math::Vector3::new(1.0, 0.5, 1.0 / 3.0), epsilon = 1e-13);
    }
}
