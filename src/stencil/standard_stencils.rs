use crate::stencil::*;

/// A discrete form of the heat equation, with unit diffusivity,
/// time step, and spacing.
/// The `-2 * cell` terms of both second differences cancel against
/// the `+ cell` of the explicit step, leaving the neighbor average.
#[derive(Debug, Copy, Clone, Default)]
pub struct HeatEquation;

impl UpdateRule for HeatEquation {
    #[inline]
    fn update(&self, right: f64, top: f64, left: f64, bottom: f64) -> f64 {
        let d_x = right + left;
        let d_y = top + bottom;
        (d_x + d_y) / 4.0
    }
}

pub fn heat_eqn() -> Stencil<HeatEquation> {
    Stencil::new(HeatEquation)
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn heat_eqn_is_neighbor_average() {
        let s = heat_eqn();
        assert_approx_eq!(f64, s.apply(&[100.0, 0.0, 0.0, 0.0]), 25.0);
        assert_approx_eq!(f64, s.apply(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_approx_eq!(f64, s.apply(&[-4.0, 4.0, -8.0, 8.0]), 0.0);
    }

    #[test]
    fn heat_eqn_weights_are_uniform() {
        for w in heat_eqn().weights() {
            assert_approx_eq!(f64, w, 0.25);
        }
    }
}
