use crate::domain::*;
use crate::stencil::*;

/// One synchronous sweep from `input` into `output`.
/// Every non-source cell is recomputed from the `input` snapshot,
/// source cells are copied through with their pinned value.
/// Returns the heat difference `sum(output) - sum(input)`.
pub fn sweep<BC, Rule>(
    bc: &BC,
    stencil: &Stencil<Rule>,
    sources: &SourceSet,
    input: &Grid<2>,
    output: &mut Grid<2>,
) -> f64
where
    BC: BCCheck<2>,
    Rule: UpdateRule,
{
    profiling::scope!("solver::sweep");
    debug_assert_eq!(input.aabb(), output.aabb());
    debug_assert_eq!(input.aabb(), sources.aabb());

    let energy_before = input.sum();
    let aabb = *input.aabb();
    for (i, value_mut) in output.buffer_mut().iter_mut().enumerate() {
        *value_mut = match sources.pinned_linear(i) {
            Some(pinned) => pinned,
            None => {
                let world_coord = aabb.linear_to_coord(i);
                let args = gather_args(stencil, bc, input, &world_coord);
                stencil.apply(&args)
            }
        };
    }
    let energy_after = output.sum();
    energy_after - energy_before
}

/// Apply `steps` sweeps, swapping buffers between them.
/// The result ends up in `input`; the last delta is returned.
pub fn box_apply<BC, Rule>(
    bc: &BC,
    stencil: &Stencil<Rule>,
    sources: &SourceSet,
    input: &mut Grid<2>,
    output: &mut Grid<2>,
    steps: usize,
) -> f64
where
    BC: BCCheck<2>,
    Rule: UpdateRule,
{
    let mut delta = 0.0;
    for _ in 0..steps {
        delta = sweep(bc, stencil, sources, input, output);
        std::mem::swap(input, output);
    }
    delta
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::stencil::standard_stencils::heat_eqn;
    use crate::util::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn identity_rule_keeps_constant_field() {
        let aabb = AABB::new(matrix![0, 9; 0, 9]);
        let stencil = Stencil::new(|r: f64, t: f64, l: f64, b: f64| {
            (r + t + l + b) / 4.0
        });
        let bc = ConstantCheck::new(1.0, aabb);
        let sources = SourceSet::new(aabb, &[]).unwrap();
        let mut input = Grid::new(aabb);
        input.set_values(|_| 1.0);
        let mut output = Grid::new(aabb);
        let delta = box_apply(&bc, &stencil, &sources, &mut input, &mut output, 10);
        assert_approx_eq!(f64, delta, 0.0);
        for x in input.buffer() {
            assert_approx_eq!(f64, *x, 1.0);
        }
    }

    #[test]
    fn sweep_reads_only_the_prior_snapshot() {
        // A 1x4 row with heat on the far left. In place updating would
        // carry heat more than one cell per sweep.
        let aabb = AABB::new(matrix![0, 0; 0, 3]);
        let sources = SourceSet::new(aabb, &[]).unwrap();
        let bc = ConstantCheck::new(0.0, aabb);
        let mut input = Grid::new(aabb);
        input.set(&vector![0, 0], 8.0);
        let mut output = Grid::new(aabb);
        sweep(&bc, &heat_eqn(), &sources, &input, &mut output);
        assert_eq!(output.buffer(), &[0.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn delta_is_sum_difference() {
        let aabb = AABB::new(matrix![0, 2; 0, 2]);
        let sources = SourceSet::new(aabb, &[]).unwrap();
        let bc = ConstantCheck::new(0.0, aabb);
        let mut input = Grid::new(aabb);
        input.set(&vector![1, 1], 4.0);
        let mut output = Grid::new(aabb);
        let delta = sweep(&bc, &heat_eqn(), &sources, &input, &mut output);
        // Center heat spreads to four neighbors, center goes to zero
        assert_approx_eq!(f64, output.sum(), 4.0);
        assert_approx_eq!(f64, delta, output.sum() - input.sum());
        assert_approx_eq!(f64, delta, 0.0);

        let mut next = Grid::new(aabb);
        let delta = sweep(&bc, &heat_eqn(), &sources, &output, &mut next);
        assert!(delta < 0.0);
        assert_approx_eq!(f64, delta, next.sum() - output.sum());
    }
}
