use crate::domain::*;
use crate::stencil::*;
use crate::util::*;

/// Collect the stencil arguments for `world_coord` from `input`,
/// letting `bc` supply any neighbor that falls outside the grid.
pub fn gather_args<BC, Rule>(
    stencil: &Stencil<Rule>,
    bc: &BC,
    input: &Grid<2>,
    world_coord: &Coord<2>,
) -> [f64; 4]
where
    Rule: UpdateRule,
    BC: BCCheck<2>,
{
    stencil
        .directions()
        .map(|direction| input.neighbor(bc, direction, world_coord))
}
