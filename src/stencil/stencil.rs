use crate::domain::Direction;

/// Computes a cell's new value from its four orthogonal neighbors.
/// Rules are pure and know nothing about grid position.
pub trait UpdateRule {
    fn update(&self, right: f64, top: f64, left: f64, bottom: f64) -> f64;
}

impl<F> UpdateRule for F
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    #[inline]
    fn update(&self, right: f64, top: f64, left: f64, bottom: f64) -> f64 {
        self(right, top, left, bottom)
    }
}

/// For linear rules, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<Rule: UpdateRule>(rule: &Rule) -> [f64; 4] {
    let mut weights = [0.0; 4];
    let mut arg_buffer = [0.0; 4];
    for n in 0..4 {
        arg_buffer[n] = 1.0;
        weights[n] = rule.update(
            arg_buffer[0],
            arg_buffer[1],
            arg_buffer[2],
            arg_buffer[3],
        );
        arg_buffer[n] = 0.0;
    }
    weights
}

/// Four point stencil: an update rule paired with the neighbor
/// directions it reads, in argument order (right, top, left, bottom).
pub struct Stencil<Rule> {
    rule: Rule,
}

impl<Rule: UpdateRule> Stencil<Rule> {
    /// Neighbor directions in the order they are handed to the rule.
    /// Top is the `Up` neighbor, bottom the `Down` neighbor.
    pub const DIRECTIONS: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    pub fn new(rule: Rule) -> Self {
        Stencil { rule }
    }

    pub fn directions(&self) -> [Direction; 4] {
        Self::DIRECTIONS
    }

    /// Linear weights of the rule, in `DIRECTIONS` order.
    /// Only meaningful for linear rules.
    pub fn weights(&self) -> [f64; 4] {
        extract_weights(&self.rule)
    }

    #[inline]
    pub fn apply(&self, args: &[f64; 4]) -> f64 {
        self.rule.update(args[0], args[1], args[2], args[3])
    }
}
