use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::Point;

/// Parameters for drawing a random problem instance: how many points of each kind, and the
/// rectangle they are drawn uniformly from.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceParams {
    pub terminal_count: usize,
    pub optional_count: usize,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Fixes the draw when set, otherwise the generator is seeded from system entropy.
    pub seed: Option<u64>,
}

impl Default for InstanceParams {
    fn default() -> Self {
        InstanceParams {
            terminal_count: 0,
            optional_count: 0,
            x_range: (0.0, 10.0),
            y_range: (0.0, 10.0),
            seed: None,
        }
    }
}

/// Draws terminals and optional vertices uniformly from the rectangle in `params`.
///
/// # Returns
/// * The terminals and the optional vertices, in that order.
pub fn random_instance(params: &InstanceParams) -> (Vec<Point<f64>>, Vec<Point<f64>>) {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let terminals = random_points(&mut rng, params, params.terminal_count);
    let optionals = random_points(&mut rng, params, params.optional_count);
    (terminals, optionals)
}

fn random_points<R: Rng>(rng: &mut R, params: &InstanceParams, count: usize) -> Vec<Point<f64>> {
    (0..count)
        .map(|_| Point::new(
            uniform(rng, params.x_range),
            uniform(rng, params.y_range),
        ))
        .collect()
}

fn uniform<R: Rng>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    // A degenerate or reversed range is not an error, just a narrow rectangle
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    if low == high {
        low
    } else {
        rng.gen_range(low..high)
    }
}
