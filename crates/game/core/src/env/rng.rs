//! Random draws used by the simulation.
//!
//! Every random decision goes through an injected [`rand::Rng`], so seeding
//! the generator makes a whole session reproducible.

use rand::Rng;

/// Uniformly picks an index in `0..len`, or `None` for an empty collection.
pub fn pick_index<R: Rng>(rng: &mut R, len: usize) -> Option<usize> {
    (len > 0).then(|| rng.gen_range(0..len))
}

/// Uniformly picks an element of `items`.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    pick_index(rng, items.len()).map(|index| &items[index])
}

/// Rolls a trigger probability in `[0, 1]`.
///
/// The roll fails when the uniform draw exceeds `chance`, so `1.0` always passes.
pub fn roll_chance<R: Rng>(rng: &mut R, chance: f64) -> bool {
    rng.r#gen::<f64>() <= chance
}
