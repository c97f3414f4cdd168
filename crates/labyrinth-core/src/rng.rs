//! Deterministic pseudo-random generation.
//!
//! The game deliberately uses a seeded hash-like formula instead of a
//! real RNG: the step counter seeds every roll, so a run that replays
//! the same commands replays the same events. That reproducibility is
//! a feature the tests rely on.

/// Map `seed` to a value in `[0, modulo)`.
///
/// Returns 0 when `modulo` is 0. Pure function: the same inputs always
/// yield the same output.
pub fn pseudo_random(seed: u64, modulo: u32) -> u32 {
    if modulo == 0 {
        return 0;
    }
    let x = (seed as f64 * 12.9898).sin() * 43758.5453;
    let frac = x - x.floor();
    // frac is in [0, 1); the min guards the one case where rounding in
    // the multiply could land exactly on `modulo`.
    ((frac * f64::from(modulo)) as u32).min(modulo - 1)
}
