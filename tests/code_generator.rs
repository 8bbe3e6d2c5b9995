use rand::Rng;
use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

/// Generates status-code-like integers across the whole `u16` range with a
/// bias towards 0–999 where the catalogs live.
pub fn generate_codes(seed: u64, count: usize) -> Vec<u16> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut codes = Vec::with_capacity(count);

    for round in 0..count {
        let code = if round % 4 == 0 {
            rng.random::<u16>()
        } else {
            rng.random_range(0..1000)
        };

        codes.push(code);
    }

    codes
}
