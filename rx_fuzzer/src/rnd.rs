/**
 * Seeded randomness for the fuzzer. Every thread owns its generator, a run is
 * reproduced by seeding it with the reported seed again.
 */

use std::cell::RefCell;
use std::ops::Range;
use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

struct Dice {
    seed: u64,
    rng: Mcg128Xsl64,
}

impl Dice {
    fn seeded(seed: u64) -> Self {
        Self{ seed, rng: Mcg128Xsl64::seed_from_u64(seed) }
    }
}

thread_local! {
    static DICE: RefCell<Dice> = RefCell::new(Dice::seeded(0));
}

fn roll<T, F>(f: F) -> T where F : FnOnce(&mut Mcg128Xsl64) -> T {
    DICE.with(|dice| f(&mut dice.borrow_mut().rng))
}

pub fn seed_from_system_time() -> u64 {
    SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn current_seed() -> u64 {
    DICE.with(|dice| dice.borrow().seed)
}

/// Restarts the generator of this thread from the seed.
pub fn set_seed(seed: u64) {
    DICE.with(|dice| *dice.borrow_mut() = Dice::seeded(seed));
}

/// A number in the non-empty range.
pub fn rand_range(r: Range<usize>) -> usize {
    roll(|rng| rng.gen_range(r.start, r.end))
}

/// True with the given chance, out of a hundred.
pub fn chance(percent: u32) -> bool {
    let rolled: u32 = roll(|rng| rng.gen_range(0, 100));
    rolled < percent
}

pub fn sample<T>(items: &[T]) -> &T {
    &items[rand_range(0..items.len())]
}

pub fn rand_string(len: Range<usize>, charset: &[char]) -> String {
    (0..rand_range(len)).map(|_| *sample(charset)).collect()
}
