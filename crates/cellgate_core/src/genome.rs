//! Random rule tables.

use cellgate_data::{GateCode, RuleTable};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Draws every rule uniformly from the four gate codes.
pub fn random_rule_table<R: Rng + ?Sized>(rng: &mut R) -> RuleTable {
    RuleTable::from_fn(|_| GateCode::ALL[rng.gen_range(0..GateCode::ALL.len())])
}

/// `count` random tables. A fixed `seed` makes the batch reproducible.
#[must_use]
pub fn random_rule_tables(count: usize, seed: Option<u64>) -> Vec<RuleTable> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    (0..count).map(|_| random_rule_table(&mut rng)).collect()
}
