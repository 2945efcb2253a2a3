mod names;
mod transaction_synthesizer;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use transaction_synthesizer::TransactionSynthesizer;

const STREAM_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;

/// Builds the isolated random stream for the account at `position` within a run.
///
/// Streams depend only on the run seed and the position, so accounts never share
/// RNG state and a fixed seed reproduces every account's sequence.
pub fn account_rng(seed: u64, position: usize) -> StdRng {
    let offset = (position as u64).wrapping_add(1).wrapping_mul(STREAM_SPACING);
    StdRng::seed_from_u64(seed ^ offset)
}
