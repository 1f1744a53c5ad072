use anchor_lang::prelude::*;
/// Constants module for the Raffle program
///
/// Contains all program-wide constants and the default configuration profile.

/// Seed for the raffle PDA (one pool per program)
#[constant]
pub const RAFFLE: &[u8] = b"raffle";

/// Maximum number of entries a single round can hold.
/// The raffle account is sized for this many player keys at initialization.
#[constant]
pub const MAX_PLAYERS: usize = 250;

/// Random words consumed per round
#[constant]
pub const NUM_WORDS: u32 = 1;

/// Upper bound for the fulfillment compute budget (Solana per-transaction limit)
#[constant]
pub const MAX_CALLBACK_COMPUTE_LIMIT: u32 = 1_400_000;

/// Shortest request timeout the admin may configure, in seconds.
/// Bounds how often an unanswered request can be cancelled and re-requested.
#[constant]
pub const MIN_REQUEST_TIMEOUT: u64 = 300;

/// Default configuration (local network profile)

/// 0.01 SOL
pub const DEFAULT_ENTRANCE_FEE: u64 = 10_000_000;

/// Seconds between rounds
pub const DEFAULT_INTERVAL: u64 = 60;

/// Compute units the crank should request for fulfillment
pub const DEFAULT_CALLBACK_COMPUTE_LIMIT: u32 = 500_000;

/// Seconds before the admin may cancel an unanswered randomness request
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 3_600;
