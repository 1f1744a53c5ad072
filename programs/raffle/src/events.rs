/// Events module for the Raffle program
/// Contains all event structures that are emitted by the program instructions
/// for off-chain tracking and monitoring.
use anchor_lang::prelude::*;

/// Emitted when the raffle is initialized
#[event]
pub struct RaffleInitialized {
    pub admin: Pubkey,
    pub entrance_fee: u64,
    pub interval: u64,
    pub randomness_queue: Pubkey,
    pub raffle: Pubkey,
}

/// Emitted when a player enters the current round
#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    pub amount: u64,
    pub player_count: u32,
    pub pot: u64,
    pub raffle: Pubkey,
}

/// Emitted when a round starts and randomness is requested
#[event]
pub struct RequestedRaffleWinner {
    pub request_id: u64,
    pub randomness_account: Pubkey,
    pub seed_slot: u64,
    pub num_words: u32,
    pub callback_compute_limit: u32,
    pub raffle: Pubkey,
}

/// Emitted when the winner is paid and the pool reopens
#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub prize: u64,
    pub request_id: u64,
    pub winner_index: u32,
    pub round: u64,
    pub raffle: Pubkey,
}

/// Emitted when the admin abandons an unanswered randomness request
#[event]
pub struct RandomnessRequestCancelled {
    pub admin: Pubkey,
    pub request_id: u64,
    pub randomness_account: Pubkey,
    pub raffle: Pubkey,
}

/// Emitted when admin privileges are transferred
#[event]
pub struct AdminTransferred {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
    pub raffle: Pubkey,
}
