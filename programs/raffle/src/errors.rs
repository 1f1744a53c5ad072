/// Error definitions for the Raffle program
///
/// Contains all custom error types that can be returned by the program instructions.
use anchor_lang::prelude::*;

/// Custom error codes for the raffle program
#[error_code]
pub enum RaffleError {
    #[msg("The payment is below the entrance fee.")]
    InsufficientFee,
    #[msg("The raffle is not open for entries.")]
    NotOpen,
    #[msg("Upkeep is not needed: the round cannot be started yet.")]
    UpkeepNotNeeded,
    #[msg("The randomness delivery does not match the outstanding request.")]
    UnknownRequest,
    #[msg("The payout to the winner could not be completed.")]
    TransferFailed,
    #[msg("The raffle has reached its maximum number of entries.")]
    RaffleFull,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
    #[msg("The entrance fee must be greater than zero.")]
    InvalidEntranceFee,
    #[msg("The round interval must be greater than zero.")]
    InvalidInterval,
    #[msg("The callback compute limit is outside the allowed range.")]
    InvalidCallbackLimit,
    #[msg("The request timeout is below the minimum allowed.")]
    InvalidRequestTimeout,
    #[msg("The randomness account is invalid")]
    InvalidRandomnessAccount,
    #[msg("The provided randomness account is owned by the wrong program.")]
    InvalidRandomnessOwner,
    #[msg("The randomness queue is unset or does not match the configured queue.")]
    InvalidRandomnessQueue,
    #[msg("The randomness must be committed in the slot right before the round starts.")]
    RandomnessNotCurrent,
    #[msg("The randomness was already revealed before the round started.")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness has not been resolved by the oracle yet.")]
    RandomnessNotResolved,
    #[msg("The winner account does not match the drawn winner.")]
    WinnerMismatch,
    #[msg("There are no players in the current round.")]
    NoPlayers,
    #[msg("The randomness request has not timed out yet.")]
    RequestNotExpired,
    #[msg("No randomness request is outstanding.")]
    NotCalculating,
    #[msg("Only the raffle admin can perform this action.")]
    NotAdmin,
    #[msg("Insufficient funds")]
    InsufficientFunds,
}
