use anchor_lang::prelude::*;

use crate::{constants::*, contexts::*, errors::RaffleError, events::*, helpers::*, states::*};

/// ========================================
/// Automation & Oracle Instructions
/// ========================================

/// Evaluate whether a new round can start
///
/// Read-only. Automation simulates this instruction and reads the returned
/// status; nothing is written.
///
/// Returns: the upkeep status with its diagnostics
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
    let clock = Clock::get()?;
    Ok(ctx.accounts.raffle.check_upkeep(clock.unix_timestamp))
}

/// Start a round
///
/// Process:
/// 1. Re-evaluate the upkeep predicate (fails with diagnostics in the log)
/// 2. Validate the Switchboard randomness account committed in the previous slot
/// 3. Record the pending request and close the pool to entries
///
/// Args:
/// - ctx: Context containing the raffle and the committed randomness account
///
/// Returns: Result indicating success or failure
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;

    // ============ UPKEEP VALIDATION ============
    ctx.accounts.raffle.ensure_upkeep_needed(clock.unix_timestamp)?;

    // ============ RANDOMNESS VALIDATION ============
    let randomness_account = &ctx.accounts.randomness_account_data;
    let seed_slot =
        committed_seed_slot(randomness_account, &ctx.accounts.raffle.randomness_queue, &clock)?;

    // ============ REQUEST RECORDING ============
    let raffle = &mut ctx.accounts.raffle;
    let request = raffle.open_request(randomness_account.key(), seed_slot, clock.unix_timestamp)?;

    emit!(RequestedRaffleWinner {
        request_id: request.request_id,
        randomness_account: request.randomness_account,
        seed_slot,
        num_words: NUM_WORDS,
        callback_compute_limit: raffle.callback_compute_limit,
        raffle: raffle.key(),
    });

    Ok(())
}

/// Deliver the revealed randomness, pay the winner and reopen the pool
///
/// Process:
/// 1. Match the request id and randomness account against the pending request
/// 2. Read the revealed value (the commit must be the one recorded)
/// 3. Draw the winner without mutating the raffle
/// 4. Pay out the pot
/// 5. Commit the reset only after the payout succeeded
///
/// Args:
/// - ctx: Context containing the raffle, randomness account and winner
/// - request_id: Correlation id emitted when the round started
///
/// Returns: Result indicating success or failure
pub fn fulfill_random_words(ctx: Context<FulfillRandomWords>, request_id: u64) -> Result<()> {
    let clock = Clock::get()?;

    // ============ REQUEST MATCHING ============
    let randomness_key = ctx.accounts.randomness_account_data.key();
    let request = ctx
        .accounts
        .raffle
        .matching_request(request_id, &randomness_key)?;

    // ============ RANDOMNESS EXTRACTION ============
    let (seed_slot, random_value) =
        revealed_randomness(&ctx.accounts.randomness_account_data, &clock)?;
    ensure_commit_unchanged(&request, seed_slot)?;

    // ============ WINNER SELECTION ============
    let draw = ctx.accounts.raffle.draw(&request, &random_value)?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        draw.winner,
        RaffleError::WinnerMismatch
    );
    msg!(
        "Request {}: winner index {} of {}",
        request_id,
        draw.winner_index,
        ctx.accounts.raffle.player_count()
    );

    // ============ PAYOUT ============
    transfer_from_raffle(
        &ctx.accounts.raffle.to_account_info(),
        &ctx.accounts.winner.to_account_info(),
        draw.prize,
    )?;

    // ============ ROUND RESET ============
    let raffle = &mut ctx.accounts.raffle;
    let round = raffle.complete_round(&draw, clock.unix_timestamp)?;

    emit!(WinnerPicked {
        winner: draw.winner,
        prize: draw.prize,
        request_id,
        winner_index: draw.winner_index as u32,
        round,
        raffle: raffle.key(),
    });

    Ok(())
}
