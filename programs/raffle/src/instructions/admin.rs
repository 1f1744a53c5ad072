use anchor_lang::prelude::*;

use crate::{contexts::*, events::*, states::InitializeRaffleParams};

/// ========================================
/// Admin Instructions
/// ========================================

/// Initialize the raffle
///
/// Creates the raffle PDA with the caller as admin and opens the first round.
/// The configuration is fixed from here on.
///
/// Args:
/// - ctx: Context containing the raffle PDA and admin accounts
/// - params: Entrance fee, interval and randomness settings
///
/// Returns: Result indicating success or failure
pub fn initialize(ctx: Context<InitializeRaffle>, params: InitializeRaffleParams) -> Result<()> {
    let clock = Clock::get()?;
    let admin = ctx.accounts.admin.key();
    let raffle = &mut ctx.accounts.raffle;

    raffle.configure(admin, ctx.bumps.raffle, &params, clock.unix_timestamp)?;

    emit!(RaffleInitialized {
        admin,
        entrance_fee: raffle.entrance_fee,
        interval: raffle.interval,
        randomness_queue: raffle.randomness_queue,
        raffle: raffle.key(),
    });
    Ok(())
}

/// Cancel an unanswered randomness request
///
/// Only allowed once the request is older than the configured timeout.
/// The round reopens with its players and pot intact, so the next upkeep
/// requests fresh randomness. A late reveal for the cancelled request is
/// rejected as unknown.
///
/// Args:
/// - ctx: Context containing the raffle and admin accounts
///
/// Returns: Result indicating success or failure
pub fn cancel_randomness_request(ctx: Context<AdminAction>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    let request = raffle.cancel_request(clock.unix_timestamp)?;
    msg!("Cancelled randomness request {}", request.request_id);

    emit!(RandomnessRequestCancelled {
        admin: ctx.accounts.admin.key(),
        request_id: request.request_id,
        randomness_account: request.randomness_account,
        raffle: raffle.key(),
    });
    Ok(())
}

/// Transfer admin privileges to a new account
///
/// Args:
/// - ctx: Context containing the raffle to modify
/// - new_admin: Public key of the new admin
///
/// Returns: Result indicating success or failure
pub fn transfer_admin(ctx: Context<AdminAction>, new_admin: Pubkey) -> Result<()> {
    let previous_admin = ctx.accounts.raffle.admin;
    ctx.accounts.raffle.admin = new_admin;

    emit!(AdminTransferred {
        previous_admin,
        new_admin,
        raffle: ctx.accounts.raffle.key()
    });
    Ok(())
}
