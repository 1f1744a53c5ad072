use anchor_lang::prelude::*;

use crate::{contexts::*, events::*, helpers::*};

/// ========================================
/// User Instructions
/// ========================================

/// Enter the current round
///
/// The payment is validated against the entrance fee and the round state
/// before any lamports move. Paying more than the fee is accepted and the
/// whole amount goes into the pot.
///
/// Args:
/// - ctx: Context containing the raffle, player and system program
/// - amount: Lamports paid for this entry
///
/// Returns: Result indicating success or failure
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    // ============ ENTRY VALIDATION ============
    ctx.accounts.raffle.ensure_accepts_entry(amount)?;

    // ============ PAYMENT PROCESSING ============
    collect_entrance_fee(&ctx, amount)?;

    // ============ LEDGER UPDATE ============
    let player = ctx.accounts.player.key();
    let raffle = &mut ctx.accounts.raffle;
    raffle.record_entry(player, amount)?;

    emit!(RaffleEntered {
        player,
        amount,
        player_count: raffle.player_count() as u32,
        pot: raffle.pot,
        raffle: raffle.key(),
    });

    Ok(())
}
