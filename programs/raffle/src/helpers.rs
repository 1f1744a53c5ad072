use crate::{contexts::*, errors::RaffleError, states::PendingRequest};

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use switchboard_on_demand::accounts::RandomnessAccountData;

/// ========================================
/// Payment Helper Functions
/// ========================================

/// Moves the entrance payment from the player into the raffle account
///
/// Args:
/// - ctx: EnterRaffle context containing the player and raffle accounts
/// - amount: Lamports paid for this entry (already validated against the fee)
///
/// Returns: Result indicating success or failure of the payment
pub fn collect_entrance_fee(ctx: &Context<EnterRaffle>, amount: u64) -> Result<()> {
    // ============ BALANCE VERIFICATION ============
    require!(
        ctx.accounts.player.lamports() >= amount,
        RaffleError::InsufficientFunds
    );

    // ============ TRANSFER EXECUTION ============
    let cpi_context = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.player.to_account_info(),
            to: ctx.accounts.raffle.to_account_info(),
        },
    );
    system_program::transfer(cpi_context, amount)?;

    Ok(())
}

/// Pays `amount` lamports out of the raffle account to `recipient`
///
/// The raffle account is program owned, so lamports are moved directly.
/// The rent-exempt reserve of the raffle account is never touched; any
/// shortfall fails the whole transaction with `TransferFailed`.
pub fn transfer_from_raffle<'info>(
    raffle: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(recipient.is_writable, RaffleError::TransferFailed);
    let reserve = Rent::get()?.minimum_balance(raffle.data_len());
    let (raffle_balance, recipient_balance) =
        payout_balances(raffle.lamports(), reserve, recipient.lamports(), amount)?;

    **raffle.try_borrow_mut_lamports()? = raffle_balance;
    **recipient.try_borrow_mut_lamports()? = recipient_balance;
    Ok(())
}

/// New (raffle, recipient) balances after paying `amount`, keeping `reserve` in the raffle
pub fn payout_balances(
    raffle_lamports: u64,
    reserve: u64,
    recipient_lamports: u64,
    amount: u64,
) -> Result<(u64, u64)> {
    let available = raffle_lamports
        .checked_sub(reserve)
        .ok_or(RaffleError::TransferFailed)?;
    require!(amount <= available, RaffleError::TransferFailed);
    let recipient_balance = recipient_lamports
        .checked_add(amount)
        .ok_or(RaffleError::TransferFailed)?;

    Ok((raffle_lamports - amount, recipient_balance))
}

/// ========================================
/// Randomness Helper Functions
/// ========================================

/// Validates a freshly committed Switchboard randomness account and returns its seed slot
///
/// The commit must come from the configured queue and must have been made in
/// the slot right before this one, so it lands in the same transaction as the
/// round start. An older commit could already be resolved off-chain and
/// picked by the caller for its outcome.
pub fn committed_seed_slot(
    randomness_account: &AccountInfo,
    randomness_queue: &Pubkey,
    clock: &Clock,
) -> Result<u64> {
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| RaffleError::InvalidRandomnessAccount)?;

    require_keys_eq!(
        randomness_data.queue,
        *randomness_queue,
        RaffleError::InvalidRandomnessQueue
    );
    require!(
        clock.slot > 0 && randomness_data.seed_slot == clock.slot - 1,
        RaffleError::RandomnessNotCurrent
    );
    require!(
        randomness_data.reveal_slot <= randomness_data.seed_slot,
        RaffleError::RandomnessAlreadyRevealed
    );

    Ok(randomness_data.seed_slot)
}

/// Reads the revealed value of a randomness account
///
/// Returns the seed slot the value was committed at together with the 32 byte value.
pub fn revealed_randomness(
    randomness_account: &AccountInfo,
    clock: &Clock,
) -> Result<(u64, [u8; 32])> {
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| RaffleError::InvalidRandomnessAccount)?;
    let value = randomness_data
        .get_value(clock.slot)
        .map_err(|_| RaffleError::RandomnessNotResolved)?;

    Ok((randomness_data.seed_slot, value))
}

/// Rejects a reveal whose randomness account was committed again after the round started
pub fn ensure_commit_unchanged(request: &PendingRequest, seed_slot: u64) -> Result<()> {
    require!(seed_slot == request.seed_slot, RaffleError::UnknownRequest);
    Ok(())
}

/// Reduces a 256-bit big-endian random value modulo `player_count`
///
/// Byte-wise Horner reduction: the accumulator stays below `player_count`
/// (at most 2^64), so shifting in one byte always fits in a u128.
pub fn winner_index(random_value: &[u8; 32], player_count: u64) -> Result<usize> {
    require!(player_count > 0, RaffleError::NoPlayers);
    let modulus = player_count as u128;
    let remainder = random_value
        .iter()
        .fold(0u128, |acc, &byte| ((acc << 8) | byte as u128) % modulus);

    usize::try_from(remainder).map_err(|_| error!(RaffleError::MathOverflow))
}
