use anchor_lang::prelude::*;
use switchboard_on_demand::get_switchboard_on_demand_program_id;

use crate::{constants::*, errors::*, states::*};

/// ========================================
/// Account Structs
/// ========================================

/// Accounts required for initializing the raffle
#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    /// The raffle state account (PDA), also holds the pot
    #[account(
        init,
        payer = admin,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE],
        bump
    )]
    pub raffle: Account<'info, Raffle>,
    /// The admin account that will operate the raffle
    #[account(mut)]
    pub admin: Signer<'info>,
    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Accounts required for entering the raffle
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The raffle state account, receives the payment
    #[account(
        mut,
        seeds = [RAFFLE],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
    /// Player paying the entrance fee
    #[account(mut)]
    pub player: Signer<'info>,
    /// System program for SOL transfers
    pub system_program: Program<'info, System>,
}

/// Accounts required for the read-only upkeep check
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Accounts required for starting a round
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The raffle state account
    #[account(
        mut,
        seeds = [RAFFLE],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Freshly committed Switchboard randomness account for this round
    /// CHECK: Validated to be owned by Switchboard, queue and freshness checked in the handler
    #[account(
        owner = get_switchboard_on_demand_program_id() @ RaffleError::InvalidRandomnessOwner
    )]
    pub randomness_account_data: AccountInfo<'info>,

    /// Automation caller, anyone may crank
    pub caller: Signer<'info>,
}

/// Accounts required for delivering randomness and paying the winner
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The raffle state account, pays out the pot
    #[account(
        mut,
        seeds = [RAFFLE],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Switchboard randomness account recorded when the round started
    /// CHECK: Owned by Switchboard; the address is matched against the pending request in the handler
    #[account(
        owner = get_switchboard_on_demand_program_id() @ RaffleError::InvalidRandomnessOwner
    )]
    pub randomness_account_data: AccountInfo<'info>,

    /// Winner receiving the pot
    /// CHECK: Must equal the drawn winner, verified in the handler
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// Fulfillment crank, anyone may send it once the oracle revealed
    pub caller: Signer<'info>,
}

/// Accounts required for admin actions (cancel request, transfer)
#[derive(Accounts)]
pub struct AdminAction<'info> {
    /// The raffle state account to modify
    #[account(
        mut,
        has_one = admin @ RaffleError::NotAdmin,
        seeds = [RAFFLE],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Admin account (must match raffle.admin)
    pub admin: Signer<'info>,
}
