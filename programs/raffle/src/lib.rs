//! Raffle Program
//!
//! A Solana program that runs a recurring, verifiably fair lottery:
//! - Players pay a fixed entrance fee to join the current round
//! - An automation crank starts a round once the interval has elapsed
//! - The winner is drawn from Switchboard on-demand randomness and receives the whole pot
//!
//! Each round moves through `Open -> Calculating -> Open`. The randomness
//! request is correlated by id and randomness account, and a payout failure
//! rolls the whole fulfillment back.

#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod states;

pub use contexts::*;
pub use states::{InitializeRaffleParams, UpkeepStatus};

declare_id!("5WQEY86YtaGLeWY51mVucmbjUALZ3Br2pnWBNUZJSfYM");

#[program]
pub mod raffle {
    use super::*;

    // ========================================
    // Admin Instructions
    // ========================================

    pub fn initialize(ctx: Context<InitializeRaffle>, params: InitializeRaffleParams) -> Result<()> {
        instructions::admin::initialize(ctx, params)
    }

    pub fn cancel_randomness_request(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::cancel_randomness_request(ctx)
    }

    pub fn transfer_admin(ctx: Context<AdminAction>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::transfer_admin(ctx, new_admin)
    }

    // ========================================
    // User Instructions
    // ========================================

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::user::enter_raffle(ctx, amount)
    }

    // ========================================
    // Automation & Oracle Instructions
    // ========================================

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
        instructions::automation::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        instructions::automation::perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(ctx: Context<FulfillRandomWords>, request_id: u64) -> Result<()> {
        instructions::automation::fulfill_random_words(ctx, request_id)
    }
}
