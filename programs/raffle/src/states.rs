/// States module for the Raffle program
///
/// Contains the raffle account and the round state machine that every
/// instruction funnels its mutations through.
use anchor_lang::prelude::*;

use crate::{constants::*, errors::RaffleError, helpers::winner_index};

/// Round lifecycle of the raffle
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum RaffleState {
    /// Accepting entries
    #[default]
    Open,
    /// Randomness requested, waiting for fulfillment
    Calculating,
}

/// The single outstanding randomness request of a round
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingRequest {
    /// Correlation id handed out when the round started
    pub request_id: u64,
    /// Switchboard randomness account committed for this round
    pub randomness_account: Pubkey,
    /// Commit slot of the randomness account at request time
    pub seed_slot: u64,
    /// Unix timestamp of the request
    pub requested_at: i64,
}

/// Parameters supplied once at initialization
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeRaffleParams {
    /// Lamports required per entry
    pub entrance_fee: u64,
    /// Minimum seconds between rounds
    pub interval: u64,
    /// Switchboard queue the randomness must come from
    pub randomness_queue: Pubkey,
    /// Compute units the fulfillment crank should budget
    pub callback_compute_limit: u32,
    /// Seconds after which the admin may cancel an unanswered request
    pub request_timeout: u64,
}

impl Default for InitializeRaffleParams {
    fn default() -> Self {
        Self {
            entrance_fee: DEFAULT_ENTRANCE_FEE,
            interval: DEFAULT_INTERVAL,
            randomness_queue: Pubkey::default(),
            callback_compute_limit: DEFAULT_CALLBACK_COMPUTE_LIMIT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Result of the upkeep predicate, returned to automation callers
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub time_passed: bool,
    pub is_open: bool,
    pub has_balance: bool,
    pub has_players: bool,
    pub pot: u64,
    pub player_count: u32,
    pub seconds_remaining: u64,
    pub state: RaffleState,
}

/// A winner computed from a random value, not yet committed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub request_id: u64,
    pub winner_index: usize,
    pub winner: Pubkey,
    pub prize: u64,
}

/// Main state account of the raffle
///
/// Holds the configuration, the current round and the entrance fees themselves
/// (lamports above the rent-exempt reserve).
#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct Raffle {
    /// Operator allowed to cancel a stuck request and hand over the role
    pub admin: Pubkey,
    /// PDA bump seed for this account
    pub bump: u8,
    /// Lamports required per entry
    pub entrance_fee: u64,
    /// Minimum seconds between rounds
    pub interval: u64,
    /// Switchboard queue the randomness must come from
    pub randomness_queue: Pubkey,
    /// Compute units the fulfillment crank should budget
    pub callback_compute_limit: u32,
    /// Seconds after which the admin may cancel an unanswered request
    pub request_timeout: u64,
    /// Current round state
    pub state: RaffleState,
    /// Completion time of the last round (or initialization)
    pub last_timestamp: i64,
    /// Most recent payout recipient
    pub recent_winner: Pubkey,
    /// Lamports collected this round
    pub pot: u64,
    /// Last correlation id handed out
    pub request_counter: u64,
    /// Rounds paid out so far
    pub rounds_completed: u64,
    /// Outstanding randomness request, set iff the raffle is calculating
    pub pending_request: Option<PendingRequest>,
    /// Entries of the current round in entry order
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
}

impl Raffle {
    /// Applies the initialization parameters and opens the first round.
    pub fn configure(
        &mut self,
        admin: Pubkey,
        bump: u8,
        params: &InitializeRaffleParams,
        now: i64,
    ) -> Result<()> {
        require!(params.entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(params.interval > 0, RaffleError::InvalidInterval);
        require!(
            params.callback_compute_limit > 0
                && params.callback_compute_limit <= MAX_CALLBACK_COMPUTE_LIMIT,
            RaffleError::InvalidCallbackLimit
        );
        require!(
            params.request_timeout >= MIN_REQUEST_TIMEOUT,
            RaffleError::InvalidRequestTimeout
        );
        require_keys_neq!(
            params.randomness_queue,
            Pubkey::default(),
            RaffleError::InvalidRandomnessQueue
        );

        self.admin = admin;
        self.bump = bump;
        self.entrance_fee = params.entrance_fee;
        self.interval = params.interval;
        self.randomness_queue = params.randomness_queue;
        self.callback_compute_limit = params.callback_compute_limit;
        self.request_timeout = params.request_timeout;
        self.state = RaffleState::Open;
        self.last_timestamp = now;
        self.recent_winner = Pubkey::default();
        self.pot = 0;
        self.request_counter = 0;
        self.rounds_completed = 0;
        self.pending_request = None;
        self.players = Vec::new();
        Ok(())
    }

    pub fn player(&self, index: usize) -> Option<Pubkey> {
        self.players.get(index).copied()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_open(&self) -> bool {
        self.state == RaffleState::Open
    }

    /// Validates an entry before any funds move.
    pub fn ensure_accepts_entry(&self, payment: u64) -> Result<()> {
        require!(payment >= self.entrance_fee, RaffleError::InsufficientFee);
        require!(self.is_open(), RaffleError::NotOpen);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);
        Ok(())
    }

    /// Appends `player` to the round. The same key may enter several times.
    pub fn record_entry(&mut self, player: Pubkey, payment: u64) -> Result<()> {
        self.ensure_accepts_entry(payment)?;
        let pot = self
            .pot
            .checked_add(payment)
            .ok_or(RaffleError::MathOverflow)?;

        self.players.push(player);
        self.pot = pot;
        Ok(())
    }

    /// The upkeep predicate. Pure: callable any number of times.
    pub fn check_upkeep(&self, now: i64) -> UpkeepStatus {
        let elapsed = now.saturating_sub(self.last_timestamp).max(0) as u64;
        let time_passed = elapsed >= self.interval;
        let is_open = self.is_open();
        let has_balance = self.pot > 0;
        let has_players = !self.players.is_empty();

        UpkeepStatus {
            upkeep_needed: time_passed && is_open && has_balance && has_players,
            time_passed,
            is_open,
            has_balance,
            has_players,
            pot: self.pot,
            player_count: self.players.len() as u32,
            seconds_remaining: self.interval.saturating_sub(elapsed),
            state: self.state,
        }
    }

    /// Fails with `UpkeepNotNeeded` and logs the diagnostics when no round can start.
    pub fn ensure_upkeep_needed(&self, now: i64) -> Result<UpkeepStatus> {
        let status = self.check_upkeep(now);
        if !status.upkeep_needed {
            msg!(
                "Upkeep not needed: pot={} players={} seconds_remaining={} state={:?}",
                status.pot,
                status.player_count,
                status.seconds_remaining,
                status.state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }
        Ok(status)
    }

    /// Starts a round: records the randomness request and stops accepting entries.
    pub fn open_request(
        &mut self,
        randomness_account: Pubkey,
        seed_slot: u64,
        now: i64,
    ) -> Result<PendingRequest> {
        self.ensure_upkeep_needed(now)?;

        let request_id = self
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;
        let request = PendingRequest {
            request_id,
            randomness_account,
            seed_slot,
            requested_at: now,
        };

        self.request_counter = request_id;
        self.pending_request = Some(request);
        self.state = RaffleState::Calculating;
        Ok(request)
    }

    /// Returns the outstanding request if `request_id` and `randomness_account`
    /// both match it. Anything else is an unknown request.
    pub fn matching_request(
        &self,
        request_id: u64,
        randomness_account: &Pubkey,
    ) -> Result<PendingRequest> {
        match self.pending_request {
            Some(request)
                if self.state == RaffleState::Calculating
                    && request.request_id == request_id
                    && request.randomness_account == *randomness_account =>
            {
                Ok(request)
            }
            _ => err!(RaffleError::UnknownRequest),
        }
    }

    /// Picks the winner for `request` without touching any state.
    pub fn draw(&self, request: &PendingRequest, random_value: &[u8; 32]) -> Result<Draw> {
        let winner_index = winner_index(random_value, self.players.len() as u64)?;
        let winner = self
            .player(winner_index)
            .ok_or(RaffleError::NoPlayers)?;

        Ok(Draw {
            request_id: request.request_id,
            winner_index,
            winner,
            prize: self.pot,
        })
    }

    /// Commits a paid-out draw: resets the round and reopens the pool in one step.
    /// Returns the number of completed rounds.
    pub fn complete_round(&mut self, draw: &Draw, now: i64) -> Result<u64> {
        let outstanding = self.pending_request.map(|request| request.request_id);
        require!(
            self.state == RaffleState::Calculating && outstanding == Some(draw.request_id),
            RaffleError::UnknownRequest
        );
        let rounds_completed = self
            .rounds_completed
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;

        self.recent_winner = draw.winner;
        self.players.clear();
        self.pot = 0;
        self.state = RaffleState::Open;
        self.last_timestamp = now;
        self.pending_request = None;
        self.rounds_completed = rounds_completed;
        Ok(rounds_completed)
    }

    /// Abandons an outstanding request once it has timed out. Players and pot
    /// stay in place so the next upkeep can request randomness again.
    pub fn cancel_request(&mut self, now: i64) -> Result<PendingRequest> {
        require!(
            self.state == RaffleState::Calculating,
            RaffleError::NotCalculating
        );
        let request = self.pending_request.ok_or(RaffleError::NotCalculating)?;
        let waited = now.saturating_sub(request.requested_at).max(0) as u64;
        require!(
            waited >= self.request_timeout,
            RaffleError::RequestNotExpired
        );

        self.pending_request = None;
        self.state = RaffleState::Open;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;
    const FEE: u64 = DEFAULT_ENTRANCE_FEE;

    fn assert_raffle_err<T: std::fmt::Debug>(result: Result<T>, expected: RaffleError) {
        assert_eq!(result.unwrap_err(), anchor_lang::error::Error::from(expected));
    }

    fn valid_params() -> InitializeRaffleParams {
        InitializeRaffleParams {
            randomness_queue: Pubkey::new_unique(),
            ..Default::default()
        }
    }

    fn new_raffle() -> Raffle {
        let mut raffle = Raffle::default();
        raffle
            .configure(Pubkey::new_unique(), 255, &valid_params(), START)
            .unwrap();
        raffle
    }

    fn random_word(value: u64) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        word
    }

    /// Enters `count` fresh players and starts a round once the interval has passed.
    fn calculating_raffle(count: usize) -> (Raffle, Vec<Pubkey>, PendingRequest) {
        let mut raffle = new_raffle();
        let players: Vec<Pubkey> = (0..count).map(|_| Pubkey::new_unique()).collect();
        for player in &players {
            raffle.record_entry(*player, FEE).unwrap();
        }
        let request = raffle
            .open_request(Pubkey::new_unique(), 42, START + 61)
            .unwrap();
        (raffle, players, request)
    }

    #[test]
    fn initializes_open_with_defaults() {
        let raffle = new_raffle();
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.entrance_fee, FEE);
        assert_eq!(raffle.interval, DEFAULT_INTERVAL);
        assert_eq!(raffle.last_timestamp, START);
        assert_eq!(raffle.player_count(), 0);
        assert!(raffle.pending_request.is_none());
    }

    #[test]
    fn rejects_invalid_configuration() {
        let mut raffle = Raffle::default();
        let admin = Pubkey::new_unique();

        let zero_fee = InitializeRaffleParams {
            entrance_fee: 0,
            ..valid_params()
        };
        assert_raffle_err(
            raffle.configure(admin, 1, &zero_fee, START),
            RaffleError::InvalidEntranceFee,
        );

        let zero_interval = InitializeRaffleParams {
            interval: 0,
            ..valid_params()
        };
        assert_raffle_err(
            raffle.configure(admin, 1, &zero_interval, START),
            RaffleError::InvalidInterval,
        );

        let huge_limit = InitializeRaffleParams {
            callback_compute_limit: MAX_CALLBACK_COMPUTE_LIMIT + 1,
            ..valid_params()
        };
        assert_raffle_err(
            raffle.configure(admin, 1, &huge_limit, START),
            RaffleError::InvalidCallbackLimit,
        );
    }

    #[test]
    fn rejects_request_timeout_below_minimum() {
        let mut raffle = Raffle::default();
        let admin = Pubkey::new_unique();

        for request_timeout in [0, 1, MIN_REQUEST_TIMEOUT - 1] {
            let params = InitializeRaffleParams {
                request_timeout,
                ..valid_params()
            };
            assert_raffle_err(
                raffle.configure(admin, 1, &params, START),
                RaffleError::InvalidRequestTimeout,
            );
        }
        assert_eq!(raffle, Raffle::default());

        let params = InitializeRaffleParams {
            request_timeout: MIN_REQUEST_TIMEOUT,
            ..valid_params()
        };
        raffle.configure(admin, 1, &params, START).unwrap();
        assert_eq!(raffle.request_timeout, MIN_REQUEST_TIMEOUT);
    }

    #[test]
    fn rejects_unset_randomness_queue() {
        let mut raffle = Raffle::default();
        assert_raffle_err(
            raffle.configure(
                Pubkey::new_unique(),
                1,
                &InitializeRaffleParams::default(),
                START,
            ),
            RaffleError::InvalidRandomnessQueue,
        );
        assert_eq!(raffle, Raffle::default());
    }

    #[test]
    fn cancel_waits_at_least_the_minimum_timeout() {
        let mut raffle = Raffle::default();
        let params = InitializeRaffleParams {
            request_timeout: MIN_REQUEST_TIMEOUT,
            ..valid_params()
        };
        raffle
            .configure(Pubkey::new_unique(), 1, &params, START)
            .unwrap();
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        let request = raffle
            .open_request(Pubkey::new_unique(), 42, START + 61)
            .unwrap();

        assert_raffle_err(
            raffle.cancel_request(request.requested_at),
            RaffleError::RequestNotExpired,
        );
        assert_raffle_err(
            raffle.cancel_request(request.requested_at + MIN_REQUEST_TIMEOUT as i64 - 1),
            RaffleError::RequestNotExpired,
        );
        raffle
            .cancel_request(request.requested_at + MIN_REQUEST_TIMEOUT as i64)
            .unwrap();
        assert_eq!(raffle.state, RaffleState::Open);
    }

    #[test]
    fn underpayment_is_rejected_without_changes() {
        let mut raffle = new_raffle();
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        let before = raffle.clone();

        for payment in [0, 1, FEE / 2, FEE - 1] {
            assert_raffle_err(
                raffle.record_entry(Pubkey::new_unique(), payment),
                RaffleError::InsufficientFee,
            );
        }
        assert_eq!(raffle, before);
    }

    #[test]
    fn entries_keep_order_and_sum_payments() {
        let mut raffle = new_raffle();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        raffle.record_entry(alice, FEE).unwrap();
        raffle.record_entry(bob, FEE * 3).unwrap();
        raffle.record_entry(alice, FEE + 7).unwrap();

        assert_eq!(raffle.players, vec![alice, bob, alice]);
        assert_eq!(raffle.player(2), Some(alice));
        assert_eq!(raffle.player(3), None);
        assert_eq!(raffle.pot, FEE * 5 + 7);
    }

    #[test]
    fn entry_rejected_when_full() {
        let mut raffle = new_raffle();
        for _ in 0..MAX_PLAYERS {
            raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        }
        assert_raffle_err(
            raffle.record_entry(Pubkey::new_unique(), FEE),
            RaffleError::RaffleFull,
        );
        assert_eq!(raffle.player_count(), MAX_PLAYERS);
    }

    #[test]
    fn upkeep_false_without_players_or_balance() {
        let raffle = new_raffle();
        let status = raffle.check_upkeep(START + 61);
        assert!(status.time_passed);
        assert!(!status.has_players);
        assert!(!status.has_balance);
        assert!(!status.upkeep_needed);
    }

    #[test]
    fn upkeep_false_before_interval() {
        let mut raffle = new_raffle();
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();

        let status = raffle.check_upkeep(START + 55);
        assert!(!status.upkeep_needed);
        assert!(!status.time_passed);
        assert_eq!(status.seconds_remaining, 5);

        // a clock behind the last round never counts as elapsed time
        assert!(!raffle.check_upkeep(START - 1_000).upkeep_needed);
    }

    #[test]
    fn upkeep_true_exactly_at_interval() {
        let mut raffle = new_raffle();
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();

        let status = raffle.check_upkeep(START + DEFAULT_INTERVAL as i64);
        assert!(status.upkeep_needed);
        assert_eq!(status.seconds_remaining, 0);
        assert_eq!(status.player_count, 1);
        assert_eq!(status.pot, FEE);
    }

    #[test]
    fn upkeep_false_while_calculating() {
        let (raffle, _, _) = calculating_raffle(1);
        let status = raffle.check_upkeep(START + 10_000);
        assert!(!status.is_open);
        assert!(!status.upkeep_needed);
        assert_eq!(status.state, RaffleState::Calculating);
    }

    #[test]
    fn start_round_requires_upkeep() {
        let mut raffle = new_raffle();
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        let before = raffle.clone();

        assert_raffle_err(
            raffle.open_request(Pubkey::new_unique(), 1, START + 30),
            RaffleError::UpkeepNotNeeded,
        );
        assert_eq!(raffle, before);
    }

    #[test]
    fn start_round_moves_to_calculating() {
        let (raffle, _, request) = calculating_raffle(1);
        assert_eq!(raffle.state, RaffleState::Calculating);
        assert_eq!(request.request_id, 1);
        assert_eq!(request.seed_slot, 42);
        assert_eq!(raffle.pending_request, Some(request));
    }

    #[test]
    fn second_start_round_is_rejected() {
        let (mut raffle, _, _) = calculating_raffle(2);
        let before = raffle.clone();
        assert_raffle_err(
            raffle.open_request(Pubkey::new_unique(), 43, START + 500),
            RaffleError::UpkeepNotNeeded,
        );
        assert_eq!(raffle, before);
    }

    #[test]
    fn entry_rejected_while_calculating() {
        let (mut raffle, _, _) = calculating_raffle(1);
        assert_raffle_err(
            raffle.record_entry(Pubkey::new_unique(), FEE),
            RaffleError::NotOpen,
        );
        assert_eq!(raffle.player_count(), 1);
    }

    #[test]
    fn unknown_requests_are_rejected() {
        let mut raffle = new_raffle();
        assert_raffle_err(
            raffle.matching_request(1, &Pubkey::new_unique()),
            RaffleError::UnknownRequest,
        );

        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        let request = raffle
            .open_request(Pubkey::new_unique(), 7, START + 61)
            .unwrap();
        let before = raffle.clone();

        assert_raffle_err(
            raffle.matching_request(request.request_id + 1, &request.randomness_account),
            RaffleError::UnknownRequest,
        );
        assert_raffle_err(
            raffle.matching_request(request.request_id, &Pubkey::new_unique()),
            RaffleError::UnknownRequest,
        );
        assert_eq!(raffle, before);
        assert_eq!(
            raffle
                .matching_request(request.request_id, &request.randomness_account)
                .unwrap(),
            request
        );
    }

    #[test]
    fn consumed_request_cannot_be_replayed() {
        let (mut raffle, _, request) = calculating_raffle(1);
        let draw = raffle.draw(&request, &random_word(9)).unwrap();
        raffle.complete_round(&draw, START + 70).unwrap();
        let after = raffle.clone();

        assert_raffle_err(
            raffle.matching_request(request.request_id, &request.randomness_account),
            RaffleError::UnknownRequest,
        );
        assert_raffle_err(
            raffle.complete_round(&draw, START + 80),
            RaffleError::UnknownRequest,
        );
        assert_eq!(raffle, after);
    }

    #[test]
    fn single_player_round_end_to_end() {
        let mut raffle = new_raffle();
        let player = Pubkey::new_unique();
        raffle.record_entry(player, FEE).unwrap();

        assert!(raffle.check_upkeep(START + 61).upkeep_needed);
        let request = raffle
            .open_request(Pubkey::new_unique(), 100, START + 61)
            .unwrap();
        assert_eq!(raffle.state, RaffleState::Calculating);

        let pending = raffle
            .matching_request(request.request_id, &request.randomness_account)
            .unwrap();
        let draw = raffle.draw(&pending, &[0xAB; 32]).unwrap();
        assert_eq!(draw.winner, player);
        assert_eq!(draw.prize, FEE);

        let rounds = raffle.complete_round(&draw, START + 75).unwrap();
        assert_eq!(rounds, 1);
        assert!(raffle.players.is_empty());
        assert_eq!(raffle.pot, 0);
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.recent_winner, player);
        assert_eq!(raffle.last_timestamp, START + 75);
        assert!(raffle.pending_request.is_none());
    }

    #[test]
    fn four_players_winner_follows_random_value() {
        for random in [0u64, 1, 2, 3, 6, 1_000_003] {
            let (mut raffle, players, request) = calculating_raffle(4);
            let draw = raffle.draw(&request, &random_word(random)).unwrap();

            assert_eq!(draw.winner_index, (random % 4) as usize);
            assert_eq!(draw.winner, players[(random % 4) as usize]);
            assert_eq!(draw.prize, 4 * FEE);

            raffle.complete_round(&draw, START + 90).unwrap();
            assert_eq!(raffle.recent_winner, draw.winner);
            assert!(raffle.players.is_empty());
            assert_eq!(raffle.pot, 0);
        }
    }

    #[test]
    fn entry_rejected_during_payout_window() {
        let (mut raffle, _, request) = calculating_raffle(3);
        let draw = raffle.draw(&request, &random_word(5)).unwrap();

        // between draw and commit the lamports move; the pool stays closed
        assert_raffle_err(raffle.ensure_accepts_entry(FEE), RaffleError::NotOpen);
        assert_raffle_err(
            raffle.record_entry(draw.winner, FEE),
            RaffleError::NotOpen,
        );

        raffle.complete_round(&draw, START + 62).unwrap();
        raffle.record_entry(draw.winner, FEE).unwrap();
        assert_eq!(raffle.players, vec![draw.winner]);
    }

    #[test]
    fn draw_does_not_mutate() {
        let (raffle, _, request) = calculating_raffle(2);
        let before = raffle.clone();
        raffle.draw(&request, &[0xFF; 32]).unwrap();
        assert_eq!(raffle, before);
    }

    #[test]
    fn rounds_cycle_with_fresh_request_ids() {
        let (mut raffle, _, first) = calculating_raffle(1);
        let draw = raffle.draw(&first, &random_word(0)).unwrap();
        raffle.complete_round(&draw, START + 100).unwrap();

        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        assert!(!raffle.check_upkeep(START + 130).upkeep_needed);
        let second = raffle
            .open_request(Pubkey::new_unique(), 300, START + 160)
            .unwrap();

        assert_eq!(second.request_id, first.request_id + 1);
        assert_raffle_err(
            raffle.matching_request(first.request_id, &first.randomness_account),
            RaffleError::UnknownRequest,
        );
    }

    #[test]
    fn cancel_only_after_timeout_and_keeps_entries() {
        let (mut raffle, players, request) = calculating_raffle(2);

        assert_raffle_err(
            raffle.cancel_request(request.requested_at + 10),
            RaffleError::RequestNotExpired,
        );
        assert_eq!(raffle.state, RaffleState::Calculating);

        let cancelled = raffle
            .cancel_request(request.requested_at + DEFAULT_REQUEST_TIMEOUT as i64)
            .unwrap();
        assert_eq!(cancelled, request);
        assert_eq!(raffle.state, RaffleState::Open);
        assert_eq!(raffle.players, players);
        assert_eq!(raffle.pot, 2 * FEE);

        // the late reveal for the cancelled id is no longer accepted
        assert_raffle_err(
            raffle.matching_request(request.request_id, &request.randomness_account),
            RaffleError::UnknownRequest,
        );
        // and the next upkeep can start right away
        assert!(raffle.check_upkeep(START + 62).upkeep_needed);
    }

    #[test]
    fn cancel_requires_outstanding_request() {
        let mut raffle = new_raffle();
        assert_raffle_err(raffle.cancel_request(START), RaffleError::NotCalculating);
    }
}
