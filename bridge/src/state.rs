//! State definitions for the storeman-group settlement core
//!
//! Three subsystems: the per-group quota ledger, the preimage-hash-keyed
//! HTLC table, and the wrapped-token balance ledger.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Fixed-point denominator for fee ratios (spec: RATIO_PRECISE).
pub const RATIO_PRECISE: u64 = 10_000;

/// Default HTLC window for the non-first-hand side (36 hours).
pub const DEFAULT_BASE_WINDOW: u64 = 36 * 3600;

/// Sentinel returned by `getHTLCLeftLockedTime` for an xHash with no record.
pub const MAX_LOCKED_TIME: u64 = u64::MAX;

/// Contract-wide configuration and the halt gate (C1).
#[cw_serde]
pub struct Config {
    /// Owner identity; may update admin setters while halted, and kill the instance.
    pub owner: Addr,
    /// Group-admin identity; the only caller allowed to register/unregister groups.
    pub group_admin: Addr,
    /// Global halt flag gating every state-mutating operation except `isHalted`-only setters.
    pub halted: bool,
    /// Whether `kill` has already been executed; once true, every entry point reverts.
    pub killed: bool,
    /// HTLC window length for the non-first-hand side; first-hand side gets 2x.
    pub base_window: u64,
    /// Share of the outbound fee paid to the storeman on revoke, over RATIO_PRECISE.
    pub revoke_fee_ratio: u64,
    /// Native-coin denom used for outbound fee escrow.
    pub fee_denom: String,
    /// Wrapped-token display name.
    pub token_name: String,
    /// Wrapped-token display symbol.
    pub token_symbol: String,
    /// Wrapped-token decimals.
    pub token_decimals: u8,
}

/// Trade direction for an HTLC entry.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Direction {
    /// Base-chain coin locked first; wrapped token minted on refund.
    Coin2Wtoken,
    /// Wrapped token locked first; base-chain coin released on refund.
    Wtoken2Coin,
}

/// Lifecycle state of an HTLC record.
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub enum HtlcStatus {
    #[default]
    None,
    Locked,
    Refunded,
    Revoked,
}

/// Per-group bookkeeping.
#[cw_serde]
#[derive(Default)]
pub struct GroupRecord {
    /// Total capacity in base-asset units. Presence is encoded by `quota != 0`.
    pub quota: Uint128,
    /// Pending inbound amount: reserved but not yet minted.
    pub receivable: Uint128,
    /// Outstanding wrapped tokens in circulation attributed to this group.
    pub debt: Uint128,
    /// Pending outbound amount: escrowed user tokens not yet burned.
    pub payable: Uint128,
}

impl GroupRecord {
    pub fn is_registered(&self) -> bool {
        !self.quota.is_zero()
    }

    /// `quota - receivable - debt`, saturating is never needed because I1 guarantees
    /// `quota >= receivable + debt` after every successful mutation.
    pub fn inbound_available(&self) -> Uint128 {
        self.quota
            .saturating_sub(self.receivable)
            .saturating_sub(self.debt)
    }

    /// `debt - payable`, guaranteed non-negative by I2.
    pub fn outbound_available(&self) -> Uint128 {
        self.debt.saturating_sub(self.payable)
    }
}

/// HTLC record keyed by 32-byte preimage hash.
#[cw_serde]
pub struct HtlcRecord {
    pub direction: Direction,
    pub source: Addr,
    pub destination: Addr,
    pub value: Uint128,
    pub status: HtlcStatus,
    pub begin_locked_time: u64,
    pub locked_time: u64,
    /// Opaque origin-chain address, set only for first-hand (outbound) entries.
    pub shadow_address: Option<String>,
}

impl HtlcRecord {
    pub fn left_locked_time(&self, now: u64) -> u64 {
        let expiry = self.begin_locked_time.saturating_add(self.locked_time);
        expiry.saturating_sub(now)
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.begin_locked_time.saturating_add(self.locked_time)
    }
}

pub const CONTRACT_NAME: &str = "crates.io:storeman-htlc-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Primary config storage.
pub const CONFIG: Item<Config> = Item::new("config");

/// Per-group ledger records, keyed by group identity.
pub const GROUPS: Map<&Addr, GroupRecord> = Map::new("groups");

/// UnregisterPending flag, modeled as a separate map.
pub const UNREGISTER_PENDING: Map<&Addr, bool> = Map::new("unregister_pending");

/// Sum over groups of `quota` (spec invariant I4).
pub const TOTAL_QUOTA: Item<Uint128> = Item::new("total_quota");

/// HTLC table, keyed by 32-byte preimage hash.
pub const HTLCS: Map<&[u8], HtlcRecord> = Map::new("htlcs");

/// Native-coin fee escrowed per outbound xHash, pending refund/revoke.
pub const FEE_ESCROW: Map<&[u8], Uint128> = Map::new("fee_escrow");

/// Wrapped-token balances.
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Wrapped-token total supply (spec invariant I3: equals sum of group debts).
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

/// ERC-20-style allowances: (owner, spender) -> amount.
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

/// Per-group override of the outbound tx fee ratio (group-admin-registry stand-in).
pub const GROUP_FEE_OVERRIDE: Map<&Addr, u64> = Map::new("group_fee_override");

/// Default outbound tx fee ratio applied when a group has no override, over RATIO_PRECISE.
pub const DEFAULT_TX_FEE_RATIO: Item<u64> = Item::new("default_tx_fee_ratio");

/// `coin2WanRatio`: base-asset-to-native-coin fee conversion ratio, over RATIO_PRECISE.
pub const COIN2WAN_RATIO: Item<u64> = Item::new("coin2wan_ratio");
