//! HTLC engine (C4)
//!
//! Keyed by 32-byte preimage hash. `now` is threaded in explicitly by the
//! caller (`env.block.time.seconds()` in production, an arbitrary literal
//! in tests) rather than read from `Env` inside this module, so tests can
//! inject a mock clock without `cw-multi-test`.

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::{Direction, HtlcRecord, HtlcStatus, HTLCS};

/// addHTLCTx(direction, src, dst, xHash, value, firstHand, shadow).
#[allow(clippy::too_many_arguments)]
pub fn add_htlc_tx(
    storage: &mut dyn Storage,
    x_hash: &[u8; 32],
    direction: Direction,
    source: Addr,
    destination: Addr,
    value: cosmwasm_std::Uint128,
    now: u64,
    base_window: u64,
    first_hand: bool,
    shadow_address: Option<String>,
) -> Result<(), ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "value must be != 0".into(),
        });
    }
    if HTLCS.may_load(storage, x_hash.as_slice())?.is_some() {
        return Err(ContractError::HtlcStateViolation);
    }

    let locked_time = if first_hand {
        base_window.saturating_mul(2)
    } else {
        base_window
    };

    let record = HtlcRecord {
        direction,
        source,
        destination,
        value,
        status: HtlcStatus::Locked,
        begin_locked_time: now,
        locked_time,
        shadow_address: if first_hand { shadow_address } else { None },
    };
    HTLCS.save(storage, x_hash.as_slice(), &record)?;
    Ok(())
}

/// refundHTLCTx(xHash, direction): reveal within the window, caller must be destination.
pub fn refund_htlc_tx(
    storage: &mut dyn Storage,
    x_hash: &[u8; 32],
    direction: Direction,
    caller: &Addr,
    now: u64,
) -> Result<HtlcRecord, ContractError> {
    let mut record = HTLCS
        .may_load(storage, x_hash.as_slice())?
        .ok_or(ContractError::HtlcStateViolation)?;

    if record.status != HtlcStatus::Locked || record.direction != direction {
        return Err(ContractError::HtlcStateViolation);
    }
    if *caller != record.destination {
        return Err(ContractError::Unauthorized);
    }
    if now >= record.begin_locked_time.saturating_add(record.locked_time) {
        return Err(ContractError::HtlcTimingViolation);
    }

    record.status = HtlcStatus::Refunded;
    HTLCS.save(storage, x_hash.as_slice(), &record)?;
    Ok(record)
}

/// revokeHTLCTx(xHash, direction, loose): expire after the window; `loose` widens the caller set.
pub fn revoke_htlc_tx(
    storage: &mut dyn Storage,
    x_hash: &[u8; 32],
    direction: Direction,
    caller: &Addr,
    now: u64,
    loose: bool,
) -> Result<HtlcRecord, ContractError> {
    let mut record = HTLCS
        .may_load(storage, x_hash.as_slice())?
        .ok_or(ContractError::HtlcStateViolation)?;

    if record.status != HtlcStatus::Locked || record.direction != direction {
        return Err(ContractError::HtlcStateViolation);
    }
    let caller_allowed = if loose {
        *caller == record.source || *caller == record.destination
    } else {
        *caller == record.source
    };
    if !caller_allowed {
        return Err(ContractError::Unauthorized);
    }
    if !record.is_expired(now) {
        return Err(ContractError::HtlcTimingViolation);
    }

    record.status = HtlcStatus::Revoked;
    HTLCS.save(storage, x_hash.as_slice(), &record)?;
    Ok(record)
}

pub fn xhash_exist(storage: &dyn Storage, x_hash: &[u8; 32]) -> bool {
    HTLCS
        .may_load(storage, x_hash.as_slice())
        .ok()
        .flatten()
        .map(|r| r.status != HtlcStatus::None)
        .unwrap_or(false)
}

pub fn get_htlc(storage: &dyn Storage, x_hash: &[u8; 32]) -> Option<HtlcRecord> {
    HTLCS.may_load(storage, x_hash.as_slice()).ok().flatten()
}

/// `max(0, begin+lockedTime-now)` for Locked entries, MAX_LOCKED_TIME for None, 0 otherwise.
pub fn get_htlc_left_locked_time(storage: &dyn Storage, x_hash: &[u8; 32], now: u64) -> u64 {
    match get_htlc(storage, x_hash) {
        None => crate::state::MAX_LOCKED_TIME,
        Some(record) => match record.status {
            HtlcStatus::Locked => record.left_locked_time(now),
            _ => 0,
        },
    }
}
