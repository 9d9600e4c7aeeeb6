//! Quota ledger (C3)
//!
//! Every function here is reachable only from the direction-specific HTLC
//! handlers in `execute/inbound.rs` / `execute/outbound.rs`, except the
//! three group lifecycle operations, which are reachable only from
//! `execute/admin.rs`'s group-admin-gated handlers.

use cosmwasm_std::{Addr, Event, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{GroupRecord, GROUPS, TOTAL_QUOTA, UNREGISTER_PENDING};
use crate::token;

fn load_group(storage: &dyn Storage, group: &Addr) -> GroupRecord {
    GROUPS.may_load(storage, group).ok().flatten().unwrap_or_default()
}

fn is_pending(storage: &dyn Storage, group: &Addr) -> bool {
    UNREGISTER_PENDING
        .may_load(storage, group)
        .ok()
        .flatten()
        .unwrap_or(false)
}

/// Active = registered (`quota != 0`) and not mid-decommission.
pub fn is_active(storage: &dyn Storage, group: &Addr) -> bool {
    let record = load_group(storage, group);
    record.is_registered() && !is_pending(storage, group)
}

pub fn is_registered(storage: &dyn Storage, group: &Addr) -> bool {
    load_group(storage, group).is_registered()
}

pub fn register_storeman_group(
    storage: &mut dyn Storage,
    group: &Addr,
    quota: Uint128,
) -> Result<(), ContractError> {
    if quota.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "quota must be > 0".into(),
        });
    }
    if is_registered(storage, group) {
        return Err(ContractError::AlreadyRegistered {
            group: group.to_string(),
        });
    }

    let record = GroupRecord {
        quota,
        receivable: Uint128::zero(),
        debt: Uint128::zero(),
        payable: Uint128::zero(),
    };
    GROUPS.save(storage, group, &record)?;

    let total = TOTAL_QUOTA.may_load(storage)?.unwrap_or_default();
    TOTAL_QUOTA.save(storage, &total.checked_add(quota)?)?;
    Ok(())
}

pub fn apply_unregistration(storage: &mut dyn Storage, group: &Addr) -> Result<(), ContractError> {
    if !is_active(storage, group) {
        return Err(ContractError::NotActive {
            group: group.to_string(),
        });
    }
    UNREGISTER_PENDING.save(storage, group, &true)?;
    Ok(())
}

pub fn unregister_storeman_group(
    storage: &mut dyn Storage,
    group: &Addr,
) -> Result<Uint128, ContractError> {
    if !is_pending(storage, group) {
        return Err(ContractError::NotActive {
            group: group.to_string(),
        });
    }
    let record = load_group(storage, group);
    if !record.receivable.is_zero() || !record.payable.is_zero() || !record.debt.is_zero() {
        return Err(ContractError::DebtOutstanding {
            group: group.to_string(),
        });
    }

    let quota = record.quota;
    UNREGISTER_PENDING.remove(storage, group);
    GROUPS.save(storage, group, &GroupRecord::default())?;

    let total = TOTAL_QUOTA.may_load(storage)?.unwrap_or_default();
    TOTAL_QUOTA.save(storage, &total.checked_sub(quota)?)?;
    Ok(quota)
}

/// lockQuota(group, recipient, value): reserve inbound capacity ahead of a mint.
pub fn lock_quota(
    storage: &mut dyn Storage,
    group: &Addr,
    recipient: &Addr,
    value: Uint128,
) -> Result<(), ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "value must be > 0".into(),
        });
    }
    if !is_active(storage, group) {
        return Err(ContractError::NotActive {
            group: group.to_string(),
        });
    }
    if is_active(storage, recipient) {
        return Err(ContractError::NotActive {
            group: recipient.to_string(),
        });
    }

    if is_registered(storage, recipient) && is_pending(storage, recipient) {
        // Debt-drain special case: directing a mint into a decommissioning group.
        let recipient_record = load_group(storage, recipient);
        if !recipient_record.receivable.is_zero()
            || !recipient_record.payable.is_zero()
            || recipient_record.debt.is_zero()
        {
            return Err(ContractError::InvalidArgument {
                reason: "UnregisterPending recipient must have receivable=0, payable=0, debt>0"
                    .into(),
            });
        }
    }

    let mut group_record = load_group(storage, group);
    if group_record.inbound_available() < value {
        return Err(ContractError::QuotaExceeded);
    }
    group_record.receivable = group_record.receivable.checked_add(value)?;
    GROUPS.save(storage, group, &group_record)?;
    Ok(())
}

/// unlockQuota(group, value): release a reservation on inbound revoke.
pub fn unlock_quota(
    storage: &mut dyn Storage,
    group: &Addr,
    value: Uint128,
) -> Result<(), ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "value must be > 0".into(),
        });
    }
    if !is_registered(storage, group) {
        return Err(ContractError::NotRegistered {
            group: group.to_string(),
        });
    }
    let mut record = load_group(storage, group);
    record.receivable = record
        .receivable
        .checked_sub(value)
        .map_err(|_| ContractError::QuotaExceeded)?;
    GROUPS.save(storage, group, &record)?;
    Ok(())
}

/// mintToken(group, recipient, value): consume a reservation, mint or pay down debt.
/// Returns the `TokenMinted` event, or `None` when the recipient is an
/// UnregisterPending group draining debt rather than receiving a mint.
pub fn mint_token(
    storage: &mut dyn Storage,
    group: &Addr,
    recipient: &Addr,
    value: Uint128,
) -> Result<Option<Event>, ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "value must be > 0".into(),
        });
    }
    if !is_registered(storage, group) {
        return Err(ContractError::NotRegistered {
            group: group.to_string(),
        });
    }
    // Pre-validate recipient and revert without mutating state if it is an
    // Active registered group, rather than mutating receivable/debt first.
    if is_active(storage, recipient) {
        return Err(ContractError::NotActive {
            group: recipient.to_string(),
        });
    }

    let mut group_record = load_group(storage, group);
    group_record.receivable = group_record
        .receivable
        .checked_sub(value)
        .map_err(|_| ContractError::QuotaExceeded)?;
    group_record.debt = group_record.debt.checked_add(value)?;
    GROUPS.save(storage, group, &group_record)?;

    if is_registered(storage, recipient) {
        // UnregisterPending recipient: pay down its debt, clamp to zero, no mint.
        let mut recipient_record = load_group(storage, recipient);
        recipient_record.debt = recipient_record.debt.saturating_sub(value);
        GROUPS.save(storage, recipient, &recipient_record)?;
        Ok(None)
    } else {
        Ok(Some(token::mint(storage, recipient, value)?))
    }
}

/// lockToken(group, initiator, value): escrow a user's wrapped tokens ahead of a burn.
pub fn lock_token(
    storage: &mut dyn Storage,
    group: &Addr,
    initiator: &Addr,
    escrow: &Addr,
    value: Uint128,
) -> Result<Event, ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "value must be > 0".into(),
        });
    }
    if !is_active(storage, group) {
        return Err(ContractError::NotActive {
            group: group.to_string(),
        });
    }
    if is_registered(storage, initiator) {
        return Err(ContractError::InvalidArgument {
            reason: "initiator must not be a registered storeman group".into(),
        });
    }

    let mut record = load_group(storage, group);
    if record.outbound_available() < value {
        return Err(ContractError::QuotaExceeded);
    }
    record.payable = record.payable.checked_add(value)?;
    GROUPS.save(storage, group, &record)?;

    token::lock_to(storage, initiator, escrow, value)
}

/// unlockToken(group, recipient, value): return escrowed tokens on outbound revoke.
pub fn unlock_token(
    storage: &mut dyn Storage,
    group: &Addr,
    recipient: &Addr,
    escrow: &Addr,
    value: Uint128,
) -> Result<Event, ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "value must be > 0".into(),
        });
    }
    if !is_registered(storage, group) {
        return Err(ContractError::NotRegistered {
            group: group.to_string(),
        });
    }
    let mut record = load_group(storage, group);
    record.payable = record
        .payable
        .checked_sub(value)
        .map_err(|_| ContractError::QuotaExceeded)?;
    GROUPS.save(storage, group, &record)?;

    token::lock_to(storage, escrow, recipient, value)
}

/// burnToken(group, value): settle an outbound refund by burning the escrowed tokens.
pub fn burn_token(
    storage: &mut dyn Storage,
    group: &Addr,
    escrow: &Addr,
    value: Uint128,
) -> Result<Event, ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "value must be > 0".into(),
        });
    }
    if !is_registered(storage, group) {
        return Err(ContractError::NotRegistered {
            group: group.to_string(),
        });
    }
    let mut record = load_group(storage, group);
    record.debt = record
        .debt
        .checked_sub(value)
        .map_err(|_| ContractError::InvariantBroken)?;
    record.payable = record
        .payable
        .checked_sub(value)
        .map_err(|_| ContractError::InvariantBroken)?;
    GROUPS.save(storage, group, &record)?;

    token::burn(storage, escrow, value)
}

/// `(quota, inboundAvailable, outboundAvailable, receivable, payable, debt)`.
pub fn get_storeman_group(
    storage: &dyn Storage,
    group: &Addr,
) -> (Uint128, Uint128, Uint128, Uint128, Uint128, Uint128) {
    let record = load_group(storage, group);
    (
        record.quota,
        record.inbound_available(),
        record.outbound_available(),
        record.receivable,
        record.payable,
        record.debt,
    )
}
