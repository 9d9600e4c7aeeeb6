//! Outbound leg (wrapped token -> base-chain coin).
//!
//! The escrow identity is the contract's own address (`env.contract.address`):
//! wrapped tokens move into it via `quota::lock_token`/`token::lock_to` rather
//! than to an external HTLC-engine contract, since everything lives in one
//! contract's storage.

use cosmwasm_std::{Addr, BankMsg, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::events;
use crate::fee::get_outbound_fee;
use crate::halt::assert_not_halted;
use crate::hash::{bytes32_to_hex, hex_to_bytes32, x_hash};
use crate::state::{Direction, CONFIG, FEE_ESCROW};
use crate::{htlc, quota};

pub fn execute_outbound_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    x_hash_hex: String,
    group: String,
    base_addr: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;

    let x_hash_bytes =
        hex_to_bytes32(&x_hash_hex).map_err(|reason| ContractError::InvalidArgument { reason })?;
    let group_addr = deps.api.addr_validate(&group)?;
    let caller = info.sender.clone();
    let escrow = env.contract.address.clone();

    let fee = get_outbound_fee(deps.as_ref(), &group_addr, value)?;
    let attached = attached_fee_denom(&info, &config.fee_denom);
    if attached < fee {
        return Err(ContractError::InsufficientFee {
            required: fee.to_string(),
            got: attached.to_string(),
        });
    }

    htlc::add_htlc_tx(
        deps.storage,
        &x_hash_bytes,
        Direction::Wtoken2Coin,
        caller.clone(),
        group_addr.clone(),
        value,
        env.block.time.seconds(),
        config.base_window,
        true,
        Some(base_addr.clone()),
    )?;
    let locked_event = quota::lock_token(deps.storage, &group_addr, &caller, &escrow, value)?;
    FEE_ESCROW.save(deps.storage, x_hash_bytes.as_slice(), &fee)?;

    let mut response = Response::new()
        .add_attribute("method", "outbound_lock")
        .add_event(events::outbound_lock(
            &caller,
            &group_addr,
            &x_hash_hex,
            value,
            &base_addr,
            fee,
        ))
        .add_event(locked_event);

    let change = attached.checked_sub(fee)?;
    if !change.is_zero() {
        response = response.add_message(refund_message(&caller, &config.fee_denom, change));
    }

    Ok(response)
}

/// outboundRefund(x): storeman reveals the preimage; burns escrow and claims the fee.
pub fn execute_outbound_refund(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    preimage_hex: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;

    let preimage =
        hex_to_bytes32(&preimage_hex).map_err(|reason| ContractError::InvalidArgument { reason })?;
    let x_hash_bytes = x_hash(&preimage);
    let escrow = env.contract.address.clone();

    let record = htlc::refund_htlc_tx(
        deps.storage,
        &x_hash_bytes,
        Direction::Wtoken2Coin,
        &info.sender,
        env.block.time.seconds(),
    )?;
    let burnt_event = quota::burn_token(deps.storage, &record.destination, &escrow, record.value)?;

    let fee = FEE_ESCROW
        .may_load(deps.storage, x_hash_bytes.as_slice())?
        .unwrap_or_default();
    FEE_ESCROW.remove(deps.storage, x_hash_bytes.as_slice());

    let mut response = Response::new()
        .add_attribute("method", "outbound_refund")
        .add_event(events::outbound_refund(
            &record.destination,
            &record.source,
            &bytes32_to_hex(&x_hash_bytes),
            &preimage_hex,
        ))
        .add_event(burnt_event);
    if !fee.is_zero() {
        response = response.add_message(refund_message(&record.destination, &config.fee_denom, fee));
    }

    Ok(response)
}

/// outboundRevoke(xHash): either party may call after expiry (loose=true); fee splits
/// `revokeFeeRatio` to the storeman, remainder back to the user.
pub fn execute_outbound_revoke(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    x_hash_hex: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;

    let x_hash_bytes =
        hex_to_bytes32(&x_hash_hex).map_err(|reason| ContractError::InvalidArgument { reason })?;
    let escrow = env.contract.address.clone();

    let record = htlc::revoke_htlc_tx(
        deps.storage,
        &x_hash_bytes,
        Direction::Wtoken2Coin,
        &info.sender,
        env.block.time.seconds(),
        true,
    )?;
    let unlocked_event =
        quota::unlock_token(deps.storage, &record.destination, &record.source, &escrow, record.value)?;

    let fee = FEE_ESCROW
        .may_load(deps.storage, x_hash_bytes.as_slice())?
        .unwrap_or_default();
    FEE_ESCROW.remove(deps.storage, x_hash_bytes.as_slice());

    let storeman_share = fee
        .checked_mul(Uint128::from(config.revoke_fee_ratio))?
        .checked_div(Uint128::from(crate::state::RATIO_PRECISE))?;
    let user_share = fee.checked_sub(storeman_share)?;

    let mut response = Response::new()
        .add_attribute("method", "outbound_revoke")
        .add_event(events::outbound_revoke(&record.source, &x_hash_hex))
        .add_event(unlocked_event);
    if !storeman_share.is_zero() {
        response =
            response.add_message(refund_message(&record.destination, &config.fee_denom, storeman_share));
    }
    if !user_share.is_zero() {
        response = response.add_message(refund_message(&record.source, &config.fee_denom, user_share));
    }

    Ok(response)
}

fn attached_fee_denom(info: &MessageInfo, denom: &str) -> Uint128 {
    info.funds
        .iter()
        .find(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .unwrap_or_default()
}

fn refund_message(to: &Addr, denom: &str, amount: Uint128) -> CosmosMsg {
    BankMsg::Send {
        to_address: to.to_string(),
        amount: vec![cosmwasm_std::Coin {
            denom: denom.to_string(),
            amount,
        }],
    }
    .into()
}
