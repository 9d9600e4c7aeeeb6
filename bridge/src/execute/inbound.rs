//! Inbound leg (base-chain coin -> wrapped token).

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::events;
use crate::halt::assert_not_halted;
use crate::hash::{bytes32_to_hex, hex_to_bytes32, x_hash};
use crate::state::{Direction, CONFIG};
use crate::{htlc, quota};

/// inboundLock(xHash, wanAddr, value): caller is the storeman observing a base-chain lock.
pub fn execute_inbound_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    x_hash_hex: String,
    wan_addr: String,
    value: cosmwasm_std::Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;

    let x_hash_bytes =
        hex_to_bytes32(&x_hash_hex).map_err(|reason| ContractError::InvalidArgument { reason })?;
    let wan_addr = deps.api.addr_validate(&wan_addr)?;
    let storeman = info.sender;

    htlc::add_htlc_tx(
        deps.storage,
        &x_hash_bytes,
        Direction::Coin2Wtoken,
        storeman.clone(),
        wan_addr.clone(),
        value,
        env.block.time.seconds(),
        config.base_window,
        false,
        None,
    )?;
    quota::lock_quota(deps.storage, &storeman, &wan_addr, value)?;

    Ok(Response::new()
        .add_attribute("method", "inbound_lock")
        .add_event(events::inbound_lock(&storeman, &wan_addr, &x_hash_hex, value)))
}

/// inboundRefund(x): reveal the preimage within the window; caller must be the recipient
/// (`record.destination`), enforced inside `htlc::refund_htlc_tx`.
pub fn execute_inbound_refund(
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

    let record = htlc::refund_htlc_tx(
        deps.storage,
        &x_hash_bytes,
        Direction::Coin2Wtoken,
        &info.sender,
        env.block.time.seconds(),
    )?;
    let minted = quota::mint_token(deps.storage, &record.source, &record.destination, record.value)?;

    let mut response = Response::new()
        .add_attribute("method", "inbound_refund")
        .add_event(events::inbound_refund(
            &record.destination,
            &record.source,
            &bytes32_to_hex(&x_hash_bytes),
            &preimage_hex,
        ));
    if let Some(minted_event) = minted {
        response = response.add_event(minted_event);
    }
    Ok(response)
}

/// inboundRevoke(xHash): expire a non-redeemed inbound lock; caller must be the storeman
/// (`record.source`, loose=false), enforced inside `htlc::revoke_htlc_tx`.
pub fn execute_inbound_revoke(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    x_hash_hex: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;

    let x_hash_bytes =
        hex_to_bytes32(&x_hash_hex).map_err(|reason| ContractError::InvalidArgument { reason })?;

    let record = htlc::revoke_htlc_tx(
        deps.storage,
        &x_hash_bytes,
        Direction::Coin2Wtoken,
        &info.sender,
        env.block.time.seconds(),
        false,
    )?;
    quota::unlock_quota(deps.storage, &record.source, record.value)?;

    Ok(Response::new()
        .add_attribute("method", "inbound_revoke")
        .add_event(events::inbound_revoke(&record.source, &x_hash_hex)))
}
