//! Public CW20-shaped transfer surface, backed by the internal ledger in `token.rs`.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::halt::assert_not_halted;
use crate::state::CONFIG;
use crate::token;

pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    token::transfer(deps.storage, &info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_increase_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;

    let spender = deps.api.addr_validate(&spender)?;
    let current = token::allowance(deps.storage, &info.sender, &spender);
    let new_allowance = current.checked_add(amount)?;
    token::approve(deps.storage, &info.sender, &spender, new_allowance)?;

    Ok(Response::new()
        .add_attribute("method", "increase_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("allowance", new_allowance.to_string()))
}

pub fn execute_decrease_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;

    let spender = deps.api.addr_validate(&spender)?;
    let current = token::allowance(deps.storage, &info.sender, &spender);
    let new_allowance = current
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientAllowance)?;
    token::approve(deps.storage, &info.sender, &spender, new_allowance)?;

    Ok(Response::new()
        .add_attribute("method", "decrease_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("allowance", new_allowance.to_string()))
}

pub fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;

    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    token::transfer_from(deps.storage, &info.sender, &owner, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_from")
        .add_attribute("owner", owner)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string()))
}
