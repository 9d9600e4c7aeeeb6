//! Halt gate and destructive kill (C1)
//!
//! Every state-mutating operation must pass `assert_not_halted` except the
//! owner-only admin setters, which require `assert_halted` to discourage
//! live reconfiguration. `kill` is the one operation permitted only while
//! halted, and only once.

use cosmwasm_std::{Addr, BankMsg, CosmosMsg, Deps, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

pub fn assert_not_halted(config: &Config) -> Result<(), ContractError> {
    if config.killed {
        return Err(ContractError::Killed);
    }
    if config.halted {
        return Err(ContractError::SystemHalted);
    }
    Ok(())
}

pub fn assert_halted(config: &Config) -> Result<(), ContractError> {
    if config.killed {
        return Err(ContractError::Killed);
    }
    if !config.halted {
        return Err(ContractError::SystemNotHalted);
    }
    Ok(())
}

pub fn assert_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn assert_group_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if sender != config.group_admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn execute_pause(
    deps: cosmwasm_std::DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    config.halted = true;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "pause")
        .add_attribute("halted", "true"))
}

pub fn execute_unpause(
    deps: cosmwasm_std::DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    config.halted = false;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "unpause")
        .add_attribute("halted", "false"))
}

/// Transfer residual native coin to the owner and deactivate the instance.
/// Permitted only while halted, and it is final: every subsequent entry
/// point will see `config.killed == true` and revert.
pub fn execute_kill(
    deps: cosmwasm_std::DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    assert_halted(&config)?;

    config.killed = true;
    CONFIG.save(deps.storage, &config)?;

    let balances = deps_querier_all_balances(deps.as_ref(), &env)?;
    let mut response = Response::new()
        .add_attribute("method", "kill")
        .add_attribute("owner", config.owner.to_string());

    if !balances.is_empty() {
        let send: CosmosMsg = BankMsg::Send {
            to_address: config.owner.to_string(),
            amount: balances,
        }
        .into();
        response = response.add_message(send);
    }

    Ok(response)
}

fn deps_querier_all_balances(
    deps: Deps,
    env: &Env,
) -> Result<Vec<cosmwasm_std::Coin>, ContractError> {
    Ok(deps
        .querier
        .query_all_balances(env.contract.address.clone())?)
}
