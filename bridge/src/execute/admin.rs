//! Group lifecycle and owner-configuration handlers.
//!
//! Group registration is reachable only for `config.group_admin`; the
//! remaining setters require `config.owner` and are gated on the contract
//! being halted (rather than not-halted) to discourage live reconfiguration.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::events;
use crate::fee::validate_ratio;
use crate::halt::{assert_halted, assert_group_admin, assert_not_halted, assert_owner};
use crate::quota;
use crate::state::{CONFIG, COIN2WAN_RATIO, DEFAULT_TX_FEE_RATIO, GROUP_FEE_OVERRIDE, TOTAL_QUOTA};

pub fn execute_register_storeman_group(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
    quota_value: cosmwasm_std::Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;
    assert_group_admin(&config, &info.sender)?;

    let group_addr = deps.api.addr_validate(&group)?;
    quota::register_storeman_group(deps.storage, &group_addr, quota_value)?;
    let total_quota = TOTAL_QUOTA.load(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "register_storeman_group")
        .add_attribute("group", group_addr.to_string())
        .add_event(events::group_registered(&group_addr, quota_value, total_quota)))
}

pub fn execute_apply_unregistration(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;
    assert_group_admin(&config, &info.sender)?;

    let group_addr = deps.api.addr_validate(&group)?;
    quota::apply_unregistration(deps.storage, &group_addr)?;

    Ok(Response::new()
        .add_attribute("method", "apply_unregistration")
        .add_attribute("group", group_addr.to_string()))
}

pub fn execute_unregister_storeman_group(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_halted(&config)?;
    assert_group_admin(&config, &info.sender)?;

    let group_addr = deps.api.addr_validate(&group)?;
    let freed_quota = quota::unregister_storeman_group(deps.storage, &group_addr)?;
    let total_quota = TOTAL_QUOTA.load(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "unregister_storeman_group")
        .add_attribute("group", group_addr.to_string())
        .add_event(events::group_unregistered(&group_addr, freed_quota, total_quota)))
}

pub fn execute_set_locked_time(
    deps: DepsMut,
    info: MessageInfo,
    seconds: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    assert_halted(&config)?;

    config.base_window = seconds;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_locked_time")
        .add_attribute("seconds", seconds.to_string()))
}

pub fn execute_set_revoke_fee_ratio(
    deps: DepsMut,
    info: MessageInfo,
    ratio: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    assert_halted(&config)?;
    if !validate_ratio(ratio) {
        return Err(ContractError::InvalidArgument {
            reason: "revoke fee ratio must be <= RATIO_PRECISE".into(),
        });
    }

    config.revoke_fee_ratio = ratio;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_revoke_fee_ratio")
        .add_attribute("ratio", ratio.to_string()))
}

pub fn execute_set_fee_registry(
    deps: DepsMut,
    info: MessageInfo,
    default_tx_fee_ratio: Option<u64>,
    coin2wan_ratio: Option<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    assert_halted(&config)?;

    if let Some(ratio) = default_tx_fee_ratio {
        if !validate_ratio(ratio) {
            return Err(ContractError::InvalidArgument {
                reason: "default tx fee ratio must be <= RATIO_PRECISE".into(),
            });
        }
        DEFAULT_TX_FEE_RATIO.save(deps.storage, &ratio)?;
    }
    if let Some(ratio) = coin2wan_ratio {
        COIN2WAN_RATIO.save(deps.storage, &ratio)?;
    }

    Ok(Response::new().add_attribute("method", "set_fee_registry"))
}

pub fn execute_set_group_fee_override(
    deps: DepsMut,
    info: MessageInfo,
    group: String,
    ratio: Option<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;
    assert_halted(&config)?;

    let group_addr = deps.api.addr_validate(&group)?;
    match ratio {
        Some(r) => {
            if !validate_ratio(r) {
                return Err(ContractError::InvalidArgument {
                    reason: "group fee ratio must be <= RATIO_PRECISE".into(),
                });
            }
            GROUP_FEE_OVERRIDE.save(deps.storage, &group_addr, &r)?;
        }
        None => GROUP_FEE_OVERRIDE.remove(deps.storage, &group_addr),
    }

    Ok(Response::new()
        .add_attribute("method", "set_group_fee_override")
        .add_attribute("group", group_addr.to_string()))
}
