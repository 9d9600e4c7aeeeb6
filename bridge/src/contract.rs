//! Storeman-group settlement core - entry points.
//!
//! The implementation is modularized into:
//! - `execute/` - execute message handlers
//! - `query` - query message handlers
//! - `quota`, `htlc`, `token` - the three settlement subsystems
//! - `halt` - the safe-arithmetic/halt gate

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_apply_unregistration, execute_decrease_allowance, execute_increase_allowance,
    execute_inbound_lock, execute_inbound_refund, execute_inbound_revoke, execute_outbound_lock,
    execute_outbound_refund, execute_outbound_revoke, execute_register_storeman_group,
    execute_set_fee_registry, execute_set_group_fee_override, execute_set_locked_time,
    execute_set_revoke_fee_ratio, execute_transfer, execute_transfer_from,
    execute_unregister_storeman_group,
};
use crate::halt::{execute_kill, execute_pause, execute_unpause};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allowance, query_balance, query_config, query_htlc, query_htlc_left_locked_time,
    query_is_active_storeman_group, query_is_storeman_group, query_outbound_fee,
    query_storeman_group, query_token_info, query_total_quota, query_xhash_exist,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, COIN2WAN_RATIO, DEFAULT_BASE_WINDOW,
    DEFAULT_TX_FEE_RATIO, TOTAL_QUOTA,
};
use cosmwasm_std::Uint128;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let group_admin = deps.api.addr_validate(&msg.group_admin)?;

    if !crate::fee::validate_ratio(msg.revoke_fee_ratio) {
        return Err(ContractError::InvalidArgument {
            reason: "revoke fee ratio must be <= RATIO_PRECISE".into(),
        });
    }
    if !crate::fee::validate_ratio(msg.default_tx_fee_ratio) {
        return Err(ContractError::InvalidArgument {
            reason: "default tx fee ratio must be <= RATIO_PRECISE".into(),
        });
    }

    let config = Config {
        owner,
        group_admin,
        halted: false,
        killed: false,
        base_window: msg.base_window.unwrap_or(DEFAULT_BASE_WINDOW),
        revoke_fee_ratio: msg.revoke_fee_ratio,
        fee_denom: msg.fee_denom,
        token_name: msg.token_name,
        token_symbol: msg.token_symbol,
        token_decimals: msg.token_decimals,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_QUOTA.save(deps.storage, &Uint128::zero())?;
    DEFAULT_TX_FEE_RATIO.save(deps.storage, &msg.default_tx_fee_ratio)?;
    COIN2WAN_RATIO.save(deps.storage, &msg.coin2wan_ratio)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("group_admin", config.group_admin)
        .add_attribute("base_window", config.base_window.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterStoremanGroup { group, quota } => {
            execute_register_storeman_group(deps, info, group, quota)
        }
        ExecuteMsg::ApplyUnregistration { group } => {
            execute_apply_unregistration(deps, info, group)
        }
        ExecuteMsg::UnregisterStoremanGroup { group } => {
            execute_unregister_storeman_group(deps, info, group)
        }

        ExecuteMsg::InboundLock {
            x_hash,
            wan_addr,
            value,
        } => execute_inbound_lock(deps, env, info, x_hash, wan_addr, value),
        ExecuteMsg::InboundRefund { x } => execute_inbound_refund(deps, env, info, x),
        ExecuteMsg::InboundRevoke { x_hash } => execute_inbound_revoke(deps, env, info, x_hash),

        ExecuteMsg::OutboundLock {
            x_hash,
            group,
            base_addr,
            value,
        } => execute_outbound_lock(deps, env, info, x_hash, group, base_addr, value),
        ExecuteMsg::OutboundRefund { x } => execute_outbound_refund(deps, env, info, x),
        ExecuteMsg::OutboundRevoke { x_hash } => execute_outbound_revoke(deps, env, info, x_hash),

        ExecuteMsg::Transfer { recipient, amount } => execute_transfer(deps, info, recipient, amount),
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),

        ExecuteMsg::SetLockedTime { seconds } => execute_set_locked_time(deps, info, seconds),
        ExecuteMsg::SetRevokeFeeRatio { ratio } => execute_set_revoke_fee_ratio(deps, info, ratio),
        ExecuteMsg::SetFeeRegistry {
            default_tx_fee_ratio,
            coin2wan_ratio,
        } => execute_set_fee_registry(deps, info, default_tx_fee_ratio, coin2wan_ratio),
        ExecuteMsg::SetGroupFeeOverride { group, ratio } => {
            execute_set_group_fee_override(deps, info, group, ratio)
        }

        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::Kill {} => execute_kill(deps, env, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::GetStoremanGroup { group } => to_json_binary(&query_storeman_group(deps, group)?),
        QueryMsg::GetTotalQuota {} => to_json_binary(&query_total_quota(deps)?),
        QueryMsg::IsStoremanGroup { group } => to_json_binary(&query_is_storeman_group(deps, group)?),
        QueryMsg::IsActiveStoremanGroup { group } => {
            to_json_binary(&query_is_active_storeman_group(deps, group)?)
        }
        QueryMsg::GetHtlcLeftLockedTime { x_hash } => {
            to_json_binary(&query_htlc_left_locked_time(deps, env, x_hash)?)
        }
        QueryMsg::XHashExist { x_hash } => to_json_binary(&query_xhash_exist(deps, x_hash)?),
        QueryMsg::GetOutboundFee { group, value } => {
            to_json_binary(&query_outbound_fee(deps, group, value)?)
        }
        QueryMsg::Htlc { x_hash } => to_json_binary(&query_htlc(deps, x_hash)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
