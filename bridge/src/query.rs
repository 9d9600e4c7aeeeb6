//! Query handlers for the storeman-group settlement core.

use cosmwasm_std::{Addr, Deps, Env, StdError, StdResult, Uint128};

use crate::hash::hex_to_bytes32;
use crate::msg::{
    AllowanceResponse, BalanceResponse, ConfigResponse, HtlcResponse, IsStoremanGroupResponse,
    LeftLockedTimeResponse, OutboundFeeResponse, StoremanGroupResponse, TokenInfoResponse,
    TotalQuotaResponse, XHashExistResponse,
};
use crate::state::{CONFIG, TOTAL_QUOTA};
use crate::{fee, htlc, quota, token};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        group_admin: config.group_admin,
        halted: config.halted,
        killed: config.killed,
        base_window: config.base_window,
        revoke_fee_ratio: config.revoke_fee_ratio,
    })
}

pub fn query_storeman_group(deps: Deps, group: String) -> StdResult<StoremanGroupResponse> {
    let group = deps.api.addr_validate(&group)?;
    let (quota, inbound_available, outbound_available, receivable, payable, debt) =
        quota::get_storeman_group(deps.storage, &group);
    Ok(StoremanGroupResponse {
        quota,
        inbound_available,
        outbound_available,
        receivable,
        payable,
        debt,
    })
}

pub fn query_total_quota(deps: Deps) -> StdResult<TotalQuotaResponse> {
    let total_quota = TOTAL_QUOTA.may_load(deps.storage)?.unwrap_or_default();
    Ok(TotalQuotaResponse { total_quota })
}

pub fn query_is_storeman_group(deps: Deps, group: String) -> StdResult<IsStoremanGroupResponse> {
    let group = deps.api.addr_validate(&group)?;
    Ok(IsStoremanGroupResponse {
        value: quota::is_registered(deps.storage, &group),
    })
}

pub fn query_is_active_storeman_group(
    deps: Deps,
    group: String,
) -> StdResult<IsStoremanGroupResponse> {
    let group = deps.api.addr_validate(&group)?;
    Ok(IsStoremanGroupResponse {
        value: quota::is_active(deps.storage, &group),
    })
}

pub fn query_htlc_left_locked_time(
    deps: Deps,
    env: Env,
    x_hash: String,
) -> StdResult<LeftLockedTimeResponse> {
    let x_hash = parse_xhash(&x_hash)?;
    let now = env.block.time.seconds();
    Ok(LeftLockedTimeResponse {
        seconds: htlc::get_htlc_left_locked_time(deps.storage, &x_hash, now),
    })
}

pub fn query_xhash_exist(deps: Deps, x_hash: String) -> StdResult<XHashExistResponse> {
    let x_hash = parse_xhash(&x_hash)?;
    Ok(XHashExistResponse {
        exists: htlc::xhash_exist(deps.storage, &x_hash),
    })
}

pub fn query_outbound_fee(
    deps: Deps,
    group: String,
    value: Uint128,
) -> StdResult<OutboundFeeResponse> {
    let group = deps.api.addr_validate(&group)?;
    Ok(OutboundFeeResponse {
        fee: fee::get_outbound_fee(deps, &group, value)?,
    })
}

pub fn query_htlc(deps: Deps, x_hash: String) -> StdResult<HtlcResponse> {
    let x_hash = parse_xhash(&x_hash)?;
    match htlc::get_htlc(deps.storage, &x_hash) {
        Some(record) => Ok(HtlcResponse {
            direction: Some(record.direction),
            source: Some(record.source),
            destination: Some(record.destination),
            value: record.value,
            status: record.status,
            begin_locked_time: record.begin_locked_time,
            locked_time: record.locked_time,
            shadow_address: record.shadow_address,
        }),
        None => Ok(HtlcResponse {
            direction: None,
            source: None,
            destination: None,
            value: Uint128::zero(),
            status: crate::state::HtlcStatus::None,
            begin_locked_time: 0,
            locked_time: 0,
            shadow_address: None,
        }),
    }
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address: Addr = deps.api.addr_validate(&address)?;
    Ok(BalanceResponse {
        balance: token::balance_of(deps.storage, &address),
    })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    Ok(AllowanceResponse {
        allowance: token::allowance(deps.storage, &owner, &spender),
    })
}

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: config.token_name,
        symbol: config.token_symbol,
        decimals: config.token_decimals,
        total_supply: token::total_supply(deps.storage)?,
    })
}

fn parse_xhash(s: &str) -> StdResult<[u8; 32]> {
    hex_to_bytes32(s).map_err(StdError::generic_err)
}
