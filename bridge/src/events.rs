//! Protocol event constructors
//!
//! CosmWasm has no indexed/non-indexed topic distinction, so every field
//! becomes a plain attribute on a `cosmwasm_std::Event`.

use cosmwasm_std::{Addr, Event, Uint128};

pub fn inbound_lock(storeman: &Addr, wan_addr: &Addr, x_hash: &str, value: Uint128) -> Event {
    Event::new("inbound_lock")
        .add_attribute("storeman", storeman)
        .add_attribute("wan_addr", wan_addr)
        .add_attribute("x_hash", x_hash)
        .add_attribute("value", value.to_string())
}

pub fn inbound_refund(wan_addr: &Addr, storeman: &Addr, x_hash: &str, preimage: &str) -> Event {
    Event::new("inbound_refund")
        .add_attribute("wan_addr", wan_addr)
        .add_attribute("storeman", storeman)
        .add_attribute("x_hash", x_hash)
        .add_attribute("x", preimage)
}

pub fn inbound_revoke(storeman: &Addr, x_hash: &str) -> Event {
    Event::new("inbound_revoke")
        .add_attribute("storeman", storeman)
        .add_attribute("x_hash", x_hash)
}

#[allow(clippy::too_many_arguments)]
pub fn outbound_lock(
    wan_addr: &Addr,
    storeman: &Addr,
    x_hash: &str,
    value: Uint128,
    base_addr: &str,
    fee: Uint128,
) -> Event {
    Event::new("outbound_lock")
        .add_attribute("wan_addr", wan_addr)
        .add_attribute("storeman", storeman)
        .add_attribute("x_hash", x_hash)
        .add_attribute("value", value.to_string())
        .add_attribute("base_addr", base_addr)
        .add_attribute("fee", fee.to_string())
}

pub fn outbound_refund(storeman: &Addr, wan_addr: &Addr, x_hash: &str, preimage: &str) -> Event {
    Event::new("outbound_refund")
        .add_attribute("storeman", storeman)
        .add_attribute("wan_addr", wan_addr)
        .add_attribute("x_hash", x_hash)
        .add_attribute("x", preimage)
}

pub fn outbound_revoke(wan_addr: &Addr, x_hash: &str) -> Event {
    Event::new("outbound_revoke")
        .add_attribute("wan_addr", wan_addr)
        .add_attribute("x_hash", x_hash)
}

pub fn token_minted(account: &Addr, value: Uint128, total_supply: Uint128) -> Event {
    Event::new("token_minted")
        .add_attribute("account", account)
        .add_attribute("value", value.to_string())
        .add_attribute("total_supply", total_supply.to_string())
}

pub fn token_burnt(account: &Addr, value: Uint128, total_supply: Uint128) -> Event {
    Event::new("token_burnt")
        .add_attribute("account", account)
        .add_attribute("value", value.to_string())
        .add_attribute("total_supply", total_supply.to_string())
}

pub fn token_locked(from: &Addr, to: &Addr, value: Uint128) -> Event {
    Event::new("token_locked")
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("value", value.to_string())
}

pub fn group_registered(group: &Addr, quota: Uint128, total_quota: Uint128) -> Event {
    Event::new("group_registered")
        .add_attribute("group", group)
        .add_attribute("quota", quota.to_string())
        .add_attribute("total_quota", total_quota.to_string())
}

pub fn group_unregistered(group: &Addr, quota: Uint128, total_quota: Uint128) -> Event {
    Event::new("group_unregistered")
        .add_attribute("group", group)
        .add_attribute("quota", quota.to_string())
        .add_attribute("total_quota", total_quota.to_string())
}
