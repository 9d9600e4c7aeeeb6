//! End-to-end scenarios for the storeman-group settlement core, driven through
//! the full CosmWasm entry points with `cw-multi-test`.

use cosmwasm_std::{coins, Addr, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use bridge::hash::{bytes32_to_hex, keccak256};
use bridge::msg::{
    BalanceResponse, ExecuteMsg, InstantiateMsg, QueryMsg, StoremanGroupResponse,
    TokenInfoResponse,
};

const FEE_DENOM: &str = "uluna";

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    );
    Box::new(contract)
}

/// Preimage whose last byte is `tag`, its hex encoding, and keccak256(preimage) hex.
fn preimage(tag: u8) -> (String, String) {
    let mut bytes = [0u8; 32];
    bytes[31] = tag;
    let x_hash = bytes32_to_hex(&keccak256(&bytes));
    (bytes32_to_hex(&bytes), x_hash)
}

fn setup() -> (App, Addr, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let group_admin = Addr::unchecked("group_admin");

    app.init_modules(|router, _, storage| {
        for who in ["group_g", "group_h", "user_u"] {
            router
                .bank
                .init_balance(storage, &Addr::unchecked(who), coins(1_000_000, FEE_DENOM))
                .unwrap();
        }
    });

    let code_id = app.store_code(contract_bridge());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                group_admin: group_admin.to_string(),
                base_window: Some(36 * 3600),
                revoke_fee_ratio: 3000,
                default_tx_fee_ratio: 200,
                coin2wan_ratio: 10_000,
                fee_denom: FEE_DENOM.to_string(),
                token_name: "Wrapped Base Asset".to_string(),
                token_symbol: "WBASE".to_string(),
                token_decimals: 8,
            },
            &[],
            "storeman-htlc-bridge",
            Some(owner.to_string()),
        )
        .unwrap();

    (app, contract_addr, owner, group_admin)
}

fn register_group(app: &mut App, contract_addr: &Addr, group_admin: &Addr, group: &str, quota: u128) {
    app.execute_contract(
        group_admin.clone(),
        contract_addr.clone(),
        &ExecuteMsg::RegisterStoremanGroup {
            group: group.to_string(),
            quota: Uint128::from(quota),
        },
        &[],
    )
    .unwrap();
}

fn storeman_group(app: &App, contract_addr: &Addr, group: &str) -> StoremanGroupResponse {
    app.wrap()
        .query_wasm_smart(
            contract_addr,
            &QueryMsg::GetStoremanGroup {
                group: group.to_string(),
            },
        )
        .unwrap()
}

fn balance_of(app: &App, contract_addr: &Addr, who: &str) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            contract_addr,
            &QueryMsg::Balance {
                address: who.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn total_supply(app: &App, contract_addr: &Addr) -> Uint128 {
    let res: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(contract_addr, &QueryMsg::TokenInfo {})
        .unwrap();
    res.total_supply
}

/// Scenario 1: inbound happy path.
#[test]
fn inbound_happy_path_mints_to_recipient() {
    let (mut app, contract_addr, _owner, group_admin) = setup();
    register_group(&mut app, &contract_addr, &group_admin, "group_g", 1000);

    let (preimage_hex, x_hash_hex) = preimage(1);

    app.execute_contract(
        Addr::unchecked("group_g"),
        contract_addr.clone(),
        &ExecuteMsg::InboundLock {
            x_hash: x_hash_hex.clone(),
            wan_addr: "user_u".to_string(),
            value: Uint128::from(500u128),
        },
        &[],
    )
    .unwrap();

    let g = storeman_group(&app, &contract_addr, "group_g");
    assert_eq!(g.receivable, Uint128::from(500u128));
    assert_eq!(g.debt, Uint128::zero());
    assert_eq!(total_supply(&app, &contract_addr), Uint128::zero());

    app.execute_contract(
        Addr::unchecked("user_u"),
        contract_addr.clone(),
        &ExecuteMsg::InboundRefund { x: preimage_hex },
        &[],
    )
    .unwrap();

    let g = storeman_group(&app, &contract_addr, "group_g");
    assert_eq!(g.receivable, Uint128::zero());
    assert_eq!(g.debt, Uint128::from(500u128));
    assert_eq!(balance_of(&app, &contract_addr, "user_u"), Uint128::from(500u128));
    assert_eq!(total_supply(&app, &contract_addr), Uint128::from(500u128));
}

/// Scenario 2: inbound revoke after expiry.
#[test]
fn inbound_revoke_after_expiry_releases_reservation() {
    let (mut app, contract_addr, _owner, group_admin) = setup();
    register_group(&mut app, &contract_addr, &group_admin, "group_g", 1000);
    let (_preimage_hex, x_hash_hex) = preimage(1);

    app.execute_contract(
        Addr::unchecked("group_g"),
        contract_addr.clone(),
        &ExecuteMsg::InboundLock {
            x_hash: x_hash_hex.clone(),
            wan_addr: "user_u".to_string(),
            value: Uint128::from(500u128),
        },
        &[],
    )
    .unwrap();

    app.update_block(|block| {
        block.time = block.time.plus_seconds(36 * 3600);
    });

    app.execute_contract(
        Addr::unchecked("group_g"),
        contract_addr.clone(),
        &ExecuteMsg::InboundRevoke { x_hash: x_hash_hex },
        &[],
    )
    .unwrap();

    let g = storeman_group(&app, &contract_addr, "group_g");
    assert_eq!(g.receivable, Uint128::zero());
    assert_eq!(g.debt, Uint128::zero());
    assert_eq!(total_supply(&app, &contract_addr), Uint128::zero());
}

/// Run scenario 1 to completion, returning a setup with U holding 500 wrapped tokens.
fn setup_after_inbound_refund() -> (App, Addr, Addr) {
    let (mut app, contract_addr, _owner, group_admin) = setup();
    register_group(&mut app, &contract_addr, &group_admin, "group_g", 1000);
    let (preimage_hex, x_hash_hex) = preimage(1);

    app.execute_contract(
        Addr::unchecked("group_g"),
        contract_addr.clone(),
        &ExecuteMsg::InboundLock {
            x_hash: x_hash_hex,
            wan_addr: "user_u".to_string(),
            value: Uint128::from(500u128),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        Addr::unchecked("user_u"),
        contract_addr.clone(),
        &ExecuteMsg::InboundRefund { x: preimage_hex },
        &[],
    )
    .unwrap();

    (app, contract_addr, group_admin)
}

/// Scenario 3: outbound happy path with fee.
#[test]
fn outbound_happy_path_burns_escrow_and_pays_fee() {
    let (mut app, contract_addr, _group_admin) = setup_after_inbound_refund();
    let (preimage_hex, x_hash_hex) = preimage(2);

    app.execute_contract(
        Addr::unchecked("user_u"),
        contract_addr.clone(),
        &ExecuteMsg::OutboundLock {
            x_hash: x_hash_hex,
            group: "group_g".to_string(),
            base_addr: "base_addr_b".to_string(),
            value: Uint128::from(500u128),
        },
        &coins(10, FEE_DENOM),
    )
    .unwrap();

    let g = storeman_group(&app, &contract_addr, "group_g");
    assert_eq!(g.payable, Uint128::from(500u128));
    assert_eq!(balance_of(&app, &contract_addr, "user_u"), Uint128::zero());
    assert_eq!(
        balance_of(&app, &contract_addr, contract_addr.as_str()),
        Uint128::from(500u128)
    );

    let fee_before = app
        .wrap()
        .query_balance("group_g", FEE_DENOM)
        .unwrap()
        .amount;

    app.execute_contract(
        Addr::unchecked("group_g"),
        contract_addr.clone(),
        &ExecuteMsg::OutboundRefund { x: preimage_hex },
        &[],
    )
    .unwrap();

    let g = storeman_group(&app, &contract_addr, "group_g");
    assert_eq!(g.debt, Uint128::zero());
    assert_eq!(g.payable, Uint128::zero());
    assert_eq!(total_supply(&app, &contract_addr), Uint128::zero());

    let fee_after = app
        .wrap()
        .query_balance("group_g", FEE_DENOM)
        .unwrap()
        .amount;
    assert_eq!(fee_after - fee_before, Uint128::from(10u128));
}

/// Scenario 4: outbound revoke with fee split.
#[test]
fn outbound_revoke_splits_fee_and_restores_balance() {
    let (mut app, contract_addr, _group_admin) = setup_after_inbound_refund();
    let (_preimage_hex, x_hash_hex) = preimage(2);

    app.execute_contract(
        Addr::unchecked("user_u"),
        contract_addr.clone(),
        &ExecuteMsg::OutboundLock {
            x_hash: x_hash_hex.clone(),
            group: "group_g".to_string(),
            base_addr: "base_addr_b".to_string(),
            value: Uint128::from(500u128),
        },
        &coins(10, FEE_DENOM),
    )
    .unwrap();

    app.update_block(|block| {
        block.time = block.time.plus_seconds(2 * 36 * 3600);
    });

    let g_before = app
        .wrap()
        .query_balance("group_g", FEE_DENOM)
        .unwrap()
        .amount;
    let u_before = app
        .wrap()
        .query_balance("user_u", FEE_DENOM)
        .unwrap()
        .amount;

    app.execute_contract(
        Addr::unchecked("user_u"),
        contract_addr.clone(),
        &ExecuteMsg::OutboundRevoke { x_hash: x_hash_hex },
        &[],
    )
    .unwrap();

    let g_after = app
        .wrap()
        .query_balance("group_g", FEE_DENOM)
        .unwrap()
        .amount;
    let u_after = app
        .wrap()
        .query_balance("user_u", FEE_DENOM)
        .unwrap()
        .amount;
    assert_eq!(g_after - g_before, Uint128::from(3u128));
    assert_eq!(u_after - u_before, Uint128::from(7u128));

    assert_eq!(balance_of(&app, &contract_addr, "user_u"), Uint128::from(500u128));
    let g = storeman_group(&app, &contract_addr, "group_g");
    assert_eq!(g.payable, Uint128::zero());
    assert_eq!(g.debt, Uint128::from(500u128));
}

/// Scenario 5: UnregisterPending debt drain.
#[test]
fn unregister_pending_group_drains_debt_via_inbound_refund() {
    let (mut app, contract_addr, _owner, group_admin) = setup();
    register_group(&mut app, &contract_addr, &group_admin, "group_g", 1000);
    register_group(&mut app, &contract_addr, &group_admin, "group_h", 1000);

    // Give group_g debt=500 via an ordinary inbound mint to a user.
    let (preimage_hex, x_hash_hex) = preimage(1);
    app.execute_contract(
        Addr::unchecked("group_g"),
        contract_addr.clone(),
        &ExecuteMsg::InboundLock {
            x_hash: x_hash_hex,
            wan_addr: "user_u".to_string(),
            value: Uint128::from(500u128),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        Addr::unchecked("user_u"),
        contract_addr.clone(),
        &ExecuteMsg::InboundRefund { x: preimage_hex },
        &[],
    )
    .unwrap();

    app.execute_contract(
        group_admin.clone(),
        contract_addr.clone(),
        &ExecuteMsg::ApplyUnregistration {
            group: "group_g".to_string(),
        },
        &[],
    )
    .unwrap();

    // group_h directs an inbound mint at the decommissioning group_g instead of a user.
    let (drain_preimage_hex, drain_x_hash_hex) = preimage(3);
    app.execute_contract(
        Addr::unchecked("group_h"),
        contract_addr.clone(),
        &ExecuteMsg::InboundLock {
            x_hash: drain_x_hash_hex,
            wan_addr: "group_g".to_string(),
            value: Uint128::from(500u128),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        Addr::unchecked("group_g"),
        contract_addr.clone(),
        &ExecuteMsg::InboundRefund {
            x: drain_preimage_hex,
        },
        &[],
    )
    .unwrap();

    let h = storeman_group(&app, &contract_addr, "group_h");
    assert_eq!(h.receivable, Uint128::zero());
    assert_eq!(h.debt, Uint128::from(500u128));
    let g = storeman_group(&app, &contract_addr, "group_g");
    assert_eq!(g.debt, Uint128::zero());

    app.execute_contract(
        group_admin,
        contract_addr,
        &ExecuteMsg::UnregisterStoremanGroup {
            group: "group_g".to_string(),
        },
        &[],
    )
    .unwrap();
}

/// Scenario 6: xHash collision is rejected regardless of direction or caller.
#[test]
fn xhash_collision_rejected() {
    let (mut app, contract_addr, _owner, group_admin) = setup();
    register_group(&mut app, &contract_addr, &group_admin, "group_g", 1000);
    let (_preimage_hex, x_hash_hex) = preimage(1);

    app.execute_contract(
        Addr::unchecked("group_g"),
        contract_addr.clone(),
        &ExecuteMsg::InboundLock {
            x_hash: x_hash_hex.clone(),
            wan_addr: "user_u".to_string(),
            value: Uint128::from(500u128),
        },
        &[],
    )
    .unwrap();

    let res = app.execute_contract(
        Addr::unchecked("user_u"),
        contract_addr,
        &ExecuteMsg::OutboundLock {
            x_hash: x_hash_hex,
            group: "group_g".to_string(),
            base_addr: "base_addr_b".to_string(),
            value: Uint128::from(1u128),
        },
        &coins(10, FEE_DENOM),
    );
    assert!(res.is_err());
}
