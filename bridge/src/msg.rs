//! Message types for the storeman-group settlement core

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner identity; may reconfigure admin setters while halted, and kill the instance.
    pub owner: String,
    /// Group-admin identity; the only caller allowed to register/unregister storeman groups.
    pub group_admin: String,
    /// HTLC window for the non-first-hand side, in seconds. Defaults to 36h if omitted.
    pub base_window: Option<u64>,
    /// Share of the outbound fee paid to the storeman on revoke, over RATIO_PRECISE.
    pub revoke_fee_ratio: u64,
    /// Default outbound tx fee ratio, over RATIO_PRECISE.
    pub default_tx_fee_ratio: u64,
    /// Base-asset-to-native-coin fee conversion ratio, over RATIO_PRECISE.
    pub coin2wan_ratio: u64,
    /// Native-coin denom used for outbound fee escrow.
    pub fee_denom: String,
    pub token_name: String,
    pub token_symbol: String,
    pub token_decimals: u8,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ---- Group lifecycle (group-admin only) ----
    RegisterStoremanGroup { group: String, quota: Uint128 },
    ApplyUnregistration { group: String },
    UnregisterStoremanGroup { group: String },

    // ---- Inbound leg (base -> wrapped) ----
    InboundLock {
        x_hash: String,
        wan_addr: String,
        value: Uint128,
    },
    InboundRefund { x: String },
    InboundRevoke { x_hash: String },

    // ---- Outbound leg (wrapped -> base); native coin fee attached via MessageInfo::funds ----
    OutboundLock {
        x_hash: String,
        group: String,
        base_addr: String,
        value: Uint128,
    },
    OutboundRefund { x: String },
    OutboundRevoke { x_hash: String },

    // ---- CW20-shaped transfer surface over the internal ledger ----
    Transfer { recipient: String, amount: Uint128 },
    IncreaseAllowance { spender: String, amount: Uint128 },
    DecreaseAllowance { spender: String, amount: Uint128 },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    // ---- Owner-only admin setters (require halted=true) ----
    SetLockedTime { seconds: u64 },
    SetRevokeFeeRatio { ratio: u64 },
    SetFeeRegistry {
        default_tx_fee_ratio: Option<u64>,
        coin2wan_ratio: Option<u64>,
    },
    SetGroupFeeOverride { group: String, ratio: Option<u64> },

    // ---- Halt gate (owner only) ----
    Pause {},
    Unpause {},
    Kill {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(StoremanGroupResponse)]
    GetStoremanGroup { group: String },

    #[returns(TotalQuotaResponse)]
    GetTotalQuota {},

    #[returns(IsStoremanGroupResponse)]
    IsStoremanGroup { group: String },

    #[returns(IsStoremanGroupResponse)]
    IsActiveStoremanGroup { group: String },

    #[returns(LeftLockedTimeResponse)]
    GetHtlcLeftLockedTime { x_hash: String },

    #[returns(XHashExistResponse)]
    XHashExist { x_hash: String },

    #[returns(OutboundFeeResponse)]
    GetOutboundFee { group: String, value: Uint128 },

    #[returns(HtlcResponse)]
    Htlc { x_hash: String },

    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub group_admin: Addr,
    pub halted: bool,
    pub killed: bool,
    pub base_window: u64,
    pub revoke_fee_ratio: u64,
}

#[cw_serde]
pub struct StoremanGroupResponse {
    pub quota: Uint128,
    pub inbound_available: Uint128,
    pub outbound_available: Uint128,
    pub receivable: Uint128,
    pub payable: Uint128,
    pub debt: Uint128,
}

#[cw_serde]
pub struct TotalQuotaResponse {
    pub total_quota: Uint128,
}

#[cw_serde]
pub struct IsStoremanGroupResponse {
    pub value: bool,
}

#[cw_serde]
pub struct LeftLockedTimeResponse {
    pub seconds: u64,
}

#[cw_serde]
pub struct XHashExistResponse {
    pub exists: bool,
}

#[cw_serde]
pub struct OutboundFeeResponse {
    pub fee: Uint128,
}

#[cw_serde]
pub struct HtlcResponse {
    pub direction: Option<crate::state::Direction>,
    pub source: Option<Addr>,
    pub destination: Option<Addr>,
    pub value: Uint128,
    pub status: crate::state::HtlcStatus,
    pub begin_locked_time: u64,
    pub locked_time: u64,
    pub shadow_address: Option<String>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}
