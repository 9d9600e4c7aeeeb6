//! Error types for the storeman-group settlement core

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller does not match the required manager/admin/owner")]
    Unauthorized,

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Group {group} is not registered")]
    NotRegistered { group: String },

    #[error("Group {group} is already registered")]
    AlreadyRegistered { group: String },

    #[error("Group {group} is not in the required lifecycle state")]
    NotActive { group: String },

    #[error("Requested value exceeds available quota")]
    QuotaExceeded,

    #[error("Arithmetic overflow or underflow")]
    InvariantBroken,

    #[error("HTLC state violation for the given xHash")]
    HtlcStateViolation,

    #[error("HTLC timing violation: refund/revoke attempted outside its window")]
    HtlcTimingViolation,

    #[error("Insufficient fee attached: need {required}, got {got}")]
    InsufficientFee { required: String, got: String },

    #[error("Contract is halted")]
    SystemHalted,

    #[error("Contract is not halted")]
    SystemNotHalted,

    #[error("Group {group} still has outstanding receivable/payable/debt")]
    DebtOutstanding { group: String },

    #[error("Self transfer: from and to must differ")]
    SelfTransfer,

    #[error("Contract has been killed")]
    Killed,

    #[error("Insufficient allowance")]
    InsufficientAllowance,

    #[error("Insufficient balance")]
    InsufficientBalance,
}

impl From<cosmwasm_std::OverflowError> for ContractError {
    fn from(_: cosmwasm_std::OverflowError) -> Self {
        ContractError::InvariantBroken
    }
}

impl From<cosmwasm_std::DivideByZeroError> for ContractError {
    fn from(_: cosmwasm_std::DivideByZeroError) -> Self {
        ContractError::InvariantBroken
    }
}
