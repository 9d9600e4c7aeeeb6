//! Outbound fee calculation — a storeman-group-admin registry stand-in
//! providing fee ratios and coin metadata.
//!
//! Priority-chain fee lookup: a per-group override takes precedence over a
//! standard default rate.

use cosmwasm_std::{Addr, Deps, StdResult, Uint128};

use crate::state::{COIN2WAN_RATIO, DEFAULT_TX_FEE_RATIO, GROUP_FEE_OVERRIDE, RATIO_PRECISE};

/// `getOutboundFee(group, value) = value * coin2WanRatio * txFeeRatio(group) / precise^2`.
/// Integer division truncates; precision loss is accepted.
pub fn get_outbound_fee(deps: Deps, group: &Addr, value: Uint128) -> StdResult<Uint128> {
    let coin2wan = COIN2WAN_RATIO.load(deps.storage)?;
    let tx_fee_ratio = get_tx_fee_ratio(deps, group)?;

    let precise = Uint128::from(RATIO_PRECISE);
    let numerator = value
        .checked_mul(Uint128::from(coin2wan))?
        .checked_mul(Uint128::from(tx_fee_ratio))?;
    let denominator = precise.checked_mul(precise)?;
    Ok(numerator.checked_div(denominator)?)
}

/// Effective `txFeeRatio` for a group: its override if set, else the default.
pub fn get_tx_fee_ratio(deps: Deps, group: &Addr) -> StdResult<u64> {
    if let Some(custom) = GROUP_FEE_OVERRIDE.may_load(deps.storage, group)? {
        return Ok(custom);
    }
    DEFAULT_TX_FEE_RATIO.load(deps.storage)
}

pub fn validate_ratio(ratio: u64) -> bool {
    ratio <= RATIO_PRECISE
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    fn setup() -> cosmwasm_std::OwnedDeps<
        cosmwasm_std::testing::MockStorage,
        cosmwasm_std::testing::MockApi,
        cosmwasm_std::testing::MockQuerier,
    > {
        let mut deps = mock_dependencies();
        COIN2WAN_RATIO.save(deps.as_mut().storage, &10_000u64).unwrap();
        DEFAULT_TX_FEE_RATIO
            .save(deps.as_mut().storage, &50u64)
            .unwrap();
        deps
    }

    #[test]
    fn default_fee_uses_standard_ratio() {
        let deps = setup();
        let group = Addr::unchecked("group1");
        // coin2wan=1.0 (10000/10000), tx_fee=0.5% (50/10000) -> fee = value * 0.005
        let fee = get_outbound_fee(deps.as_ref(), &group, Uint128::from(1000u128)).unwrap();
        assert_eq!(fee, Uint128::from(5u128));
    }

    #[test]
    fn group_override_takes_priority() {
        let mut deps = setup();
        let group = Addr::unchecked("group1");
        GROUP_FEE_OVERRIDE
            .save(deps.as_mut().storage, &group, &100u64)
            .unwrap();
        let fee = get_outbound_fee(deps.as_ref(), &group, Uint128::from(1000u128)).unwrap();
        assert_eq!(fee, Uint128::from(10u128));
    }

    #[test]
    fn zero_value_yields_zero_fee() {
        let deps = setup();
        let group = Addr::unchecked("group1");
        let fee = get_outbound_fee(deps.as_ref(), &group, Uint128::zero()).unwrap();
        assert!(fee.is_zero());
    }

    #[test]
    fn validate_ratio_bounds() {
        assert!(validate_ratio(0));
        assert!(validate_ratio(RATIO_PRECISE));
        assert!(!validate_ratio(RATIO_PRECISE + 1));
    }
}
