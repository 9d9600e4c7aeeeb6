//! Wrapped-token ledger (C2)
//!
//! An internal balance ledger rather than a vendored `cw20-base` instance
//! (see DESIGN.md Open Question #1): `mint`, `burn`, and `lock_to` are not
//! reachable from any `ExecuteMsg` variant directly — they are plain
//! functions called only from `quota.rs`, which is itself reachable only
//! from the C5 handlers. The public-facing `ExecuteMsg`/`QueryMsg` surface
//! (`transfer`, `approve`, `balance_of`, `allowance`, ...) is CW20-shaped
//! for read/wallet compatibility but backed by this module's maps.

use cosmwasm_std::{Addr, Event, StdResult, Uint128};

use crate::error::ContractError;
use crate::events;
use crate::state::{ALLOWANCES, BALANCES, TOTAL_SUPPLY};

pub fn balance_of(storage: &dyn cosmwasm_std::Storage, account: &Addr) -> Uint128 {
    BALANCES.may_load(storage, account).ok().flatten().unwrap_or_default()
}

pub fn total_supply(storage: &dyn cosmwasm_std::Storage) -> StdResult<Uint128> {
    Ok(TOTAL_SUPPLY.may_load(storage)?.unwrap_or_default())
}

pub fn allowance(storage: &dyn cosmwasm_std::Storage, owner: &Addr, spender: &Addr) -> Uint128 {
    ALLOWANCES
        .may_load(storage, (owner, spender))
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// mint(to, value): value>0, to!=zero; adds to balance and totalSupply.
/// Returns the `TokenMinted` event for the caller to attach to its `Response`.
pub fn mint(
    storage: &mut dyn cosmwasm_std::Storage,
    to: &Addr,
    value: Uint128,
) -> Result<Event, ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "mint value must be > 0".into(),
        });
    }
    let balance = balance_of(storage, to);
    BALANCES.save(storage, to, &balance.checked_add(value)?)?;
    let supply = total_supply(storage)?;
    let new_supply = supply.checked_add(value)?;
    TOTAL_SUPPLY.save(storage, &new_supply)?;
    Ok(events::token_minted(to, value, new_supply))
}

/// burn(from, value): value>0; subtracts from balance and totalSupply; underflow fails.
/// Returns the `TokenBurnt` event for the caller to attach to its `Response`.
pub fn burn(
    storage: &mut dyn cosmwasm_std::Storage,
    from: &Addr,
    value: Uint128,
) -> Result<Event, ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "burn value must be > 0".into(),
        });
    }
    let balance = balance_of(storage, from);
    let new_balance = balance
        .checked_sub(value)
        .map_err(|_| ContractError::InsufficientBalance)?;
    BALANCES.save(storage, from, &new_balance)?;
    let supply = total_supply(storage)?;
    let new_supply = supply
        .checked_sub(value)
        .map_err(|_| ContractError::InvariantBroken)?;
    TOTAL_SUPPLY.save(storage, &new_supply)?;
    Ok(events::token_burnt(from, value, new_supply))
}

/// lockTo(from, to, value): value>0, from!=to; moves balance without touching totalSupply.
/// Returns the `TokenLocked` event for the caller to attach to its `Response`.
pub fn lock_to(
    storage: &mut dyn cosmwasm_std::Storage,
    from: &Addr,
    to: &Addr,
    value: Uint128,
) -> Result<Event, ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "lockTo value must be > 0".into(),
        });
    }
    if from == to {
        return Err(ContractError::SelfTransfer);
    }
    let from_balance = balance_of(storage, from);
    let new_from = from_balance
        .checked_sub(value)
        .map_err(|_| ContractError::InsufficientBalance)?;
    BALANCES.save(storage, from, &new_from)?;
    let to_balance = balance_of(storage, to);
    BALANCES.save(storage, to, &to_balance.checked_add(value)?)?;
    Ok(events::token_locked(from, to, value))
}

/// Standard ERC-20-style transfer, for the narrow public read/transfer surface.
pub fn transfer(
    storage: &mut dyn cosmwasm_std::Storage,
    from: &Addr,
    to: &Addr,
    value: Uint128,
) -> Result<(), ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidArgument {
            reason: "transfer value must be > 0".into(),
        });
    }
    let from_balance = balance_of(storage, from);
    let new_from = from_balance
        .checked_sub(value)
        .map_err(|_| ContractError::InsufficientBalance)?;
    BALANCES.save(storage, from, &new_from)?;
    let to_balance = balance_of(storage, to);
    BALANCES.save(storage, to, &to_balance.checked_add(value)?)?;
    Ok(())
}

pub fn approve(
    storage: &mut dyn cosmwasm_std::Storage,
    owner: &Addr,
    spender: &Addr,
    value: Uint128,
) -> StdResult<()> {
    ALLOWANCES.save(storage, (owner, spender), &value)
}

pub fn transfer_from(
    storage: &mut dyn cosmwasm_std::Storage,
    spender: &Addr,
    owner: &Addr,
    to: &Addr,
    value: Uint128,
) -> Result<(), ContractError> {
    let current_allowance = allowance(storage, owner, spender);
    let new_allowance = current_allowance
        .checked_sub(value)
        .map_err(|_| ContractError::InsufficientAllowance)?;
    ALLOWANCES.save(storage, (owner, spender), &new_allowance)?;
    transfer(storage, owner, to, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn mint_increases_balance_and_supply() {
        let mut deps = mock_dependencies();
        let to = Addr::unchecked("user");
        mint(deps.as_mut().storage, &to, Uint128::from(500u128)).unwrap();
        assert_eq!(balance_of(deps.as_ref().storage, &to), Uint128::from(500u128));
        assert_eq!(total_supply(deps.as_ref().storage).unwrap(), Uint128::from(500u128));
    }

    #[test]
    fn mint_rejects_zero_value() {
        let mut deps = mock_dependencies();
        let to = Addr::unchecked("user");
        assert!(mint(deps.as_mut().storage, &to, Uint128::zero()).is_err());
    }

    #[test]
    fn burn_decreases_balance_and_supply() {
        let mut deps = mock_dependencies();
        let from = Addr::unchecked("escrow");
        mint(deps.as_mut().storage, &from, Uint128::from(500u128)).unwrap();
        burn(deps.as_mut().storage, &from, Uint128::from(200u128)).unwrap();
        assert_eq!(balance_of(deps.as_ref().storage, &from), Uint128::from(300u128));
        assert_eq!(total_supply(deps.as_ref().storage).unwrap(), Uint128::from(300u128));
    }

    #[test]
    fn burn_underflow_fails() {
        let mut deps = mock_dependencies();
        let from = Addr::unchecked("escrow");
        assert!(burn(deps.as_mut().storage, &from, Uint128::from(1u128)).is_err());
    }

    #[test]
    fn lock_to_moves_balance_without_changing_supply() {
        let mut deps = mock_dependencies();
        let user = Addr::unchecked("user");
        let escrow = Addr::unchecked("escrow");
        mint(deps.as_mut().storage, &user, Uint128::from(500u128)).unwrap();
        lock_to(deps.as_mut().storage, &user, &escrow, Uint128::from(500u128)).unwrap();
        assert_eq!(balance_of(deps.as_ref().storage, &user), Uint128::zero());
        assert_eq!(balance_of(deps.as_ref().storage, &escrow), Uint128::from(500u128));
        assert_eq!(total_supply(deps.as_ref().storage).unwrap(), Uint128::from(500u128));
    }

    #[test]
    fn lock_to_rejects_self_transfer() {
        let mut deps = mock_dependencies();
        let user = Addr::unchecked("user");
        assert_eq!(
            lock_to(deps.as_mut().storage, &user, &user, Uint128::from(1u128)).unwrap_err(),
            ContractError::SelfTransfer
        );
    }

    #[test]
    fn transfer_from_spends_allowance() {
        let mut deps = mock_dependencies();
        let owner = Addr::unchecked("owner");
        let spender = Addr::unchecked("spender");
        let recipient = Addr::unchecked("recipient");
        mint(deps.as_mut().storage, &owner, Uint128::from(100u128)).unwrap();
        approve(deps.as_mut().storage, &owner, &spender, Uint128::from(40u128)).unwrap();
        transfer_from(
            deps.as_mut().storage,
            &spender,
            &owner,
            &recipient,
            Uint128::from(40u128),
        )
        .unwrap();
        assert_eq!(balance_of(deps.as_ref().storage, &recipient), Uint128::from(40u128));
        assert_eq!(allowance(deps.as_ref().storage, &owner, &spender), Uint128::zero());
    }

    #[test]
    fn transfer_from_exceeding_allowance_fails() {
        let mut deps = mock_dependencies();
        let owner = Addr::unchecked("owner");
        let spender = Addr::unchecked("spender");
        let recipient = Addr::unchecked("recipient");
        mint(deps.as_mut().storage, &owner, Uint128::from(100u128)).unwrap();
        approve(deps.as_mut().storage, &owner, &spender, Uint128::from(10u128)).unwrap();
        assert!(transfer_from(
            deps.as_mut().storage,
            &spender,
            &owner,
            &recipient,
            Uint128::from(40u128),
        )
        .is_err());
    }
}
