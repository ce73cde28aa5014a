use cosmwasm_std::{to_binary, Addr, Api, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::types::AssetInfo;

/// Validates the token address of a cw20 AssetInfo
pub fn validate_asset_info(api: &dyn Api, info: AssetInfo) -> StdResult<AssetInfo> {
    match info {
        AssetInfo::Token { address } => Ok(AssetInfo::Token {
            address: api.addr_validate(address.as_str())?,
        }),
        AssetInfo::NativeToken { denom } => Ok(AssetInfo::NativeToken { denom }),
    }
}

/// Builds the custody transfer msg: bank send for native denoms, cw20 transfer otherwise
pub fn transfer_msg(info: &AssetInfo, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    match info {
        AssetInfo::NativeToken { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin {
                denom: denom.clone(),
                amount,
            }],
        })),
        AssetInfo::Token { address } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: address.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        })),
    }
}

/// Returns the amount of `info` held by `custodian`
pub fn query_custody_balance(
    querier: QuerierWrapper,
    info: &AssetInfo,
    custodian: &Addr,
) -> StdResult<Uint128> {
    match info {
        AssetInfo::NativeToken { denom } => {
            Ok(querier.query_balance(custodian, denom)?.amount)
        }
        AssetInfo::Token { address } => {
            let res: BalanceResponse = querier.query_wasm_smart(
                address,
                &Cw20QueryMsg::Balance {
                    address: custodian.to_string(),
                },
            )?;
            Ok(res.balance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies_with_balance;
    use cosmwasm_std::{coin, from_binary};

    #[test]
    fn native_transfer_is_bank_send() {
        let msg = transfer_msg(
            &AssetInfo::NativeToken { denom: String::from("uamd") },
            &Addr::unchecked("beneficiary"),
            Uint128::new(42),
        )
        .unwrap();

        assert_eq!(
            msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: String::from("beneficiary"),
                amount: vec![coin(42, "uamd")],
            })
        );
    }

    #[test]
    fn cw20_transfer_targets_token_contract() {
        let msg = transfer_msg(
            &AssetInfo::Token { address: Addr::unchecked("amd_token") },
            &Addr::unchecked("beneficiary"),
            Uint128::new(42),
        )
        .unwrap();

        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute { contract_addr, msg, funds }) => {
                assert_eq!(contract_addr, String::from("amd_token"));
                assert!(funds.is_empty());
                assert_eq!(
                    from_binary::<Cw20ExecuteMsg>(&msg).unwrap(),
                    Cw20ExecuteMsg::Transfer {
                        recipient: String::from("beneficiary"),
                        amount: Uint128::new(42),
                    }
                );
            }
            _ => panic!("expected a wasm execute msg"),
        }
    }

    #[test]
    fn native_custody_balance() {
        let deps = mock_dependencies_with_balance(&[coin(1_000, "uamd")]);

        let balance = query_custody_balance(
            deps.as_ref().querier,
            &AssetInfo::NativeToken { denom: String::from("uamd") },
            &Addr::unchecked(cosmwasm_std::testing::MOCK_CONTRACT_ADDR),
        )
        .unwrap();
        assert_eq!(balance, Uint128::new(1_000));
    }
}
