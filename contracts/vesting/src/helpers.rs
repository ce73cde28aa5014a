use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{to_binary, Addr, Coin, CosmosMsg, QuerierWrapper, StdResult, WasmMsg};

use aimond::vesting::{ExecuteMsg, QueryMsg, ReleasableResponse};

/// VestingContract is a wrapper around Addr that provides a lot of helpers
/// for working with this.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct VestingContract(pub Addr);

impl VestingContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    /// Amount `beneficiary` could be released at the current block time
    pub fn releasable(&self, querier: &QuerierWrapper, beneficiary: &str) -> StdResult<ReleasableResponse> {
        querier.query_wasm_smart(
            self.addr(),
            &QueryMsg::ReleasableAmount {
                beneficiary: beneficiary.to_string(),
            },
        )
    }
}
