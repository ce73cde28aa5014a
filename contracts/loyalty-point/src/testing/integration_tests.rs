#[cfg(test)]
mod tests {

    use crate::helpers::LoyaltyPointContract;
    use crate::ContractError;

    use aimond::loyalty_point::{ExecuteMsg, InstantiateMsg, QueryMsg, TotalClaimedResponse};
    use aimond::merkle::{encode_hash, leaf_hash, MerkleTree};
    use aimond::types::AssetInfo;

    use cosmwasm_std::testing::MockApi;
    use cosmwasm_std::{coin, Addr, Api, Empty, Uint128};
    use cw_multi_test::{App, AppBuilder, AppResponse, BankKeeper, Contract, ContractWrapper, Executor};

    const ADMIN: &str = "admin";
    const TREASURY: &str = "treasury";
    const DENOM: &str = "uamd";

    //Loyalty Point Contract
    pub fn loyalty_point_contract() -> Box<dyn Contract<Empty>> {
        let contract = ContractWrapper::new_with_empty(
            crate::contract::execute,
            crate::contract::instantiate,
            crate::contract::query,
        );
        Box::new(contract)
    }

    fn mock_app() -> App {
        AppBuilder::new().build(|router, _, storage| {
            let bank = BankKeeper::new();

            bank.init_balance(
                storage,
                &Addr::unchecked(TREASURY),
                vec![coin(100_000_000, DENOM)],
            )
            .unwrap();

            router.bank = bank;
        })
    }

    //App runs on MockApi, leaves must use the same address codec
    fn tree(allocations: &[(&str, u128)]) -> MerkleTree {
        let api = MockApi::default();

        MerkleTree::new(
            allocations
                .iter()
                .map(|(account, amount)| {
                    leaf_hash(
                        &api.addr_canonicalize(account).unwrap(),
                        Uint128::new(*amount),
                    )
                })
                .collect(),
        )
    }

    fn hex_proof(tree: &MerkleTree, index: usize) -> Vec<String> {
        tree.proof(index).unwrap().iter().map(encode_hash).collect()
    }

    fn proper_instantiate(allocations: &[(&str, u128)]) -> (App, LoyaltyPointContract, MerkleTree) {
        let mut app = mock_app();
        let tree = tree(allocations);

        let lp_id = app.store_code(loyalty_point_contract());
        let msg = InstantiateMsg {
            admin: None,
            token: AssetInfo::NativeToken {
                denom: String::from(DENOM),
            },
            merkle_root: encode_hash(&tree.root()),
        };
        let lp_contract_addr = app
            .instantiate_contract(lp_id, Addr::unchecked(ADMIN), &msg, &[], "test", None)
            .unwrap();

        (app, LoyaltyPointContract(lp_contract_addr), tree)
    }

    fn execute_as(
        app: &mut App,
        contract: &LoyaltyPointContract,
        sender: &str,
        msg: ExecuteMsg,
    ) -> Result<AppResponse, String> {
        let cosmos_msg = contract.call(msg, vec![]).unwrap();
        app.execute(Addr::unchecked(sender), cosmos_msg)
            .map_err(|err| err.root_cause().to_string())
    }

    fn bank_balance(app: &App, account: &str) -> Uint128 {
        app.wrap().query_balance(account, DENOM).unwrap().amount
    }

    mod loyalty_point {

        use super::*;

        #[test]
        fn seasonal_distributions() {
            let (mut app, lp_contract, season_one) =
                proper_instantiate(&[("alice", 1_000), ("bob", 500), ("carol", 250)]);

            app.send_tokens(Addr::unchecked(TREASURY), lp_contract.addr(), &[coin(10_000, DENOM)])
                .unwrap();

            let res = execute_as(
                &mut app,
                &lp_contract,
                "alice",
                ExecuteMsg::Claim {
                    amount: Uint128::new(1_000),
                    proof: hex_proof(&season_one, 0),
                },
            )
            .unwrap();
            assert!(res.events.iter().any(|event| event.ty == "wasm-claimed"));
            assert_eq!(bank_balance(&app, "alice"), Uint128::new(1_000));

            //Season two adds to the cumulative totals
            let season_two = tree(&[("alice", 1_800), ("bob", 500), ("carol", 900), ("dave", 100)]);
            execute_as(
                &mut app,
                &lp_contract,
                ADMIN,
                ExecuteMsg::UpdateRoot {
                    merkle_root: encode_hash(&season_two.root()),
                },
            )
            .unwrap();

            for (account, amount, index) in [("alice", 1_800u128, 0usize), ("bob", 500, 1), ("carol", 900, 2)] {
                execute_as(
                    &mut app,
                    &lp_contract,
                    account,
                    ExecuteMsg::Claim {
                        amount: Uint128::new(amount),
                        proof: hex_proof(&season_two, index),
                    },
                )
                .unwrap();
            }
            assert_eq!(bank_balance(&app, "alice"), Uint128::new(1_800));
            assert_eq!(bank_balance(&app, "bob"), Uint128::new(500));
            assert_eq!(bank_balance(&app, "carol"), Uint128::new(900));

            //Replay
            let err = execute_as(
                &mut app,
                &lp_contract,
                "alice",
                ExecuteMsg::Claim {
                    amount: Uint128::new(1_800),
                    proof: hex_proof(&season_two, 0),
                },
            )
            .unwrap_err();
            assert_eq!(err, ContractError::NothingToClaim {}.to_string());

            let resp: TotalClaimedResponse = app
                .wrap()
                .query_wasm_smart(lp_contract.addr(), &QueryMsg::TotalClaimed {})
                .unwrap();
            assert_eq!(resp.total_claimed, Uint128::new(3_200));
            assert_eq!(bank_balance(&app, lp_contract.addr().as_str()), Uint128::new(10_000 - 3_200));
        }

        #[test]
        fn unfunded_claim_reverts() {
            let (mut app, lp_contract, tree) = proper_instantiate(&[("alice", 1_000), ("bob", 500)]);

            let err = execute_as(
                &mut app,
                &lp_contract,
                "bob",
                ExecuteMsg::Claim {
                    amount: Uint128::new(500),
                    proof: hex_proof(&tree, 1),
                },
            )
            .unwrap_err();
            assert_eq!(
                err,
                ContractError::InsufficientCustodyBalance {
                    needed: Uint128::new(500),
                    available: Uint128::zero(),
                }
                .to_string()
            );

            app.send_tokens(Addr::unchecked(TREASURY), lp_contract.addr(), &[coin(500, DENOM)])
                .unwrap();
            execute_as(
                &mut app,
                &lp_contract,
                "bob",
                ExecuteMsg::Claim {
                    amount: Uint128::new(500),
                    proof: hex_proof(&tree, 1),
                },
            )
            .unwrap();
            assert_eq!(bank_balance(&app, "bob"), Uint128::new(500));
        }
    }
}
