use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use aimond::types::{HasRoleResponse, RoleMembersResponse};
use aimond::vesting::{
    BeneficiariesResponse, BeneficiaryCountResponse, Config, ExecuteMsg, GlobalStartTimeResponse,
    InstantiateMsg, MigrateMsg, QueryMsg, ReleasableResponse, Totals, VestingScheduleResponse,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(Config), &out_dir);
    export_schema(&schema_for!(Totals), &out_dir);
    export_schema(&schema_for!(HasRoleResponse), &out_dir);
    export_schema(&schema_for!(RoleMembersResponse), &out_dir);
    export_schema(&schema_for!(GlobalStartTimeResponse), &out_dir);
    export_schema(&schema_for!(VestingScheduleResponse), &out_dir);
    export_schema(&schema_for!(ReleasableResponse), &out_dir);
    export_schema(&schema_for!(BeneficiariesResponse), &out_dir);
    export_schema(&schema_for!(BeneficiaryCountResponse), &out_dir);
}
