use soroban_sdk::{contractclient, Address, Env};

/// Read side of the token sale a schedule pays out against.
#[contractclient(name = "SaleLedgerClient")]
pub trait SaleLedger {
    fn get_total_raised(env: Env, sale_id: u64) -> i128;
    fn get_contribution(env: Env, sale_id: u64, participant: Address) -> i128;
    fn get_sale_owner(env: Env, sale_id: u64) -> Address;
    fn get_end_time(env: Env, sale_id: u64) -> u64;
}
