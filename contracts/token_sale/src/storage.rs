use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn get_sale_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::SaleCount)
        .unwrap_or(0)
}

pub fn set_sale_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::SaleCount, &count);
}

pub fn get_sale(env: &Env, sale_id: u64) -> Option<Sale> {
    env.storage().persistent().get(&DataKey::Sale(sale_id))
}

pub fn set_sale(env: &Env, sale: &Sale) {
    env.storage()
        .persistent()
        .set(&DataKey::Sale(sale.id), sale);
}

pub fn has_allocation(env: &Env, sale_id: u64, participant: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Allocation(sale_id, participant.clone()))
}

pub fn get_allocation(
    env: &Env,
    sale_id: u64,
    participant: &Address,
) -> Option<ParticipantAllocation> {
    env.storage()
        .persistent()
        .get(&DataKey::Allocation(sale_id, participant.clone()))
}

pub fn set_allocation(env: &Env, allocation: &ParticipantAllocation) {
    env.storage().persistent().set(
        &DataKey::Allocation(allocation.sale_id, allocation.participant.clone()),
        allocation,
    );
}

pub fn has_nft_allocation(env: &Env, sale_id: u64, asset: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::NftAllocation(sale_id, asset.clone()))
}

pub fn get_nft_allocation(env: &Env, sale_id: u64, asset: &Address) -> Option<NftAllocation> {
    env.storage()
        .persistent()
        .get(&DataKey::NftAllocation(sale_id, asset.clone()))
}

pub fn set_nft_allocation(env: &Env, allocation: &NftAllocation) {
    env.storage().persistent().set(
        &DataKey::NftAllocation(allocation.sale_id, allocation.asset.clone()),
        allocation,
    );
}

pub fn get_grant(env: &Env, sale_id: u64, participant: &Address) -> Option<AllocationGrant> {
    env.storage()
        .persistent()
        .get(&DataKey::Grant(sale_id, participant.clone()))
}

pub fn set_grant(env: &Env, grant: &AllocationGrant) {
    env.storage().persistent().set(
        &DataKey::Grant(grant.sale_id, grant.participant.clone()),
        grant,
    );
}
