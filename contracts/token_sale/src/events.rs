use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::types::{LockPool, Sale};

// ==================== Event Payload Structs ====================
// Published under ("SALE", symbol_short!("…")); indexers rebuild sale
// history from this stream.

const SALE: Symbol = symbol_short!("SALE");

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum DepositPath {
    ShortStake = 0,
    LongStake = 1,
    Nft = 2,
    Grant = 3,
}

impl From<LockPool> for DepositPath {
    fn from(pool: LockPool) -> Self {
        match pool {
            LockPool::Short => DepositPath::ShortStake,
            LockPool::Long => DepositPath::LongStake,
        }
    }
}

#[derive(Clone)]
#[contracttype]
pub struct SaleCreatedEvent {
    pub sale_id: u64,
    pub owner: Address,
    pub payment_token: Address,
    pub total_offered: i128,
    pub start_time: u64,
    pub end_time: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct AllocationCreatedEvent {
    pub sale_id: u64,
    /// Participant or NFT asset the record belongs to.
    pub holder: Address,
    pub is_nft: bool,
}

#[derive(Clone)]
#[contracttype]
pub struct DepositEvent {
    pub sale_id: u64,
    pub participant: Address,
    pub path: DepositPath,
    pub amount: i128,
    pub total_raised: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct GrantEvent {
    pub sale_id: u64,
    pub participant: Address,
    pub allocation: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct WithdrawEvent {
    pub sale_id: u64,
    pub recipient: Address,
    pub amount: i128,
    pub total_withdrawn: i128,
}

// ==================== Event Publishing Functions ====================

pub fn emit_sale_created(env: &Env, sale: &Sale) {
    let event = SaleCreatedEvent {
        sale_id: sale.id,
        owner: sale.owner.clone(),
        payment_token: sale.payment_token.clone(),
        total_offered: sale.total_offered,
        start_time: sale.start_time,
        end_time: sale.end_time(),
    };
    env.events().publish((SALE, symbol_short!("created")), event);
}

pub fn emit_allocation_created(env: &Env, sale_id: u64, holder: Address, is_nft: bool) {
    let event = AllocationCreatedEvent {
        sale_id,
        holder,
        is_nft,
    };
    env.events().publish((SALE, symbol_short!("alloc")), event);
}

pub fn emit_deposit(
    env: &Env,
    sale: &Sale,
    participant: Address,
    path: DepositPath,
    amount: i128,
) {
    let event = DepositEvent {
        sale_id: sale.id,
        participant,
        path,
        amount,
        total_raised: sale.total_raised,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((SALE, symbol_short!("deposit")), event);
}

pub fn emit_grant(env: &Env, sale_id: u64, participant: Address, allocation: i128) {
    let event = GrantEvent {
        sale_id,
        participant,
        allocation,
    };
    env.events().publish((SALE, symbol_short!("grant")), event);
}

pub fn emit_withdraw(env: &Env, sale: &Sale, recipient: Address, amount: i128) {
    let event = WithdrawEvent {
        sale_id: sale.id,
        recipient,
        amount,
        total_withdrawn: sale.total_withdrawn,
    };
    env.events().publish((SALE, symbol_short!("withdraw")), event);
}
