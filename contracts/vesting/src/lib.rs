#![no_std]

mod contract;
mod errors;
mod events;
mod interfaces;
mod schedule;
mod storage;
mod types;


pub use contract::{VestingContract, VestingContractClient};
pub use errors::Error;
pub use events::ClaimEvent;
pub use interfaces::{SaleLedger, SaleLedgerClient};
pub use types::{VestingAccount, VestingParams, VestingSchedule, TGE_DENOMINATOR};
