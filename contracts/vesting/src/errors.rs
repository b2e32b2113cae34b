use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lookup (1–4) ---
    ScheduleNotFound = 1,
    AccountNotFound = 2,
    SaleNotFound = 3,
    AlreadyExists = 4,

    // --- Authorization (5) ---
    Unauthorized = 5,

    // --- Schedule parameters (6–11) ---
    InvalidAmount = 6,
    InvalidStartTime = 7,
    InvalidDuration = 8,
    InvalidGranularity = 9,
    InvalidTgeFraction = 10,
    NothingRaised = 11,

    // --- Claims (12–14) ---
    NothingToClaim = 12,
    InsufficientFunds = 13,
    ArithmeticOverflow = 14,

    // --- Sale state (15) ---
    SaleNotEnded = 15,
}
