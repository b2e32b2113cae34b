use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lookup (1–2) ---
    SaleNotFound = 1,
    AllocationNotFound = 2,

    // --- Configuration (3–6) ---
    InvalidStartTime = 3,
    InvalidDuration = 4,
    InvalidTierSchedule = 5,
    AlreadyExists = 6,

    // --- Admission (7–10) ---
    InvalidAmount = 7,
    SaleNotStarted = 8,
    SaleEnded = 9,
    ExceedsOffering = 10,

    // --- Allocation caps (11–14) ---
    InsufficientAllocation = 11,
    NotStaked = 12,
    NotWhitelisted = 13,
    NotNftOwner = 14,

    // --- Funds (15–17) ---
    InsufficientFunds = 15,
    InsufficientRaised = 16,
    ArithmeticOverflow = 17,
}
