use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Registry (3–4) ---
    AlreadyWhitelisted = 3,
    NotWhitelisted = 4,
}
