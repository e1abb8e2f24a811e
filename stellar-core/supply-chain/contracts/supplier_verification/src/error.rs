use soroban_sdk::contracterror;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Unknown supplier identifier.
    NotFound = 3,
    /// Identifier already registered.
    AlreadyExists = 4,
    /// Caller is not the registry owner.
    Unauthorized = 5,
    AlreadyVerified = 6,
    /// Empty id/name/industry, rating above `MAX_RATING`, or a zero ledger height.
    InvalidArgument = 7,
}
