use soroban_sdk::{contracttype, Address, String};

pub const MIN_RATING: u32 = 0;
pub const MAX_RATING: u32 = 10;

/// Ledgers left before a record's TTL gets bumped on write.
pub const RECORD_TTL_THRESHOLD: u32 = 17_280;
/// Target TTL (~30 days at 5s ledgers).
pub const RECORD_TTL_EXTEND_TO: u32 = 518_400;

/// The instance entry holds the owner; it is bumped on every successful write.
pub const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 518_400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplierRecord {
    /// Account that registered the supplier. Never changes.
    pub owner_principal: Address,
    pub name: String,
    pub industry: String,
    pub verified: bool,
    /// Ledger sequence at verification, 0 while unverified.
    pub verification_height: u64,
    pub rating: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registration {
    pub id: String,
    pub name: String,
    pub industry: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RatingUpdate {
    pub id: String,
    pub rating: u32,
}

/// One variant per registry entry point, dispatched by `execute`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    RegisterSupplier(Registration),
    VerifySupplier(String),
    UpdateSupplierRating(RatingUpdate),
    GetSupplier(String),
    IsVerified(String),
}

impl Operation {
    /// Whether the operation writes registry state and so needs the caller's signature.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Operation::RegisterSupplier(_)
                | Operation::VerifySupplier(_)
                | Operation::UpdateSupplierRating(_)
        )
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Confirmation value of a successful state transition.
    Applied(bool),
    Supplier(SupplierRecord),
    Verified(bool),
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Supplier(String),
}
