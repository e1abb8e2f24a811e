#![no_std]

//! # Supplier Verification Registry
//!
//! Registers supplier identities, lets the registry owner attest to them,
//! and tracks a 0-10 reputation rating per supplier.
//!
//! - Anyone may register a supplier id and becomes its registrant.
//! - Only the owner set at `initialize` may verify or rate suppliers.
//! - Verification is one-way and records the ledger sequence it happened at.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod error;
mod events;
mod registry;
mod storage;
mod types;

pub use error::ContractError;
pub use types::{Operation, Outcome, RatingUpdate, Registration, SupplierRecord, MAX_RATING};

/// Interface version reported by `version`.
pub const CONTRACT_VERSION: u32 = 1;

#[contract]
pub struct SupplierVerification;

#[contractimpl]
impl SupplierVerification {
    /// Initialize the registry with its owner. The owner cannot be changed later.
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        owner.require_auth();
        registry::initialize(&env, &owner)
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Register a new supplier; `caller` becomes its registrant.
    pub fn register_supplier(
        env: Env,
        caller: Address,
        id: String,
        name: String,
        industry: String,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        registry::register_supplier(&env, &caller, &id, &name, &industry)
    }

    /// Verify a supplier at the current ledger sequence. Owner only.
    pub fn verify_supplier(env: Env, caller: Address, id: String) -> Result<bool, ContractError> {
        caller.require_auth();
        registry::verify_supplier(&env, &caller, current_height(&env), &id)
    }

    /// Set a supplier's rating (0-10). Owner only.
    pub fn update_supplier_rating(
        env: Env,
        caller: Address,
        id: String,
        rating: u32,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        registry::update_supplier_rating(&env, &caller, &id, rating)
    }

    /// Single dispatch entry point over every registry operation.
    /// Only state transitions require `caller` to sign; queries are open to anyone.
    pub fn execute(env: Env, caller: Address, op: Operation) -> Result<Outcome, ContractError> {
        if op.is_mutating() {
            caller.require_auth();
        }
        registry::apply(&env, &caller, current_height(&env), op)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get_supplier(env: Env, id: String) -> Result<SupplierRecord, ContractError> {
        registry::get_supplier(&env, &id)
    }

    pub fn is_verified(env: Env, id: String) -> Result<bool, ContractError> {
        registry::is_verified(&env, &id)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        registry::owner(&env)
    }

    pub fn version(_env: Env) -> u32 {
        CONTRACT_VERSION
    }
}

fn current_height(env: &Env) -> u64 {
    u64::from(env.ledger().sequence())
}
