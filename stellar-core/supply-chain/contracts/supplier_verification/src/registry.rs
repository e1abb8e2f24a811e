//! Supplier registry state transitions.
//!
//! Every operation receives the caller and, where it matters, the ledger
//! height explicitly. All preconditions are checked before the single
//! storage write, so a rejected call leaves the registry untouched.

use soroban_sdk::{log, Address, Env, String};

use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::types::{Operation, Outcome, SupplierRecord, MAX_RATING, MIN_RATING};

pub fn initialize(env: &Env, owner: &Address) -> Result<(), ContractError> {
    if storage::has_owner(env) {
        return Err(ContractError::AlreadyInitialized);
    }

    storage::set_owner(env, owner);
    storage::extend_instance_ttl(env);
    events::emit_initialized(env, owner);
    Ok(())
}

pub fn owner(env: &Env) -> Result<Address, ContractError> {
    storage::get_owner(env).ok_or(ContractError::NotInitialized)
}

/// Register a new supplier under `id`. The caller becomes the record's
/// `owner_principal`.
pub fn register_supplier(
    env: &Env,
    caller: &Address,
    id: &String,
    name: &String,
    industry: &String,
) -> Result<bool, ContractError> {
    if id.len() == 0 || name.len() == 0 || industry.len() == 0 {
        log!(env, "register rejected: empty field", id.clone());
        return Err(ContractError::InvalidArgument);
    }

    if storage::has_supplier(env, id) {
        log!(env, "register rejected: duplicate id", id.clone());
        return Err(ContractError::AlreadyExists);
    }

    let record = SupplierRecord {
        owner_principal: caller.clone(),
        name: name.clone(),
        industry: industry.clone(),
        verified: false,
        verification_height: 0,
        rating: MIN_RATING,
    };
    storage::set_supplier(env, id, &record);
    storage::extend_instance_ttl(env);
    events::emit_supplier_registered(env, id, caller);

    Ok(true)
}

/// Mark a supplier as verified at `height`. Owner only, once per record.
pub fn verify_supplier(
    env: &Env,
    caller: &Address,
    height: u64,
    id: &String,
) -> Result<bool, ContractError> {
    require_owner(env, caller)?;

    // A zero height would be indistinguishable from "unverified".
    if height == 0 {
        return Err(ContractError::InvalidArgument);
    }

    let mut record = storage::get_supplier(env, id)
        .ok_or(ContractError::NotFound)?;
    if record.verified {
        log!(env, "verify rejected: already verified", id.clone());
        return Err(ContractError::AlreadyVerified);
    }

    record.verified = true;
    record.verification_height = height;
    storage::set_supplier(env, id, &record);
    storage::extend_instance_ttl(env);
    events::emit_supplier_verified(env, id, height);

    Ok(true)
}

/// Replace a supplier's rating. Owner only; verification is not required.
pub fn update_supplier_rating(
    env: &Env,
    caller: &Address,
    id: &String,
    rating: u32,
) -> Result<bool, ContractError> {
    require_owner(env, caller)?;

    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        log!(env, "rating rejected: out of range", rating);
        return Err(ContractError::InvalidArgument);
    }

    let mut record = storage::get_supplier(env, id)
        .ok_or(ContractError::NotFound)?;
    record.rating = rating;
    storage::set_supplier(env, id, &record);
    storage::extend_instance_ttl(env);
    events::emit_supplier_rated(env, id, rating);

    Ok(true)
}

pub fn get_supplier(env: &Env, id: &String) -> Result<SupplierRecord, ContractError> {
    storage::get_supplier(env, id)
        .ok_or(ContractError::NotFound)
}

pub fn is_verified(env: &Env, id: &String) -> Result<bool, ContractError> {
    get_supplier(env, id).map(|record| record.verified)
}

/// Route a tagged operation to its transition or query.
pub fn apply(
    env: &Env,
    caller: &Address,
    height: u64,
    op: Operation,
) -> Result<Outcome, ContractError> {
    match op {
        Operation::RegisterSupplier(reg) => {
            register_supplier(env, caller, &reg.id, &reg.name, &reg.industry)
                .map(Outcome::Applied)
        }
        Operation::VerifySupplier(id) => {
            verify_supplier(env, caller, height, &id).map(Outcome::Applied)
        }
        Operation::UpdateSupplierRating(update) => {
            update_supplier_rating(env, caller, &update.id, update.rating)
                .map(Outcome::Applied)
        }
        Operation::GetSupplier(id) => get_supplier(env, &id).map(Outcome::Supplier),
        Operation::IsVerified(id) => is_verified(env, &id).map(Outcome::Verified),
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let owner = owner(env)?;
    if *caller != owner {
        log!(env, "unauthorized caller", caller.clone());
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
