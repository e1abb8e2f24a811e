use soroban_sdk::{Address, Env, String};

use crate::types::{
    DataKey, SupplierRecord, INSTANCE_TTL_EXTEND_TO, INSTANCE_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO,
    RECORD_TTL_THRESHOLD,
};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_supplier(env: &Env, id: &String) -> Option<SupplierRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Supplier(id.clone()))
}

pub fn has_supplier(env: &Env, id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Supplier(id.clone()))
}

pub fn set_supplier(env: &Env, id: &String, record: &SupplierRecord) {
    let key = DataKey::Supplier(id.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
}
