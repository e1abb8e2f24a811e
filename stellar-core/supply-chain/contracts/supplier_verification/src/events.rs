use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

pub const INITIALIZED: Symbol = symbol_short!("init");
pub const SUPPLIER_REGISTERED: Symbol = symbol_short!("sup_reg");
pub const SUPPLIER_VERIFIED: Symbol = symbol_short!("sup_ver");
pub const SUPPLIER_RATED: Symbol = symbol_short!("sup_rate");

pub fn emit_initialized(env: &Env, owner: &Address) {
    env.events().publish((INITIALIZED,), owner.clone());
}

pub fn emit_supplier_registered(env: &Env, id: &String, registrant: &Address) {
    env.events()
        .publish((SUPPLIER_REGISTERED, id.clone()), registrant.clone());
}

pub fn emit_supplier_verified(env: &Env, id: &String, height: u64) {
    env.events().publish((SUPPLIER_VERIFIED, id.clone()), height);
}

pub fn emit_supplier_rated(env: &Env, id: &String, rating: u32) {
    env.events().publish((SUPPLIER_RATED, id.clone()), rating);
}
