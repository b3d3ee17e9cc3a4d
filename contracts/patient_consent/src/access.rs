//! Guard functions evaluated before any state mutation or privileged read.
//!
//! Composed guards apply in fixed order: role check before consent check.
//! An unregistered caller always observes `NotDoctor`, never `NotApproved`,
//! even where a consent entry names them. Guards log and publish every
//! rejection before returning it; no write happens after a guard fails, so
//! rejected calls leave no partial state.

use soroban_sdk::{Address, Env, String, Symbol};

use crate::errors::{create_error_context, log_error, ContractError};
use crate::{consent, events, records};

pub const AUTHORITY: Symbol = soroban_sdk::symbol_short!("AUTH");

fn reject(env: &Env, error: ContractError, caller: &Address, resource: &'static str) -> ContractError {
    let resource_id = String::from_str(env, resource);
    log_error(env, error, Some(caller.clone()), Some(resource_id.clone()));
    let context = create_error_context(env, error, Some(caller.clone()), Some(resource_id));
    events::publish_error(env, error as u32, context);
    error
}

/// Caller must be the designated authority set at initialization.
pub fn require_authority(env: &Env, caller: &Address, resource: &'static str) -> Result<(), ContractError> {
    let authority: Address = env
        .storage()
        .instance()
        .get(&AUTHORITY)
        .ok_or(ContractError::NotInitialized)?;
    if *caller != authority {
        return Err(reject(env, ContractError::NotAuthorized, caller, resource));
    }
    Ok(())
}

/// Caller must be registered as a doctor by the authority.
pub fn require_doctor(env: &Env, caller: &Address, resource: &'static str) -> Result<(), ContractError> {
    if records::load_doctor(env, caller).is_none() {
        return Err(reject(env, ContractError::NotDoctor, caller, resource));
    }
    Ok(())
}

/// Caller must be the patient's currently approved doctor.
pub fn require_approved(
    env: &Env,
    patient: &Address,
    caller: &Address,
    resource: &'static str,
) -> Result<(), ContractError> {
    if !consent::is_approved(env, patient, caller) {
        return Err(reject(env, ContractError::NotApproved, caller, resource));
    }
    Ok(())
}

/// The composed guard for consent-gated record operations: doctor role first,
/// then approval. Ordering is part of the external contract.
pub fn require_approved_doctor(
    env: &Env,
    patient: &Address,
    caller: &Address,
    resource: &'static str,
) -> Result<(), ContractError> {
    require_doctor(env, caller, resource)?;
    require_approved(env, patient, caller, resource)
}
