//! Consent ledger: per patient, at most one approved doctor at a time.
//!
//! The tuple is a two-field record where "approved" is defined solely by the
//! doctor field being `Some`. Revocation clears the doctor field and leaves
//! `approved_at` at its last-approval value, so audit consumers keep the
//! history of when access was last granted.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const CONSENT: Symbol = symbol_short!("CONSENT");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Per-patient consent tuple.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Consent {
    /// The currently approved doctor, or `None` once revoked / never set.
    pub doctor: Option<Address>,
    /// Ledger timestamp of the most recent approval. Not reset on revocation.
    pub approved_at: u64,
}

fn consent_key(patient: &Address) -> (Symbol, Address) {
    (CONSENT, patient.clone())
}

fn save(env: &Env, patient: &Address, consent: &Consent) {
    let key = consent_key(patient);
    env.storage().persistent().set(&key, consent);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Reads a patient's consent tuple. Patients that never approved anyone get
/// the default `{None, 0}` tuple rather than an error.
pub fn get(env: &Env, patient: &Address) -> Consent {
    env.storage()
        .persistent()
        .get(&consent_key(patient))
        .unwrap_or(Consent {
            doctor: None,
            approved_at: 0,
        })
}

/// Sets the consent tuple to the given doctor at the current ledger time.
/// Any prior consent is overwritten unconditionally; approving the same
/// doctor twice just refreshes the timestamp.
pub fn approve(env: &Env, patient: &Address, doctor: &Address) -> Consent {
    let consent = Consent {
        doctor: Some(doctor.clone()),
        approved_at: env.ledger().timestamp(),
    };
    save(env, patient, &consent);
    consent
}

/// Clears the doctor field only. Revoking with no live consent is a no-op on
/// the doctor field and still leaves `approved_at` untouched.
pub fn revoke(env: &Env, patient: &Address) {
    let mut consent = get(env, patient);
    consent.doctor = None;
    save(env, patient, &consent);
}

/// The authorization predicate used by every consent-gated operation.
/// A revoked tuple holds `None`, which never equals a real doctor identity.
pub fn is_approved(env: &Env, patient: &Address, doctor: &Address) -> bool {
    match get(env, patient).doctor {
        Some(approved) => approved == *doctor,
        None => false,
    }
}
