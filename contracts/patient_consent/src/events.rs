use crate::errors::ErrorContext;
use soroban_sdk::{symbol_short, Address, Env};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub authority: Address,
    pub timestamp: u64,
}

/// Event published whenever a patient record changes, both on
/// self-registration and on an approved doctor appending a document
/// reference. One event per successful mutation.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecordChangedEvent {
    pub patient: Address,
    pub timestamp: u64,
}

/// Event published when the authority creates or overwrites a doctor profile.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorProfileChangedEvent {
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when the authority creates or overwrites a hospital profile.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HospitalProfileChangedEvent {
    pub hospital: Address,
    pub timestamp: u64,
}

/// Event published when a patient approves a doctor.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsentApprovedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub approved_at: u64,
}

/// Event published when a patient revokes their consent.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsentRevokedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, authority: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        authority,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes a patient record change for audit consumers.
pub fn publish_patient_record_changed(env: &Env, patient: Address) {
    let topics = (symbol_short!("PAT_CHG"), patient.clone());
    let data = PatientRecordChangedEvent {
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes a doctor profile change for audit consumers.
pub fn publish_doctor_profile_changed(env: &Env, doctor: Address) {
    let topics = (symbol_short!("DOC_CHG"), doctor.clone());
    let data = DoctorProfileChangedEvent {
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes a hospital profile change for audit consumers.
pub fn publish_hospital_profile_changed(env: &Env, hospital: Address) {
    let topics = (symbol_short!("HOS_CHG"), hospital.clone());
    let data = HospitalProfileChangedEvent {
        hospital,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes a consent approval. `approved_at` is the stored consent timestamp.
pub fn publish_consent_approved(env: &Env, patient: Address, doctor: Address, approved_at: u64) {
    let topics = (symbol_short!("CST_APR"), patient.clone(), doctor.clone());
    let data = ConsentApprovedEvent {
        patient,
        doctor,
        approved_at,
    };
    env.events().publish(topics, data);
}

/// Publishes a consent revocation. The doctor is the one named by the
/// patient in the call, which the ledger does not cross-check.
pub fn publish_consent_revoked(env: &Env, patient: Address, doctor: Address) {
    let topics = (symbol_short!("CST_REV"), patient.clone(), doctor.clone());
    let data = ConsentRevokedEvent {
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an error event for monitoring and indexing.
pub fn publish_error(env: &Env, error_code: u32, context: ErrorContext) {
    let topics = (
        symbol_short!("ERROR"),
        context.category.clone(),
        context.severity.clone(),
    );
    let data = (
        error_code,
        context.category,
        context.severity,
        context.message,
        context.caller,
        context.resource_id,
        context.timestamp,
    );
    env.events().publish(topics, data);
}
