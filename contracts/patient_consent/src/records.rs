//! Profile and document-reference storage.
//!
//! Each entity lives under its own `(Symbol, Address)` persistent key, so
//! writers only ever touch the key they mutate and operations on distinct
//! patients never contend. Document references are opaque strings stored and
//! returned verbatim.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

const PATIENT: Symbol = symbol_short!("PATIENT");
const DOCTOR: Symbol = symbol_short!("DOCTOR");
const HOSPITAL: Symbol = symbol_short!("HOSPITAL");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_address_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Scalar profile fields supplied by the patient at registration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientProfile {
    pub name: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
}

/// The stored unit for a patient: profile plus four categorized append-only
/// lists of document references, insertion order significant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    pub patient: Address,
    pub profile: PatientProfile,
    pub vaccinations: Vec<String>,
    pub accidents: Vec<String>,
    pub chronic_conditions: Vec<String>,
    pub acute_conditions: Vec<String>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorProfile {
    pub name: String,
    pub specialization: String,
    pub email: String,
    pub phone: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HospitalProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Classification of a document reference. `Unknown` is the explicit
/// representation of any category value outside the four fixed ones; appends
/// under it are accepted and dropped.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DocumentCategory {
    Vaccination,
    Accident,
    Chronic,
    Acute,
    Unknown,
}

/// An empty record for a patient that has not registered. Lookups degrade to
/// this default rather than erroring.
pub fn empty_patient_record(env: &Env, patient: &Address) -> PatientRecord {
    PatientRecord {
        patient: patient.clone(),
        profile: PatientProfile {
            name: String::from_str(env, ""),
            date_of_birth: String::from_str(env, ""),
            email: String::from_str(env, ""),
            phone: String::from_str(env, ""),
        },
        vaccinations: Vec::new(env),
        accidents: Vec::new(env),
        chronic_conditions: Vec::new(env),
        acute_conditions: Vec::new(env),
    }
}

pub fn load_patient(env: &Env, patient: &Address) -> PatientRecord {
    env.storage()
        .persistent()
        .get(&(PATIENT, patient.clone()))
        .unwrap_or_else(|| empty_patient_record(env, patient))
}

pub fn save_patient(env: &Env, record: &PatientRecord) {
    let key = (PATIENT, record.patient.clone());
    env.storage().persistent().set(&key, record);
    extend_ttl_address_key(env, &key);
}

/// Appends a document reference to the list matching `category`. The
/// `Unknown` branch is a deliberate no-op: the call is accepted and the
/// record is left exactly as it was.
pub fn append_document(record: &mut PatientRecord, category: DocumentCategory, document_ref: String) {
    match category {
        DocumentCategory::Vaccination => record.vaccinations.push_back(document_ref),
        DocumentCategory::Accident => record.accidents.push_back(document_ref),
        DocumentCategory::Chronic => record.chronic_conditions.push_back(document_ref),
        DocumentCategory::Acute => record.acute_conditions.push_back(document_ref),
        DocumentCategory::Unknown => {}
    }
}

pub fn load_doctor(env: &Env, doctor: &Address) -> Option<DoctorProfile> {
    env.storage().persistent().get(&(DOCTOR, doctor.clone()))
}

pub fn save_doctor(env: &Env, doctor: &Address, profile: &DoctorProfile) {
    let key = (DOCTOR, doctor.clone());
    env.storage().persistent().set(&key, profile);
    extend_ttl_address_key(env, &key);
}

pub fn empty_doctor_profile(env: &Env) -> DoctorProfile {
    DoctorProfile {
        name: String::from_str(env, ""),
        specialization: String::from_str(env, ""),
        email: String::from_str(env, ""),
        phone: String::from_str(env, ""),
    }
}

pub fn load_hospital(env: &Env, hospital: &Address) -> Option<HospitalProfile> {
    env.storage().persistent().get(&(HOSPITAL, hospital.clone()))
}

pub fn save_hospital(env: &Env, hospital: &Address, profile: &HospitalProfile) {
    let key = (HOSPITAL, hospital.clone());
    env.storage().persistent().set(&key, profile);
    extend_ttl_address_key(env, &key);
}

pub fn empty_hospital_profile(env: &Env) -> HospitalProfile {
    HospitalProfile {
        name: String::from_str(env, ""),
        email: String::from_str(env, ""),
        phone: String::from_str(env, ""),
    }
}
