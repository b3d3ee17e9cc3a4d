#![no_std]

pub mod access;
pub mod consent;
pub mod errors;
pub mod events;
pub mod records;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use consent::Consent;
pub use errors::{ContractError, ErrorCategory, ErrorLogEntry, ErrorSeverity};
pub use records::{
    DocumentCategory, DoctorProfile, HospitalProfile, PatientProfile, PatientRecord,
};

use access::AUTHORITY;

const INITIALIZED: Symbol = symbol_short!("INIT");

#[contract]
pub struct PatientConsentContract;

#[contractimpl]
impl PatientConsentContract {
    /// Initialize the contract with the fixed authority identity. The
    /// authority is written once and is immutable for the contract lifetime;
    /// no entry point exists to change it.
    pub fn initialize(env: Env, authority: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&AUTHORITY, &authority);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, authority);

        Ok(())
    }

    /// Get the authority address.
    pub fn get_authority(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&AUTHORITY)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized.
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Self-service patient registration. Upserts the full record under the
    /// caller's identity with empty document lists: re-registering replaces
    /// the whole record, including any document references appended since the
    /// previous registration. That overwrite is a known hazard kept for
    /// compatibility with downstream consumers.
    pub fn register_patient(env: Env, patient: Address, profile: PatientProfile) {
        patient.require_auth();

        let record = PatientRecord {
            patient: patient.clone(),
            profile,
            vaccinations: Vec::new(&env),
            accidents: Vec::new(&env),
            chronic_conditions: Vec::new(&env),
            acute_conditions: Vec::new(&env),
        };
        records::save_patient(&env, &record);

        events::publish_patient_record_changed(&env, patient);
    }

    /// Create or overwrite a doctor profile. Authority only.
    pub fn add_doctor_details(
        env: Env,
        caller: Address,
        doctor: Address,
        profile: DoctorProfile,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        access::require_authority(&env, &caller, "add_doctor_details")?;

        records::save_doctor(&env, &doctor, &profile);
        events::publish_doctor_profile_changed(&env, doctor);

        Ok(())
    }

    /// Create or overwrite a hospital profile. Authority only.
    pub fn add_hospital_details(
        env: Env,
        caller: Address,
        hospital: Address,
        profile: HospitalProfile,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        access::require_authority(&env, &caller, "add_hospital_details")?;

        records::save_hospital(&env, &hospital, &profile);
        events::publish_hospital_profile_changed(&env, hospital);

        Ok(())
    }

    /// Patient approves a doctor. Overwrites any prior consent
    /// unconditionally; the consent ledger holds at most one approved doctor
    /// per patient. Approving the same doctor twice refreshes the timestamp.
    pub fn approve_doctor(env: Env, patient: Address, doctor: Address) {
        patient.require_auth();

        let consent = consent::approve(&env, &patient, &doctor);
        events::publish_consent_approved(&env, patient, doctor, consent.approved_at);
    }

    /// Patient revokes their consent. Only the doctor field of the tuple is
    /// cleared; `approved_at` keeps the last-approval timestamp. The `doctor`
    /// argument is informational and is echoed into the audit event without
    /// being checked against the stored consent.
    pub fn revoke_approval(env: Env, patient: Address, doctor: Address) {
        patient.require_auth();

        consent::revoke(&env, &patient);
        events::publish_consent_revoked(&env, patient, doctor);
    }

    /// Patient reads their own consent tuple. Defaults to `{None, 0}` if no
    /// approval was ever made.
    pub fn get_approved_doctor(env: Env, patient: Address) -> Consent {
        patient.require_auth();
        consent::get(&env, &patient)
    }

    /// Approved doctor appends a document reference to one of the patient's
    /// four category lists. An `Unknown` category is accepted and ignored;
    /// the change event is still emitted after the (possibly empty) mutation
    /// step.
    pub fn add_patient_details(
        env: Env,
        caller: Address,
        patient: Address,
        category: DocumentCategory,
        document_ref: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        access::require_approved_doctor(&env, &patient, &caller, "add_patient_details")?;

        let mut record = records::load_patient(&env, &patient);
        records::append_document(&mut record, category, document_ref);
        records::save_patient(&env, &record);

        events::publish_patient_record_changed(&env, patient);

        Ok(())
    }

    /// Approved doctor reads the full patient record, including all four
    /// document-reference lists.
    pub fn get_patient_details(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<PatientRecord, ContractError> {
        caller.require_auth();
        access::require_approved_doctor(&env, &patient, &caller, "get_patient_details")?;

        Ok(records::load_patient(&env, &patient))
    }

    /// Authority reads any patient record, bypassing consent. Administrative
    /// and audit backdoor; every non-authority caller gets `NotAuthorized`.
    pub fn get_patient_records_by_owner(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<PatientRecord, ContractError> {
        caller.require_auth();
        access::require_authority(&env, &caller, "get_patient_records_by_owner")?;

        Ok(records::load_patient(&env, &patient))
    }

    /// Caller reads their own record regardless of consent state. Returns an
    /// empty default record for callers that never registered.
    pub fn get_my_details(env: Env, caller: Address) -> PatientRecord {
        caller.require_auth();
        records::load_patient(&env, &caller)
    }

    /// Public, unauthenticated doctor lookup. Unknown identities get an
    /// empty default profile, not an error.
    pub fn get_doctor_details(env: Env, doctor: Address) -> DoctorProfile {
        records::load_doctor(&env, &doctor).unwrap_or_else(|| records::empty_doctor_profile(&env))
    }

    /// Public, unauthenticated hospital lookup. Unknown identities get an
    /// empty default profile, not an error.
    pub fn get_hospital_details(env: Env, hospital: Address) -> HospitalProfile {
        records::load_hospital(&env, &hospital)
            .unwrap_or_else(|| records::empty_hospital_profile(&env))
    }

    /// Audit access to the bounded rejection log.
    pub fn get_error_log(env: Env) -> Vec<ErrorLogEntry> {
        errors::get_error_log(&env)
    }

    /// Total rejections since deployment, including evicted log entries.
    pub fn get_error_count(env: Env) -> u64 {
        errors::get_error_count(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}


#[cfg(test)]
mod test_consent;
