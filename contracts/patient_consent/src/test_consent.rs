#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{symbol_short, Env, IntoVal, TryIntoVal};

fn setup() -> (Env, PatientConsentContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PatientConsentContract, ());
    let client = PatientConsentContractClient::new(&env, &contract_id);

    let authority = Address::generate(&env);
    client.initialize(&authority);

    (env, client, authority)
}

#[test]
fn test_default_consent_is_empty() {
    let (env, client, _authority) = setup();
    let patient = Address::generate(&env);

    let consent = client.get_approved_doctor(&patient);
    assert_eq!(consent.doctor, None);
    assert_eq!(consent.approved_at, 0);
}

#[test]
fn test_approve_sets_tuple() {
    let (env, client, _authority) = setup();
    let patient = Address::generate(&env);
    let doctor = Address::generate(&env);

    env.ledger().set_timestamp(1000);
    client.approve_doctor(&patient, &doctor);

    let consent = client.get_approved_doctor(&patient);
    assert_eq!(consent.doctor, Some(doctor));
    assert_eq!(consent.approved_at, 1000);
}

#[test]
fn test_approve_overwrites_prior_consent() {
    let (env, client, _authority) = setup();
    let patient = Address::generate(&env);
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.approve_doctor(&patient, &first);
    client.approve_doctor(&patient, &second);

    // At most one approved doctor at any time: second replaces first
    let consent = client.get_approved_doctor(&patient);
    assert_eq!(consent.doctor, Some(second));
}

#[test]
fn test_reapprove_same_doctor_refreshes_timestamp() {
    let (env, client, _authority) = setup();
    let patient = Address::generate(&env);
    let doctor = Address::generate(&env);

    env.ledger().set_timestamp(1000);
    client.approve_doctor(&patient, &doctor);
    assert_eq!(client.get_approved_doctor(&patient).approved_at, 1000);

    env.ledger().set_timestamp(2000);
    client.approve_doctor(&patient, &doctor);

    let consent = client.get_approved_doctor(&patient);
    assert_eq!(consent.doctor, Some(doctor));
    assert_eq!(consent.approved_at, 2000);
}

#[test]
fn test_revoke_clears_doctor_field_only() {
    let (env, client, _authority) = setup();
    let patient = Address::generate(&env);
    let doctor = Address::generate(&env);

    env.ledger().set_timestamp(1000);
    client.approve_doctor(&patient, &doctor);
    client.revoke_approval(&patient, &doctor);

    // The doctor field is the sentinel; the timestamp keeps the
    // last-approval value for audit consumers.
    let consent = client.get_approved_doctor(&patient);
    assert_eq!(consent.doctor, None);
    assert_eq!(consent.approved_at, 1000);
}

#[test]
fn test_revoke_without_consent_is_noop() {
    let (env, client, _authority) = setup();
    let patient = Address::generate(&env);
    let doctor = Address::generate(&env);

    client.revoke_approval(&patient, &doctor);

    let consent = client.get_approved_doctor(&patient);
    assert_eq!(consent.doctor, None);
    assert_eq!(consent.approved_at, 0);
}

#[test]
fn test_consents_are_isolated_per_patient() {
    let (env, client, _authority) = setup();
    let patient_a = Address::generate(&env);
    let patient_b = Address::generate(&env);
    let doctor = Address::generate(&env);

    client.approve_doctor(&patient_a, &doctor);
    client.approve_doctor(&patient_b, &doctor);
    client.revoke_approval(&patient_a, &doctor);

    assert_eq!(client.get_approved_doctor(&patient_a).doctor, None);
    assert_eq!(client.get_approved_doctor(&patient_b).doctor, Some(doctor));
}

#[test]
fn test_approve_emits_event() {
    let (env, client, _authority) = setup();
    let patient = Address::generate(&env);
    let doctor = Address::generate(&env);

    env.ledger().set_timestamp(1234);
    client.approve_doctor(&patient, &doctor);

    let events = env.events().all();
    assert!(!events.is_empty());
    let event = events.get(events.len() - 1).unwrap();
    assert_eq!(
        event.1,
        (symbol_short!("CST_APR"), patient.clone(), doctor.clone()).into_val(&env)
    );
    let payload: events::ConsentApprovedEvent = event.2.try_into_val(&env).unwrap();
    assert_eq!(payload.patient, patient);
    assert_eq!(payload.doctor, doctor);
    assert_eq!(payload.approved_at, 1234);
}

#[test]
fn test_revoke_emits_event() {
    let (env, client, _authority) = setup();
    let patient = Address::generate(&env);
    let doctor = Address::generate(&env);

    client.approve_doctor(&patient, &doctor);
    client.revoke_approval(&patient, &doctor);

    let events = env.events().all();
    assert!(!events.is_empty());
    let event = events.get(events.len() - 1).unwrap();
    assert_eq!(
        event.1,
        (symbol_short!("CST_REV"), patient.clone(), doctor.clone()).into_val(&env)
    );
    let payload: events::ConsentRevokedEvent = event.2.try_into_val(&env).unwrap();
    assert_eq!(payload.patient, patient);
    assert_eq!(payload.doctor, doctor);
}
