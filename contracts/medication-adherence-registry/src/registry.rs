use soroban_sdk::{log, Address, Env, String};

use crate::error::RegistryError;
use crate::events;
use crate::storage::{self, Doctor, DuplicatePolicy, Patient, PatientView};
use crate::utils::{validate_name, validate_specialty};

/// Register the caller as a doctor and return its id.
pub fn add_doctor(
    env: &Env,
    doctor: Address,
    name: String,
    specialty: String,
) -> Result<u64, RegistryError> {
    storage::require_initialized(env)?;
    validate_name(&name)?;
    validate_specialty(&specialty)?;

    let config = storage::get_config(env);
    if config.doctor_policy == DuplicatePolicy::Reject && storage::has_doctor(env, &doctor) {
        return Err(RegistryError::AlreadyRegistered);
    }

    let doctor_id = storage::next_doctor_id(env);
    let record = Doctor {
        id: doctor_id,
        name: name.clone(),
        specialty,
        address: doctor.clone(),
        registered_at: env.ledger().timestamp(),
    };
    storage::set_doctor(env, &record);

    log!(env, "doctor registered", doctor_id, doctor.clone());
    events::emit_doctor_added(env, doctor_id, name, doctor);

    Ok(doctor_id)
}

/// Enroll a patient on behalf of a registered doctor and return the patient id.
///
/// A replaced patient record starts with an empty medication ledger so that
/// per-patient medication ids restart at 1 for the new record.
pub fn add_patient(
    env: &Env,
    doctor: Address,
    name: String,
    patient: Address,
) -> Result<u64, RegistryError> {
    storage::require_initialized(env)?;
    require_doctor(env, &doctor)?;
    validate_name(&name)?;

    let config = storage::get_config(env);
    if storage::has_patient(env, &patient) {
        if config.patient_policy == DuplicatePolicy::Reject {
            return Err(RegistryError::AlreadyRegistered);
        }
        storage::clear_medications(env, &patient);
    }

    let patient_id = storage::next_patient_id(env);
    let record = Patient {
        id: patient_id,
        name: name.clone(),
        address: patient.clone(),
        doctor,
        registered_at: env.ledger().timestamp(),
    };
    storage::set_patient(env, &record);

    log!(env, "patient registered", patient_id, patient.clone());
    events::emit_patient_added(env, patient_id, name, patient);

    Ok(patient_id)
}

pub fn no_of_doctors(env: &Env) -> u64 {
    storage::doctor_count(env)
}

pub fn no_of_patients(env: &Env) -> u64 {
    storage::patient_count(env)
}

/// Patient projection as seen by a doctor
pub fn get_patient_details(
    env: &Env,
    doctor: Address,
    patient: Address,
) -> Result<PatientView, RegistryError> {
    storage::require_initialized(env)?;
    require_doctor(env, &doctor)?;
    let record = storage::get_patient(env, &patient).ok_or(RegistryError::NotFound)?;
    Ok(patient_view(env, record))
}

/// Patient projection of the caller's own record
pub fn get_my_details(env: &Env, patient: Address) -> Result<PatientView, RegistryError> {
    storage::require_initialized(env)?;
    let record = require_patient(env, &patient)?;
    Ok(patient_view(env, record))
}

pub fn get_doctor(env: &Env, doctor: Address) -> Result<Doctor, RegistryError> {
    storage::get_doctor(env, &doctor).ok_or(RegistryError::NotFound)
}

pub fn is_doctor(env: &Env, address: Address) -> bool {
    storage::has_doctor(env, &address)
}

pub fn is_patient(env: &Env, address: Address) -> bool {
    storage::has_patient(env, &address)
}

/// Capability check: the address must hold a doctor record.
pub fn require_doctor(env: &Env, address: &Address) -> Result<Doctor, RegistryError> {
    storage::get_doctor(env, address).ok_or(RegistryError::Unauthorized)
}

/// Capability check: the address must hold a patient record.
pub fn require_patient(env: &Env, address: &Address) -> Result<Patient, RegistryError> {
    storage::get_patient(env, address).ok_or(RegistryError::Unauthorized)
}

fn patient_view(env: &Env, record: Patient) -> PatientView {
    let no_of_medications = storage::get_medications(env, &record.address).len();
    PatientView {
        id: record.id,
        name: record.name,
        address: record.address,
        doctor: record.doctor,
        registered_at: record.registered_at,
        no_of_medications,
    }
}
