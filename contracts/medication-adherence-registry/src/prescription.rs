use soroban_sdk::{log, Address, Env, String, Vec};

use crate::error::RegistryError;
use crate::events;
use crate::registry::{require_doctor, require_patient};
use crate::storage::{self, Medication};
use crate::utils::{validate_name, validate_schedule};

/// Prescribe a medication to a registered patient.
///
/// Medication ids are scoped to the patient: the first entry in every
/// patient's ledger is 1.
pub fn add_patient_medication(
    env: &Env,
    doctor: Address,
    patient: Address,
    name: String,
    dosage: u32,
    interval_hours: u32,
    duration_days: u32,
) -> Result<u64, RegistryError> {
    storage::require_initialized(env)?;
    require_doctor(env, &doctor)?;
    if !storage::has_patient(env, &patient) {
        return Err(RegistryError::NotFound);
    }
    validate_name(&name)?;
    validate_schedule(interval_hours, duration_days)?;

    let mut medications = storage::get_medications(env, &patient);
    let medication_id = medications.len() as u64 + 1;

    medications.push_back(Medication {
        id: medication_id,
        name: name.clone(),
        dosage,
        interval_hours,
        duration_days,
        doses_taken: 0,
        first_taken_at: None,
        last_taken_at: None,
        prescribed_by: doctor,
        prescribed_at: env.ledger().timestamp(),
    });
    storage::set_medications(env, &patient, &medications);

    log!(env, "medication prescribed", medication_id, patient.clone());
    events::emit_medication_added(env, patient, medication_id, name, duration_days);

    Ok(medication_id)
}

/// All medications of the calling patient, in prescription order
pub fn get_my_medications(env: &Env, patient: Address) -> Result<Vec<Medication>, RegistryError> {
    storage::require_initialized(env)?;
    require_patient(env, &patient)?;
    Ok(storage::get_medications(env, &patient))
}

pub fn get_medication(
    env: &Env,
    patient: Address,
    medication_id: u64,
) -> Result<Medication, RegistryError> {
    storage::require_initialized(env)?;
    require_patient(env, &patient)?;
    let medications = storage::get_medications(env, &patient);
    let index = ledger_index(&medications, medication_id)?;
    medications.get(index).ok_or(RegistryError::NotFound)
}

/// Position of `medication_id` in a patient's ledger.
pub fn ledger_index(
    medications: &Vec<Medication>,
    medication_id: u64,
) -> Result<u32, RegistryError> {
    if medication_id == 0 || medication_id > medications.len() as u64 {
        return Err(RegistryError::NotFound);
    }
    Ok((medication_id - 1) as u32)
}
