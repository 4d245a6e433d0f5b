use soroban_sdk::{log, Address, Env};

use crate::error::RegistryError;
use crate::events;
use crate::prescription::ledger_index;
use crate::registry::require_patient;
use crate::storage::{self, Medication};
use crate::utils::{course_seconds, interval_seconds};

/// Source of the current time for dose gating.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Clock backed by the ledger timestamp of the current invocation.
pub struct LedgerClock<'a> {
    env: &'a Env,
}

impl<'a> LedgerClock<'a> {
    pub fn new(env: &'a Env) -> Self {
        LedgerClock { env }
    }
}

impl Clock for LedgerClock<'_> {
    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}

/// Decide whether a dose of `medication` may be recorded at `now`.
pub fn check_dose_window(
    medication: &Medication,
    now: u64,
    enforce_course_duration: bool,
) -> Result<(), RegistryError> {
    if let Some(last) = medication.last_taken_at {
        if now.saturating_sub(last) < interval_seconds(medication.interval_hours) {
            return Err(RegistryError::TooSoon);
        }
    }

    if enforce_course_duration {
        if let Some(first) = medication.first_taken_at {
            if now >= first.saturating_add(course_seconds(medication.duration_days)) {
                return Err(RegistryError::CourseCompleted);
            }
        }
    }

    Ok(())
}

/// Earliest timestamp at which the next dose will pass the interval gate.
pub fn next_dose_time(medication: &Medication) -> u64 {
    match medication.last_taken_at {
        Some(last) => last.saturating_add(interval_seconds(medication.interval_hours)),
        None => 0,
    }
}

/// Apply a dose to the entry. The caller has already checked the window.
pub fn apply_dose(medication: &mut Medication, now: u64) {
    medication.doses_taken += 1;
    if medication.first_taken_at.is_none() {
        medication.first_taken_at = Some(now);
    }
    medication.last_taken_at = Some(now);
}

/// Record one dose of the caller's medication.
pub fn take_medication<C: Clock>(
    env: &Env,
    clock: &C,
    patient: Address,
    medication_id: u64,
) -> Result<(), RegistryError> {
    storage::require_initialized(env)?;
    require_patient(env, &patient)?;

    let mut medications = storage::get_medications(env, &patient);
    let index = ledger_index(&medications, medication_id)?;
    let mut medication = medications.get(index).ok_or(RegistryError::NotFound)?;

    let now = clock.now();
    let config = storage::get_config(env);
    check_dose_window(&medication, now, config.enforce_course_duration)?;

    apply_dose(&mut medication, now);
    let doses_taken = medication.doses_taken;
    medications.set(index, medication);
    storage::set_medications(env, &patient, &medications);

    log!(env, "dose recorded", medication_id, doses_taken, now);
    events::emit_medication_taken(env, medication_id, patient, now);

    Ok(())
}

pub fn next_dose_at(env: &Env, patient: Address, medication_id: u64) -> Result<u64, RegistryError> {
    storage::require_initialized(env)?;
    require_patient(env, &patient)?;
    let medications = storage::get_medications(env, &patient);
    let index = ledger_index(&medications, medication_id)?;
    let medication = medications.get(index).ok_or(RegistryError::NotFound)?;
    Ok(next_dose_time(&medication))
}
