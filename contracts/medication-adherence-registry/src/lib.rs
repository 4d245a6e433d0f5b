#![no_std]

mod custody;
mod error;
mod events;
mod prescription;
mod registry;
mod scheduler;
mod storage;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use scheduler::{Clock, LedgerClock};
pub use storage::{Doctor, DuplicatePolicy, Medication, Patient, PatientView, RegistryConfig};

#[contract]
pub struct MedicationAdherenceRegistry;

#[contractimpl]
impl MedicationAdherenceRegistry {
    /// Initialize the registry with its admin and the token it custodies
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), RegistryError> {
        if storage::is_initialized(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_token(&env, &token);
        storage::set_config(&env, &RegistryConfig::default_config());

        log!(&env, "registry initialized", admin.clone(), token.clone());
        events::emit_initialized(&env, admin, token);
        Ok(())
    }

    /// Register the caller as a doctor
    pub fn add_doctor(
        env: Env,
        doctor: Address,
        name: String,
        specialty: String,
    ) -> Result<u64, RegistryError> {
        doctor.require_auth();
        registry::add_doctor(&env, doctor, name, specialty)
    }

    /// Register a patient (doctors only)
    pub fn add_patient(
        env: Env,
        doctor: Address,
        name: String,
        patient: Address,
    ) -> Result<u64, RegistryError> {
        doctor.require_auth();
        registry::add_patient(&env, doctor, name, patient)
    }

    /// Prescribe a medication to a registered patient (doctors only)
    pub fn add_patient_medication(
        env: Env,
        doctor: Address,
        patient: Address,
        name: String,
        dosage: u32,
        interval_hours: u32,
        duration_days: u32,
    ) -> Result<u64, RegistryError> {
        doctor.require_auth();
        prescription::add_patient_medication(
            &env,
            doctor,
            patient,
            name,
            dosage,
            interval_hours,
            duration_days,
        )
    }

    /// Record a dose of one of the caller's medications
    pub fn take_medication(
        env: Env,
        patient: Address,
        medication_id: u64,
    ) -> Result<(), RegistryError> {
        patient.require_auth();
        let clock = LedgerClock::new(&env);
        scheduler::take_medication(&env, &clock, patient, medication_id)
    }

    /// Get a patient's details (doctors only)
    pub fn get_patient_details(
        env: Env,
        doctor: Address,
        patient: Address,
    ) -> Result<PatientView, RegistryError> {
        doctor.require_auth();
        registry::get_patient_details(&env, doctor, patient)
    }

    /// Get the caller's own patient details
    pub fn get_my_details(env: Env, patient: Address) -> Result<PatientView, RegistryError> {
        patient.require_auth();
        registry::get_my_details(&env, patient)
    }

    /// Get the caller's medications in prescription order
    pub fn get_my_medications(
        env: Env,
        patient: Address,
    ) -> Result<Vec<Medication>, RegistryError> {
        patient.require_auth();
        prescription::get_my_medications(&env, patient)
    }

    /// Get one of the caller's medications
    pub fn get_medication(
        env: Env,
        patient: Address,
        medication_id: u64,
    ) -> Result<Medication, RegistryError> {
        patient.require_auth();
        prescription::get_medication(&env, patient, medication_id)
    }

    /// Earliest timestamp at which the next dose will be accepted
    pub fn next_dose_at(
        env: Env,
        patient: Address,
        medication_id: u64,
    ) -> Result<u64, RegistryError> {
        patient.require_auth();
        scheduler::next_dose_at(&env, patient, medication_id)
    }

    pub fn no_of_doctors(env: Env) -> u64 {
        registry::no_of_doctors(&env)
    }

    pub fn no_of_patients(env: Env) -> u64 {
        registry::no_of_patients(&env)
    }

    pub fn get_doctor(env: Env, doctor: Address) -> Result<Doctor, RegistryError> {
        registry::get_doctor(&env, doctor)
    }

    pub fn is_doctor(env: Env, address: Address) -> bool {
        registry::is_doctor(&env, address)
    }

    pub fn is_patient(env: Env, address: Address) -> bool {
        registry::is_patient(&env, address)
    }

    /// Get the address of the custodied token
    pub fn get_token_address(env: Env) -> Result<Address, RegistryError> {
        custody::get_token_address(&env)
    }

    /// Get the registry's own token balance
    pub fn get_token_balance(env: Env) -> Result<i128, RegistryError> {
        custody::get_token_balance(&env)
    }

    /// Transfer tokens into the registry's custody
    pub fn deposit_tokens(env: Env, from: Address, amount: i128) -> Result<i128, RegistryError> {
        from.require_auth();
        custody::deposit_tokens(&env, from, amount)
    }

    pub fn get_admin(env: Env) -> Result<Address, RegistryError> {
        storage::get_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<RegistryConfig, RegistryError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_config(&env))
    }

    /// Update registration policies and course enforcement (admin only)
    pub fn update_config(
        env: Env,
        admin: Address,
        config: RegistryConfig,
    ) -> Result<(), RegistryError> {
        admin.require_auth();
        Self::check_admin(&env, &admin)?;

        storage::set_config(&env, &config);

        log!(&env, "config updated", admin.clone());
        events::emit_config_updated(&env, admin, config);
        Ok(())
    }

    fn check_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
        let admin = storage::get_admin(env)?;
        if *caller != admin {
            return Err(RegistryError::Unauthorized);
        }
        Ok(())
    }
}
