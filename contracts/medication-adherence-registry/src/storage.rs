use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::error::RegistryError;

/// What happens when an address that already holds a record registers again.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DuplicatePolicy {
    /// A fresh record with a new id replaces the old one.
    Replace,
    /// The registration fails with `AlreadyRegistered`.
    Reject,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub doctor_policy: DuplicatePolicy,
    pub patient_policy: DuplicatePolicy,
    /// Refuse doses once `duration_days` has elapsed since the first dose.
    pub enforce_course_duration: bool,
}

impl RegistryConfig {
    pub fn default_config() -> Self {
        RegistryConfig {
            doctor_policy: DuplicatePolicy::Replace,
            patient_policy: DuplicatePolicy::Replace,
            enforce_course_duration: false,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub specialty: String,
    pub address: Address,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub id: u64,
    pub name: String,
    pub address: Address,
    pub doctor: Address,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Medication {
    pub id: u64,
    pub name: String,
    pub dosage: u32,
    pub interval_hours: u32,
    pub duration_days: u32,
    pub doses_taken: u32,
    pub first_taken_at: Option<u64>,
    pub last_taken_at: Option<u64>,
    pub prescribed_by: Address,
    pub prescribed_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientView {
    pub id: u64,
    pub name: String,
    pub address: Address,
    pub doctor: Address,
    pub registered_at: u64,
    pub no_of_medications: u32,
}

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageKey {
    Admin,
    Token,
    Config,
    DoctorCount,
    PatientCount,
    Doctor(Address),      // doctor address -> Doctor
    Patient(Address),     // patient address -> Patient
    Medications(Address), // patient address -> Vec<Medication>
}

// Instance storage: admin, token, config, counters

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Admin)
}

pub fn require_initialized(env: &Env) -> Result<(), RegistryError> {
    if !is_initialized(env) {
        return Err(RegistryError::NotInitialized);
    }
    Ok(())
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&StorageKey::Admin)
        .ok_or(RegistryError::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&StorageKey::Token, token);
}

pub fn get_token(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&StorageKey::Token)
        .ok_or(RegistryError::NotInitialized)
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub fn get_config(env: &Env) -> RegistryConfig {
    env.storage()
        .instance()
        .get(&StorageKey::Config)
        .unwrap_or(RegistryConfig::default_config())
}

pub fn doctor_count(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::DoctorCount).unwrap_or(0u64)
}

pub fn patient_count(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::PatientCount).unwrap_or(0u64)
}

// Counter generation functions
pub fn next_doctor_id(env: &Env) -> u64 {
    let next = doctor_count(env) + 1;
    env.storage().instance().set(&StorageKey::DoctorCount, &next);
    next
}

pub fn next_patient_id(env: &Env) -> u64 {
    let next = patient_count(env) + 1;
    env.storage().instance().set(&StorageKey::PatientCount, &next);
    next
}

// Doctor storage functions
pub fn get_doctor(env: &Env, address: &Address) -> Option<Doctor> {
    let key = StorageKey::Doctor(address.clone());
    env.storage().persistent().get(&key)
}

pub fn set_doctor(env: &Env, doctor: &Doctor) {
    let key = StorageKey::Doctor(doctor.address.clone());
    env.storage().persistent().set(&key, doctor);
}

pub fn has_doctor(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::Doctor(address.clone()))
}

// Patient storage functions
pub fn get_patient(env: &Env, address: &Address) -> Option<Patient> {
    let key = StorageKey::Patient(address.clone());
    env.storage().persistent().get(&key)
}

pub fn set_patient(env: &Env, patient: &Patient) {
    let key = StorageKey::Patient(patient.address.clone());
    env.storage().persistent().set(&key, patient);
}

pub fn has_patient(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::Patient(address.clone()))
}

// Medication ledger storage functions
pub fn get_medications(env: &Env, patient: &Address) -> Vec<Medication> {
    let key = StorageKey::Medications(patient.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn set_medications(env: &Env, patient: &Address, medications: &Vec<Medication>) {
    let key = StorageKey::Medications(patient.clone());
    env.storage().persistent().set(&key, medications);
}

pub fn clear_medications(env: &Env, patient: &Address) {
    let key = StorageKey::Medications(patient.clone());
    env.storage().persistent().remove(&key);
}
