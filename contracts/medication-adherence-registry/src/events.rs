use soroban_sdk::{contracttype, Address, Env, String};

use crate::storage::RegistryConfig;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorAddedEvent {
    pub doctor_id: u64,
    pub name: String,
    pub doctor: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientAddedEvent {
    pub patient_id: u64,
    pub name: String,
    pub patient: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicationAddedEvent {
    pub medication_id: u64,
    pub name: String,
    pub duration_days: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicationTakenEvent {
    pub medication_id: u64,
    pub patient: Address,
    pub taken_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensDepositedEvent {
    pub from: Address,
    pub amount: i128,
    pub balance: i128,
}

pub fn emit_initialized(env: &Env, admin: Address, token: Address) {
    let event = InitializedEvent { admin, token };
    env.events().publish(("initialized",), event);
}

pub fn emit_doctor_added(env: &Env, doctor_id: u64, name: String, doctor: Address) {
    let event = DoctorAddedEvent {
        doctor_id,
        name,
        doctor,
    };
    env.events().publish(("doctor_added",), event);
}

pub fn emit_patient_added(env: &Env, patient_id: u64, name: String, patient: Address) {
    let event = PatientAddedEvent {
        patient_id,
        name,
        patient,
    };
    env.events().publish(("patient_added",), event);
}

/// The patient rides in the topic so indexers can filter per ledger.
pub fn emit_medication_added(
    env: &Env,
    patient: Address,
    medication_id: u64,
    name: String,
    duration_days: u32,
) {
    let event = MedicationAddedEvent {
        medication_id,
        name,
        duration_days,
    };
    env.events().publish(("medication_added", patient), event);
}

pub fn emit_medication_taken(env: &Env, medication_id: u64, patient: Address, taken_at: u64) {
    let event = MedicationTakenEvent {
        medication_id,
        patient,
        taken_at,
    };
    env.events().publish(("medication_taken",), event);
}

pub fn emit_tokens_deposited(env: &Env, from: Address, amount: i128, balance: i128) {
    let event = TokensDepositedEvent {
        from,
        amount,
        balance,
    };
    env.events().publish(("tokens_deposited",), event);
}

pub fn emit_config_updated(env: &Env, admin: Address, config: RegistryConfig) {
    env.events().publish(("config_updated", admin), config);
}
