use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, Address, Env, IntoVal, String, Val, Vec,
};

use crate::{MedicationAdherenceRegistry, MedicationAdherenceRegistryClient};

pub const ONE_HOUR: u64 = 60 * 60;
pub const ONE_DAY: u64 = 24 * 60 * 60;

pub const DOCTOR_NAME: &str = "Dr strange";
pub const SPECIALTY: &str = "medicine";
pub const PATIENT_NAME: &str = "Debbi";
pub const MED_NAME: &str = "Paracetamol";
pub const DOSAGE: u32 = 50;
pub const INTERVAL_HOURS: u32 = 6;
pub const DURATION_DAYS: u32 = 1;

pub const INITIAL_SUPPLY: i128 = 1_000_000_000;

/// Test environment setup
pub struct TestContext {
    pub env: Env,
    pub client: MedicationAdherenceRegistryClient<'static>,
    pub admin: Address,
    pub token: Address,
    pub doctor: Address,
    pub patient1: Address,
    pub patient2: Address,
}

impl TestContext {
    /// Deploy a token and the registry, then hand the owner's whole balance
    /// to the registry.
    pub fn new() -> Self {
        let ctx = Self::deploy();
        ctx.client.initialize(&ctx.admin, &ctx.token);

        token::StellarAssetClient::new(&ctx.env, &ctx.token).mint(&ctx.admin, &INITIAL_SUPPLY);
        let amount = token::Client::new(&ctx.env, &ctx.token).balance(&ctx.admin);
        token::Client::new(&ctx.env, &ctx.token).transfer(
            &ctx.admin,
            &ctx.client.address,
            &amount,
        );

        ctx
    }

    /// Deploy without calling `initialize`
    pub fn deploy() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let token = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();

        let contract_id = env.register(MedicationAdherenceRegistry, ());
        let client = MedicationAdherenceRegistryClient::new(&env, &contract_id);

        let doctor = Address::generate(&env);
        let patient1 = Address::generate(&env);
        let patient2 = Address::generate(&env);

        TestContext {
            env,
            client,
            admin,
            token,
            doctor,
            patient1,
            patient2,
        }
    }

    pub fn string(&self, text: &str) -> String {
        String::from_str(&self.env, text)
    }

    pub fn register_doctor(&self) -> u64 {
        self.client
            .add_doctor(&self.doctor, &self.string(DOCTOR_NAME), &self.string(SPECIALTY))
    }

    pub fn register_patient(&self, patient: &Address) -> u64 {
        self.client
            .add_patient(&self.doctor, &self.string(PATIENT_NAME), patient)
    }

    pub fn prescribe_default(&self, patient: &Address) -> u64 {
        self.client.add_patient_medication(
            &self.doctor,
            patient,
            &self.string(MED_NAME),
            &DOSAGE,
            &INTERVAL_HOURS,
            &DURATION_DAYS,
        )
    }

    /// Doctor, both patients, and one default prescription each
    pub fn with_prescriptions() -> Self {
        let ctx = Self::new();
        ctx.register_doctor();
        ctx.register_patient(&ctx.patient1);
        ctx.register_patient(&ctx.patient2);
        ctx.prescribe_default(&ctx.patient1);
        ctx.prescribe_default(&ctx.patient2);
        ctx
    }

    pub fn doses_taken(&self, patient: &Address, medication_id: u64) -> u32 {
        self.client.get_medication(patient, &medication_id).doses_taken
    }

    /// Fast forward time by specified seconds
    pub fn advance_time(&self, seconds: u64) {
        let current_time = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(current_time + seconds);
    }

    /// Last event published by the most recent invocation
    pub fn last_event(&self) -> (Address, Vec<Val>, Val) {
        self.env.events().all().last().unwrap()
    }

    /// Topics are published as plain strings
    pub fn topic(&self, name: &str) -> Vec<Val> {
        (String::from_str(&self.env, name),).into_val(&self.env)
    }
}
