use soroban_sdk::String;

use crate::error::RegistryError;

pub const SECONDS_PER_HOUR: u64 = 60 * 60;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

const MAX_NAME_LEN: u32 = 100;
const MAX_SPECIALTY_LEN: u32 = 50;

/// Validate a person or medication name
pub fn validate_name(name: &String) -> Result<(), RegistryError> {
    if name.len() == 0 || name.len() > MAX_NAME_LEN {
        return Err(RegistryError::InvalidInput);
    }
    Ok(())
}

/// Validate a doctor's specialty
pub fn validate_specialty(specialty: &String) -> Result<(), RegistryError> {
    if specialty.len() == 0 || specialty.len() > MAX_SPECIALTY_LEN {
        return Err(RegistryError::InvalidInput);
    }
    Ok(())
}

/// Validate dosing schedule parameters. Dosage units are opaque and not checked.
pub fn validate_schedule(interval_hours: u32, duration_days: u32) -> Result<(), RegistryError> {
    if interval_hours == 0 || duration_days == 0 {
        return Err(RegistryError::InvalidInput);
    }
    Ok(())
}

/// Minimum gap between two doses, in seconds
pub fn interval_seconds(interval_hours: u32) -> u64 {
    interval_hours as u64 * SECONDS_PER_HOUR
}

/// Length of a treatment course, in seconds
pub fn course_seconds(duration_days: u32) -> u64 {
    duration_days as u64 * SECONDS_PER_DAY
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_interval_conversion() {
        assert_eq!(interval_seconds(6), 21_600);
        assert_eq!(course_seconds(1), 86_400);
        assert_eq!(interval_seconds(u32::MAX), u32::MAX as u64 * 3600);
    }

    #[test]
    fn test_validate_schedule() {
        assert_eq!(validate_schedule(6, 1), Ok(()));
        assert_eq!(validate_schedule(0, 1), Err(RegistryError::InvalidInput));
        assert_eq!(validate_schedule(6, 0), Err(RegistryError::InvalidInput));
    }

    #[test]
    fn test_validate_name() {
        let env = Env::default();
        assert_eq!(validate_name(&String::from_str(&env, "Debbi")), Ok(()));
        assert_eq!(
            validate_name(&String::from_str(&env, "")),
            Err(RegistryError::InvalidInput)
        );
        assert_eq!(
            validate_specialty(&String::from_str(&env, "")),
            Err(RegistryError::InvalidInput)
        );
    }
}
