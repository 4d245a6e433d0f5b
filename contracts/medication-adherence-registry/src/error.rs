use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,

    // Lookup errors
    NotFound = 4,

    // Adherence errors
    TooSoon = 5,
    CourseCompleted = 6,

    // Validation errors
    InvalidInput = 7,
    AlreadyRegistered = 8,
}
