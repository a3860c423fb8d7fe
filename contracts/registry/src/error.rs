// Registry error module for MantaSwap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    // Initialization errors (1000-1099)
    AlreadyInitialized = 1000,
    NotInitialized = 1001,

    // Authorization errors (1100-1199)
    Unauthorized = 1100,

    // Config lifecycle errors (1200-1299)
    DuplicateConfigId = 1200,
    ConfigNotFound = 1201,

    // Parameter validation errors (1300-1399)
    InvalidPriceRange = 1300,
    InvalidFeeConfig = 1301,
}
