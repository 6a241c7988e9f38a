use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    InvalidThreshold = 402,
    Unauthorized = 403,
    AlreadyOwner = 404,
    NotAnOwner = 405,
    InvalidAmount = 406,
    InvalidState = 407,
    AlreadyApproved = 408,
    InsufficientApprovals = 409,
    TimelockNotElapsed = 410,
    InsufficientFunds = 411,
    TransferFailed = 412,
}
