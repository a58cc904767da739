use custody_approval::ApprovalError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    AlreadyInitialized = 500,
    NotInitialized = 501,
    EmptySignerSet = 502,
    DuplicateSigner = 503,
    InvalidThreshold = 504,
    Unauthorized = 505,
    NotFound = 506,
    AlreadyTerminal = 507,
    DuplicateApproval = 508,
    DuplicateProposal = 509,
    InvalidAmount = 510,
    NotOwner = 511,
    NotListed = 512,
    AlreadyListed = 513,
    ZeroShares = 514,
    NoOutstandingShares = 515,
    InvalidCertificate = 516,
    ArithmeticOverflow = 517,
}

impl From<ApprovalError> for PoolError {
    fn from(err: ApprovalError) -> Self {
        match err {
            ApprovalError::AlreadyInitialized => PoolError::AlreadyInitialized,
            ApprovalError::NotInitialized => PoolError::NotInitialized,
            ApprovalError::EmptySignerSet => PoolError::EmptySignerSet,
            ApprovalError::DuplicateSigner => PoolError::DuplicateSigner,
            ApprovalError::InvalidThreshold => PoolError::InvalidThreshold,
            ApprovalError::Unauthorized => PoolError::Unauthorized,
            ApprovalError::NotFound => PoolError::NotFound,
            ApprovalError::AlreadyTerminal => PoolError::AlreadyTerminal,
            ApprovalError::DuplicateApproval => PoolError::DuplicateApproval,
            ApprovalError::DuplicateProposal => PoolError::DuplicateProposal,
            ApprovalError::ArithmeticOverflow => PoolError::ArithmeticOverflow,
        }
    }
}
