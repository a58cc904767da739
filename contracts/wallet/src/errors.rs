use custody_approval::ApprovalError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    EmptySignerSet = 402,
    DuplicateSigner = 403,
    InvalidThreshold = 404,
    Unauthorized = 405,
    NotFound = 406,
    AlreadyTerminal = 407,
    DuplicateApproval = 408,
    DuplicateProposal = 409,
    InvalidAmount = 410,
    InsufficientBalance = 411,
    TransferFailed = 412,
    ArithmeticOverflow = 413,
}

impl From<ApprovalError> for WalletError {
    fn from(err: ApprovalError) -> Self {
        match err {
            ApprovalError::AlreadyInitialized => WalletError::AlreadyInitialized,
            ApprovalError::NotInitialized => WalletError::NotInitialized,
            ApprovalError::EmptySignerSet => WalletError::EmptySignerSet,
            ApprovalError::DuplicateSigner => WalletError::DuplicateSigner,
            ApprovalError::InvalidThreshold => WalletError::InvalidThreshold,
            ApprovalError::Unauthorized => WalletError::Unauthorized,
            ApprovalError::NotFound => WalletError::NotFound,
            ApprovalError::AlreadyTerminal => WalletError::AlreadyTerminal,
            ApprovalError::DuplicateApproval => WalletError::DuplicateApproval,
            ApprovalError::DuplicateProposal => WalletError::DuplicateProposal,
            ApprovalError::ArithmeticOverflow => WalletError::ArithmeticOverflow,
        }
    }
}
