use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ApprovalError {
    AlreadyInitialized = 700,
    NotInitialized = 701,
    EmptySignerSet = 702,
    DuplicateSigner = 703,
    InvalidThreshold = 704,
    Unauthorized = 705,
    NotFound = 706,
    AlreadyTerminal = 707,
    DuplicateApproval = 708,
    DuplicateProposal = 709,
    ArithmeticOverflow = 710,
}
