use soroban_sdk::contracterror;

/// Rejection reasons shared by the registry, strategies and controller.
/// Discriminants are part of the contract ABI and must not be reordered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum IndexError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// List id is 0 or above the list count
    InvalidListId = 3,
    /// min_score == 0 or max_score < min_score
    InvalidScoreBounds = 4,
    /// Index size outside [MIN_INDEX_SIZE, MAX_INDEX_SIZE]
    InvalidSizeBounds = 5,
    /// List would hold more than MAX_LIST_TOKENS
    CapacityExceeded = 6,
    /// Token already in the list
    DuplicateMembership = 7,
    EmptyList = 8,
    /// Token not in the list
    NotFound = 9,
    /// Requested more top tokens than the list holds
    ListSizeExceeded = 10,
    Unauthorized = 11,
    PoolNotFound = 12,
    PoolAlreadyExists = 13,
    /// Caller is not the initializer of a prepared pool
    NotPreDeployPool = 14,
    ArrayLengthMismatch = 15,
    BelowMinimumBalance = 16,
    /// Reweigh delay has not elapsed
    ReweighDelay = 17,
    /// Wrong phase of the reweigh/reindex cycle
    ReweighIndex = 18,
    /// Token already ready in the pool
    TokenReady = 19,
    InvalidPremium = 20,
    /// Strategy needs more tokens than were given
    InsufficientTokens = 21,
    /// Strategy needs an exact token count
    InvalidTokenCount = 22,
    OracleNotSet = 23,
    PriceUnavailable = 24,
    /// Every weight unit is zero, so no weights can be derived
    ZeroTotalScore = 25,
}
