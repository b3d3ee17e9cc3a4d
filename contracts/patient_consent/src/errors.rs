use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

pub const ERROR_LOG_KEY: Symbol = symbol_short!("ERR_LOG");
pub const ERROR_COUNT_KEY: Symbol = symbol_short!("ERR_CNT");
pub const MAX_ERROR_LOG_SIZE: u32 = 100;

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Error categories for classifying rejections
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Authorization errors: caller failed a guard check
    Authorization = 1,
    /// State conflict errors: operation invalid for the current contract state
    StateConflict = 2,
    /// System errors: contract-level issues
    System = 3,
}

/// Error severity levels indicating the impact of a rejection
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Low severity: expected rejections, informational
    Low = 1,
    /// Medium severity: authorization failures worth auditing
    Medium = 2,
    /// High severity: misconfiguration or lifecycle problems
    High = 3,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ErrorContext {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub message: String,
    pub caller: Option<Address>,
    pub resource_id: Option<String>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ErrorLogEntry {
    pub error_code: u32,
    pub context: ErrorContext,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the designated authority
    NotAuthorized = 3,
    /// Caller is not a registered doctor
    NotDoctor = 4,
    /// Caller doctor is not the patient's currently approved doctor
    NotApproved = 5,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::StateConflict
            }
            ContractError::NotAuthorized
            | ContractError::NotDoctor
            | ContractError::NotApproved => ErrorCategory::Authorization,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorSeverity::High
            }
            ContractError::NotAuthorized => ErrorSeverity::Medium,
            ContractError::NotDoctor | ContractError::NotApproved => ErrorSeverity::Low,
        }
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::NotAuthorized => "Caller is not the system authority",
            ContractError::NotDoctor => "Caller is not a registered doctor",
            ContractError::NotApproved => "Caller is not the patient's approved doctor",
        }
    }
}

/// Logs a rejection to the contract's error log.
/// Entries carry full context: category, severity, message, caller, resource
/// identifier, and ledger timestamp. The log keeps the most recent 100 entries.
pub fn log_error(
    env: &Env,
    error: ContractError,
    caller: Option<Address>,
    resource_id: Option<String>,
) {
    let log_entry = ErrorLogEntry {
        error_code: error as u32,
        context: create_error_context(env, error, caller, resource_id),
    };

    let mut error_log: Vec<ErrorLogEntry> = env
        .storage()
        .instance()
        .get(&ERROR_LOG_KEY)
        .unwrap_or(Vec::new(env));

    error_log.push_back(log_entry);

    if error_log.len() > MAX_ERROR_LOG_SIZE {
        let mut new_log = Vec::new(env);
        for i in 1..error_log.len() {
            if let Some(entry) = error_log.get(i) {
                new_log.push_back(entry);
            }
        }
        error_log = new_log;
    }

    env.storage().instance().set(&ERROR_LOG_KEY, &error_log);

    let error_count: u64 = env.storage().instance().get(&ERROR_COUNT_KEY).unwrap_or(0);
    env.storage()
        .instance()
        .set(&ERROR_COUNT_KEY, &error_count.saturating_add(1));

    extend_ttl_instance(env);
}

/// Retrieves the error log. Empty if no rejections have been logged.
pub fn get_error_log(env: &Env) -> Vec<ErrorLogEntry> {
    env.storage()
        .instance()
        .get(&ERROR_LOG_KEY)
        .unwrap_or(Vec::new(env))
}

/// Returns the total count of rejections logged since deployment.
/// This count persists even as old log entries are evicted.
pub fn get_error_count(env: &Env) -> u64 {
    env.storage().instance().get(&ERROR_COUNT_KEY).unwrap_or(0)
}

/// Builds an ErrorContext from an error plus optional caller/resource info.
pub fn create_error_context(
    env: &Env,
    error: ContractError,
    caller: Option<Address>,
    resource_id: Option<String>,
) -> ErrorContext {
    ErrorContext {
        category: error.category(),
        severity: error.severity(),
        message: String::from_str(env, error.message()),
        caller,
        resource_id,
        timestamp: env.ledger().timestamp(),
    }
}
