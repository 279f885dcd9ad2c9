use std::fmt;

/// ZCL status code carried in a default response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
    NotAuthorized,
    MalformedCommand,
    UnsupClusterCommand,
    UnsupGeneralCommand,
    UnsupManufClusterCommand,
    UnsupManufGeneralCommand,
    InvalidField,
    UnsupportedAttribute,
    InvalidValue,
    ReadOnly,
    InsufficientSpace,
    NotFound,
    Timeout,
    /// Code without a named variant.
    Other(u8),
}

const SUCCESS: u8 = 0x00;
const FAILURE: u8 = 0x01;
const NOT_AUTHORIZED: u8 = 0x7e;
const MALFORMED_COMMAND: u8 = 0x80;
const UNSUP_CLUSTER_COMMAND: u8 = 0x81;
const UNSUP_GENERAL_COMMAND: u8 = 0x82;
const UNSUP_MANUF_CLUSTER_COMMAND: u8 = 0x83;
const UNSUP_MANUF_GENERAL_COMMAND: u8 = 0x84;
const INVALID_FIELD: u8 = 0x85;
const UNSUPPORTED_ATTRIBUTE: u8 = 0x86;
const INVALID_VALUE: u8 = 0x87;
const READ_ONLY: u8 = 0x88;
const INSUFFICIENT_SPACE: u8 = 0x89;
const NOT_FOUND: u8 = 0x8b;
const TIMEOUT: u8 = 0x94;

impl From<u8> for Status {
    fn from(code: u8) -> Self {
        match code {
            SUCCESS => Status::Success,
            FAILURE => Status::Failure,
            NOT_AUTHORIZED => Status::NotAuthorized,
            MALFORMED_COMMAND => Status::MalformedCommand,
            UNSUP_CLUSTER_COMMAND => Status::UnsupClusterCommand,
            UNSUP_GENERAL_COMMAND => Status::UnsupGeneralCommand,
            UNSUP_MANUF_CLUSTER_COMMAND => Status::UnsupManufClusterCommand,
            UNSUP_MANUF_GENERAL_COMMAND => Status::UnsupManufGeneralCommand,
            INVALID_FIELD => Status::InvalidField,
            UNSUPPORTED_ATTRIBUTE => Status::UnsupportedAttribute,
            INVALID_VALUE => Status::InvalidValue,
            READ_ONLY => Status::ReadOnly,
            INSUFFICIENT_SPACE => Status::InsufficientSpace,
            NOT_FOUND => Status::NotFound,
            TIMEOUT => Status::Timeout,
            other => Status::Other(other),
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => SUCCESS,
            Status::Failure => FAILURE,
            Status::NotAuthorized => NOT_AUTHORIZED,
            Status::MalformedCommand => MALFORMED_COMMAND,
            Status::UnsupClusterCommand => UNSUP_CLUSTER_COMMAND,
            Status::UnsupGeneralCommand => UNSUP_GENERAL_COMMAND,
            Status::UnsupManufClusterCommand => UNSUP_MANUF_CLUSTER_COMMAND,
            Status::UnsupManufGeneralCommand => UNSUP_MANUF_GENERAL_COMMAND,
            Status::InvalidField => INVALID_FIELD,
            Status::UnsupportedAttribute => UNSUPPORTED_ATTRIBUTE,
            Status::InvalidValue => INVALID_VALUE,
            Status::ReadOnly => READ_ONLY,
            Status::InsufficientSpace => INSUFFICIENT_SPACE,
            Status::NotFound => NOT_FOUND,
            Status::Timeout => TIMEOUT,
            Status::Other(code) => code,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::Failure => write!(f, "failure"),
            Status::NotAuthorized => write!(f, "not authorized"),
            Status::MalformedCommand => write!(f, "malformed command"),
            Status::UnsupClusterCommand => write!(f, "unsupported cluster command"),
            Status::UnsupGeneralCommand => write!(f, "unsupported general command"),
            Status::UnsupManufClusterCommand => {
                write!(f, "unsupported manufacturer cluster command")
            }
            Status::UnsupManufGeneralCommand => {
                write!(f, "unsupported manufacturer general command")
            }
            Status::InvalidField => write!(f, "invalid field"),
            Status::UnsupportedAttribute => write!(f, "unsupported attribute"),
            Status::InvalidValue => write!(f, "invalid value"),
            Status::ReadOnly => write!(f, "read only"),
            Status::InsufficientSpace => write!(f, "insufficient space"),
            Status::NotFound => write!(f, "not found"),
            Status::Timeout => write!(f, "timeout"),
            Status::Other(code) => write!(f, "status 0x{:02x}", code),
        }
    }
}
