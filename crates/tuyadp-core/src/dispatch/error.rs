use thiserror::Error;

use crate::protocols::time_sync::TimeSyncError;
use crate::protocols::tuya_command::TuyaCommandError;

/// Errors raised while decoding command arguments ahead of dispatch.
///
/// Unknown or unbound commands are not errors; they are answered with an
/// unsupported-command status instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("command 0x{command_id:02x}: {source}")]
    Command {
        command_id: u8,
        #[source]
        source: TuyaCommandError,
    },
    #[error("command 0x{command_id:02x}: {source}")]
    TimeSync {
        command_id: u8,
        #[source]
        source: TimeSyncError,
    },
}
