use crate::FrameSummary;
use crate::protocols::tuya_command::TuyaCommand;

/// Summarise a decoded command for the report.
///
/// The raw column holds the canonical bytes (integers byte-reversed); a
/// payload that cannot be interpreted is reported through `payload_error`.
pub fn summarize_command(line: u64, command: &TuyaCommand) -> FrameSummary {
    let (payload, payload_error) = match command.data.payload() {
        Ok(payload) => (Some(payload), None),
        Err(err) => (None, Some(err.to_string())),
    };
    FrameSummary {
        line,
        status: command.status,
        transaction_id: command.tsn,
        data_point_id: command.dp,
        dp_type: command.data.dp_type().to_string(),
        raw: hex::encode(command.data.raw()),
        payload,
        payload_error,
    }
}
