use super::error::TuyaCommandError;
use super::layout;
use super::parser::TuyaCommand;
use crate::protocols::tuya_data::write_tuya_data;

/// Append the wire form of `command` to `out`.
pub fn write_tuya_command(
    command: &TuyaCommand,
    out: &mut Vec<u8>,
) -> Result<(), TuyaCommandError> {
    let mut frame = Vec::with_capacity(layout::HEADER_LEN + command.data.raw().len() + 3);
    frame.push(command.status);
    frame.push(command.tsn);
    frame.extend_from_slice(&command.dp.to_be_bytes());
    write_tuya_data(&command.data, &mut frame)?;
    out.extend_from_slice(&frame);
    Ok(())
}

impl TuyaCommand {
    /// Wire form of this command.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TuyaCommandError> {
        let mut out = Vec::new();
        write_tuya_command(self, &mut out)?;
        Ok(out)
    }
}
