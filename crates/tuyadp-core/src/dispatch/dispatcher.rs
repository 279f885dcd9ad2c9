use std::sync::Arc;

use tracing::{debug, warn};

use super::error::DispatchError;
use super::header::ZclHeader;
use super::registry::{ArgSchema, CommandRegistry};
use super::status::Status;
use crate::protocols::time_sync::parse_set_time_request;
use crate::protocols::tuya_command::{TuyaCommand, decode_tuya_command};

/// Decoded arguments handed to a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArgs {
    Command(TuyaCommand),
    Timestamp(u16),
    Raw(Vec<u8>),
}

/// Response primitive supplied by the cluster framework.
///
/// Serialising and transmitting the default response frame is the
/// implementor's concern.
pub trait ResponseSender {
    fn send_default_rsp(&mut self, header: &ZclHeader, status: Status);
}

/// Routes incoming cluster commands to the handlers bound in a registry.
///
/// The registry is shared read-only; dispatch never mutates it.
#[derive(Debug, Clone)]
pub struct ClusterDispatcher {
    registry: Arc<CommandRegistry>,
}

impl ClusterDispatcher {
    pub fn new(registry: impl Into<Arc<CommandRegistry>>) -> Self {
        Self {
            registry: registry.into(),
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Dispatch one request with already decoded arguments.
    ///
    /// Unknown command ids and commands without a bound handler are both
    /// answered with `UnsupClusterCommand`. Exactly one default response is
    /// sent unless the header disables it. Returns the status decided for
    /// the request.
    pub fn handle_cluster_request<S: ResponseSender + ?Sized>(
        &self,
        header: &ZclHeader,
        args: &CommandArgs,
        sender: &mut S,
    ) -> Status {
        let command_id = header.command_id;
        let status = match self.registry.get(command_id) {
            None => {
                warn!(command_id, tsn = header.tsn, "unknown cluster command");
                Status::UnsupClusterCommand
            }
            Some(def) => match def.handler() {
                None => {
                    warn!(
                        command_id,
                        handler = %def.handler_name(),
                        "no handler bound for cluster command"
                    );
                    Status::UnsupClusterCommand
                }
                Some(handler) => {
                    let status = handler(args);
                    debug!(
                        command_id,
                        tsn = header.tsn,
                        handler = %def.handler_name(),
                        %status,
                        "handled cluster command"
                    );
                    status
                }
            },
        };

        if header.disable_default_response() {
            debug!(command_id, %status, "default response disabled by sender");
        } else {
            sender.send_default_rsp(header, status);
        }
        status
    }

    /// Decode `payload` according to the registered argument schema, then
    /// dispatch it.
    ///
    /// # Errors
    /// Returns `DispatchError` when the payload cannot be decoded; nothing is
    /// sent in that case.
    pub fn handle_cluster_frame<S: ResponseSender + ?Sized>(
        &self,
        header: &ZclHeader,
        payload: &[u8],
        sender: &mut S,
    ) -> Result<Status, DispatchError> {
        let args = self.decode_args(header.command_id, payload)?;
        Ok(self.handle_cluster_request(header, &args, sender))
    }

    /// Decode the arguments of `command_id`; unregistered ids keep their raw
    /// bytes.
    pub fn decode_args(
        &self,
        command_id: u8,
        payload: &[u8],
    ) -> Result<CommandArgs, DispatchError> {
        let schema = self
            .registry
            .get(command_id)
            .map(|def| def.schema())
            .unwrap_or(ArgSchema::Raw);
        match schema {
            ArgSchema::Command => decode_tuya_command(payload)
                .map(CommandArgs::Command)
                .map_err(|source| DispatchError::Command { command_id, source }),
            ArgSchema::Timestamp => parse_set_time_request(payload)
                .map(CommandArgs::Timestamp)
                .map_err(|source| DispatchError::TimeSync { command_id, source }),
            ArgSchema::Raw => Ok(CommandArgs::Raw(payload.to_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{ClusterDispatcher, CommandArgs, ResponseSender};
    use crate::dispatch::header::{Direction, ZclHeader};
    use crate::dispatch::registry::{CommandRegistry, TUYA_GET_DATA, TUYA_SET_TIME};
    use crate::dispatch::status::Status;

    #[derive(Default)]
    struct Recorder {
        sent: Vec<(u8, Status)>,
    }

    impl ResponseSender for Recorder {
        fn send_default_rsp(&mut self, header: &ZclHeader, status: Status) {
            self.sent.push((header.tsn, status));
        }
    }

    fn counting_registry(calls: Arc<AtomicUsize>) -> CommandRegistry {
        let mut registry = CommandRegistry::tuya_client_commands();
        registry.bind(
            TUYA_GET_DATA,
            Arc::new(move |_: &CommandArgs| {
                calls.fetch_add(1, Ordering::SeqCst);
                Status::Success
            }),
        );
        registry
    }

    #[test]
    fn response_echoes_transaction() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = ClusterDispatcher::new(counting_registry(Arc::clone(&calls)));
        let header = ZclHeader::cluster(7, TUYA_GET_DATA, Direction::ServerToClient);
        let mut sender = Recorder::default();

        let status =
            dispatcher.handle_cluster_request(&header, &CommandArgs::Raw(Vec::new()), &mut sender);

        assert_eq!(status, Status::Success);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(sender.sent, vec![(7, Status::Success)]);
    }

    #[test]
    fn disabled_default_response_sends_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = ClusterDispatcher::new(counting_registry(Arc::clone(&calls)));
        let header = ZclHeader::cluster(1, TUYA_GET_DATA, Direction::ServerToClient)
            .with_disable_default_response(true);
        let mut sender = Recorder::default();

        dispatcher.handle_cluster_request(&header, &CommandArgs::Raw(Vec::new()), &mut sender);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sender.sent.is_empty());

        let header = ZclHeader::cluster(2, 0xfe, Direction::ServerToClient)
            .with_disable_default_response(true);
        let status =
            dispatcher.handle_cluster_request(&header, &CommandArgs::Raw(Vec::new()), &mut sender);
        assert_eq!(status, Status::UnsupClusterCommand);
        assert!(sender.sent.is_empty());
    }

    #[test]
    fn frame_decode_failure_sends_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = ClusterDispatcher::new(counting_registry(Arc::clone(&calls)));
        let header = ZclHeader::cluster(3, TUYA_GET_DATA, Direction::ServerToClient);
        let mut sender = Recorder::default();

        let err = dispatcher
            .handle_cluster_frame(&header, &[0x00, 0x01], &mut sender)
            .unwrap_err();

        assert!(err.to_string().contains("command 0x01"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(sender.sent.is_empty());
    }

    #[test]
    fn decode_args_follows_schema() {
        let dispatcher = ClusterDispatcher::new(CommandRegistry::tuya_client_commands());

        let args = dispatcher.decode_args(TUYA_SET_TIME, &[0x12, 0x34]).unwrap();
        assert_eq!(args, CommandArgs::Timestamp(0x1234));

        let args = dispatcher.decode_args(0xfe, &[0xaa]).unwrap();
        assert_eq!(args, CommandArgs::Raw(vec![0xaa]));

        let args = dispatcher
            .decode_args(TUYA_GET_DATA, b"\x00\x01\x00\x02\x01\x00\x01\x01")
            .unwrap();
        assert!(matches!(args, CommandArgs::Command(command) if command.dp == 2));

        assert!(dispatcher.decode_args(TUYA_SET_TIME, &[0x12]).is_err());
    }
}
