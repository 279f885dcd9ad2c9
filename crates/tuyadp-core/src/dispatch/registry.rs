use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::dispatcher::CommandArgs;
use super::status::Status;
use crate::protocols::tuya_command::TuyaCommand;

/// Server to client: write a data point.
pub const TUYA_SET_DATA: u8 = 0x00;
/// Client to server: data point report.
pub const TUYA_GET_DATA: u8 = 0x01;
/// Client to server: reply to `TUYA_SET_DATA`.
pub const TUYA_SET_DATA_RESPONSE: u8 = 0x02;
/// Server to client: ask the device to report every data point.
pub const TUYA_QUERY_DATA: u8 = 0x03;
/// Client to server: unsolicited status report.
pub const TUYA_ACTIVE_STATUS_RPT: u8 = 0x06;
/// Time sync; a request from the device, a response from the gateway.
pub const TUYA_SET_TIME: u8 = 0x24;

/// Callback bound to a command id.
pub type Handler = Arc<dyn Fn(&CommandArgs) -> Status + Send + Sync>;

/// Shape of the arguments a command carries on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgSchema {
    /// One data point command frame.
    Command,
    /// Two-byte time sync request value.
    Timestamp,
    /// Undecoded bytes.
    Raw,
}

/// Definition of one recognised command.
#[derive(Clone)]
pub struct CommandDef {
    name: String,
    schema: ArgSchema,
    is_manufacturer_specific: bool,
    handler: Option<Handler>,
}

impl CommandDef {
    pub fn new(name: impl Into<String>, schema: ArgSchema, is_manufacturer_specific: bool) -> Self {
        Self {
            name: name.into(),
            schema,
            is_manufacturer_specific,
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Conventional handler name, `handle_<name>`; used in logs.
    pub fn handler_name(&self) -> String {
        format!("handle_{}", self.name)
    }

    pub fn schema(&self) -> ArgSchema {
        self.schema
    }

    pub fn is_manufacturer_specific(&self) -> bool {
        self.is_manufacturer_specific
    }

    pub fn handler(&self) -> Option<&Handler> {
        self.handler.as_ref()
    }
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .field("is_manufacturer_specific", &self.is_manufacturer_specific)
            .field("bound", &self.handler.is_some())
            .finish()
    }
}

/// Handlers for the client to server data point commands.
///
/// Status and set-data replies carry the same frame as a data report, so they
/// fall back to `handle_get_data` unless overridden.
pub trait TuyaClusterHandler: Send + Sync {
    fn handle_get_data(&self, command: &TuyaCommand) -> Status;

    fn handle_set_data_response(&self, command: &TuyaCommand) -> Status {
        self.handle_get_data(command)
    }

    fn handle_active_status_report(&self, command: &TuyaCommand) -> Status {
        self.handle_get_data(command)
    }

    fn handle_set_time_request(&self, timestamp: u16) -> Status;
}

/// Command id to definition map consulted by the dispatcher.
///
/// Cloning is cheap (handlers are shared), so a variant with one entry
/// replaced can be derived with [`CommandRegistry::with_command`] while the
/// original stays untouched.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<u8, CommandDef>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client to server commands of the Tuya manufacturer cluster, unbound.
    pub fn tuya_client_commands() -> Self {
        let mut registry = Self::new();
        registry.insert(
            TUYA_GET_DATA,
            CommandDef::new("get_data", ArgSchema::Command, true),
        );
        registry.insert(
            TUYA_SET_DATA_RESPONSE,
            CommandDef::new("set_data_response", ArgSchema::Command, true),
        );
        registry.insert(
            TUYA_ACTIVE_STATUS_RPT,
            CommandDef::new("active_status_report", ArgSchema::Command, true),
        );
        registry.insert(
            TUYA_SET_TIME,
            CommandDef::new("set_time_request", ArgSchema::Timestamp, true),
        );
        registry
    }

    pub fn insert(&mut self, command_id: u8, def: CommandDef) -> Option<CommandDef> {
        self.commands.insert(command_id, def)
    }

    /// Copy of this registry with `command_id` replaced by `def`.
    pub fn with_command(&self, command_id: u8, def: CommandDef) -> Self {
        let mut registry = self.clone();
        registry.insert(command_id, def);
        registry
    }

    pub fn get(&self, command_id: u8) -> Option<&CommandDef> {
        self.commands.get(&command_id)
    }

    pub fn contains(&self, command_id: u8) -> bool {
        self.commands.contains_key(&command_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &CommandDef)> {
        self.commands.iter().map(|(id, def)| (*id, def))
    }

    /// Bind `handler` to an existing definition. Returns `false` when the
    /// command id is not registered.
    pub fn bind(&mut self, command_id: u8, handler: Handler) -> bool {
        match self.commands.get_mut(&command_id) {
            Some(def) => {
                def.handler = Some(handler);
                true
            }
            None => false,
        }
    }

    /// Bind every registered data point command to the matching method of
    /// `handler`.
    pub fn bind_handler<H: TuyaClusterHandler + 'static>(&mut self, handler: Arc<H>) {
        self.bind(
            TUYA_GET_DATA,
            command_handler(TUYA_GET_DATA, Arc::clone(&handler), H::handle_get_data),
        );
        self.bind(
            TUYA_SET_DATA_RESPONSE,
            command_handler(
                TUYA_SET_DATA_RESPONSE,
                Arc::clone(&handler),
                H::handle_set_data_response,
            ),
        );
        self.bind(
            TUYA_ACTIVE_STATUS_RPT,
            command_handler(
                TUYA_ACTIVE_STATUS_RPT,
                Arc::clone(&handler),
                H::handle_active_status_report,
            ),
        );
        self.bind(
            TUYA_SET_TIME,
            Arc::new(move |args: &CommandArgs| match args {
                CommandArgs::Timestamp(timestamp) => handler.handle_set_time_request(*timestamp),
                other => unexpected_args(TUYA_SET_TIME, other),
            }),
        );
    }
}

fn command_handler<H: TuyaClusterHandler + 'static>(
    command_id: u8,
    handler: Arc<H>,
    call: fn(&H, &TuyaCommand) -> Status,
) -> Handler {
    Arc::new(move |args: &CommandArgs| match args {
        CommandArgs::Command(command) => call(handler.as_ref(), command),
        other => unexpected_args(command_id, other),
    })
}

fn unexpected_args(command_id: u8, args: &CommandArgs) -> Status {
    warn!(command_id, args = ?args, "handler received arguments it cannot accept");
    Status::MalformedCommand
}
