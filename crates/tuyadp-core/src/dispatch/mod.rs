//! Cluster request dispatch.
//!
//! The dispatcher looks up the command id of an incoming request in an
//! injected [`CommandRegistry`], invokes the handler bound to it and answers
//! with a default response carrying the handler's status. Unknown ids and ids
//! without a bound handler degrade to `UnsupClusterCommand` instead of
//! failing, so partially implemented command sets keep responding.
//!
//! Handlers are resolved when they are bound (closures stored next to the
//! command definition), never by name at dispatch time.

pub mod dispatcher;
pub mod error;
pub mod header;
pub mod registry;
pub mod status;

pub use dispatcher::{ClusterDispatcher, CommandArgs, ResponseSender};
pub use error::DispatchError;
pub use header::{Direction, FrameControl, FrameType, ZclHeader};
pub use registry::{
    ArgSchema, CommandDef, CommandRegistry, Handler, TUYA_ACTIVE_STATUS_RPT, TUYA_GET_DATA,
    TUYA_QUERY_DATA, TUYA_SET_DATA, TUYA_SET_DATA_RESPONSE, TUYA_SET_TIME, TuyaClusterHandler,
};
pub use status::Status;
