//! Tuya data point codec, cluster dispatch and offline frame analysis.
//!
//! The crate is layered the same way for every wire format: `layout` holds
//! offsets and constants, `reader` does bounds-checked access, `parser` and
//! `writer` convert between bytes and typed values. On top of the codecs,
//! [`dispatch`] routes incoming cluster commands to bound handlers and emits
//! default responses, and the analysis pipeline turns a file of captured
//! frames into a deterministic report.
//!
//! Invariants:
//! - Parsing never consumes bytes past the declared data point; the
//!   remainder is handed back untouched.
//! - Typed payloads are computed on demand and may fail after parsing
//!   succeeded (bitmap widths, unknown tags).
//! - Report ordering is stable across runs.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use tuyadp_core::analyze_frame_file;
//!
//! let report = analyze_frame_file(Path::new("frames.hex"))?;
//! println!("report version: {}", report.report_version);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
pub mod dispatch;
pub mod protocols;
mod source;

pub use analysis::{AnalysisError, analyze_frame_file, analyze_source, summarize_command};
pub use dispatch::{ClusterDispatcher, CommandArgs, CommandRegistry, ResponseSender, Status};
pub use protocols::tuya_command::{TuyaCommand, decode_tuya_command, parse_tuya_command};
pub use protocols::tuya_data::{DpType, Payload, TuyaData, parse_tuya_data};
pub use source::{FrameEvent, FrameSource, HexFileSource, SourceError, parse_hex_frame};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Aggregated analysis report with deterministic ordering.
///
/// # Examples
/// ```
/// use tuyadp_core::make_stub_report;
///
/// let report = make_stub_report("frames.hex", 123);
/// assert_eq!(report.report_version, tuyadp_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,

    /// Input file metadata.
    pub input: InputInfo,

    /// Frame counters (absent on stub reports).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_summary: Option<CaptureSummary>,
    /// Decoded frames in input order.
    pub frames: Vec<FrameSummary>,
    /// Per data point summaries, sorted by id.
    pub data_points: Vec<DataPointSummary>,
    /// Violations sorted by severity and ID.
    pub violations: Vec<Violation>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "tuyadp").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input file metadata embedded in reports.
///
/// # Examples
/// ```
/// use tuyadp_core::InputInfo;
///
/// let input = InputInfo {
///     path: "frames.hex".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Frame counters for the whole input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSummary {
    /// Frames read from the source.
    pub frames_total: u64,
    /// Frames whose header and data point decoded.
    pub frames_decoded: u64,
    /// Frames too short for their header or declared data point.
    pub frames_rejected: u64,
}

/// One decoded command frame.
///
/// # Examples
/// ```
/// use tuyadp_core::{FrameSummary, Payload};
///
/// let frame = FrameSummary {
///     line: 2,
///     status: 0,
///     transaction_id: 1,
///     data_point_id: 1,
///     dp_type: "bool".to_string(),
///     raw: "01".to_string(),
///     payload: Some(Payload::Bool(true)),
///     payload_error: None,
/// };
/// assert_eq!(frame.data_point_id, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSummary {
    /// Line of the input the frame was read from.
    pub line: u64,
    pub status: u8,
    pub transaction_id: u8,
    pub data_point_id: u16,
    /// Data point type name (`unknown(0x..)` for unassigned tags).
    pub dp_type: String,
    /// Hex of the stored value; integers appear byte-reversed.
    pub raw: String,
    /// Typed payload, when the value is valid for its type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
    /// Why the typed payload could not be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_error: Option<String>,
}

/// Aggregate of all reports for a single data point id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPointSummary {
    pub data_point_id: u16,
    /// Type of the most recent report.
    pub dp_type: String,
    /// Number of frames carrying this data point.
    pub reports: u64,
    /// Payload of the most recent report, absent when that report was invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payload: Option<Payload>,
}

/// Single protocol violation record.
///
/// # Examples
/// ```
/// use tuyadp_core::Violation;
///
/// let violation = Violation {
///     id: "TDP-TRAILING-BYTES".to_string(),
///     severity: "warning".to_string(),
///     message: "Trailing bytes after data point".to_string(),
///     count: 1,
///     examples: vec!["line 6".to_string()],
/// };
/// assert_eq!(violation.count, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Stable violation identifier (e.g., `TDP-UNKNOWN-TYPE`).
    pub id: String,
    /// Severity label (`error` or `warning`).
    pub severity: String,
    /// Human-readable message explaining the violation.
    pub message: String,
    /// Number of occurrences aggregated into this violation.
    pub count: u64,
    /// At most three example contexts, formatted as `line N`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use tuyadp_core::make_stub_report;
///
/// let report = make_stub_report("frames.hex", 123);
/// assert_eq!(report.tool.name, "tuyadp");
/// assert!(report.frames.is_empty());
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "tuyadp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        capture_summary: None,
        frames: vec![],
        data_points: vec![],
        violations: vec![],
    }
}
