use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::protocols::tuya_command::parse_tuya_command;
use crate::source::{FrameEvent, FrameSource, HexFileSource, SourceError};
use crate::{CaptureSummary, Report, make_stub_report};

mod datapoints;
mod frames;
mod violations;

use datapoints::{DataPointStats, add_data_point, build_data_point_summaries};
pub use frames::summarize_command;
use violations::{ViolationKind, ViolationLog};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub fn analyze_frame_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = HexFileSource::open(path)?;
    analyze_source(path, source)
}

pub fn analyze_source<S: FrameSource>(path: &Path, mut source: S) -> Result<Report, AnalysisError> {
    let mut frames_total = 0u64;
    let mut frames_decoded = 0u64;
    let mut frames = Vec::new();
    let mut data_points: HashMap<u16, DataPointStats> = HashMap::new();
    let mut violations = ViolationLog::default();

    while let Some(FrameEvent { line, data }) = source.next_frame()? {
        frames_total += 1;
        match parse_tuya_command(&data) {
            Ok((command, rest)) => {
                frames_decoded += 1;
                if !rest.is_empty() {
                    debug!(
                        line,
                        trailing = rest.len(),
                        "trailing bytes after data point"
                    );
                    violations.record(ViolationKind::TrailingBytes, line);
                }
                if let Err(err) = command.data.payload() {
                    debug!(line, dp = command.dp, error = %err, "data point value rejected");
                    violations.record(ViolationKind::for_payload_error(&err), line);
                }
                add_data_point(&mut data_points, &command);
                frames.push(summarize_command(line, &command));
            }
            Err(err) => {
                warn!(line, error = %err, "frame rejected");
                violations.record(ViolationKind::FrameTooShort, line);
            }
        }
    }

    let mut report = make_stub_report(&path.display().to_string(), path.metadata()?.len());
    report.capture_summary = Some(CaptureSummary {
        frames_total,
        frames_decoded,
        frames_rejected: frames_total - frames_decoded,
    });
    report.frames = frames;
    report.data_points = build_data_point_summaries(data_points);
    report.violations = violations.into_violations();
    Ok(report)
}
