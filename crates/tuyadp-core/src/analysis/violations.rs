use std::collections::HashMap;

use crate::Violation;
use crate::protocols::tuya_data::TuyaDataError;

const MAX_EXAMPLES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ViolationKind {
    FrameTooShort,
    InvalidValue,
    UnknownType,
    TrailingBytes,
}

impl ViolationKind {
    /// Kind for an error returned by `TuyaData::payload`, which only raises
    /// invalid-value errors.
    pub fn for_payload_error(err: &TuyaDataError) -> Self {
        match err {
            TuyaDataError::UnknownType { .. } => ViolationKind::UnknownType,
            _ => ViolationKind::InvalidValue,
        }
    }

    fn id(self) -> &'static str {
        match self {
            ViolationKind::FrameTooShort => "TDP-FRAME-TOO-SHORT",
            ViolationKind::InvalidValue => "TDP-INVALID-VALUE",
            ViolationKind::UnknownType => "TDP-UNKNOWN-TYPE",
            ViolationKind::TrailingBytes => "TDP-TRAILING-BYTES",
        }
    }

    fn severity(self) -> &'static str {
        match self {
            ViolationKind::FrameTooShort => "error",
            _ => "warning",
        }
    }

    fn message(self) -> &'static str {
        match self {
            ViolationKind::FrameTooShort => "Frame shorter than its header or declared data point",
            ViolationKind::InvalidValue => "Data point value not valid for its type",
            ViolationKind::UnknownType => "Unknown data point type",
            ViolationKind::TrailingBytes => "Trailing bytes after data point",
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ViolationLog {
    entries: HashMap<ViolationKind, (u64, Vec<u64>)>,
}

impl ViolationLog {
    pub fn record(&mut self, kind: ViolationKind, line: u64) {
        let (count, lines) = self.entries.entry(kind).or_default();
        *count += 1;
        if lines.len() < MAX_EXAMPLES {
            lines.push(line);
        }
    }

    /// Violations ordered by severity (errors first), then id.
    pub fn into_violations(self) -> Vec<Violation> {
        let mut violations: Vec<Violation> = self
            .entries
            .into_iter()
            .map(|(kind, (count, lines))| Violation {
                id: kind.id().to_string(),
                severity: kind.severity().to_string(),
                message: kind.message().to_string(),
                count,
                examples: lines.iter().map(|line| format!("line {line}")).collect(),
            })
            .collect();
        violations.sort_by(|a, b| {
            severity_rank(&a.severity)
                .cmp(&severity_rank(&b.severity))
                .then_with(|| a.id.cmp(&b.id))
        });
        violations
    }
}

fn severity_rank(severity: &str) -> u8 {
    match severity {
        "error" => 0,
        _ => 1,
    }
}
