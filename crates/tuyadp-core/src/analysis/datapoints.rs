use std::collections::HashMap;

use crate::DataPointSummary;
use crate::protocols::tuya_command::TuyaCommand;
use crate::protocols::tuya_data::{DpType, Payload};

#[derive(Debug, Clone)]
pub(crate) struct DataPointStats {
    pub reports: u64,
    pub last_type: DpType,
    pub last_payload: Option<Payload>,
}

pub(crate) fn add_data_point(stats: &mut HashMap<u16, DataPointStats>, command: &TuyaCommand) {
    let payload = command.data.payload().ok();
    let entry = stats.entry(command.dp).or_insert(DataPointStats {
        reports: 0,
        last_type: command.data.dp_type(),
        last_payload: None,
    });
    entry.reports += 1;
    entry.last_type = command.data.dp_type();
    entry.last_payload = payload;
}

pub(crate) fn build_data_point_summaries(
    stats: HashMap<u16, DataPointStats>,
) -> Vec<DataPointSummary> {
    let mut summaries: Vec<DataPointSummary> = stats
        .into_iter()
        .map(|(dp, stats)| DataPointSummary {
            data_point_id: dp,
            dp_type: stats.last_type.to_string(),
            reports: stats.reports,
            last_payload: stats.last_payload,
        })
        .collect();
    summaries.sort_by_key(|summary| summary.data_point_id);
    summaries
}
