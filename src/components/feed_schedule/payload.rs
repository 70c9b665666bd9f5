use serde::Serialize;

use super::models::ScheduleCommand;
use crate::error::FeederResult;

/// JSON body handed to the message publisher for delivery to the feeder:
/// `{"schedule": [[start, end|null, interval, amount], ...]}`. Topic naming
/// and transport stay with the publisher.
#[derive(Debug, Clone, Serialize)]
pub struct SchedulePayload {
    pub schedule: Vec<ScheduleCommand>,
}

impl SchedulePayload {
    /// Wrap compiled commands in the device payload envelope
    pub fn new(schedule: Vec<ScheduleCommand>) -> Self {
        Self { schedule }
    }

    /// Serialize the payload for publishing
    pub fn to_json(&self) -> FeederResult<String> {
        serde_json::to_string(self).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_shape() {
        let payload = SchedulePayload::new(Vec::new());
        assert_eq!(payload.to_json().unwrap(), r#"{"schedule":[]}"#);
    }

    #[test]
    fn test_payload_serializes_command_tuples() {
        let payload = SchedulePayload::new(vec![
            ScheduleCommand {
                start: 1_737_446_400,
                end: Some(1_738_051_200),
                interval_seconds: 86_400,
                feed_amount: 2.5,
            },
            ScheduleCommand {
                start: 1_737_986_400,
                end: None,
                interval_seconds: 604_800,
                feed_amount: 2.0,
            },
        ]);

        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"schedule":[[1737446400,1738051200,86400,2.5],[1737986400,null,604800,2.0]]}"#
        );
    }
}
