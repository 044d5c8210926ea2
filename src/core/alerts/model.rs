use chrono::{DateTime, Utc};

/// A fired alert, ready for the notifier.
#[derive(Clone, Debug, PartialEq)]
pub struct AlertEvent {
    /// Index of the matched combination in the loaded list.
    pub combination: usize,
    /// One coordinate per column that carried a matching color.
    pub positions: Vec<(u32, u32)>,
    /// Capture time of the frame the match was found in.
    pub timestamp: DateTime<Utc>,
    /// Human-readable multi-line text for the alert surface.
    pub message: String,
}

impl AlertEvent {
    pub fn new(combination: usize, positions: Vec<(u32, u32)>, timestamp: DateTime<Utc>) -> Self {
        let message = format_message(&positions);
        Self {
            combination,
            positions,
            timestamp,
            message,
        }
    }
}

fn format_message(positions: &[(u32, u32)]) -> String {
    let mut message =
        String::from("Found three consecutive pixels in configured colors at positions:\n");
    for (x, y) in positions {
        message.push_str(&format!("({x}, {y})\n"));
    }
    message
}
