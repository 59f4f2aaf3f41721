use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingAction {
    Impression,
    Click,
}

impl fmt::Display for TrackingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingAction::Impression => f.write_str("impression"),
            TrackingAction::Click => f.write_str("click"),
        }
    }
}

/// 埋点事件，category 固定为通知流标识
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub action: TrackingAction,
    pub category: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl TrackingEvent {
    pub fn new(action: TrackingAction, category: &str, label: &str) -> Self {
        Self {
            action,
            category: category.to_string(),
            label: label.to_string(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = TrackingEvent::new(TrackingAction::Click, "on-site-notifications", "announcement")
            .with_value(1);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "click");
        assert_eq!(json["category"], "on-site-notifications");
        assert_eq!(json["label"], "announcement");
        assert_eq!(json["value"], 1);
    }

    #[test]
    fn test_event_without_value_skips_field() {
        let event = TrackingEvent::new(
            TrackingAction::Impression,
            "on-site-notifications",
            "discussion-reply",
        );

        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("value").is_none());
    }
}
