use crate::models::analytics::TrackingEvent;
use tracing::info;

/// 埋点服务，发送后不等待结果
/// 真正的上报通道由外部注入
pub trait AnalyticsService: Send + Sync {
    fn track(&self, event: &TrackingEvent);
}

/// 默认实现：将埋点事件写入 tracing 日志
#[derive(Debug, Clone, Default)]
pub struct TracingAnalytics {}

impl TracingAnalytics {
    pub fn new() -> Self {
        Self {}
    }
}

impl AnalyticsService for TracingAnalytics {
    fn track(&self, event: &TrackingEvent) {
        match event.value {
            Some(value) => info!(
                "Tracking {} event: {} / {} (value: {})",
                event.action, event.category, event.label, value
            ),
            None => info!(
                "Tracking {} event: {} / {}",
                event.action, event.category, event.label
            ),
        }
    }
}
