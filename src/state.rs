use crate::{
    config::Config,
    services::{AnalyticsService, I18nService, NotificationFeedService},
};
use std::sync::Arc;

/// 通知卡片共享的服务集合
/// 包含配置和所有注入的外部服务
#[derive(Clone)]
pub struct ServiceBundle {
    /// 应用配置
    pub config: Config,

    /// 本地化服务
    pub i18n: Arc<dyn I18nService>,

    /// 通知流服务（已读状态、跳转、当前用户）
    pub feed: Arc<dyn NotificationFeedService>,

    /// 统计分析服务
    pub analytics: Arc<dyn AnalyticsService>,
}

impl ServiceBundle {
    pub fn new(
        config: Config,
        i18n: Arc<dyn I18nService>,
        feed: Arc<dyn NotificationFeedService>,
        analytics: Arc<dyn AnalyticsService>,
    ) -> Self {
        Self {
            config,
            i18n,
            feed,
            analytics,
        }
    }
}
