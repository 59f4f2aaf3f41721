pub mod analytics;
pub mod feed;
pub mod i18n;
pub mod notification;

// 重新导出常用类型
pub use analytics::{AnalyticsService, TracingAnalytics};
pub use feed::NotificationFeedService;
pub use i18n::{I18nService, StaticI18n};
pub use notification::{ComposedMessage, NotificationCard, NotificationCardService};
