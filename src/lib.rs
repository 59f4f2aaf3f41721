pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{NotificationError, Result};
pub use models::analytics::{TrackingAction, TrackingEvent};
pub use models::notification::{
    Actor, Avatar, NotificationCardView, NotificationRecord, NotificationType,
};
pub use services::{
    AnalyticsService, ComposedMessage, I18nService, NotificationCard, NotificationCardService,
    NotificationFeedService, StaticI18n, TracingAnalytics,
};
pub use state::ServiceBundle;
