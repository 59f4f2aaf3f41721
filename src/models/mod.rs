pub mod analytics;
pub mod notification;

// 重新导出常用类型
pub use analytics::{TrackingAction, TrackingEvent};
pub use notification::{Actor, Avatar, NotificationCardView, NotificationRecord, NotificationType};
