use crate::{error::Result, models::notification::NotificationRecord};
use async_trait::async_trait;

/// 通知流后端服务
/// 已读状态的持久化、跳转和当前用户信息都由外部实现
#[async_trait]
pub trait NotificationFeedService: Send + Sync {
    /// 当前查看者的用户 ID
    fn current_user_id(&self) -> String;

    /// 将通知标记为已读；notify 控制是否同时发送服务端 seen 信号
    async fn mark_as_read(&self, record: &NotificationRecord, notify: bool) -> Result<()>;

    /// 跳转到通知的目标页面
    fn go_to_destination(&self, record: &NotificationRecord) -> Result<()>;
}
