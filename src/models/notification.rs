use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 通知类型的封闭枚举
/// 未知的新类型反序列化为 Unrecognized，不会报错
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationType {
    DiscussionReply,
    DiscussionUpvotePost,
    DiscussionUpvoteReply,
    PostAtMention,
    ThreadAtMention,
    ArticleCommentReply,
    ArticleCommentAtMention,
    ArticleCommentReplyAtMention,
    Announcement,
    #[serde(other)]
    Unrecognized,
}

impl NotificationType {
    /// 线上格式的类型名，同时用作埋点 label
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::DiscussionReply => "discussion-reply",
            NotificationType::DiscussionUpvotePost => "discussion-upvote-post",
            NotificationType::DiscussionUpvoteReply => "discussion-upvote-reply",
            NotificationType::PostAtMention => "post-at-mention",
            NotificationType::ThreadAtMention => "thread-at-mention",
            NotificationType::ArticleCommentReply => "article-comment-reply",
            NotificationType::ArticleCommentAtMention => "article-comment-at-mention",
            NotificationType::ArticleCommentReplyAtMention => "article-comment-reply-at-mention",
            NotificationType::Announcement => "announcement",
            NotificationType::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 触发通知的用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub name: String,
    pub avatar_url: String,
}

/// 通知流中的单条通知记录
/// 由外部通知流创建；本 crate 只负责渲染和 unread -> read 的状态流转
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    pub is_unread: bool,
    #[serde(default)]
    pub total_unique_actors: u32,
    /// 最近的操作者，最新的在最前面
    #[serde(default)]
    pub latest_actors: Vec<Actor>,
    /// 仅 article-comment-reply 类型携带：被回复评论的作者 ID
    #[serde(default)]
    pub refers_to_author_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NotificationRecord {
    /// 标题存在且非空（旧讨论帖可能没有标题）
    pub fn has_title(&self) -> bool {
        self.title.as_deref().map_or(false, |t| !t.is_empty())
    }

    pub fn first_actor(&self) -> Option<&Actor> {
        self.latest_actors.first()
    }

    pub fn second_actor(&self) -> Option<&Actor> {
        self.latest_actors.get(1)
    }
}

/// 头像展示描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub src: String,
    pub link: String,
}

/// 渲染就绪的卡片视图模型
#[derive(Debug, Clone, Serialize)]
pub struct NotificationCardView {
    pub icon: &'static str,
    pub text: Option<String>,
    pub text_with_html: Option<String>,
    pub show_snippet: bool,
    pub show_last_actor: bool,
    pub show_avatars: bool,
    pub avatars: Vec<Avatar>,
    pub is_unread: bool,
}
