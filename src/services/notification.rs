use crate::{
    error::Result,
    models::analytics::{TrackingAction, TrackingEvent},
    models::notification::{Avatar, NotificationCardView, NotificationRecord, NotificationType},
    state::ServiceBundle,
    utils::{markup, urls},
};
use maplit::hashmap;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// 组合好的消息：模板键加替换参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    pub key: &'static str,
    pub args: HashMap<String, String>,
}

/// 根据通知类型选择展示图标
/// 分支顺序保持原有的优先级，未知类型落到默认的心形图标
pub fn icon_name(notification_type: NotificationType) -> &'static str {
    match notification_type {
        NotificationType::DiscussionReply
        | NotificationType::PostAtMention
        | NotificationType::ThreadAtMention => "wds-icons-comment-small",
        NotificationType::Announcement => "wds-icons-flag-small",
        NotificationType::ArticleCommentReply => "wds-icons-reply-small",
        NotificationType::ArticleCommentAtMention
        | NotificationType::ArticleCommentReplyAtMention => "wds-icons-mention-small",
        NotificationType::DiscussionUpvotePost
        | NotificationType::DiscussionUpvoteReply
        | NotificationType::Unrecognized => "wds-icons-heart-small",
    }
}

/// 纯文本消息，仅公告类通知返回内容
pub fn plain_text(record: &NotificationRecord) -> Option<String> {
    if record.notification_type == NotificationType::Announcement {
        record.snippet.clone()
    } else {
        None
    }
}

/// 旧讨论帖没有标题时退回展示摘要
pub fn show_snippet(record: &NotificationRecord) -> bool {
    !record.has_title() && record.notification_type != NotificationType::Announcement
}

pub fn show_last_actor(record: &NotificationRecord) -> bool {
    record.notification_type == NotificationType::Announcement
}

pub fn show_avatars(record: &NotificationRecord) -> bool {
    record.total_unique_actors > 2
        && record.notification_type == NotificationType::DiscussionReply
}

/// 组合消息模板键与替换参数；公告与未知类型没有 HTML 消息体，返回 None
pub fn compose_message(record: &NotificationRecord, viewer_id: &str) -> Option<ComposedMessage> {
    match record.notification_type {
        NotificationType::DiscussionReply => Some(reply_message(record)),
        NotificationType::DiscussionUpvotePost => Some(post_upvote_message(record)),
        NotificationType::DiscussionUpvoteReply => Some(reply_upvote_message(record)),
        NotificationType::PostAtMention => Some(post_at_mention_message(record)),
        NotificationType::ThreadAtMention => Some(thread_at_mention_message(record)),
        NotificationType::ArticleCommentReply => {
            Some(article_comment_reply_message(record, viewer_id))
        }
        NotificationType::ArticleCommentAtMention => Some(article_comment_message(
            record,
            "notifications-article-comment-comment-mention",
        )),
        NotificationType::ArticleCommentReplyAtMention => Some(article_comment_message(
            record,
            "notifications-article-comment-reply-mention",
        )),
        NotificationType::Announcement | NotificationType::Unrecognized => None,
    }
}

fn first_actor_name(record: &NotificationRecord) -> String {
    record
        .first_actor()
        .map(|actor| markup::escape_html(&actor.name))
        .unwrap_or_default()
}

fn second_actor_name(record: &NotificationRecord) -> String {
    record
        .second_actor()
        .map(|actor| markup::escape_html(&actor.name))
        .unwrap_or_default()
}

fn post_title_markup(record: &NotificationRecord) -> String {
    markup::wrap_as_emphasis(record.title.as_deref().unwrap_or(""))
}

fn article_title(record: &NotificationRecord) -> String {
    record.title.clone().unwrap_or_default()
}

fn reply_message(record: &NotificationRecord) -> ComposedMessage {
    let total = record.total_unique_actors;
    let has_two_users = total == 2;
    let has_three_or_more_users = total > 2;
    let first_replier = first_actor_name(record);

    if record.has_title() {
        if has_three_or_more_users {
            ComposedMessage {
                key: "notifications-replied-by-multiple-users-with-title",
                args: hashmap! {
                    "postTitle".to_string() => post_title_markup(record),
                    "mostRecentUser".to_string() => first_replier,
                    "number".to_string() => (total - 1).to_string(),
                },
            }
        } else if has_two_users {
            ComposedMessage {
                key: "notifications-replied-by-two-users-with-title",
                args: hashmap! {
                    "firstUser".to_string() => first_replier,
                    "secondUser".to_string() => second_actor_name(record),
                    "postTitle".to_string() => post_title_markup(record),
                },
            }
        } else {
            ComposedMessage {
                key: "notifications-replied-by-with-title",
                args: hashmap! {
                    "user".to_string() => first_replier,
                    "postTitle".to_string() => post_title_markup(record),
                },
            }
        }
    } else if has_three_or_more_users {
        ComposedMessage {
            key: "notifications-replied-by-multiple-users-no-title",
            args: hashmap! {
                "mostRecentUser".to_string() => first_replier,
                "number".to_string() => (total - 1).to_string(),
            },
        }
    } else if has_two_users {
        ComposedMessage {
            key: "notifications-replied-by-two-users-no-title",
            args: hashmap! {
                "firstUser".to_string() => first_replier,
                "secondUser".to_string() => second_actor_name(record),
            },
        }
    } else {
        ComposedMessage {
            key: "notifications-replied-by-no-title",
            args: hashmap! {
                "user".to_string() => first_replier,
            },
        }
    }
}

fn post_upvote_message(record: &NotificationRecord) -> ComposedMessage {
    let total = record.total_unique_actors;
    let has_multiple_users = total > 1;

    if record.has_title() {
        if has_multiple_users {
            ComposedMessage {
                key: "notifications-post-upvote-multiple-users-with-title",
                args: hashmap! {
                    "postTitle".to_string() => post_title_markup(record),
                    "number".to_string() => total.to_string(),
                },
            }
        } else {
            ComposedMessage {
                key: "notifications-post-upvote-single-user-with-title",
                args: hashmap! {
                    "postTitle".to_string() => post_title_markup(record),
                },
            }
        }
    } else if has_multiple_users {
        ComposedMessage {
            key: "notifications-post-upvote-multiple-users-no-title",
            args: hashmap! {
                "number".to_string() => total.to_string(),
            },
        }
    } else {
        ComposedMessage {
            key: "notifications-post-upvote-single-user-no-title",
            args: HashMap::new(),
        }
    }
}

// 点赞数排除回复作者本人
fn reply_upvote_message(record: &NotificationRecord) -> ComposedMessage {
    let total = record.total_unique_actors;
    let has_multiple_users = total > 1;

    if record.has_title() {
        if has_multiple_users {
            ComposedMessage {
                key: "notifications-reply-upvote-multiple-users-with-title",
                args: hashmap! {
                    "postTitle".to_string() => post_title_markup(record),
                    "number".to_string() => (total - 1).to_string(),
                },
            }
        } else {
            ComposedMessage {
                key: "notifications-reply-upvote-single-user-with-title",
                args: hashmap! {
                    "postTitle".to_string() => post_title_markup(record),
                },
            }
        }
    } else if has_multiple_users {
        ComposedMessage {
            key: "notifications-reply-upvote-multiple-users-no-title",
            args: hashmap! {
                "number".to_string() => (total - 1).to_string(),
            },
        }
    } else {
        ComposedMessage {
            key: "notifications-reply-upvote-single-user-no-title",
            args: HashMap::new(),
        }
    }
}

// 帖子级与串级 @ 提及沿用线上既有的模板键互换，不要“修正”
fn post_at_mention_message(record: &NotificationRecord) -> ComposedMessage {
    ComposedMessage {
        key: "notifications-reply-at-mention",
        args: hashmap! {
            "postTitle".to_string() => post_title_markup(record),
            "mentioner".to_string() => first_actor_name(record),
        },
    }
}

fn thread_at_mention_message(record: &NotificationRecord) -> ComposedMessage {
    ComposedMessage {
        key: "notifications-post-at-mention",
        args: hashmap! {
            "postTitle".to_string() => post_title_markup(record),
            "mentioner".to_string() => first_actor_name(record),
        },
    }
}

fn article_comment_reply_message(record: &NotificationRecord, viewer_id: &str) -> ComposedMessage {
    let key = if record.refers_to_author_id.as_deref() == Some(viewer_id) {
        "notifications-article-comment-reply-own-comment"
    } else {
        "notifications-article-comment-reply-followed-comment"
    };

    article_comment_message(record, key)
}

fn article_comment_message(
    record: &NotificationRecord,
    key: &'static str,
) -> ComposedMessage {
    ComposedMessage {
        key,
        args: hashmap! {
            "user".to_string() => first_actor_name(record),
            "articleTitle".to_string() => article_title(record),
        },
    }
}

/// 通知卡片渲染服务
/// 将单条通知记录转换为渲染就绪的视图模型
#[derive(Clone)]
pub struct NotificationCardService {
    services: ServiceBundle,
}

impl NotificationCardService {
    pub fn new(services: ServiceBundle) -> Self {
        Self { services }
    }

    pub fn icon_name(&self, notification_type: NotificationType) -> &'static str {
        icon_name(notification_type)
    }

    pub fn text(&self, record: &NotificationRecord) -> Option<String> {
        plain_text(record)
    }

    pub fn compose_message(&self, record: &NotificationRecord) -> Option<ComposedMessage> {
        let viewer_id = self.services.feed.current_user_id();
        compose_message(record, &viewer_id)
    }

    /// 渲染本地化的 HTML 消息体
    pub fn text_with_html(&self, record: &NotificationRecord) -> Option<String> {
        let message = self.compose_message(record)?;
        Some(self.translate(message.key, message.args))
    }

    fn translate(&self, key: &str, args: HashMap<String, String>) -> String {
        let mut context = args;
        context.insert(
            "ns".to_string(),
            self.services.config.i18n_namespace.clone(),
        );
        self.services.i18n.translate(key, &context)
    }

    /// 头像投影：空的操作者列表产生空结果，从不失败
    pub fn avatars(&self, record: &NotificationRecord) -> Vec<Avatar> {
        record
            .latest_actors
            .iter()
            .map(|actor| Avatar {
                src: actor.avatar_url.clone(),
                link: urls::build_profile_url(
                    &self.services.config.site_host,
                    &self.services.config.user_namespace,
                    &actor.name,
                )
                .unwrap_or_else(|e| {
                    warn!("Failed to build profile url for {}: {}", actor.name, e);
                    String::new()
                }),
            })
            .collect()
    }

    /// 组装完整的卡片视图模型
    pub fn render(&self, record: &NotificationRecord) -> NotificationCardView {
        debug!("Rendering notification card: {}", record.id);

        NotificationCardView {
            icon: icon_name(record.notification_type),
            text: plain_text(record),
            text_with_html: self.text_with_html(record),
            show_snippet: show_snippet(record),
            show_last_actor: show_last_actor(record),
            show_avatars: show_avatars(record),
            avatars: self.avatars(record),
            is_unread: record.is_unread,
        }
    }
}

/// 单条通知卡片的交互控制器
/// 已读状态只会从 unread 变为 read，不会反向流转
#[derive(Clone)]
pub struct NotificationCard {
    inner: Arc<CardInner>,
}

struct CardInner {
    services: ServiceBundle,
    record: Mutex<NotificationRecord>,
    impression_tracked: AtomicBool,
    click_in_flight: AtomicBool,
    mark_requested: AtomicBool,
}

impl NotificationCard {
    pub fn new(record: NotificationRecord, services: ServiceBundle) -> Self {
        Self {
            inner: Arc::new(CardInner {
                services,
                record: Mutex::new(record),
                impression_tracked: AtomicBool::new(false),
                click_in_flight: AtomicBool::new(false),
                mark_requested: AtomicBool::new(false),
            }),
        }
    }

    /// 当前记录的快照
    pub fn snapshot(&self) -> NotificationRecord {
        self.inner.record.lock().clone()
    }

    pub fn is_unread(&self) -> bool {
        self.inner.record.lock().is_unread
    }

    /// 首次渲染时上报曝光事件，后续调用为空操作
    pub fn handle_impression(&self) {
        if self.inner.impression_tracked.swap(true, Ordering::SeqCst) {
            return;
        }

        let (label, is_unread) = {
            let record = self.inner.record.lock();
            (record.notification_type.as_str(), record.is_unread)
        };

        self.inner.services.analytics.track(
            &TrackingEvent::new(
                TrackingAction::Impression,
                &self.inner.services.config.analytics_category,
                label,
            )
            .with_value(if is_unread { 1 } else { 0 }),
        );
    }

    /// 点击整张卡片：先上报，再标记已读，最后跳转
    /// 上一次点击还未结束时的重复点击会被忽略
    pub async fn handle_click(&self) -> Result<()> {
        if self.inner.click_in_flight.swap(true, Ordering::SeqCst) {
            debug!("Ignoring click: previous click still in flight");
            return Ok(());
        }

        let result = self.click_inner().await;
        self.inner.click_in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn click_inner(&self) -> Result<()> {
        let record = self.snapshot();

        self.inner.services.analytics.track(
            &TrackingEvent::new(
                TrackingAction::Click,
                &self.inner.services.config.analytics_category,
                record.notification_type.as_str(),
            )
            .with_value(if record.is_unread { 1 } else { 0 }),
        );

        if record.is_unread {
            // 跳转必须等标记已读的外部调用结束之后
            match self.inner.services.feed.mark_as_read(&record, true).await {
                Ok(()) => {
                    self.inner.record.lock().is_unread = false;
                }
                Err(e) => {
                    warn!(
                        "Mark as read failed for {}, navigating anyway: {}",
                        record.id, e
                    );
                }
            }
        }

        let record = self.snapshot();
        self.inner.services.feed.go_to_destination(&record)
    }

    /// 显式标记已读：不跳转，也不等待外部调用结束
    /// 已读或已经发起过的记录上调用是空操作
    pub fn handle_mark_as_read(&self) -> Option<JoinHandle<()>> {
        if !self.is_unread() {
            return None;
        }
        if self.inner.mark_requested.swap(true, Ordering::SeqCst) {
            return None;
        }

        let label = format!(
            "mark-as-read-{}",
            self.inner.record.lock().notification_type
        );
        self.inner.services.analytics.track(&TrackingEvent::new(
            TrackingAction::Click,
            &self.inner.services.config.analytics_category,
            &label,
        ));

        let card = Arc::clone(&self.inner);
        Some(tokio::spawn(async move {
            let record = card.record.lock().clone();
            match card.services.feed.mark_as_read(&record, false).await {
                Ok(()) => {
                    card.record.lock().is_unread = false;
                }
                Err(e) => {
                    warn!("Mark as read failed for {}: {}", record.id, e);
                    // 失败后允许重试
                    card.mark_requested.store(false, Ordering::SeqCst);
                }
            }
        }))
    }
}
