use maplit::hashmap;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// 本地化查询服务
/// context 中总是包含固定的命名空间标记（ns）以及模板特定的参数
pub trait I18nService: Send + Sync {
    fn translate(&self, key: &str, context: &HashMap<String, String>) -> String;
}

/// 内置的英文模板目录
/// 生产环境通过 I18nService 接入真正的翻译后端，这里保证 crate 可以独立渲染
static MESSAGE_CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    hashmap! {
        "notifications-replied-by-with-title" =>
            "{user} replied to {postTitle}",
        "notifications-replied-by-no-title" =>
            "{user} replied to your post",
        "notifications-replied-by-two-users-with-title" =>
            "{firstUser} and {secondUser} replied to {postTitle}",
        "notifications-replied-by-two-users-no-title" =>
            "{firstUser} and {secondUser} replied to your post",
        "notifications-replied-by-multiple-users-with-title" =>
            "{mostRecentUser} and {number} others replied to {postTitle}",
        "notifications-replied-by-multiple-users-no-title" =>
            "{mostRecentUser} and {number} others replied to your post",
        "notifications-post-upvote-single-user-with-title" =>
            "Your post {postTitle} received an upvote",
        "notifications-post-upvote-single-user-no-title" =>
            "Your post received an upvote",
        "notifications-post-upvote-multiple-users-with-title" =>
            "Your post {postTitle} received {number} upvotes",
        "notifications-post-upvote-multiple-users-no-title" =>
            "Your post received {number} upvotes",
        "notifications-reply-upvote-single-user-with-title" =>
            "Your reply to {postTitle} received an upvote",
        "notifications-reply-upvote-single-user-no-title" =>
            "Your reply received an upvote",
        "notifications-reply-upvote-multiple-users-with-title" =>
            "Your reply to {postTitle} received {number} upvotes",
        "notifications-reply-upvote-multiple-users-no-title" =>
            "Your reply received {number} upvotes",
        "notifications-reply-at-mention" =>
            "{mentioner} mentioned you in a reply to {postTitle}",
        "notifications-post-at-mention" =>
            "{mentioner} mentioned you in {postTitle}",
        "notifications-article-comment-reply-own-comment" =>
            "{user} replied to your comment on {articleTitle}",
        "notifications-article-comment-reply-followed-comment" =>
            "{user} replied to a comment you follow on {articleTitle}",
        "notifications-article-comment-comment-mention" =>
            "{user} mentioned you in a comment on {articleTitle}",
        "notifications-article-comment-reply-mention" =>
            "{user} mentioned you in a reply to a comment on {articleTitle}",
    }
});

#[derive(Debug, Clone, Default)]
pub struct StaticI18n {}

impl StaticI18n {
    pub fn new() -> Self {
        Self {}
    }
}

impl I18nService for StaticI18n {
    fn translate(&self, key: &str, context: &HashMap<String, String>) -> String {
        let template = match MESSAGE_CATALOG.get(key) {
            Some(template) => *template,
            None => {
                debug!("Unknown message key: {}", key);
                return key.to_string();
            }
        };

        let mut message = template.to_string();
        for (name, value) in context {
            message = message.replace(&format!("{{{}}}", name), value);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn test_translate_substitutes_arguments() {
        let i18n = StaticI18n::new();
        let context = hashmap! {
            "user".to_string() => "Ann".to_string(),
            "postTitle".to_string() => "<b>Weekly thread</b>".to_string(),
            "ns".to_string() => "design-system".to_string(),
        };

        let message = i18n.translate("notifications-replied-by-with-title", &context);
        assert_eq!(message, "Ann replied to <b>Weekly thread</b>");
    }

    #[test]
    fn test_translate_plural_arguments() {
        let i18n = StaticI18n::new();
        let context = hashmap! {
            "mostRecentUser".to_string() => "Ann".to_string(),
            "number".to_string() => "2".to_string(),
        };

        let message = i18n.translate("notifications-replied-by-multiple-users-no-title", &context);
        assert_eq!(message, "Ann and 2 others replied to your post");
    }

    #[test]
    fn test_translate_unknown_key_echoes_key() {
        let i18n = StaticI18n::new();
        let message = i18n.translate("notifications-not-a-real-key", &HashMap::new());
        assert_eq!(message, "notifications-not-a-real-key");
    }

    #[test]
    fn test_catalog_covers_all_template_keys() {
        for key in [
            "notifications-replied-by-with-title",
            "notifications-replied-by-no-title",
            "notifications-replied-by-two-users-with-title",
            "notifications-replied-by-two-users-no-title",
            "notifications-replied-by-multiple-users-with-title",
            "notifications-replied-by-multiple-users-no-title",
            "notifications-post-upvote-single-user-with-title",
            "notifications-post-upvote-single-user-no-title",
            "notifications-post-upvote-multiple-users-with-title",
            "notifications-post-upvote-multiple-users-no-title",
            "notifications-reply-upvote-single-user-with-title",
            "notifications-reply-upvote-single-user-no-title",
            "notifications-reply-upvote-multiple-users-with-title",
            "notifications-reply-upvote-multiple-users-no-title",
            "notifications-reply-at-mention",
            "notifications-post-at-mention",
            "notifications-article-comment-reply-own-comment",
            "notifications-article-comment-reply-followed-comment",
            "notifications-article-comment-comment-mention",
            "notifications-article-comment-reply-mention",
        ] {
            assert!(MESSAGE_CATALOG.contains_key(key), "missing template: {}", key);
        }
    }
}
