use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotificationError>;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Mark as read failed: {0}")]
    MarkAsRead(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// 便利函数，用于创建常见错误
impl NotificationError {
    pub fn translation(msg: &str) -> Self {
        Self::Translation(msg.to_string())
    }

    pub fn mark_as_read(msg: &str) -> Self {
        Self::MarkAsRead(msg.to_string())
    }

    pub fn navigation(msg: &str) -> Self {
        Self::Navigation(msg.to_string())
    }

    pub fn external(msg: &str) -> Self {
        Self::ExternalService(msg.to_string())
    }
}

// 从其他错误类型转换
impl From<anyhow::Error> for NotificationError {
    fn from(err: anyhow::Error) -> Self {
        NotificationError::ExternalService(err.to_string())
    }
}
