use crate::error::Result;
use url::Url;

/// 构建用户资料页链接
/// 形如 https://{host}/wiki/{namespace}:{title}
pub fn build_profile_url(host: &str, namespace: &str, title: &str) -> Result<String> {
    let base = Url::parse(&format!("https://{}/", host))?;
    let url = base.join(&format!(
        "wiki/{}:{}",
        namespace,
        urlencoding::encode(title)
    ))?;
    Ok(url.to_string())
}
