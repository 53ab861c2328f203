use anyhow::Result;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use crate::domain::models::task::ArticleTask;

// Articles sit under h2/h3 headlines with a nested anchor. This is the
// standard markup shape for article listings and far more stable than
// site-specific class selectors.
static HEADLINE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h2, h3").unwrap());
static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// 标题提取服务
///
/// 负责从页面HTML中提取候选文章的 (标题, 链接) 对
pub struct HeadlineService;

impl HeadlineService {
    /// 提取文章任务
    ///
    /// 查找 h2/h3 标题内的锚点，解析相对链接为绝对URL，
    /// 跳过非HTTP链接并过滤重复条目
    ///
    /// # 参数
    ///
    /// * `html_content` - 页面HTML内容
    /// * `base_url` - 用于解析相对链接的基础URL
    ///
    /// # 返回值
    ///
    /// 去重后的文章任务列表，保持页面出现顺序
    pub fn extract_tasks(html_content: &str, base_url: &str) -> Result<Vec<ArticleTask>> {
        let base = Url::parse(base_url)?;
        let document = Html::parse_document(html_content);

        let mut tasks: Vec<ArticleTask> = Vec::new();
        for headline in document.select(&HEADLINE_SELECTOR) {
            let link = match headline.select(&ANCHOR_SELECTOR).next() {
                Some(link) => link,
                None => continue,
            };
            let href = match link.value().attr("href") {
                Some(href) => href,
                None => continue,
            };
            let title = link.text().collect::<Vec<_>>().join(" ").trim().to_string();
            if title.is_empty() {
                continue;
            }

            let full_url = if href.starts_with('/') {
                // Relative link, join against the page's own origin
                match base.join(href) {
                    Ok(url) => url.to_string(),
                    Err(_) => continue,
                }
            } else if href.starts_with("http") {
                href.to_string()
            } else {
                continue; // Fragment, mailto and other odd links
            };

            let task = ArticleTask::new(title, full_url);
            // Linear containment scan keeps first-seen page order
            if !tasks.contains(&task) {
                tasks.push(task);
            }
        }

        Ok(tasks)
    }
}
