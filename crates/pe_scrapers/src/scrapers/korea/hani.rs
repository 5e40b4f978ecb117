use crate::scrapers::SiteConfig;

/// Hankyoreh editorials.
pub const SITE: SiteConfig = SiteConfig {
    id: "hani",
    aliases: &["hankyoreh"],
    name: "한겨레",
    emoji: "🕊️",
    host: "hani.co.kr",
    base_url: "https://www.hani.co.kr",
    list_url: "https://www.hani.co.kr/arti/opinion/editorial",
    article_path: "/arti/opinion/editorial/",
    item_selectors: &["ul.section-list-area li", "div.article-list li", "article"],
    item_title_selectors: &[".article-title", "h3", "h4"],
    item_date_selectors: &[".article-date", ".date", "time"],
    title_selectors: &["h3.article-title", ".article-head h1", "h1"],
    body_selectors: &["div.article-text", "div.text", "article"],
    date_script_pattern: r#""datePublished"\s*:\s*"(\d{4})-(\d{2})-(\d{2})"#,
};
