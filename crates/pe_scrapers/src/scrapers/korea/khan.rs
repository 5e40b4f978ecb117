use crate::scrapers::SiteConfig;

/// Kyunghyang Shinmun editorials.
pub const SITE: SiteConfig = SiteConfig {
    id: "khan",
    aliases: &["kyunghyang"],
    name: "경향신문",
    emoji: "🧭",
    host: "khan.co.kr",
    base_url: "https://www.khan.co.kr",
    list_url: "https://www.khan.co.kr/opinion/editorial",
    article_path: "/article/",
    item_selectors: &["ul#recentList li", "div.list li", "article"],
    item_title_selectors: &[".tit", "h2", "h3"],
    item_date_selectors: &[".date", ".byline", "time"],
    title_selectors: &["h1.headline", "div.art_header h1", "h1"],
    body_selectors: &["div.art_body", "div#articleBody", "article"],
    date_script_pattern: r#"article_date\s*[:=]\s*["'](\d{4})[-.](\d{2})[-.](\d{2})"#,
};
