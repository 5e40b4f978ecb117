use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use pe_core::{Article, EditorialSource, Error, ListItem, PageFetcher, Result, SourceMetadata};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::logging::Logger;

pub mod date;
pub mod korea;

/// Shown when no title selector matched.
pub const TITLE_NOT_FOUND: &str = "제목을 찾을 수 없습니다";
/// Shown when no body selector matched.
pub const BODY_NOT_FOUND: &str = "본문을 찾을 수 없습니다";

/// Where an outlet keeps its editorials and how to read them.
///
/// Every selector list is tried in order; the first one that yields
/// something wins.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    /// Primary CLI name.
    pub id: &'static str,
    pub aliases: &'static [&'static str],
    pub name: &'static str,
    pub emoji: &'static str,
    /// URLs containing this belong to the outlet.
    pub host: &'static str,
    pub base_url: &'static str,
    pub list_url: &'static str,
    /// Listing links without this path fragment are not editorials.
    pub article_path: &'static str,
    pub item_selectors: &'static [&'static str],
    pub item_title_selectors: &'static [&'static str],
    pub item_date_selectors: &'static [&'static str],
    pub title_selectors: &'static [&'static str],
    pub body_selectors: &'static [&'static str],
    /// Regex over inline script text capturing year, month and day.
    pub date_script_pattern: &'static str,
}

#[derive(Debug, Clone)]
struct CompiledSite {
    base: Url,
    items: Vec<Selector>,
    item_titles: Vec<Selector>,
    item_dates: Vec<Selector>,
    titles: Vec<Selector>,
    bodies: Vec<Selector>,
    date_script: Regex,
}

impl CompiledSite {
    fn compile(site: &SiteConfig) -> Result<Self> {
        let base = utils::parse_url(site.base_url)?;
        let date_script = Regex::new(site.date_script_pattern)
            .map_err(|e| Error::Scraping(format!("Invalid date pattern for {}: {}", site.id, e)))?;
        Ok(Self {
            base,
            items: utils::parse_selectors(site.item_selectors)?,
            item_titles: utils::parse_selectors(site.item_title_selectors)?,
            item_dates: utils::parse_selectors(site.item_date_selectors)?,
            titles: utils::parse_selectors(site.title_selectors)?,
            bodies: utils::parse_selectors(site.body_selectors)?,
            date_script,
        })
    }
}

/// An [`EditorialSource`] driven entirely by a [`SiteConfig`].
pub struct SiteScraper {
    site: &'static SiteConfig,
    compiled: CompiledSite,
    fetcher: Arc<dyn PageFetcher>,
    logger: Logger,
}

impl SiteScraper {
    pub fn new(site: &'static SiteConfig, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let compiled = CompiledSite::compile(site)?;
        let logger = Logger::new().with_prefix(format!("{} {}", site.emoji, site.name));
        Ok(Self {
            site,
            compiled,
            fetcher,
            logger,
        })
    }

    pub fn site(&self) -> &'static SiteConfig {
        self.site
    }

    /// Extract listing items from the editorial section page.
    pub fn compute_list(&self, html: &str) -> Vec<ListItem> {
        let document = Html::parse_document(html);
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for container in utils::select_first(&document, &self.compiled.items) {
            let Some(href) = utils::item_link(container) else {
                continue;
            };
            let link = match self.compiled.base.join(href) {
                Ok(link) => link.to_string(),
                Err(e) => {
                    self.logger.debug(&format!("skipping link {}: {}", href, e));
                    continue;
                }
            };
            if !link.contains(self.site.article_path) {
                continue;
            }

            let title = utils::first_text_in(container, &self.compiled.item_titles)
                .unwrap_or_else(|| utils::collapse_whitespace(&container_anchor_text(container)));
            if title.is_empty() || !seen.insert(link.clone()) {
                continue;
            }

            let date = utils::first_text_in(container, &self.compiled.item_dates)
                .map(|raw| date::normalize_date(&raw).unwrap_or(raw))
                .unwrap_or_default();

            items.push(ListItem { title, link, date });
        }

        items
    }

    /// Extract the article from a detail page.
    pub fn compute_article(&self, html: &str, link: &str, today: NaiveDate) -> Article {
        let document = Html::parse_document(html);

        let title = utils::first_text(&document, &self.compiled.titles)
            .or_else(|| utils::og_title(&document))
            .unwrap_or_else(|| {
                self.logger.warn(&format!("no title found for {}", link));
                TITLE_NOT_FOUND.to_string()
            });

        let content = utils::body_text(&document, &self.compiled.bodies).unwrap_or_else(|| {
            self.logger.warn(&format!("no body found for {}", link));
            BODY_NOT_FOUND.to_string()
        });

        let date = date::parse_date(&document, &self.compiled.date_script, today);

        Article {
            title,
            content,
            date,
            link: link.to_string(),
        }
    }
}

fn container_anchor_text(container: ElementRef) -> String {
    utils::anchor(container)
        .map(|a| a.text().collect::<String>())
        .unwrap_or_default()
}

#[async_trait]
impl EditorialSource for SiteScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: self.site.name,
            emoji: self.site.emoji,
            homepage: self.site.base_url,
        }
    }

    fn can_handle(&self, url: &str) -> bool {
        Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_ascii_lowercase))
            .map_or(false, |host| {
                host == self.site.host
                    || host
                        .strip_suffix(self.site.host)
                        .map_or(false, |prefix| prefix.ends_with('.'))
            })
    }

    fn cli_names(&self) -> Vec<&str> {
        std::iter::once(self.site.id)
            .chain(self.site.aliases.iter().copied())
            .collect()
    }

    async fn fetch_list(&self) -> Result<Vec<ListItem>> {
        let html = self.fetcher.fetch(self.site.list_url).await?;
        let items = self.compute_list(&html);
        self.logger.info(&format!("found {} editorials", items.len()));
        Ok(items)
    }

    async fn fetch_detail(&self, url: &str) -> Result<Article> {
        let html = self.fetcher.fetch(url).await?;
        let article = self.compute_article(&html, url, Local::now().date_naive());
        self.logger.info(&format!("scraped {}", article.title));
        Ok(article)
    }
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref LINK: Selector = Selector::parse("a[href]").expect("link selector");
        static ref PARAGRAPH: Selector = Selector::parse("p").expect("paragraph selector");
        static ref OG_TITLE: Selector =
            Selector::parse("meta[property='og:title']").expect("og:title selector");
    }

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
    }

    pub fn parse_selectors(selectors: &[&str]) -> Result<Vec<Selector>> {
        selectors
            .iter()
            .map(|s| {
                Selector::parse(s)
                    .map_err(|e| Error::Scraping(format!("Invalid selector {:?}: {:?}", s, e)))
            })
            .collect()
    }

    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn element_text(element: ElementRef) -> String {
        collapse_whitespace(&element.text().collect::<String>())
    }

    /// Elements matched by the first selector that matches anything.
    pub fn select_first<'a>(document: &'a Html, selectors: &[Selector]) -> Vec<ElementRef<'a>> {
        selectors
            .iter()
            .map(|selector| document.select(selector).collect::<Vec<_>>())
            .find(|found| !found.is_empty())
            .unwrap_or_default()
    }

    /// First non-empty text across the selectors, in order.
    pub fn first_text(document: &Html, selectors: &[Selector]) -> Option<String> {
        selectors.iter().find_map(|selector| {
            document
                .select(selector)
                .map(element_text)
                .find(|text| !text.is_empty())
        })
    }

    pub fn first_text_in(element: ElementRef, selectors: &[Selector]) -> Option<String> {
        selectors.iter().find_map(|selector| {
            element
                .select(selector)
                .map(element_text)
                .find(|text| !text.is_empty())
        })
    }

    /// The container itself when it is a link, else its first link.
    pub fn anchor(container: ElementRef) -> Option<ElementRef> {
        if container.value().name() == "a" && container.value().attr("href").is_some() {
            return Some(container);
        }
        container.select(&LINK).next()
    }

    pub fn item_link(container: ElementRef) -> Option<&str> {
        anchor(container)
            .and_then(|a| a.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty() && !href.starts_with('#'))
    }

    pub fn og_title(document: &Html) -> Option<String> {
        document
            .select(&OG_TITLE)
            .filter_map(|meta| meta.value().attr("content"))
            .map(collapse_whitespace)
            .find(|title| !title.is_empty())
    }

    /// Paragraphs of the first body container with any text, blank-line joined.
    ///
    /// A container without `<p>` children contributes its text nodes instead.
    pub fn body_text(document: &Html, selectors: &[Selector]) -> Option<String> {
        selectors.iter().find_map(|selector| {
            document.select(selector).find_map(|container| {
                let paragraphs = container
                    .select(&PARAGRAPH)
                    .map(|p| p.text().collect::<String>().trim().to_string())
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>();
                let paragraphs = if paragraphs.is_empty() {
                    container
                        .text()
                        .map(str::trim)
                        .filter(|text| !text.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                } else {
                    paragraphs
                };
                (!paragraphs.is_empty()).then(|| paragraphs.join("\n\n"))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;

    const TEST_SITE: SiteConfig = SiteConfig {
        id: "test",
        aliases: &["example"],
        name: "Test Daily",
        emoji: "📰",
        host: "example.com",
        base_url: "https://www.example.com",
        list_url: "https://www.example.com/opinion/editorial",
        article_path: "/editorial/",
        item_selectors: &["ul.missing li", "ul.list li"],
        item_title_selectors: &[".title"],
        item_date_selectors: &[".date"],
        title_selectors: &["h1.headline", "h1"],
        body_selectors: &["div.missing", "div.body"],
        date_script_pattern: r#"pubDate\s*=\s*"(\d{4})-(\d{2})-(\d{2})"#,
    };

    const LIST_HTML: &str = r#"
        <ul class="list">
            <li><a href="/editorial/1.html"><span class="title">[사설] 첫 번째</span></a><span class="date">2024.05.01</span></li>
            <li><a href="https://www.example.com/editorial/2.html">[사설]   두 번째
                </a><span class="date">어제</span></li>
            <li><a href="/editorial/1.html"><span class="title">중복</span></a></li>
            <li><a href="/sports/3.html"><span class="title">스포츠</span></a></li>
            <li><a href="/editorial/4.html"><span class="title"> </span></a></li>
            <li><span class="title">링크 없음</span></li>
        </ul>"#;

    fn scraper(fetcher: StaticFetcher) -> SiteScraper {
        SiteScraper::new(&TEST_SITE, Arc::new(fetcher)).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_compute_list() {
        let items = scraper(StaticFetcher::new()).compute_list(LIST_HTML);
        assert_eq!(
            items,
            vec![
                ListItem {
                    title: "[사설] 첫 번째".to_string(),
                    link: "https://www.example.com/editorial/1.html".to_string(),
                    date: "2024-05-01".to_string(),
                },
                ListItem {
                    title: "[사설] 두 번째".to_string(),
                    link: "https://www.example.com/editorial/2.html".to_string(),
                    date: "어제".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_compute_list_has_no_state_between_calls() {
        let scraper = scraper(StaticFetcher::new());
        assert_eq!(scraper.compute_list(LIST_HTML), scraper.compute_list(LIST_HTML));
        assert!(scraper.compute_list("<html></html>").is_empty());
    }

    #[test]
    fn test_untitled_anchor_does_not_hide_later_entry() {
        let html = r#"
            <ul class="list">
                <li><a href="/editorial/5.html"><img src="thumb.jpg"></a></li>
                <li><a href="/editorial/5.html"><span class="title">[사설] 다섯 번째</span></a></li>
            </ul>"#;
        let items = scraper(StaticFetcher::new()).compute_list(html);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "[사설] 다섯 번째");
        assert_eq!(items[0].link, "https://www.example.com/editorial/5.html");
    }

    #[test]
    fn test_compute_article() {
        let html = r#"
            <html><head><script>var pubDate = "2024-05-02";</script></head>
            <body>
                <h1 class="headline"> [사설] 모호한   정책 </h1>
                <div class="body">
                    <p>정부가 새로운 정책을 발표했다.</p>
                    <p>  </p>
                    <p>하지만 시행 기준에 문제가 많다.</p>
                </div>
            </body></html>"#;
        let article = scraper(StaticFetcher::new()).compute_article(
            html,
            "https://www.example.com/editorial/1.html",
            today(),
        );
        assert_eq!(article.title, "[사설] 모호한 정책");
        assert_eq!(
            article.content,
            "정부가 새로운 정책을 발표했다.\n\n하지만 시행 기준에 문제가 많다."
        );
        assert_eq!(article.date, "2024-05-02");
        assert_eq!(article.link, "https://www.example.com/editorial/1.html");
    }

    #[test]
    fn test_compute_article_fallbacks() {
        let html = r#"
            <html><head><meta property="og:title" content="[사설] 메타 제목"></head>
            <body><div class="body">첫 줄<br>둘째 줄</div></body></html>"#;
        let article = scraper(StaticFetcher::new()).compute_article(html, "https://www.example.com/x", today());
        assert_eq!(article.title, "[사설] 메타 제목");
        assert_eq!(article.content, "첫 줄\n\n둘째 줄");
        assert_eq!(article.date, "2024-06-30");
    }

    #[test]
    fn test_compute_article_placeholders() {
        let article = scraper(StaticFetcher::new()).compute_article(
            "<html><body><div>nothing useful</div></body></html>",
            "https://www.example.com/x",
            today(),
        );
        assert_eq!(article.title, TITLE_NOT_FOUND);
        assert_eq!(article.content, BODY_NOT_FOUND);
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        static BROKEN: SiteConfig = SiteConfig {
            title_selectors: &["h1[["],
            ..TEST_SITE
        };
        let result = SiteScraper::new(&BROKEN, Arc::new(StaticFetcher::new()));
        assert!(matches!(result, Err(Error::Scraping(_))));
    }

    #[test]
    fn test_metadata_and_names() {
        let scraper = scraper(StaticFetcher::new());
        assert!(scraper.can_handle("https://www.example.com/editorial/1.html"));
        assert!(!scraper.can_handle("https://www.hani.co.kr/arti/1.html"));
        assert!(scraper.can_handle("https://example.com/editorial/1.html"));
        assert!(scraper.can_handle("https://NEWS.Example.com/editorial/1.html"));
        assert!(!scraper.can_handle("https://evil.test/?r=example.com"));
        assert!(!scraper.can_handle("https://notexample.com/editorial/1.html"));
        assert!(!scraper.can_handle("not a url"));
        assert_eq!(scraper.cli_names(), vec!["test", "example"]);
        assert_eq!(scraper.source_metadata().name, "Test Daily");
    }

    #[tokio::test]
    async fn test_fetch_list_and_detail() {
        let fetcher = StaticFetcher::new()
            .with_page(TEST_SITE.list_url, LIST_HTML)
            .with_page(
                "https://www.example.com/editorial/1.html",
                r#"<h1>[사설] 첫 번째</h1><div class="body"><p>본문 문단이다.</p></div>"#,
            );
        let scraper = scraper(fetcher);

        let items = scraper.fetch_list().await.unwrap();
        assert_eq!(items.len(), 2);

        let article = scraper.fetch_detail(&items[0].link).await.unwrap();
        assert_eq!(article.title, "[사설] 첫 번째");
        assert_eq!(article.content, "본문 문단이다.");
        assert_eq!(article.date.len(), 10);
    }

    #[tokio::test]
    async fn test_fetch_errors_propagate() {
        let scraper = scraper(StaticFetcher::new());
        let err = scraper.fetch_list().await.unwrap_err();
        assert!(matches!(err, Error::UpstreamStatus { status: 404, .. }));
    }
}
