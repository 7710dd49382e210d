use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use scraper::Html;
use thiserror::Error;

use crate::{configuration::FetcherSettings, domain::page_content::PageContent};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error fetching URL: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Error fetching URL: unsupported content type `{content_type}`")]
    NonHtml { content_type: String },
}

pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(settings: &FetcherSettings) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("Failed to build the page fetcher http client");

        PageFetcher { client }
    }

    pub async fn fetch(&self, url: &str) -> Result<PageContent, FetchError> {
        let response = self.client.get(url).send().await?;

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !content_type.contains("html") && !content_type.starts_with("text/") {
                return Err(FetchError::NonHtml {
                    content_type: content_type.to_string(),
                });
            }
        }

        let html = response.text().await?;
        log::info!("Fetched {} bytes of html from {}", html.len(), url);

        Ok(PageContent {
            text: extract_visible_text(&html),
        })
    }
}

// Text nodes under script/style/noscript never render, so they are dropped
// before the fragments are joined.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut fragments: Vec<String> = vec![];

    for node in document.tree.root().descendants() {
        if let Some(text) = node.value().as_text() {
            let parent_tag = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .map(|element| element.name());
            if matches!(parent_tag, Some("script" | "style" | "noscript")) {
                continue;
            }

            let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !collapsed.is_empty() {
                fragments.push(collapsed);
            }
        }
    }

    fragments.join(" ")
}
