use actix_web::{post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    domain::scorecard::{parse_scorecard, ScorecardTable},
    routes::default_route::IndexTemplate,
    services::{OpenaiClient, PageFetcher},
};

const PARSE_WARNING: &str = "Unable to parse the output. Please check JSON formatting.";

#[derive(Template)]
#[template(path = "scorecard.html")]
struct ScorecardTemplate {
    url: String,
    raw: String,
    table: Option<ScorecardTable>,
    warning: Option<String>,
}

#[derive(Deserialize)]
struct ScoreFormBody {
    url: String,
}

#[post("/score")]
pub async fn score(
    form: web::Form<ScoreFormBody>,
    page_fetcher: web::Data<PageFetcher>,
    openai_client: web::Data<OpenaiClient>,
) -> HttpResponse {
    let page = match page_fetcher.fetch(&form.url).await {
        Ok(page) => page,
        Err(e) => {
            log::error!("Failed to fetch {}: {}", form.url, e);
            return HttpResponse::Ok().body(
                IndexTemplate {
                    error: Some(e.to_string()),
                }
                .render()
                .unwrap(),
            );
        }
    };

    let raw = match openai_client.generate_scorecard(&page.text, &form.url).await {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("Scorecard request failed for {}: {:?}", form.url, e);
            return HttpResponse::Ok().body(
                IndexTemplate {
                    error: Some(format!("Error requesting scorecard: {}", e)),
                }
                .render()
                .unwrap(),
            );
        }
    };

    let (table, warning) = match parse_scorecard(&raw) {
        Ok(table) => (Some(table), None),
        Err(e) => {
            log::warn!("Discarding unparseable scorecard for {}: {}", form.url, e);
            (None, Some(PARSE_WARNING.to_string()))
        }
    };

    HttpResponse::Ok().body(
        ScorecardTemplate {
            url: form.into_inner().url,
            raw,
            table,
            warning,
        }
        .render()
        .unwrap(),
    )
}
