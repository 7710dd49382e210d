use actix_web::{get, HttpResponse};
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub error: Option<String>,
}

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body(IndexTemplate { error: None }.render().unwrap())
}

#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
