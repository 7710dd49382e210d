use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{default_route, scorecard_route},
    services::{OpenaiClient, PageFetcher},
};

pub fn run(
    listener: TcpListener,
    page_fetcher: PageFetcher,
    openai_client: OpenaiClient,
) -> Result<Server, std::io::Error> {
    let page_fetcher = web::Data::new(page_fetcher);
    let openai_client = web::Data::new(openai_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::index)
            .service(default_route::health_check)
            .service(scorecard_route::score)
            .app_data(page_fetcher.clone())
            .app_data(openai_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
