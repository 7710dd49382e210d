use std::net::TcpListener;

use env_logger::Env;
use probe::{
    configuration::get_configuration,
    services::{OpenaiClient, PageFetcher},
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    if configuration.openai.api_key.is_empty() {
        panic!("Missing Openai api key. Set APP__OPENAI__API_KEY.");
    }

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let page_fetcher = PageFetcher::new(&configuration.fetcher);
    let openai_client = OpenaiClient::new(configuration.openai);

    run(listener, page_fetcher, openai_client)?.await
}
