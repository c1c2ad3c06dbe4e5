use actix_web::{web, App, HttpServer};
use log::info;

use chess_analysis_board::analysis::AnalysisClient;
use chess_analysis_board::config::AppConfig;
use chess_analysis_board::routes;
use chess_analysis_board::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let analyzer = AnalysisClient::new(&config.analysis_url, config.request_timeout)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    info!("Starting analysis board server at http://{}", config.bind_addr);
    info!("Using analysis service at {}", config.analysis_url);

    let app_state = web::Data::new(AppState::new(analyzer));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure_routes)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
