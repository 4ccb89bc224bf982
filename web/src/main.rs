use crate::app_context::AppContext;
use crate::plot_query::PlotQuery;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};
use activity_metrics_plotly_processor::config::init::{init_default_plot_config, init_plot_config};
use activity_metrics_plotly_processor::config::plotly_mappings::PlotlyConfig;
use activity_metrics_scenario_processor::options::filter_options;
use activity_metrics_utils::json::load_json;
use config::config::AppConfig;
use config::resolve_file_path::{resolve_config_file_path, resolve_first_path};
use log::{debug, error, info, warn};
use serde_json::json;
use std::error::Error;
use std::{env, io};

mod app_context;
mod config;
mod plot_query;

async fn options() -> impl Responder {
    HttpResponse::Ok().json(filter_options())
}

async fn data_sources(context: web::Data<AppContext>) -> impl Responder {
    match context.source.list_result_files() {
        Ok(files) => HttpResponse::Ok().json(files),
        Err(e) => HttpResponse::NotFound().json(json!({"error": format!("Failed to list data sources: {}", e)})),
    }
}

async fn plot(query: web::Query<PlotQuery>, context: web::Data<AppContext>) -> impl Responder {
    let request = match query.into_inner().into_request() {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };
    debug!("Plot request: {:?}", request);

    let context = context.get_ref().clone();
    match web::block(move || context.plot(&request)).await {
        Ok(Ok(plot_data)) => HttpResponse::Ok().json(plot_data),
        Ok(Err(e)) => {
            warn!("{}", e);
            HttpResponse::NotFound().json(json!({"error": e.to_string()}))
        }
        Err(e) => {
            error!("Plot computation failed: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": "Failed to compute plot"}))
        }
    }
}

fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/options", web::get().to(options))
        .route("/plot", web::get().to(plot))
        .route("/data-sources", web::get().to(data_sources));
}

fn get_plotly_config(app_config: &AppConfig) -> io::Result<&'static PlotlyConfig> {
    match resolve_first_path(&[app_config.plot_config_path.as_str()]) {
        Ok(plot_config_path) => {
            debug!("Using plot config path: {:#?}", plot_config_path);
            let plot_config = init_plot_config(&plot_config_path)?;
            debug!("Loaded plot config: {:#?}", plot_config);
            Ok(plot_config)
        }
        Err(e) => {
            warn!("{}; using built-in plot settings", e);
            Ok(init_default_plot_config())
        }
    }
}

fn get_app_config() -> Result<AppConfig, Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let config_path = match resolve_config_file_path(&args, &["config.json"]) {
        Ok(path) => path,
        Err(e) => {
            warn!("{}; using default configuration", e);
            return Ok(AppConfig::default());
        }
    };
    debug!("Using configuration file: {:?}", config_path);

    let config: AppConfig = load_json(&config_path)?;
    debug!("Loaded config: {:#?}", config);
    Ok(config)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = get_app_config().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let context = AppContext {
        source: config.scenario_source(),
        plotly_config: get_plotly_config(&config)?,
    };
    let static_path = config.static_path.clone();
    info!("Serving {} on {}:{}", context.source.location, config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(context.clone()))
            .configure(configure_routes)
            .service(Files::new("/", &static_path).index_file("index.html"))
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
