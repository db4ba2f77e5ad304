use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use clash_subserver::generator::{render_query_to_file, ExportError};
use clash_subserver::models::AppState;
use clash_subserver::web_handlers::interfaces;
use clash_subserver::{Settings, TemplateVariant};

/// Serve a single-node Clash config rendered from query parameters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (e.g., 127.0.0.1 or 0.0.0.0)
    #[arg(short, long, value_name = "ADDRESS")]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Routing mode of the rendered document
    #[arg(short, long, value_enum, value_name = "MODE")]
    mode: Option<TemplateVariant>,

    /// Query string to render once instead of starting the server
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Output file for the rendered document (must be used with --query)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,
}

impl Args {
    /// `--query` and `--output` only make sense together
    fn check_one_shot(&self) -> Result<(), &'static str> {
        if self.query.is_some() != self.output.is_some() {
            return Err("--query and -o/--output must be used together");
        }
        Ok(())
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    if let Err(msg) = args.check_one_shot() {
        eprintln!("Error: {}", msg);
        std::process::exit(1);
    }

    let mut settings = match args.config.as_deref() {
        Some(path) => match Settings::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Settings::new(),
    };

    // Command line arguments override the settings file
    if let Some(address) = args.address {
        settings.listen_address = address;
    }
    if let Some(port) = args.port {
        settings.listen_port = port;
    }
    if let Some(mode) = args.mode {
        settings.variant = mode;
    }

    let app_state = Arc::new(AppState::new(settings));

    if let (Some(query), Some(output_file)) = (args.query, args.output) {
        info!("Rendering query to file: {}", output_file);
        return match render_query_to_file(&app_state.renderer, &query, &output_file) {
            Ok(_) => Ok(()),
            Err(ExportError::Render(e)) => {
                error!("{}", e.to_response_body().trim_end());
                std::process::exit(1);
            }
            Err(ExportError::Io(e)) => Err(e),
        };
    }

    let listen_address = app_state.config.bind_address();
    let workers = app_state.config.workers;

    if !app_state.config.pref_path.is_empty() {
        info!("Using settings from {}", app_state.config.pref_path);
    }
    info!(
        "Clash subscription server listening on http://{} (mode: {})",
        listen_address,
        app_state.renderer.variant()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%a \"%r\" %s %b"))
            .app_data(web::Data::new(Arc::clone(&app_state)))
            .configure(interfaces::config)
    })
    .bind(listen_address)?
    .workers(workers)
    .run()
    .await
}
