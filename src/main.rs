use std::process::ExitCode;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::info;

use job_posting_form::api::{
    health::health_config,
    job_posting::{job_posting_config, JobPostingService},
    validation,
};
use job_posting_form::cli::{self, Cli, Command};
use job_posting_form::form::LogNotifier;
use job_posting_form::shutdown::ShutdownCoordinator;
use job_posting_form::{config, logging};

fn main() -> std::io::Result<ExitCode> {
    let args = Cli::parse();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            actix_web::rt::System::new().block_on(serve())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { file, today } => {
            logging::init_console();
            Ok(cli::run_validate(&file, today))
        }
    }
}

async fn serve() -> std::io::Result<()> {
    // Load configuration from environment
    let config::Config {
        host,
        port,
        max_payload_size,
        log_dir,
    } = config::Config::from_env().map_err(std::io::Error::other)?;

    logging::init(&log_dir)?;

    info!("Starting job-posting-form application");
    info!("Configuration loaded successfully:");
    info!("  - Max payload size: {} bytes", max_payload_size);
    info!("  - Log directory: {}", log_dir);

    let job_posting_service = web::Data::new(JobPostingService::new(Arc::new(LogNotifier)));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(job_posting_service.clone()) // Shared across workers
            .app_data(validation::json_config(max_payload_size)) // Global validation config
            .configure(health_config)
            .configure(job_posting_config)
    });

    info!("Server starting on http://{}:{}", host, port);

    // Bind and start the server; signals are handled by the coordinator
    let server = server.bind((host.as_str(), port))?.disable_signals().run();

    let server_handle = server.handle();
    let server_task = actix_web::rt::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task)
        .wait_for_shutdown()
        .await
}
