use crate::configuration::{Configuration, DatabaseConfigs, StorageBackend};
use crate::repository::{CommentDaoRef, InMemoryCommentDao, PgCommentDao};
use crate::routes::{comment_routes, health_check};
use crate::services::CommentService;
use crate::utils;
use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let dao = build_comment_dao(&config).await?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)
            .with_context(|| "Failed to bind TCP listener for application")?;
        let port = listener
            .local_addr()
            .with_context(|| "Failed to read local address of TCP listener")?
            .port();
        let server = run(listener, CommentService::new(dao)).context("Failed to run Actix web server")?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        self.server.await.context("Server stopped with an error")
    }
}

pub fn get_connection_pool(config: &DatabaseConfigs) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(config.connect_options())
}

#[tracing::instrument(skip(config), fields(storage=?config.storage))]
async fn build_comment_dao(config: &Configuration) -> Result<CommentDaoRef, anyhow::Error> {
    match config.storage {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryCommentDao::new())),
        StorageBackend::Postgres => {
            let pool = get_connection_pool(&config.database);
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate the database")?;
            Ok(Arc::new(PgCommentDao::new(pool)))
        }
    }
}

fn run(tcp_listener: TcpListener, service: CommentService) -> Result<Server, anyhow::Error> {
    let service = web::Data::new(service);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_routes)
            .app_data(json_config())
            .app_data(service.clone())
    })
    .listen(tcp_listener)
    .with_context(|| "Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

// Malformed bodies get the same `{code, message}` shape as every other error
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = utils::build_error_response(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .service(web::scope("/v1").service(web::scope("/comments").configure(comment_routes)));
}
