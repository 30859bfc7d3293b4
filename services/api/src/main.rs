mod config;
mod database;
mod modules;
mod server;
mod tracer;

use config::app_config;
use sea_orm::DatabaseConnection;
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[tokio::main]
pub async fn main() {
    let cfg = app_config();

    tracer::init(cfg.is_development);

    let db = database::db::connect(&cfg.db_url).await;

    database::db::run_migrations(&db).await;

    listen_to_shutdown_signals(!cfg.is_development, db.clone());

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), cfg.http_port);
    println!("[WEB] soon listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|_| panic!("[WEB] failed to get address {}", addr));

    let server = server::controller::new(db).into_make_service();

    axum::serve(listener, server)
        .await
        .unwrap_or_else(|_| panic!("[WEB] failed to serve app on address {}", addr));
}

/// Listen to shutdown signals `SIGINT` and `SIGTERM`, on a signal gracefully shutdowns down the application
#[allow(clippy::never_loop)]
fn listen_to_shutdown_signals(gracefully_shutdown: bool, db: DatabaseConnection) {
    let mut signals = Signals::new([SIGINT, SIGTERM]).expect("failed to setup signals hook");

    tokio::spawn(async move {
        for sig in signals.forever() {
            if gracefully_shutdown {
                println!("[APP] received signal: {}, shutting down", sig);

                println!("[APP] closing postgres connections");
                if let Err(e) = db.close().await {
                    println!("[DB] failed to close db connection: {e}")
                }
            }

            std::process::exit(sig)
        }
    });
}
