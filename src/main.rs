use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;

use personnel_backend::{routes, Config, Database};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Creates the database file and schema if absent.
    let database = Database::connect(&config)
        .await
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    let data = web::Data::new(database.clone());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    database.close().await;
    Ok(())
}
