use std::{error::Error, net::Ipv4Addr, sync::Arc};

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web::Data, App, HttpServer, Result};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tradfri_rest::{configure, devices, groups, health, models, Commands, Config, FixtureGateway};

#[actix_web::main]
async fn main() -> Result<(), impl Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            health::health,
            groups::list,
            groups::read,
            groups::device_ids,
            groups::devices,
            devices::read,
            devices::update_color,
            devices::update_rgb,
            devices::update_dimmer,
            devices::update_power,
            devices::update_state,
            devices::update_position,
        ),
        components(schemas(
            models::GroupResponse,
            models::DeviceResponse,
            models::DeviceMetadata,
            models::BulbResponse,
            models::BlindResponse,
            models::PlugResponse,
            models::UnrecognizedResponse,
            models::Ack,
            models::ColorXyRequest,
            models::RgbColorRequest,
            models::DimmingRequest,
            models::PowerRequest,
            models::StateRequest,
            models::PositioningRequest,
        ))
    )]
    struct ApiDoc;

    let openapi = ApiDoc::openapi();
    let config = Config::from_env();

    let gateway = FixtureGateway::load_or_empty(&config.fixture_path);
    let commands = Data::new(Commands::new(Arc::new(gateway), config.gateway_timeout));

    info!("Listening on port: {}", config.port);

    let origin = config.cors_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&origin)
            .allow_any_method()
            .allowed_header(header::CONTENT_TYPE)
            .max_age(600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(Data::clone(&commands))
            .configure(configure)
            .service(
                SwaggerUi::new("/api/swagger-ui/{_:.*}")
                    .url("/api/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((Ipv4Addr::UNSPECIFIED, config.port))?
    .run()
    .await
}
