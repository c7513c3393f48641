//! Device routes

use actix_web::{
    get, put,
    web::{Data, Json, Path},
    HttpResponse, Responder, Result,
};

use crate::{
    models::{
        ColorXyRequest, DimmingRequest, PositioningRequest, PowerRequest, RgbColorRequest,
        StateRequest,
    },
    translate::to_device_response,
    Commands,
};

/// Read a device, shaped by its kind
///
/// # Path
///   `GET /api/device/{id}`
///
/// # Responses
///   - `200`: [crate::models::DeviceResponse]
///   - `404`: unknown device
///
#[utoipa::path(
    responses(
        (status = 200, description = "OK", body = DeviceResponse),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Device ID")
    )
)]
#[get("/api/device/{id}")]
pub async fn read(id: Path<i64>, commands: Data<Commands>) -> Result<impl Responder> {
    let device = commands.get_device(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_device_response(&device)))
}

/// Set a light's CIE 1931 color
///
/// # Path
///   `PUT /api/device/{id}/color`
///
/// # Body
///   [ColorXyRequest]
///
/// # Responses
///   - `200`: [crate::models::Ack]
///   - `400`: negative coordinates or malformed body
///
#[utoipa::path(
    request_body = ColorXyRequest,
    responses(
        (status = 200, description = "OK", body = Ack),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Device ID")
    )
)]
#[put("/api/device/{id}/color")]
pub async fn update_color(
    id: Path<i64>,
    req: Json<ColorXyRequest>,
    commands: Data<Commands>,
) -> Result<impl Responder> {
    let req = req.into_inner();
    let ack = commands
        .put_device_color_xy(id.into_inner(), req.x, req.y)
        .await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Set a light's color from a hex RGB string
///
/// # Path
///   `PUT /api/device/{id}/rgb`
///
/// # Body
///   [RgbColorRequest]
///
/// # Responses
///   - `200`: [crate::models::Ack]
///   - `400`: not 6 hex digits, or malformed body
///
#[utoipa::path(
    request_body = RgbColorRequest,
    responses(
        (status = 200, description = "OK", body = Ack),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Device ID")
    )
)]
#[put("/api/device/{id}/rgb")]
pub async fn update_rgb(
    id: Path<i64>,
    req: Json<RgbColorRequest>,
    commands: Data<Commands>,
) -> Result<impl Responder> {
    let ack = commands
        .put_device_color_rgb(id.into_inner(), &req.rgb)
        .await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Set a light's dimmer level
///
/// # Path
///   `PUT /api/device/{id}/dimmer`
///
/// # Body
///   [DimmingRequest]
///
/// # Responses
///   - `200`: [crate::models::Ack]
///   - `400`: negative level or malformed body
///
#[utoipa::path(
    request_body = DimmingRequest,
    responses(
        (status = 200, description = "OK", body = Ack),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Device ID")
    )
)]
#[put("/api/device/{id}/dimmer")]
pub async fn update_dimmer(
    id: Path<i64>,
    req: Json<DimmingRequest>,
    commands: Data<Commands>,
) -> Result<impl Responder> {
    let ack = commands
        .put_device_dimming(id.into_inner(), req.dimming)
        .await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Turn a light on or off
///
/// # Path
///   `PUT /api/device/{id}/power`
///
/// # Body
///   [PowerRequest]
///
/// # Responses
///   - `200`: [crate::models::Ack]
///   - `400`: power other than 0 or 1, or malformed body
///
#[utoipa::path(
    request_body = PowerRequest,
    responses(
        (status = 200, description = "OK", body = Ack),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Device ID")
    )
)]
#[put("/api/device/{id}/power")]
pub async fn update_power(
    id: Path<i64>,
    req: Json<PowerRequest>,
    commands: Data<Commands>,
) -> Result<impl Responder> {
    let ack = commands.put_device_power(id.into_inner(), req.power).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Set power, dimmer and color in a single command
///
/// # Path
///   `PUT /api/device/{id}`
///
/// # Body
///   [StateRequest]
///
/// # Responses
///   - `200`: [crate::models::Ack]
///   - `400`: any invalid field, or malformed body
///
#[utoipa::path(
    request_body = StateRequest,
    responses(
        (status = 200, description = "OK", body = Ack),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Device ID")
    )
)]
#[put("/api/device/{id}")]
pub async fn update_state(
    id: Path<i64>,
    req: Json<StateRequest>,
    commands: Data<Commands>,
) -> Result<impl Responder> {
    let req = req.into_inner();
    let ack = commands
        .put_device_state(id.into_inner(), req.power, req.dimmer, &req.rgb)
        .await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Move a blind
///
/// # Path
///   `PUT /api/device/{id}/position`
///
/// # Body
///   [PositioningRequest]
///
/// # Responses
///   - `200`: [crate::models::Ack]
///   - `400`: position outside 0-100, or malformed body
///
#[utoipa::path(
    request_body = PositioningRequest,
    responses(
        (status = 200, description = "OK", body = Ack),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Device ID")
    )
)]
#[put("/api/device/{id}/position")]
pub async fn update_position(
    id: Path<i64>,
    req: Json<PositioningRequest>,
    commands: Data<Commands>,
) -> Result<impl Responder> {
    let ack = commands
        .put_device_positioning(id.into_inner(), req.positioning)
        .await?;
    Ok(HttpResponse::Ok().json(ack))
}
