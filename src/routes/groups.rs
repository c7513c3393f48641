//! Group routes

use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse, Responder, Result,
};

use crate::{
    translate::{to_device_response, to_group_response},
    Commands,
};

/// List all groups
///
/// # Path
///   `GET /api/groups`
///
/// # Responses
///   - `200`: [Vec] of [crate::models::GroupResponse]
///   - `500`: gateway failure
///
#[utoipa::path(
    responses(
        (status = 200, description = "OK", body = Vec<GroupResponse>),
        (status = 500, description = "Gateway failure"),
        (status = 504, description = "Gateway timeout"),
    ),
)]
#[get("/api/groups")]
pub async fn list(commands: Data<Commands>) -> Result<impl Responder> {
    let groups = commands.list_groups().await?;
    let resp: Vec<_> = groups.iter().map(to_group_response).collect();
    Ok(HttpResponse::Ok().json(resp))
}

/// Read one group
///
/// # Path
///   `GET /api/groups/{id}`
///
/// # Responses
///   - `200`: [crate::models::GroupResponse]
///   - `404`: unknown group
///
#[utoipa::path(
    responses(
        (status = 200, description = "OK", body = GroupResponse),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Group ID")
    )
)]
#[get("/api/groups/{id}")]
pub async fn read(id: Path<i64>, commands: Data<Commands>) -> Result<impl Responder> {
    let group = commands.get_group(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_group_response(&group)))
}

/// Member device ids of a group, in group order
///
/// # Path
///   `GET /api/groups/{id}/deviceIds`
///
/// # Responses
///   - `200`: [Vec] of [i64]
///   - `404`: unknown group
///
#[utoipa::path(
    responses(
        (status = 200, description = "OK", body = Vec<i64>),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Group ID")
    )
)]
#[get("/api/groups/{id}/deviceIds")]
pub async fn device_ids(id: Path<i64>, commands: Data<Commands>) -> Result<impl Responder> {
    let ids = commands.device_ids_on_group(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ids))
}

/// Every member device of a group, in group order
///
/// The first member that cannot be fetched fails the whole request with
/// that member's error; no partial list is returned.
///
/// # Path
///   `GET /api/groups/{id}/devices`
///
/// # Responses
///   - `200`: [Vec] of [crate::models::DeviceResponse]
///   - `404`: unknown group or member device
///   - `500`: gateway failure on the group or any member
///
#[utoipa::path(
    responses(
        (status = 200, description = "OK", body = Vec<DeviceResponse>),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Gateway failure"),
    ),
    params(
        ("id", description = "Group ID")
    )
)]
#[get("/api/groups/{id}/devices")]
pub async fn devices(id: Path<i64>, commands: Data<Commands>) -> Result<impl Responder> {
    let devices = commands.devices_on_group(id.into_inner()).await?;
    let resp: Vec<_> = devices.iter().map(to_device_response).collect();
    Ok(HttpResponse::Ok().json(resp))
}
