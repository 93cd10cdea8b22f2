use crate::{error::MemoraError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use memora_api_structs::get_me::*;
use memora_infra::MemoraContext;

pub async fn get_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, _) = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(user)))
}
