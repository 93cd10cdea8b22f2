use crate::{error::MemoraError, shared::auth::protect_account_route};
use actix_web::{web, HttpRequest, HttpResponse};
use memora_api_structs::get_account::*;
use memora_infra::MemoraContext;

pub async fn get_account_controller(
    http_req: HttpRequest,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let account = protect_account_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(account)))
}
