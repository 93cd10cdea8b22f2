use super::delete_reminder::{DeleteRemindersUseCase, GetDeleteConfirmationUseCase};
use crate::error::MemoraError;
use crate::shared::{
    auth::protect_route,
    guard::Guard,
    redirect::resolve_redirect,
    usecase::{execute_with_policy, UseCaseErrorContainer},
};
use actix_web::{web, HttpRequest, HttpResponse};
use memora_api_structs::delete_reminders::*;
use memora_domain::ID;
use memora_infra::MemoraContext;

pub async fn delete_reminders_confirmation_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let reminder_ids = parse_ids(&query_params.ids)?;
    if reminder_ids.is_empty() {
        return Ok(missing_ids_response(&http_req));
    }

    let next = resolve_redirect(&http_req, &[query_params.next.as_deref()]);
    let previous = resolve_redirect(&http_req, &[query_params.previous.as_deref()]);
    let usecase = GetDeleteConfirmationUseCase {
        account_id: user.account_id,
        reminder_ids,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminders| {
            HttpResponse::Ok().json(ConfirmationResponse::new(reminders, previous, next))
        })
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

pub async fn delete_reminders_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    body: Option<web::Json<RequestBody>>,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let reminder_ids = parse_ids(&query_params.ids)?;
    if reminder_ids.is_empty() {
        return Ok(missing_ids_response(&http_req));
    }

    let body = body.map(|body| body.0).unwrap_or_default();
    let redirect_to = resolve_redirect(
        &http_req,
        &[body.next.as_deref(), query_params.next.as_deref()],
    );
    let usecase = DeleteRemindersUseCase {
        account_id: user.account_id,
        reminder_ids,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|report| {
            HttpResponse::Ok().json(APIResponse::new(report.deleted, report.failed, redirect_to))
        })
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// The ids of the reminders to delete travel as one comma separated
/// query value
fn parse_ids(ids: &Option<String>) -> Result<Vec<ID>, MemoraError> {
    let ids = match ids {
        Some(ids) => ids,
        None => return Ok(Vec::new()),
    };
    ids.split(',')
        .filter(|id| !id.is_empty())
        .map(|id| Guard::against_malformed_id(id.to_string()))
        .collect()
}

/// A request that does not point at any reminder is answered with an
/// error notice and a redirect back to where the client came from
fn missing_ids_response(http_req: &HttpRequest) -> HttpResponse {
    let redirect_to = resolve_redirect(http_req, &[]);
    HttpResponse::Ok().json(APIResponse {
        notices: Vec::new(),
        errors: vec!["Must provide at least one reminder.".to_string()],
        redirect_to,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        assert!(parse_ids(&None).unwrap().is_empty());
        assert!(parse_ids(&Some("".to_string())).unwrap().is_empty());
        assert!(parse_ids(&Some(",,".to_string())).unwrap().is_empty());

        let id1 = ID::default();
        let id2 = ID::default();
        let ids = parse_ids(&Some(format!("{},{}", id1, id2))).unwrap();
        assert_eq!(ids, vec![id1, id2]);

        assert!(parse_ids(&Some("not-an-id".to_string())).is_err());
    }
}
