use actix_web::{http::header, HttpRequest};

/// The referring page of the request, when the client sent one.
pub fn referer(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Resolves where the client should be sent after a request. The first
/// candidate that is present wins, then the request referer, and
/// finally the root page.
pub fn resolve_redirect(req: &HttpRequest, candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .find_map(|candidate| candidate.map(|target| target.to_string()))
        .or_else(|| referer(req))
        .unwrap_or_else(|| "/".to_string())
}
