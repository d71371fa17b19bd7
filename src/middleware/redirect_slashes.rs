//! Trailing slash canonicalization.
//!
//! `/book/` is answered with a permanent redirect to `/book`, keeping the
//! query string. Leading slashes are collapsed in the target. The root path
//! is left alone.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Uri},
    Error, HttpResponse,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::debug;
use std::rc::Rc;

pub struct RedirectSlashes;

/// The slash-free location for a URI whose path ends in `/`, if any.
pub fn canonical_location(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }

    // Rebuilt with exactly one leading slash so `//host/` cannot become a
    // protocol-relative redirect to another host.
    let trimmed = format!("/{}", path.trim_matches('/'));

    Some(match uri.query() {
        Some(query) => format!("{}?{}", trimmed, query),
        None => trimmed,
    })
}

impl<S, B> Transform<S, ServiceRequest> for RedirectSlashes
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectSlashesService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RedirectSlashesService {
            service: Rc::new(service),
        })
    }
}

pub struct RedirectSlashesService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RedirectSlashesService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(location) = canonical_location(req.uri()) {
            debug!("Redirecting {} to {}", req.path(), location);
            let response = HttpResponse::MovedPermanently()
                .insert_header((header::LOCATION, location))
                .finish();
            let res = req.into_response(response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
