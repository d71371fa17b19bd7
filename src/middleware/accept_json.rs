//! Content negotiation middleware.
//!
//! Every request must declare that it accepts JSON. Anything else is answered
//! with 415 before routing, so no handler or repository call happens.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, ResponseError,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::debug;
use std::rc::Rc;

use crate::errors::ApiError;

pub struct AcceptJson;

/// Whether an `Accept` header value asks for a JSON response.
pub fn accepts_json(accept: Option<&str>) -> bool {
    accept.is_some_and(|value| value.contains("json"))
}

impl<S, B> Transform<S, ServiceRequest> for AcceptJson
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AcceptJsonService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AcceptJsonService {
            service: Rc::new(service),
        })
    }
}

pub struct AcceptJsonService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AcceptJsonService<S>
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
        let accept = req
            .headers()
            .get(header::ACCEPT)
            .and_then(|h| h.to_str().ok());

        if !accepts_json(accept) {
            debug!("Rejecting {} {}: client does not accept json", req.method(), req.path());
            let response = ApiError::json_only().error_response();
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
