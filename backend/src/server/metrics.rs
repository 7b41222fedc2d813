//! Optional Prometheus metrics middleware.
//!
//! [`MetricsLayer`] either records request metrics and serves `/metrics`, or
//! passes requests through untouched, so the app type is the same in both
//! cases.

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;

/// Namespace prefixed to every exported metric.
pub(crate) const METRICS_NAMESPACE: &str = "library";
/// Path the exporter answers on.
pub(crate) const METRICS_ENDPOINT: &str = "/metrics";

#[derive(Clone)]
pub enum MetricsLayer {
    Enabled(Arc<PrometheusMetrics>),
    Disabled,
}

impl MetricsLayer {
    /// Build the exporter, falling back to a pass-through layer when the
    /// registry rejects the default collectors.
    pub fn prometheus() -> Self {
        match PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
            .endpoint(METRICS_ENDPOINT)
            .build()
        {
            Ok(metrics) => Self::Enabled(Arc::new(metrics)),
            Err(error) => {
                tracing::warn!(%error, "prometheus metrics disabled");
                Self::Disabled
            }
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        match self.clone() {
            MetricsLayer::Enabled(metrics) => {
                let fut = Compat::new((*metrics).clone()).new_transform(service);
                Box::pin(async move {
                    let svc = fut.await?;
                    Ok(boxed::service(svc))
                })
            }
            MetricsLayer::Disabled => Box::pin(async move {
                let svc = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
                Ok(boxed::service(svc))
            }),
        }
    }
}
