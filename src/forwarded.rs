//! Records reverse-proxy headers on the request span.
//!
//! The page is usually served behind a proxy; the scheme, port and client
//! address it saw are recorded as OpenTelemetry semantic attributes.

use axum::{extract::Request, http::HeaderMap, response::Response};
use std::task::{Context, Poll};
use tower::{Layer, Service};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Forwarded {
    pub scheme: Option<String>,
    pub port: Option<i64>,
    pub client: Option<String>,
}

impl Forwarded {
    /// Read `X-Forwarded-Proto`, `X-Forwarded-Port` and the first hop of
    /// `X-Forwarded-For`. Unparseable values are ignored.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

        Self {
            scheme: header("x-forwarded-proto").map(|s| s.trim().to_owned()),
            port: header("x-forwarded-port").and_then(|s| s.trim().parse().ok()),
            client: header("x-forwarded-for")
                .and_then(|s| s.split(',').next())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        }
    }

    fn record(&self, span: &tracing::Span) {
        if let Some(scheme) = &self.scheme {
            span.record("url.scheme", scheme.as_str());
        }
        if let Some(port) = self.port {
            span.record("server.port", port);
        }
        if let Some(client) = &self.client {
            span.record("client.address", client.as_str());
        }
    }
}

#[derive(Clone)]
pub struct RecordForwardedLayer;

impl<S> Layer<S> for RecordForwardedLayer {
    type Service = RecordForwarded<S>;

    fn layer(&self, service: S) -> Self::Service {
        RecordForwarded { inner: service }
    }
}

#[derive(Clone)]
pub struct RecordForwarded<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RecordForwarded<S>
where
    S: Service<Request<B>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        Forwarded::from_headers(req.headers()).record(&tracing::Span::current());
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn reads_all_forwarded_headers() {
        let forwarded = Forwarded::from_headers(&headers(&[
            ("x-forwarded-proto", "https"),
            ("x-forwarded-port", "443"),
            ("x-forwarded-for", "203.0.113.7, 10.0.0.1"),
        ]));

        assert_eq!(
            forwarded,
            Forwarded {
                scheme: Some("https".to_string()),
                port: Some(443),
                client: Some("203.0.113.7".to_string()),
            }
        );
    }

    #[test]
    fn absent_headers_yield_nothing() {
        assert_eq!(Forwarded::from_headers(&HeaderMap::new()), Forwarded::default());
    }

    #[test]
    fn bad_port_is_ignored() {
        let forwarded = Forwarded::from_headers(&headers(&[
            ("x-forwarded-proto", "http"),
            ("x-forwarded-port", "eighty"),
        ]));

        assert_eq!(forwarded.scheme.as_deref(), Some("http"));
        assert!(forwarded.port.is_none());
    }

    #[test]
    fn empty_forwarded_for_is_ignored() {
        let forwarded = Forwarded::from_headers(&headers(&[("x-forwarded-for", " ")]));

        assert!(forwarded.client.is_none());
    }
}
