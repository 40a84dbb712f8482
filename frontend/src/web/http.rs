//! `HttpClient` over the browser fetch API.
//!
//! Built on `gloo-net`; each request gets an `AbortController` that a
//! `gloo-timers` timeout fires when the configured deadline passes.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Method, RequestBuilder};
use gloo_timers::callback::Timeout;
use seva_kendra::error::ApiError;
use seva_kendra::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use web_sys::AbortController;

fn method(m: HttpMethod) -> Method {
    match m {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Patch => Method::PATCH,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let controller =
            AbortController::new().map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
        let signal = controller.signal();

        let timed_out = Rc::new(Cell::new(false));
        let deadline = {
            let timed_out = timed_out.clone();
            let millis = u32::try_from(req.timeout.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let mut builder = RequestBuilder::new(&req.url)
            .method(method(req.method))
            .abort_signal(Some(&signal));
        if !req.query.is_empty() {
            builder = builder.query(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }
        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let failed = |e: gloo_net::Error| {
            if timed_out.get() {
                ApiError::Timeout
            } else {
                ApiError::Transport(e.to_string())
            }
        };

        // The deadline covers the body too, so a stalled download is aborted
        let resp = request.send().await.map_err(failed)?;
        let status = resp.status();
        let content_type = resp.headers().get("content-type");
        let body = resp.binary().await.map_err(failed)?;
        drop(deadline);

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
