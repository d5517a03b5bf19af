//! HTTP on gloo-net, with requests raced against a timer.

use std::future::Future;

use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::core::error::FetchError;

/// The timer finished first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedOut;

/// Run `future` until it finishes or `timer` fires, whichever is first.
///
/// Ties go to `future`.
pub async fn race<F, T>(future: F, timer: T) -> Result<F::Output, TimedOut>
where
    F: Future,
    T: Future<Output = ()>,
{
    match select(Box::pin(future), Box::pin(timer)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(TimedOut),
    }
}

/// Race `future` against a `setTimeout` of `timeout_ms`.
pub async fn with_timeout<F: Future>(future: F, timeout_ms: u32) -> Result<F::Output, TimedOut> {
    race(future, TimeoutFuture::new(timeout_ms)).await
}

/// GET `url` and decode the JSON body, giving up after `timeout_ms`.
pub async fn get_json<T: DeserializeOwned>(url: &str, timeout_ms: u32) -> Result<T, FetchError> {
    let request = async {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::HttpError(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::JsonParseError(e.to_string()))
    };

    with_timeout(request, timeout_ms)
        .await
        .map_err(|TimedOut| FetchError::Timeout)?
}
