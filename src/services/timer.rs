use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use crate::core::Delay;

/// Delay backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

#[async_trait(?Send)]
impl Delay for BrowserDelay {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
