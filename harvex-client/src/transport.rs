use async_trait::async_trait;
use url::Url;

/// A remote call that came back without success. `message` carries the
/// response body as delivered by the server; it stays empty when no response
/// was received at all (connection refused, request aborted).
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[error("{message}")]
pub struct RequestFailure {
    pub message: String,
}

impl RequestFailure {

    pub fn no_response() -> Self {
        Self { message: String::new() }
    }

    /// Failures without a response body are dropped silently instead of
    /// being surfaced in the error display.
    pub fn is_silent(&self) -> bool {
        self.message.is_empty()
    }
}

/// Seam between the data source list and the network. Implementations issue
/// a GET and resolve to the raw response body.
///
/// Declared `?Send`: the list is driven from a single-threaded context and
/// its futures are never handed to a multi-threaded executor.
#[async_trait(?Send)]
pub trait ExploreTransport {
    async fn get_text(&self, url: Url) -> Result<String, RequestFailure>;
}

#[cfg(feature = "client")]
mod http {
    use async_trait::async_trait;
    use url::Url;

    use super::{ExploreTransport, RequestFailure};

    /// Native transport backed by `reqwest`.
    pub struct HttpExploreTransport {
        client: reqwest::Client,
    }

    impl HttpExploreTransport {
        pub fn new() -> Self {
            Self { client: reqwest::Client::new() }
        }
    }

    impl Default for HttpExploreTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait(?Send)]
    impl ExploreTransport for HttpExploreTransport {
        async fn get_text(&self, url: Url) -> Result<String, RequestFailure> {
            let response = self.client.get(url).send().await
                .map_err(|_| RequestFailure::no_response())?;
            let status = response.status();
            let body = response.text().await
                .map_err(|_| RequestFailure::no_response())?;
            if status.is_success() {
                Ok(body)
            } else {
                Err(RequestFailure { message: body })
            }
        }
    }
}
#[cfg(feature = "client")]
pub use http::HttpExploreTransport;

#[cfg(feature = "wasm-client")]
mod browser {
    use async_trait::async_trait;
    use url::Url;

    use super::{ExploreTransport, RequestFailure};

    /// Browser transport backed by `gloo-net`, for use from wasm32.
    #[derive(Default)]
    pub struct BrowserExploreTransport;

    #[async_trait(?Send)]
    impl ExploreTransport for BrowserExploreTransport {
        async fn get_text(&self, url: Url) -> Result<String, RequestFailure> {
            let response = gloo_net::http::Request::get(url.as_str()).send().await
                .map_err(|_| RequestFailure::no_response())?;
            let succeeded = response.ok();
            let body = response.text().await
                .map_err(|_| RequestFailure::no_response())?;
            if succeeded {
                Ok(body)
            } else {
                Err(RequestFailure { message: body })
            }
        }
    }
}
#[cfg(feature = "wasm-client")]
pub use browser::BrowserExploreTransport;
