use proxy_wasm::traits::{Context, HttpContext};
use proxy_wasm::types::Action;

use crate::error::FilterError;
use crate::host::{Host, ProxyHost};

pub const HEADER_NAME: &str = "x-custom-header";
pub const HEADER_VALUE: &str = "custom-value";

/// Per-exchange context that stamps every response with [`HEADER_NAME`].
///
/// Only `on_http_response_headers` is overridden; every other hook keeps the
/// SDK default.
pub struct HeaderDecorator<H: Host = ProxyHost> {
    context_id: u32,
    host: H,
}

impl<H: Host> HeaderDecorator<H> {
    pub fn new(context_id: u32, host: H) -> Self {
        Self { context_id, host }
    }

    fn decorate(&self) -> Result<(), FilterError> {
        self.host
            .add_response_header(HEADER_NAME, HEADER_VALUE)
            .map_err(FilterError::AddHeader)
    }
}

impl<H: Host + 'static> Context for HeaderDecorator<H> {}

impl<H: Host + 'static> HttpContext for HeaderDecorator<H> {
    fn on_http_response_headers(&mut self, _num_headers: usize, _end_of_stream: bool) -> Action {
        log::info!("on_http_response_headers (context {})", self.context_id);

        match self.decorate() {
            Ok(()) => {
                log::info!("header set: {HEADER_NAME}={HEADER_VALUE}");
                Action::Continue
            }
            Err(err) => {
                self.host.log_critical(&err.to_string());
                Action::Pause
            }
        }
    }
}
