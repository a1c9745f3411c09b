use proxy_wasm::traits::{Context, HttpContext, RootContext};
use proxy_wasm::types::{ContextType, LogLevel};

mod error;
mod filter;
mod host;

pub use error::FilterError;
pub use filter::{HeaderDecorator, HEADER_NAME, HEADER_VALUE};
pub use host::{Host, ProxyHost};

struct HeaderRoot;

impl Context for HeaderRoot {}

impl RootContext for HeaderRoot {
    fn get_type(&self) -> Option<ContextType> {
        Some(ContextType::HttpContext)
    }

    fn create_http_context(&self, context_id: u32) -> Option<Box<dyn HttpContext>> {
        log::info!("new http context {context_id}");
        Some(Box::new(HeaderDecorator::new(context_id, ProxyHost)))
    }
}

/// Registers the log level and the root context factory with the SDK.
pub fn init() {
    proxy_wasm::set_log_level(LogLevel::Info);
    proxy_wasm::set_root_context(|_vm_id| -> Box<dyn RootContext> { Box::new(HeaderRoot) });
}

proxy_wasm::main! {{
    init();
}}
