use proxy_wasm::types::{LogLevel, MapType, Status};

// The SDK wrappers for these calls panic on any non-Ok status, which would
// trap the VM instead of letting the filter pause.
#[link(wasm_import_module = "env")]
extern "C" {
    fn proxy_log(level: LogLevel, message_data: *const u8, message_size: usize) -> Status;

    fn proxy_add_header_map_value(
        map_type: MapType,
        key_data: *const u8,
        key_size: usize,
        value_data: *const u8,
        value_size: usize,
    ) -> Status;
}

/// Host capabilities the filter calls into.
pub trait Host {
    /// Appends a response header. Whether an existing value is kept is up to the host.
    fn add_response_header(&self, name: &str, value: &str) -> Result<(), Status>;

    fn log_critical(&self, message: &str);
}

/// [`Host`] backed by the proxy-wasm ABI.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProxyHost;

impl Host for ProxyHost {
    fn add_response_header(&self, name: &str, value: &str) -> Result<(), Status> {
        let status = unsafe {
            proxy_add_header_map_value(
                MapType::HttpResponseHeaders,
                name.as_ptr(),
                name.len(),
                value.as_ptr(),
                value.len(),
            )
        };
        match status {
            Status::Ok => Ok(()),
            status => Err(status),
        }
    }

    fn log_critical(&self, message: &str) {
        // Nowhere left to report a failed log call.
        unsafe {
            proxy_log(LogLevel::Critical, message.as_ptr(), message.len());
        }
    }
}
