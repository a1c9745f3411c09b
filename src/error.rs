use proxy_wasm::types::Status;

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("failed to add header: {0:?}")]
    AddHeader(Status),
}
