use thiserror::Error;

#[derive(Error, Debug)]
pub enum StationConnectError {
    #[error("Failed to open control device '{device}': {source}")]
    ControlOpen {
        device: String,
        source: std::io::Error,
    },

    #[error("Control channel I/O error: {0}")]
    ControlIo(#[from] std::io::Error),

    #[error("Slave rejected request '{0}'")]
    RequestRejected(String),

    #[error("Empty response from slave for request '{0}'")]
    EmptyResponse(String),

    #[error("Unexpected response to '{request}': {response}")]
    UnexpectedResponse { request: String, response: String },

    #[error("Wi-Fi mode '{0}' has no dedicated MAC address")]
    UnaddressableMode(&'static str),

    #[error("Failed to spawn command '{0}': {1}")]
    CommandSpawn(String, std::io::Error),
}
