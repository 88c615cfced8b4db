use tracing::{debug, instrument};

use crate::utils::constant::HELLO_MESSAGE;

/// Root greeting, served as `text/plain`.
#[instrument]
pub async fn hello() -> &'static str {
    debug!("Root endpoint accessed");
    HELLO_MESSAGE
}
