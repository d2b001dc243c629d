mod cancel;
mod download;
mod error;
mod health;
mod job_status;
mod translate;
mod upload;

pub use cancel::cancel_handler;
pub use download::download_handler;
pub use error::ErrorResponse;
pub use health::health_handler;
pub use job_status::job_status_handler;
pub use translate::translate_handler;
pub use upload::upload_handler;
