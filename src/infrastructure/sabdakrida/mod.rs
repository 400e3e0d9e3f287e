mod http_pronunciation_backend;
mod http_tutor_backend;
mod transport;

pub use http_pronunciation_backend::HttpPronunciationBackend;
pub use http_tutor_backend::HttpTutorBackend;
pub use transport::{DEFAULT_ASSESSMENT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SABDAKRIDA_URL};
