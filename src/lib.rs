pub mod batch;
pub mod config;
pub mod delay_manager;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod input_loader;
pub mod logger;
pub mod reporter;
pub mod results;

// Exporting types for convenience
pub use config::ScrapeConfig;
pub use delay_manager::{Sleeper, ThreadSleeper};
pub use error::{FetchError, LoadError, ReportError, SetupError};
pub use extractor::Extractor;
pub use fetcher::{Fetcher, HttpTransport, Transport};
pub use results::{DetailLink, ResultTable};
