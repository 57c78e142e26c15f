use std::path::PathBuf;
use thiserror::Error;

/// Failure to read the identifier source. Always fatal for the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open input file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read input file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read workbook {path:?}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("workbook {path:?} has no worksheets")]
    NoWorksheet { path: PathBuf },
}

/// A single request attempt that failed at the network level.
///
/// Every variant is treated as transient by the fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with HTTP {0}")]
    Status(u16),
}

/// Problems building the fetcher itself (bad base URL, HTTP client setup).
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid base URL {url:?}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid CSS selector {selector:?}: {message}")]
    Selector {
        selector: &'static str,
        message: String,
    },
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failure to persist the result table.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not write workbook {path:?}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
    #[error("could not write CSV {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("could not flush {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
