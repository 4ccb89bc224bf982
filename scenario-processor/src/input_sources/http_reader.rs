use log::debug;
use reqwest::blocking::Client;
use std::io::{BufReader, Cursor, Read};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub(crate) enum HttpReaderError {
    Request { url: String, source: reqwest::Error },
    Status { url: String, status: reqwest::StatusCode },
}

impl std::fmt::Display for HttpReaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpReaderError::Request { url, source } => write!(f, "Request to {} failed: {}", url, source),
            HttpReaderError::Status { url, status } => write!(f, "{} answered with HTTP status {}", url, status),
        }
    }
}

impl std::error::Error for HttpReaderError {}

/// Downloads a published result table into memory.
pub(crate) fn create_http_reader(url: &str) -> Result<BufReader<Box<dyn Read + Send + Sync>>, HttpReaderError> {
    let request_error = |source| HttpReaderError::Request { url: url.to_owned(), source };
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build().map_err(request_error)?;
    let response = client.get(url).send().map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(HttpReaderError::Status { url: url.to_owned(), status });
    }

    let body = response.bytes().map_err(request_error)?;
    debug!("Downloaded {} bytes from {}", body.len(), url);
    let reader: Box<dyn Read + Send + Sync> = Box::new(Cursor::new(body));
    Ok(BufReader::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn downloads_result_table() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/03_13_nonoise_activity_start_3hr_after.csv")
            .with_status(200)
            .with_body("sim_a,120\nsim_b,140\n")
            .create();

        let url = format!("{}/03_13_nonoise_activity_start_3hr_after.csv", server.url());
        let mut csv_reader = csv::ReaderBuilder::new().has_headers(false).from_reader(create_http_reader(&url)?);

        let glucose: Vec<String> = csv_reader
            .records()
            .map(|record| record.map(|r| r[1].to_owned()))
            .collect::<Result<_, _>>()?;
        assert_eq!(glucose, vec!["120", "140"]);
        mock.assert();
        Ok(())
    }

    #[test]
    fn missing_table_reports_status_and_url() {
        let mut server = Server::new();
        let mock = server.mock("GET", "/notfound.csv").with_status(404).create();
        let url = format!("{}/notfound.csv", server.url());

        match create_http_reader(&url) {
            Err(err @ HttpReaderError::Status { .. }) => {
                assert!(err.to_string().starts_with(&url));
                assert!(err.to_string().contains("404"));
            }
            other => panic!("expected a status error, got {:?}", other.map(|_| ())),
        }
        mock.assert();
    }
}
