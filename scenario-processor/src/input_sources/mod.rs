mod file_reader;
mod http_reader;

use file_reader::create_file_reader;
use http_reader::create_http_reader;
use std::io::Read;
use std::path::Path;
use url::Url;

fn as_http_url(src: &str) -> Option<Url> {
    Url::parse(src)
        .ok()
        .filter(|url| url.scheme() == "http" || url.scheme() == "https")
}

pub fn is_remote_location(src: &str) -> bool {
    as_http_url(src).is_some()
}

/// Opens `src` as an HTTP(S) download when it is such a URL, as a local file otherwise.
pub fn create_reader(src: &str) -> Result<Box<dyn Read + Send>, String> {
    if is_remote_location(src) {
        create_http_reader(src)
            .map_err(|err| format!("Error creating HTTP reader: {}", err))
            .map(|reader| Box::new(reader) as Box<dyn Read + Send>)
    } else {
        create_file_reader(src)
            .map_err(|err| format!("Error creating file reader: {}", err))
            .map(|reader| Box::new(reader) as Box<dyn Read + Send>)
    }
}

/// Appends a file name to a data location, which is either a directory or a base URL.
pub fn join_location(base: &str, file_name: &str) -> String {
    match as_http_url(base) {
        Some(mut url) => {
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            url.join(file_name)
                .map(|joined| joined.to_string())
                .unwrap_or_else(|_| format!("{}/{}", base.trim_end_matches('/'), file_name))
        }
        None => Path::new(base).join(file_name).to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_create_reader_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("test.txt");
        let test_content = "Hello, world!";
        let mut file = File::create(&path)?;
        write!(file, "{}", test_content)?;

        let mut reader = create_reader(path.to_str().unwrap())?;

        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        assert_eq!(buffer, test_content);
        Ok(())
    }

    #[test]
    fn test_create_reader_http() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/data/results.csv").with_status(200).with_body("a,b\n").create();

        let mut reader = create_reader(&format!("{}/data/results.csv", server.url()))?;

        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        assert_eq!(buffer, "a,b\n");
        mock.assert();
        Ok(())
    }

    #[test]
    fn test_create_reader_file_not_found() {
        let result = create_reader("non_existent_file.csv");

        assert!(result.err().unwrap().starts_with("Error creating file reader"));
    }

    #[test]
    fn test_join_location_directory() {
        let joined = join_location("./data", "03_13_nonoise_activity_start_3hr_after.csv");
        assert_eq!(joined, Path::new("./data").join("03_13_nonoise_activity_start_3hr_after.csv").to_string_lossy());
    }

    #[test]
    fn test_join_location_url() {
        assert_eq!(
            join_location("https://example.com/results", "a.csv"),
            "https://example.com/results/a.csv"
        );
        assert_eq!(
            join_location("https://example.com/results/", "a.csv"),
            "https://example.com/results/a.csv"
        );
    }
}
