//! Blocking client for the paginated `GET /api/wip` endpoint.

use std::time::Duration;

use crate::error::{Result, WipError};
use crate::page::WipPage;
use crate::query::WipQuery;
use crate::source::WipSource;

const WIP_PATH: &str = "/api/wip";
const TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpWipSource {
    client: reqwest::blocking::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpWipSource {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(WipError::Config("empty API base URL".into()));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| WipError::Http(format!("client init failed: {e}")))?;
        Ok(Self {
            client,
            endpoint: format!("{base}{WIP_PATH}"),
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl WipSource for HttpWipSource {
    fn fetch_page(&self, query: &WipQuery) -> Result<WipPage> {
        query.validate()?;
        let mut req = self.client.get(&self.endpoint).query(&query.to_query_pairs());
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        tracing::debug!(endpoint = %self.endpoint, page = query.page, "fetching WIP page");

        let resp = req
            .send()
            .map_err(|e| WipError::Http(format!("WIP request failed: {e}")))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(WipError::Http(format!("WIP API error {status}: {text}")));
        }
        resp.json::<WipPage>()
            .map_err(|e| WipError::Http(format!("failed to parse WIP response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::TargetMetCondition;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// Answers one request with `status` and `body`; yields the request head.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            head
        });
        (base, handle)
    }

    #[test]
    fn server_error_maps_to_http_error() {
        let (base, handle) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let src = HttpWipSource::new(&base, None).unwrap();
        let err = src.fetch_page(&WipQuery::default()).err().unwrap();
        match err {
            WipError::Http(msg) => assert!(msg.contains("500"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
        handle.join().unwrap();
    }

    #[test]
    fn ok_page_decodes_and_request_carries_query_and_token() {
        let (base, handle) = serve_once(
            "200 OK",
            r#"{"data":[{"_id":"c1","importedWipBalance":7}],"pagination":{"page":2,"limit":5,"total":6,"totalPages":2}}"#,
        );
        let src = HttpWipSource::new(&base, Some("tok-123".into())).unwrap();
        let query = WipQuery {
            page: 2,
            limit: 5,
            search: "acme".into(),
            target_met_condition: TargetMetCondition::Met,
            wip_warning_jobs: true,
        };
        let page = src.fetch_page(&query).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0]["_id"], "c1");
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.summary.is_none());

        let head = handle.join().unwrap();
        let request_line = head.lines().next().unwrap();
        assert!(request_line.starts_with("GET /api/wip?"), "{request_line}");
        assert!(request_line.contains("page=2"));
        assert!(request_line.contains("limit=5"));
        assert!(request_line.contains("search=acme"));
        assert!(request_line.contains("targetMetCondition=met"));
        assert!(request_line.contains("WIPWarningJobs=true"));
        assert!(head.to_lowercase().contains("authorization: bearer tok-123"));
    }

    #[test]
    fn invalid_query_never_hits_the_network() {
        let src = HttpWipSource::new("http://127.0.0.1:9", None).unwrap();
        let q = WipQuery { limit: 0, ..Default::default() };
        assert!(matches!(src.fetch_page(&q), Err(WipError::InvalidQuery(_))));
    }

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        let src = HttpWipSource::new("http://localhost:8080/", None).unwrap();
        assert_eq!(src.endpoint(), "http://localhost:8080/api/wip");
    }

    #[test]
    fn empty_base_is_config_error() {
        assert!(matches!(
            HttpWipSource::new("  ", None),
            Err(WipError::Config(_))
        ));
    }
}
