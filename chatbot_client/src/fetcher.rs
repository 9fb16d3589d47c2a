//! Fetching the USD/BRL exchange rate from the quote provider.
//!
//! One blocking GET per call: no retries and no caching, so every `/dolar` sees a
//! fresh rate or a fresh failure.
use crate::event_log::EventLog;
use chatbot_common::FetchError;
use chatbot_common::QuoteResult;
use chatbot_common::quote::{USD_BRL, parse_quote};
use reqwest::blocking::Client;
use std::sync::Arc;

/// Source of exchange-rate quotes.
pub trait QuoteSource {
    fn fetch(&self) -> Result<QuoteResult, FetchError>;
}

/// HTTP adapter for the exchange-rate provider.
pub struct QuoteFetcher {
    client: Client,
    url: String,
    log: Arc<dyn EventLog>,
}

impl QuoteFetcher {
    pub fn new(client: Client, url: impl Into<String>, log: Arc<dyn EventLog>) -> Self {
        Self {
            client,
            url: url.into(),
            log,
        }
    }

    fn request(&self) -> Result<QuoteResult, FetchError> {
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        let body = response.text()?;
        parse_quote(&body, USD_BRL)
    }
}

impl QuoteSource for QuoteFetcher {
    fn fetch(&self) -> Result<QuoteResult, FetchError> {
        let result = self.request();
        match &result {
            Ok(quote) => self.log.info(&format!(
                "Exchange rate fetched successfully, quoted at {}.",
                quote.timestamp
            )),
            Err(e @ FetchError::Network(_)) => self
                .log
                .error(&format!("Error requesting exchange rate from {}: {}", self.url, e)),
            Err(e @ FetchError::MalformedResponse(_)) => self
                .log
                .error(&format!("Error processing exchange rate response: {}", e)),
            Err(e @ FetchError::Unknown(_)) => self
                .log
                .error(&format!("Unexpected error fetching exchange rate: {}", e)),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::RecordingLog;
    use chatbot_common::net::quote_client;
    use chatbot_common::quote::format_timestamp;
    use log::Level;
    use std::time::Duration;
    use tokio::runtime::Runtime;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PATH: &str = "/last/USD-BRL";

    fn provider(rt: &Runtime, response: ResponseTemplate) -> MockServer {
        rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(PATH))
                .respond_with(response)
                .mount(&server)
                .await;
            server
        })
    }

    fn json(status: u16, body: &str) -> ResponseTemplate {
        ResponseTemplate::new(status).set_body_raw(body.to_owned(), "application/json")
    }

    fn fetcher(client: Client, url: &str) -> (QuoteFetcher, Arc<RecordingLog>) {
        let log = Arc::new(RecordingLog::default());
        let fetcher = QuoteFetcher::new(client, url, log.clone());
        (fetcher, log)
    }

    #[test]
    fn fetches_bid_and_formats_timestamp() {
        let rt = Runtime::new().unwrap();
        let server = provider(
            &rt,
            json(200, r#"{"USDBRL":{"code":"USD","bid":"5.05","timestamp":"1700000000"}}"#),
        );
        let (fetcher, log) = fetcher(quote_client().unwrap(), &format!("{}{}", server.uri(), PATH));

        let quote = fetcher.fetch().unwrap();

        assert_eq!(quote.bid, "5.05");
        assert_eq!(quote.timestamp, format_timestamp("1700000000").unwrap());
        let requests = rt.block_on(server.received_requests()).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(log.at(Level::Info).len(), 1);
    }

    #[test]
    fn every_fetch_issues_a_fresh_request() {
        let rt = Runtime::new().unwrap();
        let server = provider(
            &rt,
            json(200, r#"{"USDBRL":{"bid":"5.05","timestamp":"1700000000"}}"#),
        );
        let (fetcher, _log) = fetcher(quote_client().unwrap(), &format!("{}{}", server.uri(), PATH));

        fetcher.fetch().unwrap();
        fetcher.fetch().unwrap();

        assert_eq!(rt.block_on(server.received_requests()).unwrap().len(), 2);
    }

    #[test]
    fn server_error_status_is_network_fault() {
        let rt = Runtime::new().unwrap();
        let server = provider(&rt, json(500, "{}"));
        let (fetcher, log) = fetcher(quote_client().unwrap(), &format!("{}{}", server.uri(), PATH));

        assert!(matches!(fetcher.fetch(), Err(FetchError::Network(_))));
        assert!(log.at(Level::Error)[0].starts_with("Error requesting exchange rate"));
    }

    #[test]
    fn timeout_is_network_fault() {
        let rt = Runtime::new().unwrap();
        let server = provider(
            &rt,
            json(200, r#"{"USDBRL":{"bid":"5.05","timestamp":"1700000000"}}"#)
                .set_delay(Duration::from_secs(3)),
        );
        let client = Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let (fetcher, log) = fetcher(client, &format!("{}{}", server.uri(), PATH));

        assert!(matches!(fetcher.fetch(), Err(FetchError::Network(_))));
        assert_eq!(log.at(Level::Error).len(), 1);
    }

    #[test]
    fn non_json_body_is_malformed() {
        let rt = Runtime::new().unwrap();
        let server = provider(
            &rt,
            ResponseTemplate::new(200).set_body_raw("Service Unavailable", "text/plain"),
        );
        let (fetcher, log) = fetcher(quote_client().unwrap(), &format!("{}{}", server.uri(), PATH));

        assert!(matches!(fetcher.fetch(), Err(FetchError::MalformedResponse(_))));
        assert!(log.at(Level::Error)[0].starts_with("Error processing exchange rate response"));
    }

    #[test]
    fn unusable_url_is_unknown_fault() {
        let (fetcher, log) = fetcher(quote_client().unwrap(), "not a url");

        assert!(matches!(fetcher.fetch(), Err(FetchError::Unknown(_))));
        assert!(log.at(Level::Error)[0].starts_with("Unexpected error fetching exchange rate"));
    }
}
