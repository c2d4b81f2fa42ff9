use crate::core::{ConfigProvider, Fact, FactSource, Result, ValidDay};
use crate::utils::error::FactError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

#[derive(Debug, Deserialize)]
struct DateFactResponse {
    text: String,
    #[serde(default)]
    year: Option<i64>,
    #[serde(default)]
    number: Option<i64>,
    #[serde(default)]
    found: Option<bool>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Client for the date endpoint of the RapidAPI-hosted numbers API.
pub struct NumbersApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl NumbersApiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().to_string(),
            api_host: config.api_host().to_string(),
        })
    }

    pub fn date_url(&self, day: ValidDay) -> String {
        format!(
            "{}/{}/{}/date?json=true",
            self.base_url,
            day.month.number(),
            day.day
        )
    }
}

#[async_trait]
impl FactSource for NumbersApiClient {
    async fn fetch_fact(&self, day: ValidDay) -> Result<Fact> {
        let url = self.date_url(day);
        tracing::debug!("Requesting fact from: {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(FactError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: DateFactResponse = serde_json::from_slice(&body)?;
        tracing::debug!(
            number = ?parsed.number,
            found = ?parsed.found,
            kind = ?parsed.kind,
            "Decoded date fact"
        );

        Ok(Fact {
            text: parsed.text,
            year: parsed.year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Month;
    use httpmock::prelude::*;
    use std::time::Duration;

    struct TestConfig {
        base_url: String,
    }

    impl ConfigProvider for TestConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn api_key(&self) -> &str {
            "test-key"
        }

        fn api_host(&self) -> &str {
            "numbersapi.p.rapidapi.com"
        }

        fn timeout(&self) -> Option<Duration> {
            Some(Duration::from_secs(5))
        }
    }

    fn client_for(server: &MockServer) -> NumbersApiClient {
        NumbersApiClient::new(&TestConfig {
            base_url: server.base_url(),
        })
        .unwrap()
    }

    #[test]
    fn test_date_url_trims_trailing_slash() {
        let client = NumbersApiClient::new(&TestConfig {
            base_url: "https://numbersapi.p.rapidapi.com/".to_string(),
        })
        .unwrap();

        let url = client.date_url(ValidDay {
            month: Month::January,
            day: 15,
        });
        assert_eq!(url, "https://numbersapi.p.rapidapi.com/1/15/date?json=true");
    }

    #[tokio::test]
    async fn test_fetch_fact_sends_rapidapi_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/3/14/date")
                .query_param("json", "true")
                .header("x-rapidapi-key", "test-key")
                .header("x-rapidapi-host", "numbersapi.p.rapidapi.com");
            then.status(200).json_body(serde_json::json!({
                "text": "March 14th is Pi Day",
                "year": 1988,
                "number": 74,
                "found": true,
                "type": "date"
            }));
        });

        let fact = client_for(&server)
            .fetch_fact(ValidDay {
                month: Month::March,
                day: 14,
            })
            .await
            .unwrap();

        mock.assert();
        assert_eq!(fact.text, "March 14th is Pi Day");
        assert_eq!(fact.year, Some(1988));
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2/29/date");
            then.status(403).body("forbidden");
        });

        let err = client_for(&server)
            .fetch_fact(ValidDay {
                month: Month::February,
                day: 29,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, FactError::HttpStatus { status: 403 }));
        assert!(err.is_fetch_error());
    }

    #[tokio::test]
    async fn test_body_without_text_is_fetch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/5/1/date");
            then.status(200).json_body(serde_json::json!({ "number": 122 }));
        });

        let err = client_for(&server)
            .fetch_fact(ValidDay {
                month: Month::May,
                day: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, FactError::SerializationError(_)));
    }
}
