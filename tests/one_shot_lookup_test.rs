use anyhow::Result;
use fun_fact_finder::app::lookup_once;
use fun_fact_finder::core::Month;
use fun_fact_finder::{ApiOverrides, ApiSettings, FactError, NumbersApiClient};
use httpmock::prelude::*;

fn client_for(server: &MockServer) -> Result<NumbersApiClient> {
    let settings = ApiSettings::resolve(
        ApiOverrides {
            base_url: Some(server.base_url()),
            api_key: Some("one-shot-key".to_string()),
            ..Default::default()
        },
        None,
    )?;
    Ok(NumbersApiClient::new(&settings)?)
}

#[tokio::test]
async fn test_lookup_renders_fetched_fact() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/1/15/date")
            .query_param("json", "true")
            .header("x-rapidapi-key", "one-shot-key");
        then.status(200)
            .json_body(serde_json::json!({ "text": "Fact X", "found": true }));
    });

    let rendered = lookup_once(&client_for(&server)?, Month::January, "15").await?;

    api_mock.assert();
    assert!(rendered.contains("Month: January"));
    assert!(rendered.contains("💡 Fact X"));
    assert!(!rendered.contains("Loading..."));
    Ok(())
}

#[tokio::test]
async fn test_lookup_server_error_exits_with_fetch_code() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/7/4/date");
        then.status(500);
    });

    let err = lookup_once(&client_for(&server)?, Month::July, "4")
        .await
        .unwrap_err();

    api_mock.assert();
    assert!(matches!(err, FactError::HttpStatus { status: 500 }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(
        err.user_friendly_message(),
        "Could not fetch the fact. Please try again."
    );
    Ok(())
}

#[tokio::test]
async fn test_lookup_rejects_april_31_without_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({ "text": "unused" }));
    });

    let err = lookup_once(&client_for(&server)?, Month::April, "31")
        .await
        .unwrap_err();

    api_mock.assert_hits(0);
    match &err {
        FactError::ValidationError { message } => {
            assert_eq!(message, "This month only has 30 days.")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.user_friendly_message(), "This month only has 30 days.");
    Ok(())
}

#[tokio::test]
async fn test_lookup_rejects_non_numeric_day() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({ "text": "unused" }));
    });

    let err = lookup_once(&client_for(&server)?, Month::May, "abc")
        .await
        .unwrap_err();

    api_mock.assert_hits(0);
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.user_friendly_message(), "Please enter a valid day (1-31).");
    Ok(())
}
