use alphavantage_api::types::DailySeries;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_daily_full() {
    let json = load_fixture("daily.json");
    let series: DailySeries = serde_json::from_str(&json).unwrap();

    let meta = series.meta_data.as_ref().unwrap();
    assert_eq!(meta.symbol, "IBM");
    assert_eq!(meta.last_refreshed, "2020-01-03");
    assert_eq!(meta.time_zone, "US/Eastern");

    assert_eq!(series.len(), 2);
    let bar = &series.time_series["2020-01-02"];
    assert_eq!(bar.open, "100.0000");
    assert_eq!(bar.high, "105.0000");
    assert_eq!(bar.low, "99.0000");
    assert_eq!(bar.close, "102.0000");
    assert_eq!(bar.volume, "1000000");
}

#[test]
fn deserialize_sorts_dates_ascending() {
    // The fixture lists 2020-01-03 before 2020-01-02; map iteration must not.
    let json = load_fixture("daily.json");
    let series: DailySeries = serde_json::from_str(&json).unwrap();

    let days: Vec<&String> = series.time_series.keys().collect();
    assert_eq!(days, ["2020-01-02", "2020-01-03"]);
}

#[test]
fn deserialize_error_payload_yields_empty_series() {
    let json = load_fixture("error_message.json");
    let series: DailySeries = serde_json::from_str(&json).unwrap();
    assert!(series.meta_data.is_none());
    assert!(series.is_empty());
}

#[test]
fn deserialize_missing_series_key_yields_empty_series() {
    let json = r#"{
        "Meta Data": {
            "1. Information": "Daily Prices (open, high, low, close) and Volumes",
            "2. Symbol": "IBM",
            "3. Last Refreshed": "2020-01-03",
            "4. Output Size": "Full size",
            "5. Time Zone": "US/Eastern"
        }
    }"#;
    let series: DailySeries = serde_json::from_str(json).unwrap();
    assert!(series.meta_data.is_some());
    assert!(series.is_empty());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"Time Series (Daily)": not valid json}"#;
    let result = serde_json::from_str::<DailySeries>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_bar_missing_field_returns_error() {
    let json = r#"{
        "Time Series (Daily)": {
            "2020-01-02": {
                "1. open": "100.0000",
                "2. high": "105.0000"
            }
        }
    }"#;
    let result = serde_json::from_str::<DailySeries>(json);
    assert!(result.is_err());
}
