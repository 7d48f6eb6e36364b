use axum::http::StatusCode;
use fuzzy_aqi::FuzzyAqiError;
use fuzzy_aqi::server::{categories, pollutants, respond};
use fuzzy_aqi::settings::{EngineHandle, Settings};
use fuzzy_aqi::standard::{engine, Readings, INPUTS};

fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("fuzzy_aqi_{}_{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn defaults_apply_without_a_settings_file() {
    let settings = Settings::load(None).expect("settings");
    assert_eq!(settings.server.address, "127.0.0.1:8080");
    assert_eq!(settings.log.filter, "info");
    assert!(settings.rules.path.is_none());
    assert!(matches!(settings.engine().unwrap(), EngineHandle::Shared(_)));
}

#[test]
fn settings_file_overrides_defaults_and_rules() {
    let rules = temp_file("custom.rules", "if PM2.5 is baik then AQI is baik;\nif PM2.5 is berbahaya then AQI is berbahaya;\n");
    let config = temp_file(
        "settings.toml",
        &format!(
            "[server]\naddress = \"0.0.0.0:9000\"\n[rules]\npath = {:?}\n",
            rules.display().to_string()
        ),
    );
    let settings = Settings::load(config.to_str()).expect("settings");
    assert_eq!(settings.server.address, "0.0.0.0:9000");
    assert_eq!(settings.log.filter, "info");
    let engine = settings.engine().expect("engine");
    assert!(matches!(engine, EngineHandle::Owned(_)));
    assert_eq!(engine.rule_base().len(), 2);
    assert!(engine.compute(&[0.0; 6]).unwrap() < 50.0);
    let _ = std::fs::remove_file(&rules);
    let _ = std::fs::remove_file(&config);
}

#[test]
fn missing_explicit_settings_file_is_an_error() {
    let err = Settings::load(Some("/nonexistent/fuzzy-aqi.toml")).unwrap_err();
    assert!(matches!(err, FuzzyAqiError::Settings(_)));
}

#[test]
fn unreadable_rule_file_is_a_settings_error() {
    let config = temp_file("bad_rules.toml", "[rules]\npath = \"/nonexistent/my.rules\"\n");
    let settings = Settings::load(config.to_str()).expect("settings");
    assert!(matches!(settings.engine(), Err(FuzzyAqiError::Settings(_))));
    let _ = std::fs::remove_file(&config);
}

#[test]
fn readings_accept_pollutant_names() {
    let short: Readings = serde_json::from_str(r#"{"pm25": 1, "pm10": 2, "co": 3, "no2": 4, "o3": 5, "so2": 6}"#).unwrap();
    let long: Readings = serde_json::from_str(r#"{"PM2.5": 1, "PM10": 2, "CO": 3, "NO2": 4, "O3": 5, "SO2": 6}"#).unwrap();
    assert_eq!(short, long);
    assert_eq!(short.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert!(serde_json::from_str::<Readings>(r#"{"pm25": 1}"#).is_err());
}

#[test]
fn response_carries_category_and_recommendation() {
    let (status, body) = respond(engine().unwrap(), &Readings::default());
    assert_eq!(status, StatusCode::OK);
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["category"], "Baik");
    assert_eq!(json["color"], "#9EFF9E");
    assert!(json["aqi"].as_f64().unwrap() < 50.0);
    assert!(json.get("error").is_none());
    assert_eq!(json["dominant"].as_array().unwrap().len(), 6);
    assert_eq!(json["dominant"][0]["pollutant"], "PM2.5");
    assert_eq!(json["dominant"][0]["term"], "baik");
}

#[test]
fn category_is_sent_as_its_variant_name() {
    let (_, body) = respond(engine().unwrap(), &Readings::new(0.0, 0.0, 29165.0, 0.0, 0.0, 0.0));
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["category"], "TidakSehat");
    assert_eq!(json["label"], "Tidak Sehat");
}

#[tokio::test]
async fn pollutant_table_follows_input_order() {
    let axum::Json(table) = pollutants().await;
    let names: Vec<_> = table.iter().map(|p| p.name).collect();
    assert_eq!(names, INPUTS);
    let json = serde_json::to_value(table).unwrap();
    assert_eq!(json[0]["unit"], "µg/m³");
    assert_eq!(json[2]["full_name"], "Karbon Monoksida");
    assert_eq!(json[5]["unit"], "ppb");
    for p in json.as_array().unwrap() {
        for field in ["definition", "sources", "impact"] {
            assert!(!p[field].as_str().unwrap().is_empty(), "{} {field}", p["name"]);
        }
    }
}

#[tokio::test]
async fn category_table_is_served_in_band_order() {
    let axum::Json(table) = categories().await;
    let json = serde_json::to_value(table).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 6);
    assert_eq!(json[0]["category"], "Baik");
    assert_eq!(json[5]["high"], serde_json::Value::Null);
}

#[test]
fn out_of_range_request_is_unprocessable() {
    let (status, body) = respond(engine().unwrap(), &Readings::new(9999.0, 0.0, 0.0, 0.0, 0.0, 0.0));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("PM2.5"));
    assert!(json.get("aqi").is_none());
}
