use dogceo_api::types::ApiResponse;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_sub_breed_list() {
    let json = load_fixture("hound.json");
    let resp: ApiResponse<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.code, None);
    assert_eq!(
        resp.message,
        vec!["afghan", "basset", "blood", "english", "ibizan", "plott", "walker"]
    );
}

#[test]
fn deserialize_empty_sub_breed_list() {
    let json = load_fixture("akita.json");
    let resp: ApiResponse<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert!(resp.is_success());
    assert!(resp.message.is_empty());
}

#[test]
fn deserialize_error_envelope() {
    let json = load_fixture("not_found.json");
    let resp: ApiResponse<String> = serde_json::from_str(&json).unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.status, "error");
    assert_eq!(resp.code, Some(404));
    assert!(resp.message.starts_with("Breed not found"));
}

#[test]
fn error_envelope_is_not_a_sub_breed_list() {
    let json = load_fixture("not_found.json");
    let result = serde_json::from_str::<ApiResponse<Vec<String>>>(&json);
    assert!(result.is_err());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"message": not valid json}"#;
    let result = serde_json::from_str::<ApiResponse<Vec<String>>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_status_returns_error() {
    let json = r#"{"message": ["afghan"]}"#;
    let result = serde_json::from_str::<ApiResponse<Vec<String>>>(json);
    assert!(result.is_err());
}

#[test]
fn serialize_omits_absent_code() {
    let resp = ApiResponse {
        status: "success".to_string(),
        message: vec!["afghan".to_string()],
        code: None,
    };
    let value = serde_json::to_value(&resp).unwrap();
    assert!(value.get("code").is_none());
    assert_eq!(value["message"][0], "afghan");
}
