use super::*;

// =============================================================
// ApiConfig endpoint joining
// =============================================================

#[test]
fn empty_base_yields_same_origin_relative_paths() {
    let config = ApiConfig::default();
    assert_eq!(config.endpoint("/api/user/login"), "/api/user/login");
}

#[test]
fn base_url_is_prefixed() {
    let config = ApiConfig::new("https://api.example.com");
    assert_eq!(
        config.endpoint("/api/user/signup"),
        "https://api.example.com/api/user/signup"
    );
}

#[test]
fn trailing_slash_on_base_is_not_doubled() {
    let config = ApiConfig::new("https://api.example.com/");
    assert_eq!(
        config.endpoint("/api/user/signup"),
        "https://api.example.com/api/user/signup"
    );
}
