use super::*;

#[test]
fn missing_port_uses_default() {
    assert_eq!(parse_port(None), Ok(3000));
    assert_eq!(parse_port(Some("  ")), Ok(3000));
}

#[test]
fn port_is_trimmed_and_parsed() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn bad_port_is_rejected() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".to_owned())));
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig { port: 4100 };
    assert_eq!(config.bind_addr(), "0.0.0.0:4100");
}
