use super::*;

#[test]
fn register_request_trims_identity_fields() {
    let request = register_request("  Ada ", " ada@example.com ", " secret ", Role::User, false);
    assert_eq!(request.username, "Ada");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, " secret ");
    assert_eq!(request.role, Role::User);
    assert!(!request.is_active);
}

#[test]
fn register_request_serializes_backend_shape() {
    let request = register_request("Ada", "ada@example.com", "pw", Role::default(), true);
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({
            "email": "ada@example.com",
            "username": "Ada",
            "password": "pw",
            "role": "Admin",
            "is_active": true
        })
    );
}

#[test]
fn redirect_waits_two_seconds() {
    assert_eq!(wire::auth::REGISTER_REDIRECT_DELAY.as_millis(), 2000);
}
