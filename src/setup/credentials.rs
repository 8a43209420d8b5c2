pub(crate) const USERNAME_EMPTY_MESSAGE: &str = "The username field cannot be empty";
pub(crate) const PASSWORD_EMPTY_MESSAGE: &str = "The password field cannot be empty";

pub fn normalize_realm(realm: Option<&str>) -> &str {
    match realm {
        Some(value) if !value.is_empty() => value,
        _ => "",
    }
}

pub fn make_stanza(username: &str, realm: Option<&str>) -> String {
    format!("{}:{}:", normalize_realm(realm), username)
}

pub(crate) fn validate_credential_fields(
    username: &str,
    password: &str,
) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err(USERNAME_EMPTY_MESSAGE);
    }
    if password.is_empty() {
        return Err(PASSWORD_EMPTY_MESSAGE);
    }
    Ok(())
}
