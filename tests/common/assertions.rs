//! Assertions over requests captured by the mock platform

use wiremock::Request;

/// Value of a text field inside a multipart/form-data body
pub fn form_field(request: &Request, name: &str) -> Option<String> {
    let text = String::from_utf8_lossy(&request.body);
    let marker = format!("name=\"{}\"", name);
    let rest = &text[text.find(&marker)?..];
    let value = &rest[rest.find("\r\n\r\n")? + 4..];
    let end = value.find("\r\n--")?;
    Some(value[..end].to_string())
}

/// Assert a multipart field has the expected value
pub fn assert_form_field(request: &Request, name: &str, expected: &str) {
    assert_eq!(
        form_field(request, name).as_deref(),
        Some(expected),
        "form field '{}'",
        name
    );
}

/// Only the POST requests, in arrival order
pub fn posts(requests: &[Request]) -> Vec<&Request> {
    requests
        .iter()
        .filter(|r| r.method.as_str() == "POST")
        .collect()
}
