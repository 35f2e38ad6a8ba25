use super::*;
use crate::formatter::FixedClock;
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use wiremock::MockServer;


const TOKEN: &str = "test";

fn test_config(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        allow_insecure_http: true,
        ..Default::default()
    }
}

fn march_2024() -> PostFormatter {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap());
    PostFormatter::with_clock("Group Name", Arc::new(clock))
}

fn client_for(config: &Config, id: i64, token: &str) -> GroupClient {
    GroupClient::new(config, GroupId(id), BearerToken::new(token), march_2024())
        .expect("client should build")
}

fn test_client(server: &MockServer) -> GroupClient {
    client_for(&test_config(server), 1, TOKEN)
}

/// Serve one request with `status` and a body cut short of its Content-Length
///
/// Returns a config pointing at the server.
async fn truncated_body_server(status: u16) -> Config {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let complete = request.windows(4).any(|w| w == b"\r\n\r\n")
                && (request.starts_with(b"GET")
                    || request.ends_with(b"--\r\n")
                    || request.ends_with(b"0\r\n\r\n"));
            if complete {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {} Error\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial",
            status
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    Config {
        base_url: format!("http://{}/", addr),
        allow_insecure_http: true,
        ..Default::default()
    }
}

/// Value of a text field inside a multipart/form-data body
fn form_field(body: &[u8], name: &str) -> Option<String> {
    let text = String::from_utf8_lossy(body);
    let marker = format!("name=\"{}\"", name);
    let rest = &text[text.find(&marker)?..];
    let value = &rest[rest.find("\r\n\r\n")? + 4..];
    let end = value.find("\r\n--")?;
    Some(value[..end].to_string())
}

#[test]
fn page_url_targets_users_in_group_over_https() {
    let base = Config::default().validate().unwrap();
    let url = pagination::page_url(&base, GroupId(9876543210), 3).unwrap();

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("www.yammer.com"));
    assert_eq!(url.path(), "/api/v1/users/in_group/9876543210");
    assert_eq!(url.query(), Some("page=3"));
}

#[test]
fn messages_url_targets_messages_json_over_https() {
    let base = Config::default().validate().unwrap();
    let url = posting::messages_url(&base).unwrap();

    assert_eq!(url.as_str(), "https://www.yammer.com/api/v1/messages.json");
}

#[test]
fn form_fields_are_fixed_except_title_and_body() {
    let fields = posting::form_fields(GroupId(42), "Title", "Body\n");
    let names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();

    assert_eq!(
        names,
        vec!["group_id", "is_rich_text", "message_type", "title", "body"]
    );
    assert_eq!(fields[0].1, "42");
    assert_eq!(fields[1].1, "false");
    assert_eq!(fields[2].1, "announcement");
    assert_eq!(fields[3].1, "Title");
    assert_eq!(fields[4].1, "Body\n");
}

#[test]
fn validation_checks_group_id_before_token() {
    let config = Config::default();

    let err = client_for(&config, 0, "").validate().unwrap_err();
    assert_eq!(err.to_string(), GROUP_ID_ZERO);

    let err = client_for(&config, 1, "").validate().unwrap_err();
    assert_eq!(err.to_string(), TOKEN_EMPTY);

    assert!(client_for(&config, 1, "token").validate().is_ok());
}

#[test]
fn insecure_base_url_is_rejected_at_construction() {
    let config = Config {
        base_url: "http://www.yammer.com/".to_string(),
        ..Default::default()
    };

    let result = GroupClient::new(&config, GroupId(1), BearerToken::new(TOKEN), march_2024());
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[tokio::test]
async fn cancellable_prefers_an_already_cancelled_token() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = cancellable(&cancel, async { 7 }).await;
    assert!(matches!(result, Err(Error::Cancelled)));

    let result = cancellable(&CancellationToken::new(), async { 7 }).await;
    assert_eq!(result.unwrap(), 7);
}

#[test]
fn form_field_reads_multipart_values() {
    let body = b"--b\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\nHello\r\n--b\r\nContent-Disposition: form-data; name=\"body\"\r\n\r\nline1\nline2\n\r\n--b--\r\n";

    assert_eq!(form_field(body, "title").as_deref(), Some("Hello"));
    assert_eq!(form_field(body, "body").as_deref(), Some("line1\nline2\n"));
    assert_eq!(form_field(body, "missing"), None);
}
