//! Mock platform fixtures

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yammer_matches::MatchPair;

/// One user entry of a member page
pub fn user(id: i64, name: &str, state: &str) -> Value {
    json!({ "id": id, "name": name, "state": state })
}

/// Serve `pages` as pages 1..=n of the group's member listing
///
/// `more_available` is set on every page except the last. Each page expects
/// exactly one request.
pub async fn mount_member_pages(server: &MockServer, group_id: i64, pages: Vec<Vec<Value>>) {
    let total = pages.len();
    for (i, users) in pages.into_iter().enumerate() {
        let page = i + 1;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/users/in_group/{}", group_id)))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": users,
                "more_available": page != total,
            })))
            .expect(1)
            .mount(server)
            .await;
    }
}

/// Accept every message post with 201 Created
pub async fn accept_posts(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/messages.json"))
        .respond_with(ResponseTemplate::new(201))
        .mount(server)
        .await;
}

/// `n` matches with short, distinct ids
pub fn short_matches(n: i64) -> Vec<MatchPair> {
    (0..n).map(|i| MatchPair::of_ids(i, i + 501)).collect()
}
