//! Redirect and pass-through integration tests.

#[cfg(test)]
mod tests {
    use crate::{SAMPLE_KEYS, client, spawn_bucket, spawn_server};

    fn location(resp: &reqwest::Response) -> Option<&str> {
        resp.headers().get("location").and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_should_redirect_root_to_browser() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let resp = client().get(format!("http://{addr}/")).send().await.expect("request");
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), Some("/browser"));
    }

    #[tokio::test]
    async fn test_should_redirect_folder_proxy_to_browser() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let resp = client()
            .get(format!("http://{addr}/proxy/foo%2Fbar%2F"))
            .send()
            .await
            .expect("request");
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), Some("/browser?prefix=foo%2Fbar%2F"));
    }

    #[tokio::test]
    async fn test_should_redirect_object_proxy_to_store() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let resp = client()
            .get(format!("http://{addr}/proxy/foo%2Fbar.txt"))
            .send()
            .await
            .expect("request");
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), Some(format!("{store}/foo%2Fbar.txt").as_str()));
    }

    #[tokio::test]
    async fn test_should_answer_not_found_for_pass_through() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let resp = client()
            .get(format!("http://{addr}/favicon.ico"))
            .send()
            .await
            .expect("request");
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_should_invoke_with_viewer_request_event() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let event = serde_json::json!({
            "Records": [{ "cf": { "request": { "uri": "/", "querystring": "" } } }]
        });
        let resp = client()
            .post(format!("http://{addr}/_edge/invoke"))
            .body(event.to_string())
            .send()
            .await
            .expect("request");
        assert_eq!(resp.status(), 200);

        let outcome: serde_json::Value =
            serde_json::from_str(&resp.text().await.expect("body")).expect("json outcome");
        assert_eq!(outcome["status"], "302");
        assert_eq!(outcome["statusDescription"], "Redirect");
        assert_eq!(outcome["headers"]["location"][0]["value"], "/browser");
    }

    #[tokio::test]
    async fn test_should_echo_pass_through_event_request() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let event = serde_json::json!({
            "Records": [{ "cf": { "request": {
                "uri": "/index.html",
                "querystring": "",
                "clientIp": "203.0.113.9"
            } } }]
        });
        let resp = client()
            .post(format!("http://{addr}/_edge/invoke"))
            .body(event.to_string())
            .send()
            .await
            .expect("request");

        let outcome: serde_json::Value =
            serde_json::from_str(&resp.text().await.expect("body")).expect("json outcome");
        assert_eq!(outcome["uri"], "/index.html");
        assert_eq!(outcome["clientIp"], "203.0.113.9");
    }

    #[tokio::test]
    async fn test_should_report_health() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let resp = client()
            .get(format!("http://{addr}/_health"))
            .send()
            .await
            .expect("request");
        assert_eq!(resp.status(), 200);
        assert!(resp.text().await.expect("body").contains("\"status\":\"running\""));
    }
}
