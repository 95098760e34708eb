//! Bad gateway integration tests.

#[cfg(test)]
mod tests {
    use crate::{client, closed_store_url, spawn_mock_store, spawn_server};

    #[tokio::test]
    async fn test_should_answer_bad_gateway_for_unexpected_document() {
        let store = spawn_mock_store(|_| "<Error><Code>AccessDenied</Code></Error>".to_owned()).await;
        let addr = spawn_server(&store).await;

        let resp = client()
            .get(format!("http://{addr}/browser?prefix="))
            .send()
            .await
            .expect("request");
        assert_eq!(resp.status(), 502);
        assert_eq!(
            resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
            Some("text/html; charset=utf-8")
        );
        assert!(resp.text().await.expect("body").contains("Unexpected XML format"));
    }

    #[tokio::test]
    async fn test_should_answer_bad_gateway_when_store_unreachable() {
        let addr = spawn_server(&closed_store_url()).await;

        let resp = client()
            .get(format!("http://{addr}/browser?prefix=a%2F"))
            .send()
            .await
            .expect("request");
        assert_eq!(resp.status(), 502);

        let body = resp.text().await.expect("body");
        assert!(body.starts_with("<h1>Error</h1><p>"));
        assert!(body.contains("error sending request"), "{body}");
    }

    #[tokio::test]
    async fn test_should_not_touch_store_for_redirects() {
        let addr = spawn_server(&closed_store_url()).await;

        let resp = client()
            .get(format!("http://{addr}/proxy/a.txt"))
            .send()
            .await
            .expect("request");
        assert_eq!(resp.status(), 302);
    }
}
