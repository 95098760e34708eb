//! Browse listing integration tests.

#[cfg(test)]
mod tests {
    use crate::{SAMPLE_KEYS, client, spawn_bucket, spawn_server};

    fn listed_names(body: &str) -> Vec<&str> {
        body.split("<li>")
            .skip(1)
            .filter_map(|li| li.split("</span>").nth(1))
            .filter_map(|rest| rest.split("</a>").next())
            .collect()
    }

    #[tokio::test]
    async fn test_should_serve_root_listing() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let resp = client()
            .get(format!("http://{addr}/browser?prefix="))
            .send()
            .await
            .expect("request");

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(
            resp.headers().get("cache-control").and_then(|v| v.to_str().ok()),
            Some("no-store")
        );

        let body = resp.text().await.expect("body");
        assert!(body.contains("Index of"));
        assert_eq!(listed_names(&body), vec!["camera/", "gnss/", "README.md"]);
    }

    #[tokio::test]
    async fn test_should_list_nested_prefix_without_self_reference() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let body = client()
            .get(format!("http://{addr}/browser?prefix=camera%2F"))
            .send()
            .await
            .expect("request")
            .text()
            .await
            .expect("body");

        assert!(body.contains("<h1>Index of camera/</h1>"));
        assert_eq!(listed_names(&body), vec!["camera/images/", "camera/index.html"]);
        assert!(!body.contains("Parent folder"));
    }

    #[tokio::test]
    async fn test_should_link_parent_folder() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;

        let body = client()
            .get(format!("http://{addr}/browser?prefix=camera%2Fimages%2F"))
            .send()
            .await
            .expect("request")
            .text()
            .await
            .expect("body");

        assert!(body.contains("<a href=\"/browser?prefix=camera%2F&page=1&sort=asc&limit=25\">⬅️ Parent folder</a>"));
        assert_eq!(listed_names(&body), vec!["camera/images/2024/"]);
    }

    #[tokio::test]
    async fn test_should_reverse_order_when_sorting_descending() {
        let store = spawn_bucket(SAMPLE_KEYS).await;
        let addr = spawn_server(&store).await;
        let http = client();

        let asc = http
            .get(format!("http://{addr}/browser?prefix=&sort=asc"))
            .send()
            .await
            .expect("request")
            .text()
            .await
            .expect("body");
        let desc = http
            .get(format!("http://{addr}/browser?prefix=&sort=desc"))
            .send()
            .await
            .expect("request")
            .text()
            .await
            .expect("body");

        let mut reversed = listed_names(&desc);
        reversed.reverse();
        assert_eq!(listed_names(&asc), reversed);
    }

    #[tokio::test]
    async fn test_should_paginate_large_folder() {
        let keys: Vec<String> = (0..60).map(|i| format!("logs/{i:02}.log")).collect();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let store = spawn_bucket(&refs).await;
        let addr = spawn_server(&store).await;
        let http = client();

        let page2 = http
            .get(format!("http://{addr}/browser?prefix=logs%2F&page=2&limit=25"))
            .send()
            .await
            .expect("request")
            .text()
            .await
            .expect("body");
        let names = listed_names(&page2);
        assert_eq!(names.len(), 25);
        assert_eq!(names.first(), Some(&"logs/25.log"));
        assert_eq!(names.last(), Some(&"logs/49.log"));
        assert!(page2.contains("<div class=\"limit-toggle\">Show: "));
        assert!(page2.contains("page=3&sort=asc&limit=25\">3</a>"));
        assert!(page2.contains("⬅️ Prev"));
        assert!(page2.contains("Next ➡️"));

        let beyond = http
            .get(format!("http://{addr}/browser?prefix=logs%2F&page=7"))
            .send()
            .await
            .expect("request");
        assert_eq!(beyond.status(), 200);
        let body = beyond.text().await.expect("body");
        assert!(listed_names(&body).is_empty());
    }
}
