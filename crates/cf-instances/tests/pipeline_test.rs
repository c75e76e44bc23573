//! End-to-end runs of the resolve → fetch → render pipeline against an
//! in-memory platform connection.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cf_api::Method;
use cf_instances::{ApplicationDescriptor, Error, PlatformConnection, run};

// ============================================================================
// Test Helpers
// ============================================================================

/// Connection that knows one app (`web`) and serves a fixed stats body.
struct StaticPlatform {
    body: &'static str,
    requests: AtomicUsize,
}

impl StaticPlatform {
    fn new(body: &'static str) -> Self {
        Self {
            body,
            requests: AtomicUsize::new(0),
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlatformConnection for StaticPlatform {
    async fn lookup_application(&self, name: &str) -> cf_api::Result<ApplicationDescriptor> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if name != "web" {
            return Err(cf_api::Error::AppNotFound(name.to_string()));
        }
        Ok(ApplicationDescriptor {
            guid: "9a1d".into(),
            name: name.into(),
        })
    }

    async fn raw_request(&self, method: Method, path: &str) -> cf_api::Result<Vec<String>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        assert_eq!(method, Method::GET);
        assert_eq!(path, "/v2/apps/9a1d/stats");
        Ok(self.body.lines().map(str::to_owned).collect())
    }
}

fn argv(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

async fn run_to_string(
    platform: &StaticPlatform,
    args: &[&str],
) -> (Result<(), Error>, String) {
    let mut out = Vec::new();
    let result = run(platform, &argv(args), &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn reports_a_running_instance() {
    let platform = StaticPlatform::new(
        r#"{"1": {"state":"RUNNING","stats":{"name":"web-1","host":"10.0.0.1","port":61234,"mem_quota":268435456,"usage":{"cpu":0.02,"mem":52428800}}}}"#,
    );

    let (result, out) = run_to_string(&platform, &["instances", "web"]).await;

    result.unwrap();
    assert!(out.contains("Instance: 1\n"));
    assert!(out.contains("Name: web-1\n"));
    assert!(out.contains("Host: 10.0.0.1\n"));
    assert!(out.contains("Port: 61234\n"));
    assert!(out.contains("Memory: 50MB / 256MB\n"));
    assert!(out.ends_with("\n\n"));
}

// Index order is string order, not numeric order.
#[tokio::test]
async fn orders_instances_lexicographically() {
    let platform = StaticPlatform::new(
        r#"{
  "2": {"state":"RUNNING","stats":{"name":"w2"}},
  "0": {"state":"RUNNING","stats":{"name":"w0"}},
  "10": {"state":"RUNNING","stats":{"name":"w10"}}
}"#,
    );

    let (result, out) = run_to_string(&platform, &["instances", "web"]).await;

    result.unwrap();
    let order: Vec<&str> = out
        .lines()
        .filter_map(|l| l.strip_prefix("Instance: "))
        .collect();
    assert_eq!(order, ["0", "10", "2"]);
}

#[tokio::test]
async fn missing_app_name_makes_no_calls() {
    let platform = StaticPlatform::new("{}");

    let (result, out) = run_to_string(&platform, &["instances"]).await;

    assert!(matches!(result, Err(Error::MissingArgument)));
    assert_eq!(platform.requests(), 0);
    assert!(out.is_empty());
}

#[tokio::test]
async fn unknown_app_prints_nothing() {
    let platform = StaticPlatform::new("{}");

    let (result, out) = run_to_string(&platform, &["instances", "ghost"]).await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::AppLookup(_)));
    assert_eq!(err.to_string(), "App ghost not found");
    assert_eq!(platform.requests(), 1);
    assert!(out.is_empty());
}

#[tokio::test]
async fn garbage_body_prints_nothing() {
    let platform = StaticPlatform::new("not-json");

    let (result, out) = run_to_string(&platform, &["instances", "web"]).await;

    assert!(matches!(result, Err(Error::Decode(_))));
    assert!(out.is_empty());
}

#[tokio::test]
async fn one_bad_instance_prints_nothing() {
    let platform = StaticPlatform::new(
        r#"{"0": {"state":"RUNNING","stats":{"name":"ok"}}, "1": {"state":"RUNNING","stats":{"mem_quota":"lots"}}}"#,
    );

    let (result, out) = run_to_string(&platform, &["instances", "web"]).await;

    assert!(matches!(result, Err(Error::Decode(_))));
    assert!(out.is_empty());
}
