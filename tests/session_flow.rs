//! End-to-end session tests against a mock MediaWiki backend.
//!
//! Console input and output are in-memory buffers and the browser launcher
//! records URLs instead of spawning anything.

use std::io::Cursor;
use std::sync::Mutex;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wikiseek::{BrowserLauncher, Outcome, Session};
use wikiseek_search::{Retriever, SearchConfig, StrategyKind};

#[derive(Default)]
struct RecordingLauncher {
    opened: Mutex<Vec<String>>,
}

impl BrowserLauncher for RecordingLauncher {
    fn open(&self, url: &str) -> wikiseek::Result<()> {
        self.opened
            .lock()
            .expect("launcher lock")
            .push(url.to_owned());
        Ok(())
    }
}

struct Transcript {
    outcome: Outcome,
    output: String,
    opened: Vec<String>,
}

async fn run_session(config: SearchConfig, input: &'static str) -> Transcript {
    tokio::task::spawn_blocking(move || {
        let launcher = RecordingLauncher::default();
        let retriever = Retriever::new(config).expect("retriever");
        let session = Session::new(retriever, &launcher);

        let mut reader = Cursor::new(input);
        let mut out = Vec::new();
        let outcome = session.run(&mut reader, &mut out).expect("session");
        drop(session);

        Transcript {
            outcome,
            output: String::from_utf8(out).expect("utf8"),
            opened: launcher.opened.into_inner().expect("launcher lock"),
        }
    })
    .await
    .expect("blocking task")
}

fn config_for(server: &MockServer) -> SearchConfig {
    SearchConfig {
        base_url: server.uri(),
        timeout_seconds: 2,
        ..Default::default()
    }
}

#[tokio::test]
async fn search_list_choose_and_open_by_identifier() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .and(query_param("srsearch", "Москва"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"search": [
                {"title": "Москва", "pageid": 202, "snippet": "<span class=\"searchmatch\">Москва</span> — столица"},
                {"title": "Москва (река)", "pageid": 1450, "snippet": "река"},
                {"title": "Московский Кремль", "pageid": 3101, "snippet": ""}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transcript = run_session(config_for(&server), "Москва\nfoo\n4\n2\n").await;

    let expected = format!("{}/w/index.php?curid=1450", server.uri());
    assert_eq!(transcript.outcome, Outcome::Opened { url: expected.clone() });
    assert_eq!(transcript.opened, vec![expected]);

    let output = &transcript.output;
    assert!(output.contains("1. Москва\n   Москва — столица\n"));
    assert!(output.contains("2. Москва (река)\n"));
    assert!(output.contains("3. Московский Кремль\n"));
    assert!(output.contains("Please enter a number"));
    assert!(output.contains("Enter a value from 1 to 3."));
}

#[tokio::test]
async fn opensearch_title_without_identifier_opens_by_slug() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "opensearch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "ferris",
            ["Ferris the crab"],
            [""],
            ["https://example.org/wiki/Ferris_the_crab"]
        ])))
        .mount(&server)
        .await;

    let config = SearchConfig {
        strategies: vec![StrategyKind::OpenSearch],
        resolve_page_ids: false,
        ..config_for(&server)
    };
    let transcript = run_session(config, "ferris\n1\n").await;

    let expected = format!("{}/wiki/Ferris_the_crab", server.uri());
    assert_eq!(transcript.opened, vec![expected.clone()]);
    assert_eq!(transcript.outcome, Outcome::Opened { url: expected });
}

#[tokio::test]
async fn total_retrieval_failure_opens_backend_search_page() {
    // Nothing mounted: every strategy gets a 404.
    let server = MockServer::start().await;

    let transcript = run_session(config_for(&server), "кот\n").await;

    let expected = format!("{}/w/index.php?search=%D0%BA%D0%BE%D1%82", server.uri());
    assert_eq!(transcript.outcome, Outcome::FellBack { url: expected.clone() });
    assert_eq!(transcript.opened, vec![expected]);
    assert!(transcript.output.contains("Nothing found for \"кот\"."));
}

#[tokio::test]
async fn cancel_after_listing_opens_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"search": [{"title": "Rust", "pageid": 1}]}
        })))
        .mount(&server)
        .await;

    let transcript = run_session(config_for(&server), "rust\nq\n").await;

    assert_eq!(transcript.outcome, Outcome::Cancelled);
    assert!(transcript.opened.is_empty());
}

#[tokio::test]
async fn empty_query_makes_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let transcript = run_session(config_for(&server), "\n").await;

    assert_eq!(transcript.outcome, Outcome::EmptyQuery);
    assert!(transcript.opened.is_empty());
}
