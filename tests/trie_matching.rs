use susanin_router_rs::{MatchKind, PatternTrie};

fn scenario_trie() -> PatternTrie<&'static str> {
    let mut trie = PatternTrie::new();
    for (pattern, handler) in [
        ("/", "root"),
        ("/home/*", "home"),
        ("/hello/:fname/:lname", "hello"),
        ("/short", "short"),
    ] {
        trie.register(pattern, handler)
            .unwrap_or_else(|err| panic!("{pattern} should register: {err}"));
    }
    trie
}

#[test]
fn trie_when_static_pattern_matched_then_returns_handler_without_captures() {
    let mut trie = PatternTrie::new();
    let patterns = ["/", "/short", "/api/v1/status", "/a/b/c/d/e"];
    for pattern in patterns {
        trie.register(pattern, pattern).expect("should register");
    }

    for pattern in patterns {
        let found = trie.find(pattern).expect("static route should match");
        assert_eq!(*found.handler, pattern);
        assert!(found.captures.is_empty());
        assert_eq!(found.kind, MatchKind::Exact);
    }
}

#[test]
fn trie_when_variable_pattern_matched_then_captures_value() {
    let mut trie = PatternTrie::new();
    trie.register("/hello/:name", "hello").expect("should register");

    let found = trie.find("/hello/alex").expect("variable route should match");

    assert_eq!(*found.handler, "hello");
    assert_eq!(found.captures.len(), 1);
    assert_eq!(found.captures.get("name"), Some("alex"));
}

#[test]
fn trie_when_literal_and_wildcard_siblings_then_literal_wins() {
    let mut trie = PatternTrie::new();
    trie.register("/hello/*", "splat").expect("should register");
    trie.register("/hello/test", "literal").expect("should register");

    let exact = trie.find("/hello/test").expect("literal should match");
    assert_eq!(*exact.handler, "literal");
    assert_eq!(exact.kind, MatchKind::Exact);

    let fallback = trie
        .find("/hello/anything-else")
        .expect("wildcard should catch the rest");
    assert_eq!(*fallback.handler, "splat");
    assert_eq!(fallback.kind, MatchKind::Fallback);
}

#[test]
fn trie_when_trailing_separator_present_then_results_are_identical() {
    let trie = scenario_trie();

    let plain = trie.find("/short").expect("should match");
    let trailing = trie.find("/short/").expect("should match");

    assert_eq!(plain, trailing);
    assert_eq!(
        trie.find("/hello/john/doe"),
        trie.find("/hello/john/doe/")
    );
}

#[test]
fn trie_when_walk_diverges_after_capture_then_fallback_keeps_partial_captures() {
    let mut trie = PatternTrie::new();
    trie.register("/hello/:fname/:lname", "full").expect("should register");
    trie.register("/hello/*", "splat").expect("should register");

    let found = trie.find("/hello/john").expect("fallback should answer");

    assert_eq!(*found.handler, "splat");
    assert_eq!(found.kind, MatchKind::Fallback);
    assert_eq!(found.captures.len(), 1);
    assert_eq!(found.captures.get("fname"), Some("john"));
}

#[test]
fn trie_when_scenario_paths_requested_then_expected_handlers_answer() {
    let trie = scenario_trie();

    assert_eq!(trie.find("/home/anything").map(|m| *m.handler), Some("home"));
    assert_eq!(trie.find("/home/a/b/c").map(|m| *m.handler), Some("home"));

    let hello = trie.find("/hello/john/doe").expect("hello should match");
    assert_eq!(*hello.handler, "hello");
    let captured: Vec<(&str, &str)> = hello.captures.iter().collect();
    assert_eq!(captured, vec![("fname", "john"), ("lname", "doe")]);

    assert_eq!(trie.find("/").map(|m| *m.handler), Some("root"));
    assert!(trie.find("/nope").is_none());
}

#[test]
fn trie_when_no_wildcard_on_path_then_returns_none() {
    let trie = scenario_trie();

    assert!(trie.find("/hello/john").is_none());
    assert!(trie.find("/hello/john/doe/extra").is_none());
    assert!(trie.find("/short/extra").is_none());
}

#[test]
fn trie_when_matched_concurrently_then_every_thread_sees_same_result() {
    let trie = std::sync::Arc::new(scenario_trie());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let trie = std::sync::Arc::clone(&trie);
            std::thread::spawn(move || {
                let path = format!("/hello/user{i}/doe");
                let found = trie.find(&path).expect("should match");
                found.captures.get("fname").map(str::to_string)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let fname = handle.join().expect("thread should not panic");
        assert_eq!(fname, Some(format!("user{i}")));
    }
}
