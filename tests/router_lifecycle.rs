use bytes::Bytes;
use http::StatusCode;
use std::sync::Arc;
use susanin_router_rs::{
    Handler, HttpMethod, Request, Router, RouterError, RouterOptions, RouterOptionsError, TrieError,
    capture, handler_fn, middleware_fn,
};

fn request(path: &str) -> Request {
    http::Request::builder()
        .uri(path)
        .body(Bytes::new())
        .expect("request should build")
}

fn echo_id() -> Handler {
    handler_fn(|req| {
        let id = capture(&req, "id").unwrap_or("-").to_string();
        http::Response::new(Bytes::from(id))
    })
}

#[test]
fn router_when_add_called_after_seal_then_returns_add_while_sealed() {
    let router = Router::new(None).expect("default options are valid");
    router
        .add(HttpMethod::Get, "/users/:id", echo_id())
        .expect("add before seal should succeed");
    router.seal();

    let err = router
        .add(HttpMethod::Get, "/late", echo_id())
        .expect_err("expected sealed router to reject add");

    match err {
        RouterError::AddWhileSealed { pattern } => assert_eq!(pattern, "/late"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_attach_or_not_found_after_seal_then_rejected() {
    let router = Router::new(None).expect("default options are valid");
    router.seal();

    let attach = router.attach(middleware_fn(|next: Handler| next));
    assert_eq!(attach, Err(RouterError::AttachWhileSealed));

    let not_found = router.set_not_found(echo_id());
    assert_eq!(not_found, Err(RouterError::NotFoundWhileSealed));
}

#[test]
fn router_when_dispatch_before_seal_then_returns_dispatch_while_mutable() {
    let router = Router::default();
    router
        .add(HttpMethod::Get, "/users/:id", echo_id())
        .expect("add should succeed");

    let err = router
        .dispatch(request("/users/1"))
        .expect_err("dispatch must wait for seal");

    assert_eq!(err, RouterError::DispatchWhileMutable);
    assert!(!router.is_sealed());
}

#[test]
fn router_when_sealed_then_dispatches_through_middleware() {
    let router = Router::new(None).expect("default options are valid");
    router
        .add(HttpMethod::Get, "/users/:id", echo_id())
        .expect("add should succeed");
    router
        .attach(middleware_fn(|next: Handler| -> Handler {
            Arc::new(move |req: Request| {
                let mut response = next(req);
                response
                    .headers_mut()
                    .insert("x-wrapped", http::HeaderValue::from_static("yes"));
                response
            })
        }))
        .expect("attach should succeed");
    router.seal();
    router.seal();

    let response = router
        .dispatch(request("/users/42"))
        .expect("sealed router should dispatch");

    assert!(router.is_sealed());
    assert_eq!(response.body().as_ref(), b"42");
    assert_eq!(
        response.headers().get("x-wrapped").map(|v| v.as_bytes()),
        Some(&b"yes"[..])
    );
}

#[test]
fn router_when_registration_fails_then_error_is_wrapped() {
    let router = Router::new(None).expect("default options are valid");

    let err = router
        .add(HttpMethod::Get, "/files/*/tail", echo_id())
        .expect_err("wildcard in the middle must fail");

    assert!(matches!(err, RouterError::Trie(TrieError::InvalidPattern(_))));
}

#[test]
fn router_when_cleared_then_registration_reopens() {
    let router = Router::new(None).expect("default options are valid");
    router
        .add(HttpMethod::Get, "/users/:id", echo_id())
        .expect("add should succeed");
    router.seal();

    router.clear();

    assert!(!router.is_sealed());
    router
        .add(HttpMethod::Get, "/users/:id", echo_id())
        .expect("cleared router should accept the same pattern");
    router.seal();
    let response = router
        .dispatch(request("/nope"))
        .expect("sealed router should dispatch");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn router_when_routes_added_from_threads_then_all_are_registered() {
    let router = Arc::new(Router::new(None).expect("default options are valid"));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                router
                    .add(HttpMethod::Get, &format!("/worker{i}/:id"), echo_id())
                    .expect("concurrent add should succeed");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread should not panic");
    }
    router.seal();

    let dispatcher = router.dispatcher().expect("router is sealed");
    let trie = dispatcher.trie(HttpMethod::Get).expect("GET routes exist");
    assert_eq!(trie.len(), 4);
    for i in 0..4 {
        let response = dispatcher.dispatch(request(&format!("/worker{i}/7")));
        assert_eq!(response.body().as_ref(), b"7");
    }
}

#[test]
fn router_when_options_carry_dynamic_prefix_then_construction_fails() {
    let options = RouterOptions {
        default_prefix: Some("/api/:x".to_string()),
        ..RouterOptions::default()
    };

    let err = Router::new(Some(options)).expect_err("dynamic prefix must be rejected");

    assert_eq!(
        err,
        RouterError::Options(RouterOptionsError::PrefixNotLiteral {
            prefix: "/api/:x".to_string(),
        })
    );
}
