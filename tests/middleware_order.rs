use bytes::Bytes;
use parking_lot::Mutex;
use std::sync::Arc;
use susanin_router_rs::{
    Handler, Middleware, MiddlewareChain, Request, handler_fn, middleware_fn,
};

type Journal = Arc<Mutex<Vec<String>>>;

fn recording(label: &'static str, journal: &Journal) -> Middleware {
    let journal = Arc::clone(journal);
    middleware_fn(move |next: Handler| -> Handler {
        let journal = Arc::clone(&journal);
        Arc::new(move |req: Request| {
            journal.lock().push(format!("{label}-pre"));
            let response = next(req);
            journal.lock().push(format!("{label}-post"));
            response
        })
    })
}

fn terminal(journal: &Journal) -> Handler {
    let journal = Arc::clone(journal);
    handler_fn(move |_req| {
        journal.lock().push("terminal".to_string());
        http::Response::new(Bytes::from_static(b"done"))
    })
}

fn request() -> Request {
    http::Request::builder()
        .uri("/")
        .body(Bytes::new())
        .expect("request should build")
}

#[test]
fn chain_when_two_middlewares_attached_then_pre_is_lifo_and_post_is_fifo() {
    let journal: Journal = Arc::default();
    let mut chain = MiddlewareChain::new();
    chain.attach(recording("A", &journal));
    chain.attach(recording("B", &journal));

    let handler = chain.compose(terminal(&journal));
    let response = handler(request());

    assert_eq!(response.body().as_ref(), b"done");
    assert_eq!(
        *journal.lock(),
        vec!["B-pre", "A-pre", "terminal", "A-post", "B-post"]
    );
}

#[test]
fn chain_when_empty_then_compose_returns_terminal_behavior() {
    let journal: Journal = Arc::default();
    let chain = MiddlewareChain::new();
    assert!(chain.is_empty());

    let handler = chain.compose(terminal(&journal));
    handler(request());

    assert_eq!(*journal.lock(), vec!["terminal"]);
}

#[test]
fn chain_when_attach_all_used_then_order_matches_successive_attach() {
    let journal: Journal = Arc::default();
    let mut chain = MiddlewareChain::new();
    chain.attach_all([
        recording("A", &journal),
        recording("B", &journal),
        recording("C", &journal),
    ]);
    assert_eq!(chain.len(), 3);

    chain.compose(terminal(&journal))(request());

    assert_eq!(
        *journal.lock(),
        vec!["C-pre", "B-pre", "A-pre", "terminal", "A-post", "B-post", "C-post"]
    );
}

#[test]
fn chain_when_middleware_short_circuits_then_inner_layers_do_not_run() {
    let journal: Journal = Arc::default();
    let gate = middleware_fn(|_next: Handler| -> Handler {
        handler_fn(|_req| {
            let mut response = http::Response::new(Bytes::from_static(b"denied"));
            *response.status_mut() = http::StatusCode::FORBIDDEN;
            response
        })
    });

    let mut chain = MiddlewareChain::new();
    chain.attach(recording("A", &journal));
    chain.attach(gate);

    let response = chain.compose(terminal(&journal))(request());

    assert_eq!(response.status(), http::StatusCode::FORBIDDEN);
    assert!(journal.lock().is_empty());
}

#[test]
fn chain_when_composed_then_can_be_invoked_many_times() {
    let journal: Journal = Arc::default();
    let mut chain = MiddlewareChain::new();
    chain.attach(recording("A", &journal));

    let handler = chain.compose(terminal(&journal));
    handler(request());
    handler(request());

    assert_eq!(journal.lock().len(), 6);
}
