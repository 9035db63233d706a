use crate::trie::Captures;
use crate::types::Request;

/// Variables captured for the route that matched this request. `None` when the route
/// captured nothing.
pub fn captures(req: &Request) -> Option<&Captures> {
    req.extensions().get::<Captures>()
}

pub fn capture<'r>(req: &'r Request, name: &str) -> Option<&'r str> {
    captures(req).and_then(|values| values.get(name))
}
