use bitflags::bitflags;

pub const HTTP_METHOD_COUNT: usize = 7;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HttpMethod {
    Get = 0,
    Put = 1,
    Post = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; HTTP_METHOD_COUNT] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Maps a wire-level method onto the supported verbs; `None` for anything else
    /// (`TRACE`, `CONNECT`, extension methods).
    pub fn from_http(method: &http::Method) -> Option<Self> {
        match *method {
            http::Method::GET => Some(HttpMethod::Get),
            http::Method::PUT => Some(HttpMethod::Put),
            http::Method::POST => Some(HttpMethod::Post),
            http::Method::DELETE => Some(HttpMethod::Delete),
            http::Method::PATCH => Some(HttpMethod::Patch),
            http::Method::HEAD => Some(HttpMethod::Head),
            http::Method::OPTIONS => Some(HttpMethod::Options),
            _ => None,
        }
    }

    pub fn mask(self) -> MethodMask {
        MethodMask::from_bits_truncate(1 << self.index())
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Delete => http::Method::DELETE,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Head => http::Method::HEAD,
            HttpMethod::Options => http::Method::OPTIONS,
        }
    }
}

bitflags! {
    /// Set of verbs that own at least one registered route.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodMask: u8 {
        const GET = 0b0000_0001;
        const PUT = 0b0000_0010;
        const POST = 0b0000_0100;
        const DELETE = 0b0000_1000;
        const PATCH = 0b0001_0000;
        const HEAD = 0b0010_0000;
        const OPTIONS = 0b0100_0000;
    }
}

impl MethodMask {
    pub fn has(self, method: HttpMethod) -> bool {
        self.contains(method.mask())
    }

    pub fn methods(self) -> impl Iterator<Item = HttpMethod> {
        HttpMethod::ALL.into_iter().filter(move |m| self.has(*m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_supported_wire_methods() {
        assert_eq!(
            HttpMethod::from_http(&http::Method::PATCH),
            Some(HttpMethod::Patch)
        );
        assert_eq!(HttpMethod::from_http(&http::Method::TRACE), None);
        assert_eq!(HttpMethod::from_http(&http::Method::CONNECT), None);
    }

    #[test]
    fn mask_bits_follow_discriminants() {
        for method in HttpMethod::ALL {
            assert_eq!(method.mask().bits(), 1 << (method as u8));
        }
        let mask = HttpMethod::Get.mask() | HttpMethod::Head.mask();
        let listed: Vec<HttpMethod> = mask.methods().collect();
        assert_eq!(listed, vec![HttpMethod::Get, HttpMethod::Head]);
    }
}
