//! The two lines logged per request.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};

use crate::observability::format::{compact_bytes, strip_port};
use crate::style::{Palette, StatusClass};

const REQUEST_ARROW: &str = "<-";
const RESPONSE_ARROW: &str = "->";
const MISSING: &str = "-";

/// Pre-handling line: `<- METHOD URI HOST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub uri: String,
    pub remote_host: String,
}

impl RequestLine {
    pub fn from_request<B>(req: &Request<B>) -> Self {
        let remote_host = remote_addr(req)
            .map(|addr| strip_port(&addr).to_owned())
            .unwrap_or_else(|| MISSING.to_owned());

        Self {
            method: req.method().to_string(),
            uri: req.uri().to_string(),
            remote_host,
        }
    }

    /// Placeholder line for a request that never arrived.
    pub fn absent() -> Self {
        Self {
            method: MISSING.to_owned(),
            uri: MISSING.to_owned(),
            remote_host: MISSING.to_owned(),
        }
    }

    pub fn render(&self, palette: &Palette) -> String {
        format!(
            "{} {} {} {}",
            palette.subtle.paint(REQUEST_ARROW),
            palette.method.paint(&self.method),
            palette.uri.paint(&self.uri),
            palette.address.paint(&self.remote_host),
        )
    }
}

/// Post-handling line: `-> CODE REASON BYTES ELAPSED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseLine {
    pub status: StatusCode,
    pub bytes: u64,
    pub elapsed: Duration,
}

impl ResponseLine {
    pub fn render(&self, palette: &Palette) -> String {
        let status = match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_u16().to_string(),
        };
        let style = palette.status(StatusClass::from(self.status));

        format!(
            "{} {} {} {}",
            palette.subtle.paint(RESPONSE_ARROW),
            style.paint(&status),
            palette.subtle.paint(&compact_bytes(self.bytes)),
            palette.elapsed.paint(&format!("{:?}", self.elapsed)),
        )
    }
}

/// Peer address as `ip:port`, from axum's `ConnectInfo` or a bare
/// `SocketAddr` extension.
fn remote_addr<B>(req: &Request<B>) -> Option<String> {
    let extensions = req.extensions();
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr)
        .or_else(|| extensions.get::<SocketAddr>().copied())
        .map(|addr| addr.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    fn request(method: Method, uri: &str) -> Request<()> {
        Request::builder().method(method).uri(uri).body(()).unwrap()
    }

    #[test]
    fn request_line_from_connect_info() {
        let mut req = request(Method::POST, "/meow?kind=loud");
        req.extensions_mut()
            .insert(ConnectInfo::<SocketAddr>("10.1.2.3:40000".parse().unwrap()));

        let line = RequestLine::from_request(&req);
        assert_eq!(line.remote_host, "10.1.2.3");
        assert_eq!(line.render(&Palette::plain()), "<- POST /meow?kind=loud 10.1.2.3");
    }

    #[test]
    fn request_line_from_bare_socket_addr() {
        let mut req = request(Method::GET, "/");
        let addr: SocketAddr = "[::1]:8080".parse().unwrap();
        req.extensions_mut().insert(addr);

        assert_eq!(RequestLine::from_request(&req).remote_host, "[::1]");
    }

    #[test]
    fn request_line_without_peer() {
        let req = request(Method::PUT, "/purr");
        assert_eq!(
            RequestLine::from_request(&req).render(&Palette::plain()),
            "<- PUT /purr -"
        );
        assert_eq!(RequestLine::absent().render(&Palette::plain()), "<- - - -");
    }

    #[test]
    fn response_line_plain() {
        let line = ResponseLine {
            status: StatusCode::NOT_FOUND,
            bytes: 8,
            elapsed: Duration::from_micros(1500),
        };
        assert_eq!(line.render(&Palette::plain()), "-> 404 Not Found 8B 1.5ms");
    }

    #[test]
    fn response_line_unknown_reason() {
        let line = ResponseLine {
            status: StatusCode::from_u16(599).unwrap(),
            bytes: 1234,
            elapsed: Duration::from_millis(2),
        };
        assert_eq!(line.render(&Palette::plain()), "-> 599 1.2kB 2ms");
    }

    #[test]
    fn response_line_uses_status_style() {
        crossterm::style::Colored::set_ansi_color_disabled(false);
        let palette = Palette::themed(crate::style::Theme::Dark);
        let line = ResponseLine {
            status: StatusCode::TEMPORARY_REDIRECT,
            bytes: 4,
            elapsed: Duration::ZERO,
        };

        let rendered = line.render(&palette);
        assert!(rendered.contains(&palette.redirect.paint("307 Temporary Redirect")));
        assert!(rendered.contains(&palette.subtle.paint("4B")));
    }
}
