//! Connection upgrade (hijack) capability.
//!
//! `RequestLog` forwards requests untouched, so hyper's upgrade handle
//! reaches the inner service through any number of logging layers. Servers
//! built without upgrade support never attach the handle; asking for it then
//! fails with [`Error::HijackUnsupported`].

use axum::http::Request;
use hyper::upgrade::OnUpgrade;

use crate::error::Error;

/// Whether the server attached an upgrade handle to this request.
pub fn is_supported<B>(req: &Request<B>) -> bool {
    req.extensions().get::<OnUpgrade>().is_some()
}

/// Take the upgrade handle out of the request.
///
/// Resolve the returned future after sending a `101 Switching Protocols`
/// response to obtain the raw connection.
pub fn on<B>(req: &mut Request<B>) -> Result<OnUpgrade, Error> {
    req.extensions_mut()
        .remove::<OnUpgrade>()
        .ok_or(Error::HijackUnsupported)
}
