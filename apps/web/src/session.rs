use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::store::SessionId;

pub const SESSION_COOKIE: &str = "rescan_session";

/// Session carried by the request, if it has a well-formed cookie.
pub fn current_session(jar: &CookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok())
}

/// Returns the request's session, minting one (and adding its cookie to the
/// jar) when the request has none. The cookie carries no Max-Age, so the
/// browser drops it when the browsing session ends.
pub fn ensure_session(jar: CookieJar) -> (CookieJar, SessionId) {
    if let Some(session) = current_session(&jar) {
        return (jar, session);
    }
    let session = SessionId::new();
    let cookie = Cookie::build((SESSION_COOKIE, session.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), session)
}
