// src/core/net.rs
//
// Blocking HTTP GET with a shared agent, a browser-like User-Agent and a
// bounded body.

use std::io::Read;
use std::sync::OnceLock;
use std::time::Duration;

use crate::config::consts::{HTTP_TIMEOUT_SECS, MAX_BODY_BYTES, USER_AGENT};
use crate::error::{PanelError, Result};

fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
    })
}

pub fn http_get(url: &str) -> Result<String> {
    let fail = |message: String| PanelError::Http { url: s!(url), message };

    let resp = match agent()
        .get(url)
        .set("Accept", "text/html,application/xhtml+xml")
        .set("Accept-Language", "en-US,en;q=0.8")
        .call()
    {
        Ok(r) => r,
        Err(ureq::Error::Status(code, r)) => {
            return Err(fail(format!("status {code} {}", r.status_text())));
        }
        Err(ureq::Error::Transport(t)) => return Err(fail(t.to_string())),
    };

    let mut buf = Vec::new();
    resp.into_reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| fail(e.to_string()))?;
    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(fail(format!("body exceeded {MAX_BODY_BYTES} bytes")));
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/")
    }

    #[test]
    fn returns_body_on_200() {
        let body = "<table><tr id=\"tr1_1\"></tr></table>";
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ));
        assert_eq!(http_get(&url).unwrap(), body);
    }

    #[test]
    fn non_success_status_is_an_error() {
        let url = serve_once(s!("HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"));
        let err = http_get(&url).unwrap_err();
        assert!(matches!(err, PanelError::Http { .. }));
        assert!(err.to_string().contains("503"));
    }
}
