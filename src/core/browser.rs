// src/core/browser.rs
//
// Headless Chromium as a subprocess: `--dump-dom` prints the rendered DOM to
// stdout once the page's scripts have run.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::consts::BROWSER_CANDIDATES;
use crate::config::options::BrowserOptions;
use crate::error::{PanelError, Result};

const POLL: Duration = Duration::from_millis(100);
const STDERR_TAIL: usize = 400;
/// How long to wait for the pipes to close once the browser has exited.
const DRAIN_GRACE: Duration = Duration::from_secs(5);

/// `CHROME_BINARY` when it points at a file, else the first known name on `PATH`.
pub fn find_browser(opts: &BrowserOptions) -> Option<PathBuf> {
    if let Some(bin) = &opts.binary {
        if bin.is_file() {
            return Some(bin.clone());
        }
        // A bare name ("chromium") is looked up like the defaults.
        if bin.components().count() == 1 {
            if let Some(found) = search_path(&bin.to_string_lossy()) {
                return Some(found);
            }
        }
        logw!("CHROME_BINARY={} not found; searching PATH", bin.display());
    }
    BROWSER_CANDIDATES.iter().find_map(|name| search_path(name))
}

fn search_path(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|p| p.is_file())
}

/// Render `url` and return the DOM. The browser runs in its own process
/// group, and the whole group is killed when `timeout` elapses.
pub fn dump_dom(bin: &Path, url: &str, timeout: Duration) -> Result<String> {
    logd!("browser: {} --dump-dom {}", bin.display(), url);

    let mut cmd = Command::new(bin);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }
    let mut child = cmd
        .args([
            "--headless=new",
            "--disable-gpu",
            "--no-sandbox",
            "--disable-dev-shm-usage",
            "--hide-scrollbars",
            "--mute-audio",
            "--blink-settings=imagesEnabled=false",
        ])
        .arg(format!("--user-agent={}", crate::config::consts::USER_AGENT))
        .arg("--dump-dom")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| PanelError::io(bin, e))?;

    // Drain both pipes on threads so a chatty child can't block on a full pipe.
    let out_rx = drain(child.stdout.take());
    let err_rx = drain(child.stderr.take());

    let started = Instant::now();
    let status = loop {
        match child.try_wait().map_err(|e| PanelError::io(bin, e))? {
            Some(status) => break status,
            None if started.elapsed() >= timeout => {
                kill_group(&mut child);
                let _ = child.wait();
                logw!("browser: timed out after {}s on {}", timeout.as_secs(), url);
                return Err(PanelError::BrowserTimeout { secs: timeout.as_secs() });
            }
            None => thread::sleep(POLL),
        }
    };

    // Leftover helper processes can hold the pipes open after the main one exits.
    let out = match out_rx.recv_timeout(DRAIN_GRACE) {
        Ok(buf) => buf,
        Err(_) => {
            logw!("browser: output still open {}s after exit; killing leftovers", DRAIN_GRACE.as_secs());
            kill_group(&mut child);
            out_rx.recv_timeout(DRAIN_GRACE).unwrap_or_default()
        }
    };
    let err = err_rx.recv_timeout(DRAIN_GRACE).unwrap_or_default();

    if !status.success() {
        return Err(PanelError::BrowserFailed {
            status: status.to_string(),
            stderr: tail(&String::from_utf8_lossy(&err), STDERR_TAIL),
        });
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> mpsc::Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut p) = pipe {
            let _ = p.read_to_end(&mut buf);
        }
        let _ = tx.send(buf);
    });
    rx
}

/// SIGKILL the child's process group (the child itself elsewhere).
fn kill_group(child: &mut Child) {
    #[cfg(unix)]
    {
        let group = format!("-{}", child.id());
        match Command::new("kill").args(["-KILL", "--", &group]).status() {
            Ok(st) if st.success() => return,
            Ok(st) => logd!("browser: kill {group} exited with {st}"),
            Err(e) => logd!("browser: kill {group}: {e}"),
        }
    }
    let _ = child.kill();
}

fn tail(s: &str, max_chars: usize) -> String {
    let s = s.trim();
    let n = s.chars().count();
    if n <= max_chars {
        return s.to_string();
    }
    s.chars().skip(n - max_chars).collect()
}
