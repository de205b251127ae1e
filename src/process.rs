use crate::warning;
use std::ffi::OsStr;
use std::io::{self, Read, Write};
use std::process::{ChildStdin, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use wait_timeout::ChildExt;

/// run an external command line and return its stdout
///
/// `command_line` is split with shell quoting rules so it may carry its own
/// arguments; `args` are appended after them. when `input` is given it is
/// written to the child's stdin, which is then closed. without a `timeout`
/// the child is waited on for as long as it takes
pub fn run(
    command_line: &str,
    args: &[&OsStr],
    input: Option<&[u8]>,
    timeout: Option<Duration>,
) -> Result<String, String> {
    let mut words = shlex::split(command_line)
        .filter(|words| !words.is_empty())
        .ok_or_else(|| format!("invalid command line: {command_line}"))?;
    let program = words.remove(0);

    let mut child = Command::new(&program)
        .args(&words)
        .args(args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("failed to spawn {program}: {e}"))?;

    // feed stdin and drain both pipes while the child runs, so neither a child
    // that never reads nor a chatty one can stall us past the timeout
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| format!("failed to take stdout from {program}"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| format!("failed to take stderr from {program}"))?;
    let stdout_reader = drain(stdout);
    let stderr_reader = drain(stderr);
    let stdin_writer = input
        .zip(child.stdin.take())
        .map(|(input, stdin)| feed(stdin, input.to_vec()));

    let status = match timeout {
        Some(timeout) => match child.wait_timeout(timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                if let Err(e) = child.kill() {
                    warning!("failed to kill {} process: {}", program, e);
                }
                let _ = child.wait();
                return Err(format!(
                    "{program} did not finish within {}s",
                    timeout.as_secs_f64()
                ));
            }
            Err(e) => return Err(format!("failed to wait for {program}: {e}")),
        },
        None => child
            .wait()
            .map_err(|e| format!("failed to wait for {program}: {e}"))?,
    };

    let stdout_data = collect(&program, "stdout", stdout_reader);
    let stderr_data = collect(&program, "stderr", stderr_reader);

    if !status.success() {
        let stderr_text = String::from_utf8_lossy(&stderr_data);
        let stderr_text = stderr_text.trim();
        return Err(if stderr_text.is_empty() {
            format!("{program} failed with {status}")
        } else {
            format!("{program} failed with {status}: {stderr_text}")
        });
    }

    if let Some(writer) = stdin_writer {
        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(format!("failed to write to {program} stdin: {e}")),
            Err(_) => return Err(format!("writer for {program} stdin panicked")),
        }
    }

    Ok(String::from_utf8_lossy(&stdout_data).into_owned())
}

/// write everything then drop the handle, closing the child's stdin
fn feed(mut stdin: ChildStdin, input: Vec<u8>) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || stdin.write_all(&input))
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut data = Vec::new();
        pipe.read_to_end(&mut data)?;
        Ok(data)
    })
}

fn collect(program: &str, stream: &str, reader: JoinHandle<io::Result<Vec<u8>>>) -> Vec<u8> {
    match reader.join() {
        Ok(Ok(data)) => data,
        Ok(Err(e)) => {
            warning!("failed to read {} {}: {}", program, stream, e);
            Vec::new()
        }
        Err(_) => {
            warning!("reader for {} {} panicked", program, stream);
            Vec::new()
        }
    }
}
