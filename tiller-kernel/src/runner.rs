//! The blocking read-and-dispatch worker.
//!
//! A single dedicated thread owns the line loop; dispatch of one line fully
//! completes before the next is read. Stopping is cooperative: the flag only
//! prevents starting another line, it does not interrupt a blocked read or
//! an in-flight dispatch.

use std::io::{self, BufRead, BufReader};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crate::Console;

/// Handle to the console's worker thread.
pub struct Runner {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Runner {
    /// Spawn the worker over an arbitrary line-oriented input.
    ///
    /// The thread exits on end of input, on a read error, or after the next
    /// line once [`Runner::stop`] has been called.
    pub fn spawn<R>(console: Arc<Console>, input: R) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("tiller-console".to_string())
            .spawn(move || {
                let mut lines = input.lines();
                while !flag.load(Ordering::SeqCst) {
                    match lines.next() {
                        Some(Ok(line)) => console.dispatch(&line),
                        Some(Err(err)) => {
                            tracing::warn!("console input error: {}", err);
                            break;
                        }
                        None => break,
                    }
                }
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Spawn the worker over the process stdin.
    pub fn spawn_stdin(console: Arc<Console>) -> io::Result<Self> {
        Self::spawn(console, BufReader::new(io::stdin()))
    }

    /// Whether the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Request a cooperative stop and wait for the worker to exit.
    ///
    /// Blocks until the current line read completes; it does not interrupt
    /// one in flight.
    pub fn stop(mut self) -> thread::Result<()> {
        self.stop.store(true, Ordering::SeqCst);
        self.join_inner()
    }

    /// Wait for the worker to exit on its own (end of input).
    pub fn join(mut self) -> thread::Result<()> {
        self.join_inner()
    }

    fn join_inner(&mut self) -> thread::Result<()> {
        match self.handle.take() {
            Some(handle) => handle.join(),
            None => Ok(()),
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        // Only flag; joining here could block drop on a held read.
        self.stop.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionSpec, Console, GroupSpec};
    use std::io::Cursor;
    use std::sync::atomic::AtomicUsize;
    use tiller_api::BufferPrint;

    fn echo_console(out: BufferPrint, calls: Arc<AtomicUsize>) -> Arc<Console> {
        Arc::new(
            Console::builder()
                .group(GroupSpec::new("ping").action(ActionSpec::root().run(move |cmd| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    cmd.println("pong");
                    Ok(())
                })))
                .output(out)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_runner_dispatches_each_line() {
        let out = BufferPrint::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let console = echo_console(out.clone(), Arc::clone(&calls));

        let input = Cursor::new(b"ping\nping\nbogus\n".to_vec());
        let runner = Runner::spawn(console, input).unwrap();
        runner.join().unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(out.lines().len(), 3);
        assert!(out.lines()[2].contains("bogus"));
    }

    #[test]
    fn test_runner_stops_at_end_of_input() {
        let out = BufferPrint::new();
        let console = echo_console(out, Arc::new(AtomicUsize::new(0)));
        let runner = Runner::spawn(console, Cursor::new(Vec::new())).unwrap();
        runner.join().unwrap();
    }

    #[test]
    fn test_stop_is_cooperative() {
        let out = BufferPrint::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let console = echo_console(out, Arc::clone(&calls));

        // Empty input: the worker exits immediately; stop still joins cleanly.
        let runner = Runner::spawn(console, Cursor::new(Vec::new())).unwrap();
        runner.stop().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
