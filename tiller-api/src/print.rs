//! Output sinks.
//!
//! All help text and action output reaches the user through a `Print`
//! implementation. The console never writes to stdout directly.

use std::sync::{Arc, Mutex};

/// The channel through which the console emits text.
pub trait Print: Send + Sync {
    /// Print the given string without a trailing newline.
    fn print(&self, text: &str);

    /// Print the given string and move to the next line.
    fn println(&self, line: &str);
}

/// `Print` backed by the process stdout.
pub struct StdoutPrint;

impl Print for StdoutPrint {
    fn print(&self, text: &str) {
        print!("{}", text);
    }

    fn println(&self, line: &str) {
        println!("{}", line);
    }
}

/// `Print` that collects output in memory.
///
/// Clones share the same buffer, so a host (or a test) can keep one handle
/// and hand another to the console.
#[derive(Clone, Default)]
pub struct BufferPrint {
    inner: Arc<Mutex<Buffer>>,
}

#[derive(Default)]
struct Buffer {
    lines: Vec<String>,
    partial: String,
}

impl BufferPrint {
    pub fn new() -> Self {
        Self::default()
    }

    /// The completed lines printed so far.
    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().expect("buffer lock").lines.clone()
    }

    /// Everything printed so far, completed lines joined with newlines and
    /// any unterminated `print` output appended.
    pub fn text(&self) -> String {
        let buffer = self.inner.lock().expect("buffer lock");
        let mut text = buffer.lines.join("\n");
        if !buffer.partial.is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&buffer.partial);
        }
        text
    }

    /// Discard everything collected so far.
    pub fn clear(&self) {
        let mut buffer = self.inner.lock().expect("buffer lock");
        buffer.lines.clear();
        buffer.partial.clear();
    }
}

impl Print for BufferPrint {
    fn print(&self, text: &str) {
        self.inner.lock().expect("buffer lock").partial.push_str(text);
    }

    fn println(&self, line: &str) {
        let mut buffer = self.inner.lock().expect("buffer lock");
        let mut full = std::mem::take(&mut buffer.partial);
        full.push_str(line);
        buffer.lines.push(full);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_collects_lines() {
        let out = BufferPrint::new();
        out.println("one");
        out.println("two");
        assert_eq!(out.lines(), vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_buffer_partial_joins_next_println() {
        let out = BufferPrint::new();
        out.print("hello ");
        out.println("world");
        assert_eq!(out.lines(), vec!["hello world".to_string()]);
    }

    #[test]
    fn test_buffer_text_includes_partial() {
        let out = BufferPrint::new();
        out.println("done");
        out.print("pend");
        assert_eq!(out.text(), "done\npend");
    }

    #[test]
    fn test_clones_share_buffer() {
        let out = BufferPrint::new();
        let other = out.clone();
        other.println("shared");
        assert_eq!(out.lines(), vec!["shared".to_string()]);
    }
}
