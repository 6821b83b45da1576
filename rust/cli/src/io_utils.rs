//! Input helpers for interactive commands.

use std::io::BufRead;

/// Reads one line, trimmed. Returns `None` on EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use holobac_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  stand 10 \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("stand 10"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads lines until one is not blank.
pub fn read_nonempty_line(stdin: &mut dyn BufRead) -> Option<String> {
    loop {
        let line = read_stdin_line(stdin)?;
        if !line.is_empty() {
            return Some(line);
        }
    }
}
