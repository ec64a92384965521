//! Best-effort console preparation.
//!
//! Everything here is cosmetic or platform-dependent: output encoding,
//! window title, banner, and the error-branch acknowledgment pause. None of
//! these operations may abort the launcher; failures are logged at debug
//! level and swallowed.

use colored::*;
use crossterm::{execute, terminal::SetTitle};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Switch console output to UTF-8.
///
/// On Windows this shells out to `chcp 65001`, mirroring what console
/// launch scripts do there. Elsewhere terminals are UTF-8 already and this
/// is a no-op.
pub fn set_utf8_output() {
    #[cfg(windows)]
    {
        let result = std::process::Command::new("cmd")
            .args(["/C", "chcp", "65001"])
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status();
        if let Err(e) = result {
            debug!("chcp 65001 failed: {}", e);
        }
    }
}

/// Set the terminal window title. No-op where the terminal has no title
/// concept; failures are non-fatal.
pub fn set_title(title: &str) {
    if let Err(e) = execute!(io::stdout(), SetTitle(title)) {
        debug!("failed to set terminal title: {}", e);
    }
}

/// A boxed informational banner.
pub struct Banner {
    lines: Vec<String>,
    width: usize,
}

impl Banner {
    pub fn new(lines: Vec<&str>) -> Self {
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Self {
            lines: lines.into_iter().map(String::from).collect(),
            width,
        }
    }

    /// Render with a box border, each line padded to the banner width.
    pub fn render(&self) -> String {
        let horizontal = "─".repeat(self.width + 2);
        let mut out = format!("┌{}┐\n", horizontal);
        for line in &self.lines {
            let pad = self.width - line.chars().count();
            out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
        }
        out.push_str(&format!("└{}┘", horizontal));
        out
    }
}

/// Print the startup banner. Purely informational.
pub fn print_banner(title: &str, target: &str) {
    let subtitle = format!("launching {}", target);
    let banner = Banner::new(vec![title, &subtitle]);
    println!("{}", banner.render().cyan());
}

/// Block on a single line from stdin so the operator can read the error
/// before the window closes. Returns on EOF as well, so piped stdin cannot
/// hang forever.
pub fn read_ack() {
    print!("Press Enter to exit... ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_width_is_longest_line() {
        let banner = Banner::new(vec!["short", "a much longer line"]);
        assert_eq!(banner.width, "a much longer line".chars().count());
    }

    #[test]
    fn test_banner_render_boxes_every_line() {
        let banner = Banner::new(vec!["alpha", "beta"]);
        let rendered = banner.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("alpha"));
        assert!(lines[2].contains("beta"));
        assert!(lines[3].starts_with('└'));
        // All padded lines have equal display width
        assert_eq!(
            lines[1].chars().count(),
            lines[2].chars().count(),
            "lines should be padded to the same width"
        );
    }

    #[test]
    fn test_banner_empty() {
        let banner = Banner::new(vec![]);
        assert_eq!(banner.width, 0);
        let rendered = banner.render();
        assert!(rendered.starts_with('┌'));
        assert!(rendered.ends_with('┘'));
    }
}
