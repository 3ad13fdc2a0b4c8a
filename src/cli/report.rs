//! Run summary printing.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the summary of a successful run to stdout.
pub fn print_success(summary: &RunSummary) {
    print_success_to(summary, &mut io::stdout().lock());
}

/// Print the summary of a successful run to a custom writer.
pub fn print_success_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let msg = format!(
        "Wrote {} {} ({} resolved from pull requests)",
        summary.line_count,
        if summary.line_count == 1 { "line" } else { "lines" },
        summary.pull_request_count,
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    let _ = writeln!(
        writer,
        "Check the output at {}",
        summary.output_path.display().to_string().cyan()
    );
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn render(summary: &RunSummary) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        print_success_to(summary, &mut output);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_print_success() {
        let output = render(&RunSummary {
            line_count: 12,
            pull_request_count: 5,
            output_path: PathBuf::from("./CHANGELOG.md"),
        });

        assert!(output.contains("Wrote 12 lines"));
        assert!(output.contains("5 resolved from pull requests"));
        assert!(output.contains("./CHANGELOG.md"));
    }

    #[test]
    fn test_print_success_single_line() {
        let output = render(&RunSummary {
            line_count: 1,
            pull_request_count: 0,
            output_path: PathBuf::from("./CHANGELOG.md"),
        });

        assert!(output.contains("Wrote 1 line "));
    }
}
