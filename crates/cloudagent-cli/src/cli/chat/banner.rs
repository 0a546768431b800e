//! Welcome banner display for chat sessions.

use std::io::Write;
use std::path::Path;

use console::style;

/// Write the welcome banner: backend, account scope, and data directory.
pub fn print_welcome_banner(out: &mut impl Write, base_url: &str, scope: &str, data_dir: &Path) {
    let _ = writeln!(out);
    let _ = writeln!(out, "  {} {}", "\u{2601}", style("Cloud Agent").cyan().bold());
    let _ = writeln!(out, "  {}", style("Run cloud operations in plain language").dim());
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}  {}", style("Backend:").bold(), style(base_url).dim());
    let _ = writeln!(out, "  {}  {}", style("Account:").bold(), style(scope).dim());
    let _ = writeln!(
        out,
        "  {}  {}",
        style("History:").bold(),
        style(data_dir.display()).dim()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    let _ = writeln!(out, "  {}", style("---").dim());
    let _ = writeln!(out);
}
