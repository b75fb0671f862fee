//! Styled console messages.

use console::style;

use crate::download::BatchState;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════╗
║     instagrab                            ║
║     Instagram post media downloader      ║
╚══════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(page_url: &str, output_dir: &str, has_cookies: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Page: {}", page_url);
    println!("  Directory: {}", output_dir);
    println!("  Cookies: {}", if has_cookies { "loaded" } else { "none" });
    println!();
}

/// Print final download statistics.
pub fn print_batch_stats(state: &BatchState) {
    println!();
    println!("{}", style("Results:").bold());
    println!("  Media found: {}", state.found_count);
    println!("  Pictures: {}", state.pic_count);
    println!("  Videos: {}", state.vid_count);
    if !state.failed.is_empty() {
        println!(
            "  {} {}",
            style("Failed:").red().bold(),
            state.failed.len()
        );
        for item in &state.failed {
            println!("    {} ({})", item.url, item.reason);
        }
    }
    println!();
}
