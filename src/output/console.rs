//! Console output utilities.

use console::style;

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
╔═══════════════════════════════════════════════╗
║     Feed Backup                               ║
║     Back up assets from an exported RSS feed  ║
╚═══════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(feed: &str, directory: &str, concurrency: usize, videos: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Feed: {}", feed);
    println!("  Directory: {}", directory);
    println!("  Concurrency: {}", concurrency);
    println!("  Videos: {}", if videos { "enabled" } else { "disabled" });
    println!();
}
