//! Statistics reporting.

use console::style;

use crate::download::BackupReport;

/// Print the final statistics for a run.
pub fn print_report(report: &BackupReport) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Backup complete:").bold());
    println!("  Entries processed: {}", report.total);
    println!("  Assets found:      {}", report.available_assets);
    println!(
        "  Assets fetched:    {}",
        style(report.downloaded_assets).green()
    );
    if report.available_videos > 0 || report.downloaded_videos > 0 {
        println!("  Videos found:      {}", report.available_videos);
        println!(
            "  Videos fetched:    {}",
            style(report.downloaded_videos).green()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
