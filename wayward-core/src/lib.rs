pub mod registry;
pub mod report;

pub use registry::{JourneyRegistry, RegistryError, RouteManifest};
pub use report::ReportFormat;

use colored::Colorize;

pub fn print_banner() {
    println!();
    println!(
        "  {} {}",
        "wayward".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
    println!(
        "  {}",
        "every route accounted for, every journey walkable".bright_black()
    );
    println!();
}
