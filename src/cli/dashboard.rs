//! Dashboard CLI command

use crate::cli::args::reference_date;
use crate::config::settings::Settings;
use crate::error::FinboardResult;
use crate::reports::DashboardReport;
use crate::storage::Snapshot;

/// Handle the dashboard command
pub fn handle_dashboard_command(
    snapshot: &Snapshot,
    settings: &Settings,
    as_of: Option<String>,
) -> FinboardResult<()> {
    if snapshot.is_empty() {
        println!("No snapshot data yet. Use 'finboard import' to load API responses.");
        println!();
    }

    let report = DashboardReport::generate(snapshot, reference_date(as_of)?, settings);
    print!("{}", report.format_terminal(settings));

    Ok(())
}
