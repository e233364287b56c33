//! Indicators command implementation.

use duochart_lib::IndicatorKind;
use duochart_lib::style::overlay_style;

/// List the indicator identifiers accepted by `chart --indicator`.
pub(crate) fn list_indicators() {
    println!("{:<25} {:<10} {:<10}", "INDICATOR", "WINDOW", "COLOR");
    println!("{}", "-".repeat(45));

    for kind in IndicatorKind::all() {
        let window = kind
            .window()
            .map_or_else(|| "all".to_string(), |w| w.to_string());
        println!(
            "{:<25} {:<10} {:<10}",
            kind.as_str(),
            window,
            overlay_style(*kind).color
        );
    }

    println!("\nPass identifiers verbatim, e.g. --indicator \"30 Day SMA\"");
}
