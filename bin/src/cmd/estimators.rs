//! Estimators command implementation.

use anyhow::Result;
use ronda_var::available_estimators;

/// List the available VaR estimation strategies.
pub(crate) fn list_estimators(verbose: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Available Estimators                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for info in available_estimators() {
        if verbose {
            println!("  {:12} - {}", info.name, info.description);
            println!("  {:12}   minimum window: {} observations", "", info.min_window);
            if info.uses_lambda {
                println!("  {:12}   takes --lambda (default 0.94)", "");
            }
            println!();
        } else {
            println!("  {}", info.name);
        }
    }

    if !verbose {
        println!("\nUse --verbose for detailed estimator descriptions.");
    }

    // Show aliases
    println!("Estimator aliases:");
    println!("  hist               -> historical");
    println!("  normal, gaussian   -> parametric");
    println!("  riskmetrics        -> ewma");
    println!();

    Ok(())
}
