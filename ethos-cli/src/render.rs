//! Text and JSON rendering of engine reports.

use ethos::{CoreTally, EngineReport, MoralContext};

const RULE_WIDTH: usize = 72;

/// Print one report as a text block.
pub fn print_report(report: &EngineReport, context: &MoralContext) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Action: {}", report.action);
    println!("  {}", context.action_description);
    println!("{}", "-".repeat(RULE_WIDTH));

    for result in &report.results {
        println!(
            "  {:<16} {:<14} [{}]",
            result.framework.name(),
            result.display,
            result.core
        );
        println!("  {:<16} {}", "", result.moral_quality);
    }

    let tally = report.core_tally();
    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "  {} good / {} bad / {} neutral ({})",
        tally.good,
        tally.bad,
        tally.neutral,
        consensus_label(&tally)
    );
}

/// Print one report as pretty JSON.
pub fn print_report_json(report: &EngineReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print the cross-case consistency summary.
pub fn print_consistency<'a>(reports: impl IntoIterator<Item = &'a EngineReport>) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Consistency across frameworks");
    println!("{}", "-".repeat(RULE_WIDTH));
    for report in reports {
        let tally = report.core_tally();
        println!(
            "  {:<24} {} good / {} bad / {} neutral ({})",
            report.action,
            tally.good,
            tally.bad,
            tally.neutral,
            consensus_label(&tally)
        );
    }
}

/// Label how strongly the frameworks agree.
pub fn consensus_label(tally: &CoreTally) -> &'static str {
    let total = tally.good + tally.bad + tally.neutral;
    if total == 0 {
        return "no verdicts";
    }
    if tally.good == total {
        "unanimously good"
    } else if tally.bad == total {
        "unanimously bad"
    } else if tally.good * 2 > total {
        "majority good"
    } else if tally.bad * 2 > total {
        "majority bad"
    } else {
        "contested"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(good: usize, bad: usize, neutral: usize) -> CoreTally {
        CoreTally { good, bad, neutral }
    }

    #[test]
    fn test_consensus_labels() {
        assert_eq!(consensus_label(&tally(8, 0, 0)), "unanimously good");
        assert_eq!(consensus_label(&tally(0, 8, 0)), "unanimously bad");
        assert_eq!(consensus_label(&tally(5, 2, 1)), "majority good");
        assert_eq!(consensus_label(&tally(1, 6, 1)), "majority bad");
        assert_eq!(consensus_label(&tally(3, 3, 2)), "contested");
        assert_eq!(consensus_label(&tally(0, 0, 8)), "contested");
        assert_eq!(consensus_label(&tally(0, 0, 0)), "no verdicts");
    }
}
