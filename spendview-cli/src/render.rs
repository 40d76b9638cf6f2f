//! Plain-text rendering of the three report views: preview table,
//! category breakdown with share-of-total bars, monthly trend.

use spendview_core::Report;

pub fn print_report(report: &Report) {
    print_preview(report);
    print_categories(report);
    print_monthly(report);
}

fn print_preview(report: &Report) {
    println!("Transactions preview ({} rows)", report.preview.len());
    println!(
        "{:<12} {:<40} {:>12}  {}",
        "Date", "Description", "Amount", "Category"
    );
    for t in &report.preview {
        println!(
            "{:<12} {:<40} {:>12.2}  {}",
            t.txn.date.to_string(),
            truncate(&t.txn.description, 40),
            t.txn.amount,
            t.category
        );
    }
}

fn print_categories(report: &Report) {
    let total: f64 = report
        .spending_by_category
        .iter()
        .map(|(_, v)| v.abs())
        .sum();

    println!("\nSpending by category");
    for (name, amount) in &report.spending_by_category {
        let share = if total == 0.0 {
            0.0
        } else {
            amount.abs() / total * 100.0
        };
        println!("{:<20} {:>12.2}  {:>5.1}%  {}", name, amount, share, bar(share));
    }
}

fn print_monthly(report: &Report) {
    println!("\nMonthly spending trend");
    for (month, amount) in &report.monthly_spending {
        println!("{month}  {amount:>12.2}");
    }
}

// One # per 2.5% keeps a full-width bar at 40 chars.
fn bar(share: f64) -> String {
    "#".repeat((share / 2.5).round() as usize)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
