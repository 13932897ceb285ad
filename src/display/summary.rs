//! Summary display: headline total, category breakdown and a text bar chart

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::money::format_money;
use crate::config::Settings;
use crate::reports::ExpenditureSummary;

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Records")]
    records: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format an expenditure summary
pub fn format_summary(summary: &ExpenditureSummary, settings: &Settings) -> String {
    let mut output = String::new();

    let period = match summary.date {
        Some(date) => date.format(&settings.date_format).to_string(),
        None => "All time".to_string(),
    };

    output.push_str(&format!("Expenditure: {}\n", period));
    output.push_str(&format!(
        "Total:       {}\n\n",
        format_money(summary.total, &settings.currency_symbol)
    ));

    if summary.is_empty() {
        output.push_str("No data.\n");
        return output;
    }

    let rows: Vec<CategoryRow> = summary
        .categories
        .iter()
        .map(|c| CategoryRow {
            category: c.category.clone(),
            total: format_money(c.total, &settings.currency_symbol),
            records: c.record_count,
            share: format!("{:.1}%", c.percentage),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());

    output.push_str(&table.to_string());
    output.push_str("\n\n");
    output.push_str(&format_bar_chart(summary));

    output
}

fn format_bar_chart(summary: &ExpenditureSummary) -> String {
    let label_width = summary
        .categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for category in &summary.categories {
        output.push_str(&format!(
            "{:<width$} {}\n",
            category.category,
            bar(category.percentage),
            width = label_width
        ));
    }
    output
}

fn bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    // Every listed category spent something, so it gets at least one cell
    "█".repeat(filled.clamp(1, BAR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::CategorySpending;
    use chrono::NaiveDate;

    fn summary() -> ExpenditureSummary {
        ExpenditureSummary {
            date: NaiveDate::from_ymd_opt(2024, 1, 10),
            total: Money::from_units(75_000),
            record_count: 2,
            categories: vec![
                CategorySpending {
                    category: "Transport".into(),
                    total: Money::from_units(50_000),
                    record_count: 1,
                    percentage: 200.0 / 3.0,
                },
                CategorySpending {
                    category: "Makanan".into(),
                    total: Money::from_units(25_000),
                    record_count: 1,
                    percentage: 100.0 / 3.0,
                },
            ],
        }
    }

    #[test]
    fn test_format_summary() {
        let output = format_summary(&summary(), &Settings::default());

        assert!(output.starts_with("Expenditure: 10 Jan 2024\n"));
        assert!(output.contains("Total:       Rp 75.000"));
        assert!(output.contains("66.7%"));
        assert!(output.contains(&format!("Transport {}", "█".repeat(20))));
        assert!(output.contains(&format!("Makanan   {}", "█".repeat(10))));
    }

    #[test]
    fn test_empty_summary() {
        let empty = ExpenditureSummary {
            date: None,
            total: Money::zero(),
            record_count: 0,
            categories: Vec::new(),
        };
        let output = format_summary(&empty, &Settings::default());

        assert!(output.starts_with("Expenditure: All time\n"));
        assert!(output.ends_with("No data.\n"));
    }

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.1).chars().count(), 1);
        assert_eq!(bar(100.0).chars().count(), BAR_WIDTH);
    }
}
