//! Transaction display formatting
//!
//! Register-style rows for the recent-transactions panel and the paginated
//! `transactions` listing.

use super::report::{left_align, truncate};
use crate::api::PaginatedResponse;
use crate::config::settings::Settings;
use crate::models::{CategoryNames, RawAmount, Transaction, TransactionType};

/// Category label for a transaction: the embedded relation, then the lookup
pub fn category_label(txn: &Transaction, names: &CategoryNames) -> String {
    if let Some(category) = txn.category.as_ref().filter(|c| !c.name.is_empty()) {
        return category.name.clone();
    }
    txn.effective_category_id()
        .and_then(|id| names.get(id))
        .map(str::to_string)
        .unwrap_or_else(|| "(uncategorized)".to_string())
}

fn type_icon(transaction_type: &TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
        TransactionType::Transfer => "⇄",
        TransactionType::Unrecognized(_) => "?",
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, names: &CategoryNames, settings: &Settings) -> String {
    let date = txn
        .parsed_date()
        .map(|d| d.format(&settings.date_format).to_string())
        .unwrap_or_else(|_| truncate(&txn.date, 10));

    let amount = match &txn.amount {
        Some(RawAmount::Valid(amount)) => settings.format_money(*amount),
        Some(RawAmount::Invalid(raw)) => format!("?{}", truncate(raw, 10)),
        None => "-".to_string(),
    };

    let description = if txn.description.is_empty() {
        "(no description)".to_string()
    } else {
        txn.description.clone()
    };

    format!(
        "{} {} {} {} {:>12}",
        type_icon(&txn.transaction_type),
        left_align(&date, 10),
        left_align(&truncate(&description, 24), 24),
        left_align(&truncate(&category_label(txn, names), 16), 16),
        amount
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    names: &CategoryNames,
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:1} {:10} {:24} {:16} {:>12}\n",
        "", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(67));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, names, settings));
        output.push('\n');
    }

    output
}

/// Register for one page plus a "page x of y" footer
pub fn format_transaction_page(
    page: &PaginatedResponse<Transaction>,
    names: &CategoryNames,
    settings: &Settings,
) -> String {
    let mut output = format_transaction_register(&page.data, names, settings);

    if let (Some(from), Some(to)) = (page.from, page.to) {
        output.push_str(&format!(
            "\nShowing {}-{} of {} (page {} of {})\n",
            from, to, page.total, page.current_page, page.last_page
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    fn names() -> CategoryNames {
        CategoryNames::from_categories(&[Category::new(3, "Supermercado", TransactionType::Expense)])
    }

    #[test]
    fn test_row_uses_category_lookup() {
        let txn = Transaction::new(1, 1, TransactionType::Expense, Money::from_cents(-4550), "2024-03-02")
            .with_description("Walmart")
            .with_category(3);

        let row = format_transaction_row(&txn, &names(), &Settings::default());
        assert!(row.starts_with('-'));
        assert!(row.contains("2024-03-02"));
        assert!(row.contains("Walmart"));
        assert!(row.contains("Supermercado"));
        assert!(row.contains("-$45.50"));
    }

    #[test]
    fn test_row_tolerates_bad_records() {
        let mut txn = Transaction::new(1, 1, TransactionType::parse("refund"), Money::zero(), "not-a-valid-date");
        txn.amount = None;

        let row = format_transaction_row(&txn, &CategoryNames::default(), &Settings::default());
        assert!(row.starts_with('?'));
        assert!(row.contains("not-a-v..."));
        assert!(row.contains("(uncategorized)"));
    }

    #[test]
    fn test_row_shows_unreadable_amount_verbatim() {
        let mut txn = Transaction::new(7, 1, TransactionType::Expense, Money::zero(), "2024-01-12");
        txn.amount = Some(RawAmount::Invalid("abc".to_string()));

        let row = format_transaction_row(&txn, &CategoryNames::default(), &Settings::default());
        assert!(row.contains("?abc"));
        assert!(!row.contains("$0.00"));
    }

    #[test]
    fn test_embedded_category_wins() {
        let mut txn = Transaction::new(1, 1, TransactionType::Income, Money::from_cents(100), "2024-01-01")
            .with_category(3);
        txn.category = Some(Category::new(3, "Salario", TransactionType::Income));

        assert_eq!(category_label(&txn, &names()), "Salario");
    }

    #[test]
    fn test_page_footer() {
        let transactions: Vec<Transaction> = (1..=5u64)
            .map(|i| Transaction::new(i, 1, TransactionType::Income, Money::from_cents(100), "2024-01-01"))
            .collect();
        let page = PaginatedResponse::paginate(transactions, 2, 2);

        let output = format_transaction_page(&page, &CategoryNames::default(), &Settings::default());
        assert!(output.contains("Showing 3-4 of 5 (page 2 of 3)"));
    }

    #[test]
    fn test_empty_register() {
        let output = format_transaction_register(&[], &CategoryNames::default(), &Settings::default());
        assert_eq!(output, "No transactions found.\n");
    }
}
