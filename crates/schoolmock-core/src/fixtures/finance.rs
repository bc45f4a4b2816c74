//! Finance fixtures: expense/income heads and sample entries.

use crate::fixtures::dispatch::DispatchRule;
use crate::matching::PathMatcher;
use serde_json::{json, Value};

pub fn rules() -> Vec<DispatchRule> {
    vec![
        DispatchRule::new(
            "finance-expense-heads",
            PathMatcher::contains("/finance/expense-heads"),
            |_, _| expense_heads(),
        ),
        DispatchRule::new(
            "finance-income-heads",
            PathMatcher::contains("/finance/income-heads"),
            |_, _| income_heads(),
        ),
        DispatchRule::new(
            "finance-expenses",
            PathMatcher::contains("/finance/expenses"),
            |_, _| expenses(),
        ),
        DispatchRule::new(
            "finance-incomes",
            PathMatcher::contains("/finance/incomes"),
            |_, _| incomes(),
        ),
    ]
}

pub fn expense_heads() -> Value {
    json!([
        { "id": 1, "name": "Office Supplies", "description": "Stationery and office materials" },
        { "id": 2, "name": "Utilities", "description": "Electricity, water and internet bills" },
        { "id": 3, "name": "Maintenance", "description": "Building and equipment repairs" }
    ])
}

pub fn income_heads() -> Value {
    json!([
        { "id": 1, "name": "Tuition Fees", "description": "Regular tuition fee collections" },
        { "id": 2, "name": "Donations", "description": "Donations from parents and alumni" },
        { "id": 3, "name": "Event Tickets", "description": "Ticket sales for school events" }
    ])
}

pub fn expenses() -> Value {
    json!([
        {
            "id": 1,
            "expenseHead": "Office Supplies",
            "name": "Printer paper",
            "invoiceNumber": "INV-2024-001",
            "date": "2024-01-15",
            "amount": 150.0,
            "description": "Ten reams of A4 paper"
        }
    ])
}

pub fn incomes() -> Value {
    json!([
        {
            "id": 1,
            "incomeHead": "Donations",
            "name": "Alumni donation",
            "invoiceNumber": "RCPT-2024-001",
            "date": "2024-01-20",
            "amount": 5000.0,
            "description": "Library fund contribution"
        }
    ])
}
