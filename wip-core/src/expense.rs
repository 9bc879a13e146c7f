use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::raw;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseStatus {
    Invoiced,
    NotInvoiced,
}

impl ExpenseStatus {
    pub fn from_raw(record: &Value) -> Self {
        match record.get("status") {
            Some(Value::Bool(true)) => ExpenseStatus::Invoiced,
            Some(Value::String(s)) if s.eq_ignore_ascii_case("invoiced") => ExpenseStatus::Invoiced,
            _ => ExpenseStatus::NotInvoiced,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub client_id: String,
    pub description: String,
    pub net_amount: f64,
    pub vat_percentage: f64,
    pub total_amount: f64,
    pub status: ExpenseStatus,
}

pub fn gross(net: f64, vat_percentage: f64) -> f64 {
    net + net * vat_percentage / 100.0
}

impl Expense {
    /// A positive server `totalAmount` is trusted; otherwise it is derived
    /// from net and VAT.
    pub fn from_raw(record: &Value) -> Self {
        let net_amount = raw::num(record, "netAmount");
        let vat_percentage = raw::num(record, "vatPercentage");
        let total = raw::num(record, "totalAmount");
        Expense {
            id: raw::id(record),
            client_id: raw::text(record, "clientId"),
            description: raw::text(record, "description"),
            net_amount,
            vat_percentage,
            total_amount: if total > 0.0 {
                total
            } else {
                gross(net_amount, vat_percentage)
            },
            status: ExpenseStatus::from_raw(record),
        }
    }

    pub fn vat_amount(&self) -> f64 {
        self.total_amount - self.net_amount
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTotals {
    pub count: u64,
    pub net: f64,
    pub vat: f64,
    pub gross: f64,
    pub invoiced: f64,
    pub not_invoiced: f64,
}

impl ExpenseTotals {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        expenses.iter().fold(Self::default(), |mut t, e| {
            t.count += 1;
            t.net += e.net_amount;
            t.vat += e.vat_amount();
            t.gross += e.total_amount;
            match e.status {
                ExpenseStatus::Invoiced => t.invoiced += e.total_amount,
                ExpenseStatus::NotInvoiced => t.not_invoiced += e.total_amount,
            }
            t
        })
    }
}
