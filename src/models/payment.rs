use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

/// Membership dues / event fee record shown on the dashboard. Payment
/// processing itself happens on the backend; this is display data only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub reference: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn amount_label(&self) -> String {
        format!(
            "{} {}.{:02}",
            self.currency,
            self.amount_cents / 100,
            (self.amount_cents % 100).abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_label_formats_minor_units() {
        let payment = Payment {
            id: "p-1".to_string(),
            reference: "SCM-2024-0001".to_string(),
            amount_cents: 24050,
            currency: "GBP".to_string(),
            status: PaymentStatus::Paid,
            description: "Annual dues".to_string(),
            paid_at: None,
        };
        assert_eq!(payment.amount_label(), "GBP 240.50");
    }
}
