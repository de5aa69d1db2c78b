use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::PaymentStatus;

/// A course payment submitted from the public payment form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: i64,
    pub payment_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub training_mode: Option<String>,
    #[serde(default)]
    pub preferred_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_admin_payment_row() {
        let payment: Payment = serde_json::from_str(
            r#"{
                "id": 12,
                "payment_id": "PAY_20240501093000_AB12CD34",
                "student_name": "Asha Rao",
                "email": "asha@example.com",
                "course_title": null,
                "payment_method": "gpay",
                "payment_status": "completed",
                "amount": 24999.0,
                "preferred_start_date": "2024-06-01",
                "created_at": "2024-05-01T09:30:00"
            }"#,
        )
        .unwrap();
        assert_eq!(payment.payment_status, PaymentStatus::Completed);
        assert_eq!(payment.amount, Some(24999.0));
        assert_eq!(payment.course_title, None);
        assert_eq!(
            payment.preferred_start_date,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn unknown_status_is_a_parse_error() {
        let result: Result<Payment, _> = serde_json::from_str(
            r#"{"id": 1, "payment_id": "P1", "payment_status": "refunded"}"#,
        );
        assert!(result.is_err());
    }
}
