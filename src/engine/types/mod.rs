use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line item of the merged order export. `order_id` repeats when an order
/// has several items; the nullable fields are empty for orders that never
/// reached delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub order_approved_at: NaiveDateTime,
    pub payment_value: Decimal,
    pub product_id: Option<String>,
    pub product_category: Option<String>,
    pub review_score: Option<u8>,
    pub customer_id: String,
    pub customer_state: String,
    pub customer_city: String,
    pub order_status: String,
}

impl OrderRecord {
    /// Calendar day of the approval timestamp, the grouping key for all
    /// daily aggregations.
    pub fn approved_date(&self) -> NaiveDate {
        self.order_approved_at.date()
    }
}
