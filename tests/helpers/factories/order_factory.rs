use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::engine::types::OrderRecord;

/// Builder for synthetic order rows with sensible defaults.
pub struct OrderFactory {
    record: OrderRecord,
}

impl OrderFactory {
    pub fn new() -> Self {
        Self {
            record: OrderRecord {
                order_id: "o1".to_string(),
                order_approved_at: NaiveDate::from_ymd_opt(2018, 1, 1)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap(),
                payment_value: Decimal::new(1000, 2), // 10.00
                product_id: Some("p1".to_string()),
                product_category: Some("toys".to_string()),
                review_score: Some(5),
                customer_id: "c1".to_string(),
                customer_state: "SP".to_string(),
                customer_city: "sao paulo".to_string(),
                order_status: "delivered".to_string(),
            },
        }
    }

    pub fn order_id(mut self, id: &str) -> Self {
        self.record.order_id = id.to_string();
        self
    }

    /// Approval timestamp at 10:00 on the given day.
    pub fn approved_on(mut self, y: i32, m: u32, d: u32) -> Self {
        self.record.order_approved_at = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        self
    }

    pub fn approved_at(mut self, at: NaiveDateTime) -> Self {
        self.record.order_approved_at = at;
        self
    }

    pub fn payment(mut self, value: Decimal) -> Self {
        self.record.payment_value = value;
        self
    }

    pub fn category(mut self, category: Option<&str>) -> Self {
        self.record.product_category = category.map(str::to_string);
        self.record.product_id = category.map(|_| "p1".to_string());
        self
    }

    pub fn review(mut self, score: Option<u8>) -> Self {
        self.record.review_score = score;
        self
    }

    pub fn customer(mut self, id: &str, state: &str, city: &str) -> Self {
        self.record.customer_id = id.to_string();
        self.record.customer_state = state.to_string();
        self.record.customer_city = city.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.record.order_status = status.to_string();
        self
    }

    pub fn create(self) -> OrderRecord {
        self.record
    }

    /// `count` copies with distinct order and customer ids.
    pub fn create_list(self, count: usize) -> Vec<OrderRecord> {
        (0..count)
            .map(|i| {
                let mut record = self.record.clone();
                record.order_id = format!("o{}", i + 1);
                record.customer_id = format!("c{}", i + 1);
                record
            })
            .collect()
    }
}
