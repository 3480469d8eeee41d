use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use csv::StringRecord;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::engine::dataset::Dataset;
use crate::engine::errors::DatasetLoadError;
use crate::engine::types::OrderRecord;

const COL_ORDER_ID: &str = "order_id";
const COL_APPROVED_AT: &str = "order_approved_at";
const COL_PAYMENT_VALUE: &str = "payment_value";
const COL_PRODUCT_ID: &str = "product_id";
const COL_CATEGORY: &str = "product_category_name_english";
const COL_REVIEW_SCORE: &str = "review_score";
const COL_CUSTOMER_ID: &str = "customer_id";
const COL_CUSTOMER_STATE: &str = "customer_state";
const COL_CUSTOMER_CITY: &str = "customer_city";
const COL_ORDER_STATUS: &str = "order_status";

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Positions of the required columns within the header row.
struct ColumnIndex {
    order_id: usize,
    approved_at: usize,
    payment_value: usize,
    product_id: usize,
    category: usize,
    review_score: usize,
    customer_id: usize,
    customer_state: usize,
    customer_city: usize,
    order_status: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DatasetLoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetLoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            order_id: find(COL_ORDER_ID)?,
            approved_at: find(COL_APPROVED_AT)?,
            payment_value: find(COL_PAYMENT_VALUE)?,
            product_id: find(COL_PRODUCT_ID)?,
            category: find(COL_CATEGORY)?,
            review_score: find(COL_REVIEW_SCORE)?,
            customer_id: find(COL_CUSTOMER_ID)?,
            customer_state: find(COL_CUSTOMER_STATE)?,
            customer_city: find(COL_CUSTOMER_CITY)?,
            order_status: find(COL_ORDER_STATUS)?,
        })
    }
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Dataset, DatasetLoadError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading order export");
    let file = File::open(path)?;
    load_from_reader(file)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetLoadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let columns = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut skipped_unapproved = 0usize;

    for (idx, row) in rdr.records().enumerate() {
        let row = row?;
        // 1-based, counting the header line
        let line = idx + 2;

        // Rows without a parseable approval timestamp cannot be date-filtered;
        // drop them here, the way a NaT row falls out of a resample.
        let Some(approved_at) = parse_timestamp(cell(&row, columns.approved_at)) else {
            skipped_unapproved += 1;
            continue;
        };

        let raw_payment = cell(&row, columns.payment_value);
        let payment_value =
            Decimal::from_str(raw_payment).map_err(|_| DatasetLoadError::InvalidAmount {
                row: line,
                value: raw_payment.to_string(),
            })?;
        if payment_value.is_sign_negative() {
            return Err(DatasetLoadError::NegativeAmount {
                row: line,
                value: raw_payment.to_string(),
            });
        }

        records.push(OrderRecord {
            order_id: cell(&row, columns.order_id).to_string(),
            order_approved_at: approved_at,
            payment_value,
            product_id: optional(cell(&row, columns.product_id)),
            product_category: optional(cell(&row, columns.category)),
            review_score: parse_review_score(cell(&row, columns.review_score)),
            customer_id: cell(&row, columns.customer_id).to_string(),
            customer_state: cell(&row, columns.customer_state).to_string(),
            customer_city: cell(&row, columns.customer_city).to_string(),
            order_status: cell(&row, columns.order_status).to_string(),
        });
    }

    if skipped_unapproved > 0 {
        debug!(skipped_unapproved, "Dropped rows without approval timestamp");
    }
    info!(rows = records.len(), "Order export loaded");

    Ok(Dataset::new(records))
}

fn cell<'a>(row: &'a StringRecord, idx: usize) -> &'a str {
    row.get(idx).unwrap_or("").trim()
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Review scores arrive as "4" or the float spelling "4.0"; anything outside
/// 1..=5 loads as None.
fn parse_review_score(value: &str) -> Option<u8> {
    if value.is_empty() {
        return None;
    }
    let score = match value.parse::<u8>() {
        Ok(n) => n,
        Err(_) => {
            let f = value.parse::<f64>().ok()?;
            if f.fract() != 0.0 {
                return None;
            }
            f as u8
        }
    };
    (1..=5).contains(&score).then_some(score)
}
