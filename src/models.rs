// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown order status '{0}' (use pending|processing|shipped|delivered|cancelled)")]
    UnknownStatus(String),
    #[error("Unknown payment method '{0}' (use stripe|razorpay)")]
    UnknownPaymentMethod(String),
    #[error("Unknown payment status '{0}' (use paid|pending)")]
    UnknownPaymentStatus(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),
    #[error("Order {order}: {reason}")]
    InvalidOrder { order: String, reason: String },
    #[error("Product {product}: {reason}")]
    InvalidProduct { product: String, reason: String },
    #[error("Order {order} is {from} and can no longer change status")]
    IllegalTransition { order: String, from: OrderStatus },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Delivered and cancelled orders are closed for edits.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Stripe,
    Razorpay,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "Stripe",
            PaymentMethod::Razorpay => "Razorpay",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stripe" => Ok(PaymentMethod::Stripe),
            "razorpay" => Ok(PaymentMethod::Razorpay),
            _ => Err(ModelError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "pending" => Ok(PaymentStatus::Pending),
            _ => Err(ModelError::UnknownPaymentStatus(s.to_string())),
        }
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp. Timestamps keep the
/// calendar date of their own offset; the time of day is dropped.
pub fn parse_order_date(s: &str) -> Result<NaiveDate, ModelError> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| ModelError::InvalidDate(s.to_string()))
}

mod order_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(d: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&d.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_order_date(&raw).map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl LineItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(alias = "address")]
    pub street: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub country: String,
    #[serde(alias = "zip")]
    pub postal_code: String,
}

impl ShippingAddress {
    /// Name of the first blank required field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("street", &self.street),
            ("city", &self.city),
            ("country", &self.country),
            ("postal code", &self.postal_code),
        ]
        .into_iter()
        .find(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    #[serde(alias = "createdAt", with = "order_date")]
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub shipping_address: ShippingAddress,
}

impl Order {
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        let invalid = |reason: String| ModelError::InvalidOrder {
            order: self.id.clone(),
            reason,
        };
        if self.id.trim().is_empty() {
            return Err(invalid("id is blank".into()));
        }
        if self.total < Decimal::ZERO {
            return Err(invalid(format!("negative total {}", self.total)));
        }
        for item in &self.items {
            if item.quantity == 0 {
                return Err(invalid(format!("item '{}' has zero quantity", item.name)));
            }
            if item.price < Decimal::ZERO {
                return Err(invalid(format!(
                    "item '{}' has negative price {}",
                    item.name, item.price
                )));
            }
        }
        if let Some(field) = self.shipping_address.missing_field() {
            return Err(invalid(format!("shipping address {} is blank", field)));
        }
        Ok(())
    }

    /// Moves the order to `next`. Returns `false` when it already had that status.
    pub fn transition(&mut self, next: OrderStatus) -> Result<bool, ModelError> {
        if self.status == next {
            return Ok(false);
        }
        if self.status.is_terminal() {
            return Err(ModelError::IllegalTransition {
                order: self.id.clone(),
                from: self.status,
            });
        }
        self.status = next;
        Ok(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub category: String, // category slug
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: ProductStatus,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        let invalid = |reason: String| ModelError::InvalidProduct {
            product: self.id.clone(),
            reason,
        };
        for (field, value) in [
            ("id", &self.id),
            ("slug", &self.slug),
            ("name", &self.name),
            ("category", &self.category),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{} is blank", field)));
            }
        }
        if let Some(v) = self.variants.iter().find(|v| v.price < Decimal::ZERO) {
            return Err(invalid(format!(
                "variant '{}' has negative price {}",
                v.name, v.price
            )));
        }
        Ok(())
    }

    pub fn starting_price(&self) -> Option<Decimal> {
        self.variants.iter().map(|v| v.price).min()
    }
}
