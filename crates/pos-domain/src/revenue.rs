use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Money;

/// Hecho de ingreso: un registro inmutable por pedido confirmado,
/// espejo de `{order.id, order.total, order.order_date}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueFact {
    order_id: u32,
    amount: Money,
    revenue_date: NaiveDate,
}

impl RevenueFact {
    pub fn new(order_id: u32, amount: Money, revenue_date: NaiveDate) -> Self {
        RevenueFact { order_id, amount, revenue_date }
    }

    pub fn order_id(&self) -> u32 {
        self.order_id
    }
    pub fn amount(&self) -> Money {
        self.amount
    }
    pub fn revenue_date(&self) -> NaiveDate {
        self.revenue_date
    }
}
