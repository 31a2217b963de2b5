use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Money;

/// Estado de un pedido. Única transición permitida: Pending → Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Pedido confirmado. Total e items son inmutables tras la creación;
/// sólo `status` cambia, y sólo hacia Completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: u32,
    customer_id: u32,
    items: String,
    status: OrderStatus,
    total: Money,
    order_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: u32,
        customer_id: u32,
        items: String,
        total: Money,
        order_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Order { id, customer_id, items, status: OrderStatus::Pending, total, order_date, created_at }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn customer_id(&self) -> u32 {
        self.customer_id
    }
    pub fn items(&self) -> &str {
        &self.items
    }
    pub fn status(&self) -> OrderStatus {
        self.status
    }
    pub fn total(&self) -> Money {
        self.total
    }
    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marca el pedido como completado. Idempotente: devuelve `true` sólo si
    /// hubo transición real.
    pub fn mark_completed(&mut self) -> bool {
        if self.status == OrderStatus::Completed {
            return false;
        }
        self.status = OrderStatus::Completed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order() -> Order {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        Order::new(1, 1, "Masala Chai x2".into(), Money::from_rupees(60), date, at)
    }

    #[test]
    fn transicion_idempotente() {
        let mut o = order();
        assert_eq!(o.status(), OrderStatus::Pending);
        assert!(o.mark_completed());
        assert!(!o.mark_completed(), "segunda marca no cambia nada");
        assert_eq!(o.status(), OrderStatus::Completed);
    }
}
