use serde::{Deserialize, Serialize};

use crate::{DomainError, Money};
use std::fmt;

/// Artículo del catálogo. El stock sólo se muta vía `restock` / `deduct`
/// para preservar la invariante de stock nunca negativo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    id: u32,
    category: String,
    item_name: String,
    price: Money,
    stock: u32,
}

impl MenuItem {
    // Constructor con validación; el id lo asigna el catálogo.
    pub fn new(
        id: u32,
        category: &str,
        item_name: &str,
        price: Money,
        stock: i64,
    ) -> Result<Self, DomainError> {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return Err(DomainError::validation("item name must not be empty"));
        }
        if !price.is_positive() {
            return Err(DomainError::validation("price must be greater than zero"));
        }
        if stock < 0 {
            return Err(DomainError::validation("stock must not be negative"));
        }
        let stock = u32::try_from(stock)
            .map_err(|_| DomainError::validation("stock out of range"))?;
        Ok(MenuItem {
            id,
            category: category.trim().to_string(),
            item_name: item_name.to_string(),
            price,
            stock,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn category(&self) -> &str {
        &self.category
    }
    pub fn item_name(&self) -> &str {
        &self.item_name
    }
    pub fn price(&self) -> Money {
        self.price
    }
    pub fn stock(&self) -> u32 {
        self.stock
    }
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Reposición; la validación de cantidad positiva ocurre en la operación
    /// del store (antes del lookup). Devuelve el stock resultante, o
    /// `Validation` si la suma desborda el rango representable.
    pub fn restock(&mut self, increase_by: u32) -> Result<u32, DomainError> {
        self.stock = self
            .stock
            .checked_add(increase_by)
            .ok_or_else(|| DomainError::validation("stock out of range"))?;
        Ok(self.stock)
    }

    /// Descuenta `qty` unidades; falla sin mutar si no alcanza el stock.
    pub fn deduct(&mut self, qty: u32) -> Result<(), DomainError> {
        if qty > self.stock {
            return Err(DomainError::InsufficientStock {
                item: self.item_name.clone(),
                available: self.stock,
            });
        }
        self.stock -= qty;
        Ok(())
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (₹{})", self.item_name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valida_constructor() {
        assert!(MenuItem::new(1, "Chai", "", Money::from_rupees(30), 10).is_err());
        assert!(MenuItem::new(1, "Chai", "Masala Chai", Money::ZERO, 10).is_err());
        assert!(MenuItem::new(1, "Chai", "Masala Chai", Money::from_rupees(30), -1).is_err());
        assert!(MenuItem::new(1, "Chai", "Masala Chai", Money::from_rupees(30), 0).is_ok());
    }

    #[test]
    fn stock_fuera_de_rango() {
        // más allá de u32::MAX no hay representación: Validation, no wrap
        let too_big = i64::from(u32::MAX) + 1;
        assert!(MenuItem::new(1, "Chai", "Masala Chai", Money::from_rupees(30), too_big).is_err());

        let mut item =
            MenuItem::new(1, "Chai", "Masala Chai", Money::from_rupees(30), i64::from(u32::MAX))
                .unwrap();
        assert!(item.restock(1).is_err());
        assert_eq!(item.stock(), u32::MAX, "un restock fallido no debe mutar");
    }

    #[test]
    fn deduct_nunca_negativo() {
        let mut item = MenuItem::new(1, "Chai", "Masala Chai", Money::from_rupees(30), 2).unwrap();
        assert!(item.deduct(3).is_err());
        assert_eq!(item.stock(), 2, "un deduct fallido no debe mutar");
        item.deduct(2).unwrap();
        assert!(item.is_out_of_stock());
    }
}
