//! Carrito transitorio: vive entre la selección de artículos y la
//! confirmación del pedido (o un clear explícito). No se persiste.

use serde::{Deserialize, Serialize};

use crate::{DomainError, MenuItem, Money};

/// Línea del carrito con nombre y precio congelados al momento del alta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    id: u32,
    name: String,
    price: Money,
    qty: u32,
}

impl CartLine {
    pub fn item_id(&self) -> u32 {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn price(&self) -> Money {
        self.price
    }
    pub fn qty(&self) -> u32 {
        self.qty
    }
    pub fn line_total(&self) -> Money {
        self.price.times(self.qty)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Agrega una unidad del artículo. El stock se comprueba pero no se
    /// reserva: el descuento real ocurre recién al confirmar el pedido.
    pub fn add(&mut self, item: &MenuItem) -> Result<(), DomainError> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id()) {
            if line.qty + 1 > item.stock() {
                return Err(DomainError::InsufficientStock {
                    item: item.item_name().to_string(),
                    available: item.stock(),
                });
            }
            line.qty += 1;
        } else {
            self.lines.push(CartLine {
                id: item.id(),
                name: item.item_name().to_string(),
                price: item.price(),
                qty: 1,
            });
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Suma pura de `price * qty` sobre todas las líneas.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Resumen legible en orden de carga: `"Masala Chai x2, Samosa x1"`.
    pub fn items_summary(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{} x{}", l.name, l.qty))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
