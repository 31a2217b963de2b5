//! Store explícito del punto de venta.
//!
//! Es el dueño de los cuatro ledgers (catálogo, pedidos, clientes, ingresos),
//! del carrito activo y de los contadores secuenciales. Toda mutación pasa por
//! las operaciones de este tipo; los listados devuelven copias ordenadas
//! frescas y nunca reordenan el estado guardado.

use chrono::{DateTime, Local, NaiveDate, Utc};
use pos_domain::{Cart, Customer, DomainError, MenuItem, Money, Order, RevenueFact};

use crate::billing;
use crate::report::{self, Period, RevenueSummary};

/// Datos del cliente que confirma un pedido.
#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// Resultado de una confirmación: lo que se reporta al llamador.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderReceipt {
    pub order_id: u32,
    pub total: Money,
}

/// Fila del listado de pedidos, con el nombre del cliente ya resuelto.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub order: Order,
    pub customer_name: String,
}

pub struct PosStore {
    menu: Vec<MenuItem>,
    orders: Vec<Order>,
    customers: Vec<Customer>,
    revenue: Vec<RevenueFact>,
    cart: Cart,
    next_customer_id: u32,
    next_order_id: u32,
    next_menu_item_id: u32,
}

/// Catálogo inicial cuando no hay estado guardado.
pub fn default_menu() -> Vec<MenuItem> {
    let seed: [(u32, &str, &str, i64, i64); 4] = [
        (1, "Chai", "Masala Chai", 30, 50),
        (2, "Chai", "Ginger Chai", 35, 45),
        (3, "Snacks", "Samosa", 20, 60),
        (4, "Drinks", "Lassi", 60, 30),
    ];
    seed.iter()
        .filter_map(|(id, category, name, price, stock)| {
            MenuItem::new(*id, category, name, Money::from_rupees(*price), *stock).ok()
        })
        .collect()
}

impl PosStore {
    pub fn new(menu: Vec<MenuItem>) -> Self {
        Self::from_parts(menu, Vec::new(), Vec::new(), Vec::new(), 1, 1)
    }

    /// Reconstruye el store desde el estado cargado. `next_menu_item_id` no se
    /// persiste: se deriva del máximo id presente, como en el sistema original.
    pub fn from_parts(
        menu: Vec<MenuItem>,
        orders: Vec<Order>,
        customers: Vec<Customer>,
        revenue: Vec<RevenueFact>,
        next_customer_id: u32,
        next_order_id: u32,
    ) -> Self {
        let next_menu_item_id = menu.iter().map(MenuItem::id).max().unwrap_or(0) + 1;
        PosStore {
            menu,
            orders,
            customers,
            revenue,
            cart: Cart::new(),
            next_customer_id,
            next_order_id,
            next_menu_item_id,
        }
    }

    // --- lecturas crudas (para persistencia y tests) ---

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }
    pub fn revenue(&self) -> &[RevenueFact] {
        &self.revenue
    }
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
    pub fn next_customer_id(&self) -> u32 {
        self.next_customer_id
    }
    pub fn next_order_id(&self) -> u32 {
        self.next_order_id
    }

    pub fn find_item(&self, item_id: u32) -> Option<&MenuItem> {
        self.menu.iter().find(|i| i.id() == item_id)
    }

    // --- carrito ---

    /// Agrega una unidad al carrito. El stock se valida contra el catálogo
    /// pero no se reserva.
    pub fn add_to_cart(&mut self, item_id: u32) -> Result<(), DomainError> {
        let item = self
            .menu
            .iter()
            .find(|i| i.id() == item_id)
            .ok_or_else(|| DomainError::NotFound(format!("menu item {item_id}")))?;
        if item.is_out_of_stock() {
            return Err(DomainError::OutOfStock(item.item_name().to_string()));
        }
        self.cart.add(item)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    // --- transacción de confirmación ---

    /// Confirma el carrito con fecha y hora locales actuales.
    pub fn confirm_order(&mut self, details: &CustomerDetails) -> Result<OrderReceipt, DomainError> {
        self.confirm_order_at(details, Local::now().date_naive(), Utc::now())
    }

    /// Transacción de confirmación con reloj inyectado.
    ///
    /// Unidad lógica única: primero todas las validaciones (incluida la
    /// re-validación de stock línea por línea contra el catálogo actual),
    /// después todas las escrituras. Ningún fallo deja estado parcial.
    pub fn confirm_order_at(
        &mut self,
        details: &CustomerDetails,
        today: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Result<OrderReceipt, DomainError> {
        if self.cart.is_empty() {
            return Err(DomainError::validation("cart is empty"));
        }
        // Valida nombre/teléfono sin comprometer el contador todavía.
        let customer = Customer::new(
            self.next_customer_id,
            &details.name,
            &details.phone,
            details.email.as_deref(),
        )?;
        // Re-validación de stock: un carrito viejo no puede dejar stock negativo.
        for line in self.cart.lines() {
            let item = self
                .menu
                .iter()
                .find(|i| i.id() == line.item_id())
                .ok_or_else(|| DomainError::NotFound(format!("menu item {}", line.item_id())))?;
            if line.qty() > item.stock() {
                return Err(DomainError::InsufficientStock {
                    item: item.item_name().to_string(),
                    available: item.stock(),
                });
            }
        }
        // De acá en adelante no hay fallos posibles: sólo escrituras en memoria.
        self.next_customer_id += 1;
        let customer_id = customer.id();
        self.customers.push(customer);

        for line in self.cart.lines() {
            if let Some(item) = self.menu.iter_mut().find(|i| i.id() == line.item_id()) {
                item.deduct(line.qty())?;
            }
        }

        let order = Order::new(
            self.next_order_id,
            customer_id,
            self.cart.items_summary(),
            self.cart.total(),
            today,
            created_at,
        );
        self.next_order_id += 1;
        self.revenue.push(RevenueFact::new(order.id(), order.total(), order.order_date()));
        let receipt = OrderReceipt { order_id: order.id(), total: order.total() };
        self.orders.push(order);
        self.cart.clear();
        Ok(receipt)
    }

    // --- ajustes de stock y catálogo ---

    /// Reposición. La validación de cantidad va antes que el lookup:
    /// `increase_by <= 0` (o fuera del rango representable) es `Validation`
    /// aunque el id no exista.
    pub fn restock(&mut self, item_id: u32, increase_by: i64) -> Result<u32, DomainError> {
        if increase_by <= 0 {
            return Err(DomainError::validation("increase must be a positive integer"));
        }
        let increase = u32::try_from(increase_by)
            .map_err(|_| DomainError::validation("increase out of range"))?;
        let item = self
            .menu
            .iter_mut()
            .find(|i| i.id() == item_id)
            .ok_or_else(|| DomainError::NotFound(format!("menu item {item_id}")))?;
        item.restock(increase)
    }

    /// Alta de artículo; devuelve el id asignado (máximo existente + 1).
    pub fn add_menu_item(
        &mut self,
        name: &str,
        category: &str,
        price: Money,
        stock: i64,
    ) -> Result<u32, DomainError> {
        let id = self.next_menu_item_id;
        let item = MenuItem::new(id, category, name, price, stock)?;
        self.menu.push(item);
        self.next_menu_item_id = id + 1;
        Ok(id)
    }

    // --- estado de pedidos ---

    /// Marca pedidos como completados. Ids desconocidos se saltean; pedidos ya
    /// completados no cuentan. Devuelve cuántos transicionaron realmente.
    pub fn mark_completed(&mut self, order_ids: &[u32]) -> usize {
        let mut updated = 0;
        for id in order_ids {
            if let Some(order) = self.orders.iter_mut().find(|o| o.id() == *id) {
                if order.mark_completed() {
                    updated += 1;
                }
            }
        }
        updated
    }

    // --- proyecciones de lectura (copias ordenadas, nunca mutan el estado) ---

    /// Menú agrupado por categoría, en orden de primera aparición.
    pub fn list_menu(&self) -> Vec<(String, Vec<MenuItem>)> {
        let mut groups: Vec<(String, Vec<MenuItem>)> = Vec::new();
        for item in &self.menu {
            match groups.iter_mut().find(|(c, _)| c.as_str() == item.category()) {
                Some((_, items)) => items.push(item.clone()),
                None => groups.push((item.category().to_string(), vec![item.clone()])),
            }
        }
        groups
    }

    /// Inventario ordenado por categoría (orden estable dentro de cada una).
    pub fn list_stock(&self) -> Vec<MenuItem> {
        let mut items = self.menu.clone();
        items.sort_by(|a, b| a.category().cmp(b.category()));
        items
    }

    /// Pedidos del más nuevo al más viejo, con nombre de cliente resuelto.
    pub fn list_orders(&self) -> Vec<OrderRow> {
        let mut rows: Vec<OrderRow> = self
            .orders
            .iter()
            .map(|order| {
                let customer_name = self
                    .customers
                    .iter()
                    .find(|c| c.id() == order.customer_id())
                    .map(|c| c.name().to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                OrderRow { order: order.clone(), customer_name }
            })
            .collect();
        rows.sort_by(|a, b| b.order.id().cmp(&a.order.id()));
        rows
    }

    /// Resumen de ingresos para la ventana pedida, con "hoy" inyectable.
    pub fn revenue_summary(&self, period: Period, today: NaiveDate) -> RevenueSummary {
        report::summarize(&self.revenue, period, today)
    }

    /// Igual que `revenue_summary` pero con la fecha local actual.
    pub fn list_revenue(&self, period: Period) -> RevenueSummary {
        self.revenue_summary(period, Local::now().date_naive())
    }

    /// Texto de factura para un pedido existente.
    pub fn bill(&self, order_id: u32) -> Result<String, DomainError> {
        let order = self
            .orders
            .iter()
            .find(|o| o.id() == order_id)
            .ok_or_else(|| DomainError::NotFound(format!("order {order_id}")))?;
        let customer = self
            .customers
            .iter()
            .find(|c| c.id() == order.customer_id())
            .ok_or_else(|| DomainError::NotFound(format!("customer {}", order.customer_id())))?;
        Ok(billing::format_bill(order, customer))
    }
}

impl Default for PosStore {
    fn default() -> Self {
        Self::new(default_menu())
    }
}
