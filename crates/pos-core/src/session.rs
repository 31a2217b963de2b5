//! Sesión con persistencia: carga el estado al abrir y guarda el estado
//! completo después de cada operación mutadora.
//!
//! El guardado es best-effort: un fallo del backend no bloquea la mutación en
//! memoria ya aplicada, pero se loguea y queda consultable vía
//! `last_save_failed`.

use chrono::{DateTime, NaiveDate, Utc};
use pos_domain::{DomainError, Money};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::persist::{keys, StateStore, StorageError};
use crate::report::{Period, RevenueSummary};
use crate::store::{default_menu, CustomerDetails, OrderReceipt, OrderRow, PosStore};

pub struct PosSession<S: StateStore> {
    store: PosStore,
    state: S,
    last_save_failed: bool,
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, StorageError> {
    serde_json::from_value(value).map_err(|e| StorageError::Serde(e.to_string()))
}

fn encode<T: serde::Serialize>(value: &T) -> Result<Value, StorageError> {
    serde_json::to_value(value).map_err(|e| StorageError::Serde(e.to_string()))
}

impl<S: StateStore> PosSession<S> {
    /// Abre la sesión leyendo las seis claves. Un estado ausente arranca con
    /// el menú por defecto y ledgers vacíos; un estado corrupto sí es error.
    pub fn open(state: S) -> Result<Self, StorageError> {
        let menu = match state.load(keys::MENU)? {
            Some(v) => decode(v)?,
            None => default_menu(),
        };
        let orders = match state.load(keys::ORDERS)? {
            Some(v) => decode(v)?,
            None => Vec::new(),
        };
        let customers = match state.load(keys::CUSTOMERS)? {
            Some(v) => decode(v)?,
            None => Vec::new(),
        };
        let revenue = match state.load(keys::REVENUE)? {
            Some(v) => decode(v)?,
            None => Vec::new(),
        };
        let next_customer_id = match state.load(keys::NEXT_CUSTOMER_ID)? {
            Some(v) => decode(v)?,
            None => 1,
        };
        let next_order_id = match state.load(keys::NEXT_ORDER_ID)? {
            Some(v) => decode(v)?,
            None => 1,
        };
        let store =
            PosStore::from_parts(menu, orders, customers, revenue, next_customer_id, next_order_id);
        Ok(PosSession { store, state, last_save_failed: false })
    }

    pub fn store(&self) -> &PosStore {
        &self.store
    }

    /// Devuelve el backend de persistencia (p.ej. para reabrir la sesión).
    pub fn into_state(self) -> S {
        self.state
    }

    /// `true` si el último guardado falló (la mutación en memoria quedó igual).
    pub fn last_save_failed(&self) -> bool {
        self.last_save_failed
    }

    fn try_persist(&mut self) -> Result<(), StorageError> {
        let menu = encode(&self.store.menu())?;
        let orders = encode(&self.store.orders())?;
        let customers = encode(&self.store.customers())?;
        let revenue = encode(&self.store.revenue())?;
        let next_customer_id = encode(&self.store.next_customer_id())?;
        let next_order_id = encode(&self.store.next_order_id())?;
        self.state.save(keys::MENU, &menu)?;
        self.state.save(keys::ORDERS, &orders)?;
        self.state.save(keys::CUSTOMERS, &customers)?;
        self.state.save(keys::REVENUE, &revenue)?;
        self.state.save(keys::NEXT_CUSTOMER_ID, &next_customer_id)?;
        self.state.save(keys::NEXT_ORDER_ID, &next_order_id)?;
        log::debug!("estado persistido");
        Ok(())
    }

    fn persist(&mut self) {
        match self.try_persist() {
            Ok(()) => self.last_save_failed = false,
            Err(e) => {
                log::warn!("guardado best-effort falló: {e}");
                self.last_save_failed = true;
            }
        }
    }

    // --- operaciones mutadoras (delegan y persisten) ---

    /// El carrito es transitorio: agregarle no persiste nada.
    pub fn add_to_cart(&mut self, item_id: u32) -> Result<(), DomainError> {
        self.store.add_to_cart(item_id)
    }

    pub fn clear_cart(&mut self) {
        self.store.clear_cart();
    }

    pub fn confirm_order(&mut self, details: &CustomerDetails) -> Result<OrderReceipt, DomainError> {
        let receipt = self.store.confirm_order(details)?;
        self.persist();
        Ok(receipt)
    }

    pub fn confirm_order_at(
        &mut self,
        details: &CustomerDetails,
        today: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Result<OrderReceipt, DomainError> {
        let receipt = self.store.confirm_order_at(details, today, created_at)?;
        self.persist();
        Ok(receipt)
    }

    pub fn restock(&mut self, item_id: u32, increase_by: i64) -> Result<u32, DomainError> {
        let stock = self.store.restock(item_id, increase_by)?;
        self.persist();
        Ok(stock)
    }

    pub fn add_menu_item(
        &mut self,
        name: &str,
        category: &str,
        price: Money,
        stock: i64,
    ) -> Result<u32, DomainError> {
        let id = self.store.add_menu_item(name, category, price, stock)?;
        self.persist();
        Ok(id)
    }

    pub fn mark_completed(&mut self, order_ids: &[u32]) -> usize {
        let updated = self.store.mark_completed(order_ids);
        self.persist();
        updated
    }

    // --- proyecciones de lectura ---

    pub fn list_menu(&self) -> Vec<(String, Vec<pos_domain::MenuItem>)> {
        self.store.list_menu()
    }

    pub fn list_stock(&self) -> Vec<pos_domain::MenuItem> {
        self.store.list_stock()
    }

    pub fn list_orders(&self) -> Vec<OrderRow> {
        self.store.list_orders()
    }

    pub fn list_revenue(&self, period: Period) -> RevenueSummary {
        self.store.list_revenue(period)
    }

    pub fn bill(&self, order_id: u32) -> Result<String, DomainError> {
        self.store.bill(order_id)
    }
}
