//! pos-core: store del punto de venta, transacción de confirmación y
//! agregación de ingresos.
pub mod billing;
pub mod persist;
pub mod report;
pub mod session;
pub mod store;

pub use persist::{keys, InMemoryStateStore, StateStore, StorageError};
pub use report::{DailyRevenue, Period, RevenueSummary};
pub use session::PosSession;
pub use store::{default_menu, CustomerDetails, OrderReceipt, OrderRow, PosStore};
