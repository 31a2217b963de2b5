// pos-domain library entry point
pub mod cart;
pub mod customer;
pub mod errors;
pub mod menu_item;
pub mod money;
pub mod order;
pub mod revenue;

pub use cart::{Cart, CartLine};
pub use customer::Customer;
pub use errors::DomainError;
pub use menu_item::MenuItem;
pub use money::Money;
pub use order::{Order, OrderStatus};
pub use revenue::RevenueFact;
