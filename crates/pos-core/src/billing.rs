//! Generación de factura en texto plano, una línea por artículo.

use pos_domain::{Customer, Order};

pub fn format_bill(order: &Order, customer: &Customer) -> String {
    let items = order.items().replace(", ", "\n       ");
    format!(
        "--- CHAI KI CHUSKI BILL ---\n\
         Order ID: {}\n\
         Date: {}\n\
         Status: {}\n\
         ---------------------------\n\
         Customer: {}\n\
         Phone: {}\n\
         Email: {}\n\
         ---------------------------\n\
         Items: {}\n\
         ---------------------------\n\
         TOTAL: ₹{}",
        order.id(),
        order.order_date(),
        order.status(),
        customer.name(),
        customer.phone(),
        customer.email().unwrap_or("-"),
        items,
        order.total(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use pos_domain::Money;

    #[test]
    fn factura_con_items_multilinea() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, 15, 9, 30, 0).unwrap();
        let order = Order::new(7, 3, "Masala Chai x2, Samosa x1".into(), Money::from_rupees(80), date, at);
        let customer = Customer::new(3, "Asha", "9999", None).unwrap();

        let bill = format_bill(&order, &customer);
        assert!(bill.contains("Order ID: 7"));
        assert!(bill.contains("Email: -"));
        assert!(bill.contains("Masala Chai x2\n       Samosa x1"));
        assert!(bill.ends_with("TOTAL: ₹80.00"));
    }
}
