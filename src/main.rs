//! Binario de validación: recorre el flujo completo del punto de venta con
//! el backend in-memory y con el backend de archivos.

use chrono::{NaiveDate, TimeZone, Utc};
use pos_core::{CustomerDetails, InMemoryStateStore, Period, PosSession, PosStore};
use pos_domain::Money;
use pos_persistence::FileStateStore;

/// Validación A: venta de referencia (Masala Chai x2) sobre el store puro.
fn run_sale_validation() {
    let mut store = PosStore::default();
    store.add_to_cart(1).expect("Masala Chai debe estar en stock");
    store.add_to_cart(1).expect("segunda unidad");
    assert_eq!(store.cart_total(), Money::from_rupees(60), "carrito 2 x ₹30");

    let details =
        CustomerDetails { name: "Asha".into(), phone: "9999".into(), email: None };
    let receipt = store.confirm_order(&details).expect("la confirmación debe pasar");
    assert_eq!(receipt.total, Money::from_rupees(60));
    assert_eq!(store.find_item(1).expect("item 1").stock(), 48, "stock 50 - 2");
    assert!(store.cart().is_empty());

    println!("Validación venta: OK (order #{}, total ₹{})", receipt.order_id, receipt.total);
}

/// Validación B: agregador de ingresos con ventanas de calendario fijas.
fn run_revenue_validation() {
    let mut store = PosStore::default();
    let details =
        CustomerDetails { name: "Ravi".into(), phone: "1234".into(), email: None };
    let days = [
        NaiveDate::from_ymd_opt(2024, 5, 13).expect("fecha válida"),
        NaiveDate::from_ymd_opt(2024, 5, 14).expect("fecha válida"),
        NaiveDate::from_ymd_opt(2024, 5, 15).expect("fecha válida"),
    ];
    for (i, day) in days.iter().enumerate() {
        store.add_to_cart(3).expect("Samosa en stock");
        let at = Utc
            .with_ymd_and_hms(2024, 5, 13 + i as u32, 10, 0, 0)
            .single()
            .expect("timestamp válido");
        store.confirm_order_at(&details, *day, at).expect("venta del día");
    }

    let today = days[2];
    let s = store.revenue_summary(Period::Today, today);
    assert_eq!(s.total_orders, 1);
    assert_eq!(s.total_revenue, Money::from_rupees(20));
    let s = store.revenue_summary(Period::Week, today);
    assert_eq!(s.total_orders, 3, "los tres días caen en la misma semana");
    assert_eq!(s.daily[0].date, today, "desglose descendente");
    let s = store.revenue_summary(Period::All, today);
    assert_eq!(s.total_revenue, Money::from_rupees(60));
    assert_eq!(s.avg_order(), 20.0);

    println!("Validación ingresos: OK (3 ventas, ₹{} total)", s.total_revenue);
}

/// Validación C: persistencia — misma sesión reabierta conserva el estado.
fn run_reload_validation() {
    let dir = std::env::temp_dir().join(format!("pos-demo-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let backend = FileStateStore::new(&dir).expect("directorio de datos");
    let mut session = PosSession::open(backend).expect("sesión nueva");
    session.add_to_cart(4).expect("Lassi en stock");
    let details =
        CustomerDetails { name: "Meera".into(), phone: "5678".into(), email: None };
    let receipt = session.confirm_order(&details).expect("confirmación");
    assert!(!session.last_save_failed(), "el guardado en disco debe pasar");

    let reopened = PosSession::open(FileStateStore::new(&dir).expect("reabrir"))
        .expect("estado guardado legible");
    assert_eq!(reopened.store().orders().len(), 1);
    assert_eq!(reopened.store().next_order_id(), receipt.order_id + 1);
    let bill = reopened.bill(receipt.order_id).expect("factura");
    assert!(bill.contains("Meera"));

    let _ = std::fs::remove_dir_all(&dir);
    println!("Validación recarga: OK (order #{} recuperado del disco)", receipt.order_id);
}

/// Validación D: el guardado best-effort no bloquea la operación en memoria.
fn run_best_effort_validation() {
    let mut session =
        PosSession::open(InMemoryStateStore::default()).expect("backend in-memory");
    session.restock(3, 10).expect("reposición");
    assert!(!session.last_save_failed());
    assert_eq!(session.store().find_item(3).expect("Samosa").stock(), 70);
    println!("Validación persistencia in-memory: OK");
}

fn main() {
    let _ = dotenvy::dotenv();
    run_sale_validation();
    run_revenue_validation();
    run_reload_validation();
    run_best_effort_validation();
    println!("Todas las validaciones: OK");
}
