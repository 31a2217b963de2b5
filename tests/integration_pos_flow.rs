//! Integración de punta a punta: ventas de varios días con backend de
//! archivos, ventanas de ingresos y forma de los documentos en disco.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use pos_core::{CustomerDetails, Period, PosSession};
use pos_domain::{Money, OrderStatus};
use pos_persistence::FileStateStore;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chaipos-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn sell(
    session: &mut PosSession<FileStateStore>,
    item_id: u32,
    qty: u32,
    day: NaiveDate,
    name: &str,
) -> u32 {
    for _ in 0..qty {
        session.add_to_cart(item_id).unwrap();
    }
    let at = day.and_hms_opt(11, 0, 0).unwrap().and_utc();
    let details = CustomerDetails { name: name.into(), phone: "1234".into(), email: None };
    session.confirm_order_at(&details, day, at).unwrap().order_id
}

#[test]
fn semana_de_ventas_con_recarga() {
    let dir = scratch_dir("semana");
    let mut session = PosSession::open(FileStateStore::new(&dir).unwrap()).unwrap();

    // lunes a miércoles de la misma semana
    let mon = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
    let tue = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
    let wed = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();

    sell(&mut session, 1, 2, mon, "Asha"); // ₹60
    sell(&mut session, 3, 3, tue, "Ravi"); // ₹60
    let last = sell(&mut session, 4, 1, wed, "Meera"); // ₹60

    // recarga: sesión nueva sobre el mismo directorio
    let session = PosSession::open(FileStateStore::new(&dir).unwrap()).unwrap();
    let store = session.store();

    assert_eq!(store.orders().len(), 3);
    assert_eq!(store.customers().len(), 3);
    assert_eq!(store.revenue().len(), 3);
    assert_eq!(store.next_order_id(), last + 1);

    // ventanas respecto del miércoles
    let today = store.revenue_summary(Period::Today, wed);
    assert_eq!(today.total_revenue, Money::from_rupees(60));
    assert_eq!(today.total_orders, 1);

    let yesterday = store.revenue_summary(Period::Yesterday, wed);
    assert_eq!(yesterday.total_revenue, Money::from_rupees(60));

    let week = store.revenue_summary(Period::Week, wed);
    assert_eq!(week.total_orders, 3);
    assert_eq!(week.total_revenue, Money::from_rupees(180));
    assert_eq!(week.avg_order(), 60.0);
    assert_eq!(week.daily.len(), 3);
    assert_eq!(week.daily[0].date, wed, "desglose del más nuevo al más viejo");

    // proyección determinista: mismo (period, today) ⇒ mismo resultado
    assert_eq!(store.revenue_summary(Period::Week, wed), week);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn completar_pedidos_y_facturar_tras_recarga() {
    let dir = scratch_dir("completar");
    let mut session = PosSession::open(FileStateStore::new(&dir).unwrap()).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let a = sell(&mut session, 1, 1, day, "Asha");
    let b = sell(&mut session, 3, 2, day, "Ravi");

    assert_eq!(session.mark_completed(&[a, 999]), 1);

    let session = PosSession::open(FileStateStore::new(&dir).unwrap()).unwrap();
    let rows = session.list_orders();
    assert_eq!(rows[0].order.id(), b, "listado descendente");
    assert_eq!(rows[1].order.status(), OrderStatus::Completed);
    assert_eq!(rows[0].order.status(), OrderStatus::Pending);

    let bill = session.bill(b).unwrap();
    assert!(bill.contains("Customer: Ravi"));
    assert!(bill.contains("Samosa x2"));
    assert!(bill.contains("TOTAL: ₹40.00"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn documentos_en_disco_con_la_forma_original() {
    let dir = scratch_dir("forma");
    let mut session = PosSession::open(FileStateStore::new(&dir).unwrap()).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    sell(&mut session, 1, 2, day, "Asha");

    let menu: serde_json::Value =
        serde_json::from_slice(&fs::read(dir.join("menu.json")).unwrap()).unwrap();
    assert_eq!(menu[0]["item_name"], "Masala Chai");
    assert_eq!(menu[0]["stock"], 48);

    let revenue: serde_json::Value =
        serde_json::from_slice(&fs::read(dir.join("revenue.json")).unwrap()).unwrap();
    assert_eq!(revenue[0]["order_id"], 1);
    assert_eq!(revenue[0]["amount"], 60.0);
    assert_eq!(revenue[0]["revenue_date"], "2024-05-15");

    let _ = fs::remove_dir_all(&dir);
}
