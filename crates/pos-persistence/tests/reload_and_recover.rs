//! Recuperación tras "recargar la página": la sesión se reabre sobre el mismo
//! directorio de datos y el estado completo sobrevive.

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, TimeZone, Utc};
use pos_core::{CustomerDetails, PosSession};
use pos_domain::{Money, OrderStatus};
use pos_persistence::FileStateStore;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pos-reload-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn confirm(session: &mut PosSession<FileStateStore>, name: &str) -> u32 {
    let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let at = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();
    let details = CustomerDetails { name: name.into(), phone: "1234".into(), email: None };
    session.confirm_order_at(&details, today, at).unwrap().order_id
}

#[test]
fn venta_completa_sobrevive_la_recarga() {
    let dir = scratch_dir("venta");

    {
        let store = FileStateStore::new(&dir).unwrap();
        let mut session = PosSession::open(store).unwrap();
        session.add_to_cart(1).unwrap();
        session.add_to_cart(1).unwrap();
        let id = confirm(&mut session, "Asha");
        session.mark_completed(&[id]);
        session.restock(3, 10).unwrap();
        assert!(!session.last_save_failed());
    }

    // nueva sesión, mismo directorio
    let store = FileStateStore::new(&dir).unwrap();
    let mut session = PosSession::open(store).unwrap();

    assert_eq!(session.store().find_item(1).unwrap().stock(), 48);
    assert_eq!(session.store().find_item(3).unwrap().stock(), 70);
    assert_eq!(session.store().orders().len(), 1);
    assert_eq!(session.store().orders()[0].status(), OrderStatus::Completed);
    assert_eq!(session.store().revenue()[0].amount(), Money::from_rupees(60));

    // el carrito era transitorio: no se recupera nada de él
    assert!(session.store().cart().is_empty());

    // los contadores siguen donde quedaron
    session.add_to_cart(2).unwrap();
    assert_eq!(confirm(&mut session, "Ravi"), 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn documentos_en_disco_uno_por_clave() {
    let dir = scratch_dir("claves");
    let store = FileStateStore::new(&dir).unwrap();
    let mut session = PosSession::open(store).unwrap();
    session.add_to_cart(1).unwrap();
    confirm(&mut session, "Asha");

    for key in ["menu", "orders", "customers", "revenue", "next_customer_id", "next_order_id"] {
        assert!(dir.join(format!("{key}.json")).exists(), "falta {key}.json");
    }

    let _ = fs::remove_dir_all(&dir);
}
