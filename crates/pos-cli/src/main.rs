use pos_core::{CustomerDetails, Period, PosSession};
use pos_domain::Money;
use pos_persistence::FileStateStore;

// Capa de presentación mínima sobre las operaciones del core.
// `pos-cli <comando> [--flag valor ...]`; el estado vive en POS_DATA_DIR.

fn usage() -> ! {
    eprintln!("Uso: pos-cli <comando>");
    eprintln!("  menu");
    eprintln!("  stock");
    eprintln!("  orders");
    eprintln!("  order --item <ID> [--item <ID> ...] --name <NOMBRE> --phone <TEL> [--email <MAIL>]");
    eprintln!("  restock --item <ID> --by <N>");
    eprintln!("  add-item --name <NOMBRE> --category <CAT> --price <RUPIAS> --stock <N>");
    eprintln!("  complete --order <ID> [--order <ID> ...]");
    eprintln!("  revenue [--period all|today|yesterday|week|month|year]");
    eprintln!("  bill --order <ID>");
    std::process::exit(2);
}

fn open_session() -> PosSession<FileStateStore> {
    let backend = match FileStateStore::from_env() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("[pos] error de backend: {e}");
            std::process::exit(5);
        }
    };
    match PosSession::open(backend) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[pos] estado guardado ilegible: {e}");
            std::process::exit(5);
        }
    }
}

/// Recolecta los valores de cada aparición de `--flag`.
fn flag_values(args: &[String], flag: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == flag {
            i += 1;
            if i < args.len() {
                out.push(args[i].clone());
            }
        }
        i += 1;
    }
    out
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    flag_values(args, flag).into_iter().next()
}

fn parse_u32(raw: &str, what: &str) -> u32 {
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("[pos] {what} inválido: {raw}");
            std::process::exit(3);
        }
    }
}

fn main() {
    // Cargar .env si existe para obtener POS_DATA_DIR
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else { usage() };
    let rest = &args[1..];

    match command.as_str() {
        "menu" => {
            let session = open_session();
            for (category, items) in session.list_menu() {
                println!("{category}:");
                for item in items {
                    let stock = if item.is_out_of_stock() {
                        "Out of Stock".to_string()
                    } else {
                        format!("Avail: {}", item.stock())
                    };
                    println!("  [{}] {} ₹{} ({})", item.id(), item.item_name(), item.price(), stock);
                }
            }
        }
        "stock" => {
            let session = open_session();
            println!("{:<4} {:<10} {:<20} {:>6}", "ID", "Categoría", "Artículo", "Stock");
            for item in session.list_stock() {
                println!(
                    "{:<4} {:<10} {:<20} {:>6}",
                    item.id(),
                    item.category(),
                    item.item_name(),
                    item.stock()
                );
            }
        }
        "orders" => {
            let session = open_session();
            for row in session.list_orders() {
                println!(
                    "#{} {} {} [{}] {} ₹{}",
                    row.order.id(),
                    row.order.order_date(),
                    row.customer_name,
                    row.order.status(),
                    row.order.items(),
                    row.order.total()
                );
            }
        }
        "order" => {
            let items = flag_values(rest, "--item");
            let name = flag_value(rest, "--name");
            let phone = flag_value(rest, "--phone");
            let email = flag_value(rest, "--email");
            let (Some(name), Some(phone)) = (name, phone) else { usage() };
            if items.is_empty() {
                usage();
            }
            let mut session = open_session();
            for raw in &items {
                let id = parse_u32(raw, "id de artículo");
                if let Err(e) = session.add_to_cart(id) {
                    eprintln!("[pos] {e}");
                    std::process::exit(4);
                }
            }
            let details = CustomerDetails { name, phone, email };
            match session.confirm_order(&details) {
                Ok(receipt) => {
                    println!("Order #{} confirmado. Total: ₹{}", receipt.order_id, receipt.total);
                    if session.last_save_failed() {
                        eprintln!("[pos] advertencia: el guardado falló; el estado es sólo de esta sesión");
                    }
                }
                Err(e) => {
                    eprintln!("[pos] {e}");
                    std::process::exit(4);
                }
            }
        }
        "restock" => {
            let (Some(item), Some(by)) = (flag_value(rest, "--item"), flag_value(rest, "--by"))
            else {
                usage()
            };
            let id = parse_u32(&item, "id de artículo");
            let by: i64 = match by.parse() {
                Ok(v) => v,
                Err(_) => {
                    eprintln!("[pos] cantidad inválida: {by}");
                    std::process::exit(3);
                }
            };
            let mut session = open_session();
            match session.restock(id, by) {
                Ok(stock) => println!("Stock actualizado: {stock}"),
                Err(e) => {
                    eprintln!("[pos] {e}");
                    std::process::exit(4);
                }
            }
        }
        "add-item" => {
            let name = flag_value(rest, "--name");
            let category = flag_value(rest, "--category");
            let price = flag_value(rest, "--price");
            let stock = flag_value(rest, "--stock");
            let (Some(name), Some(category), Some(price), Some(stock)) =
                (name, category, price, stock)
            else {
                usage()
            };
            let price: f64 = match price.parse() {
                Ok(v) => v,
                Err(_) => {
                    eprintln!("[pos] precio inválido: {price}");
                    std::process::exit(3);
                }
            };
            let stock: i64 = match stock.parse() {
                Ok(v) => v,
                Err(_) => {
                    eprintln!("[pos] stock inválido: {stock}");
                    std::process::exit(3);
                }
            };
            let mut session = open_session();
            match session.add_menu_item(&name, &category, Money::from_rupees_f64(price), stock) {
                Ok(id) => println!("'{name}' agregado al menú con id {id}"),
                Err(e) => {
                    eprintln!("[pos] {e}");
                    std::process::exit(4);
                }
            }
        }
        "complete" => {
            let ids: Vec<u32> = flag_values(rest, "--order")
                .iter()
                .map(|raw| parse_u32(raw, "id de pedido"))
                .collect();
            if ids.is_empty() {
                usage();
            }
            let mut session = open_session();
            let updated = session.mark_completed(&ids);
            println!("{updated} pedido(s) marcados Completed");
        }
        "revenue" => {
            let period = match flag_value(rest, "--period") {
                Some(raw) => match raw.parse::<Period>() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("[pos] {e}");
                        std::process::exit(3);
                    }
                },
                None => Period::All,
            };
            let session = open_session();
            let summary = session.list_revenue(period);
            println!("Revenue ({period})");
            println!("Total Revenue: ₹{}", summary.total_revenue);
            println!("Total Orders: {}", summary.total_orders);
            println!("Average per Order: ₹{:.2}", summary.avg_order());
            for day in &summary.daily {
                println!("{}  {:>3} pedidos  ₹{}", day.date, day.orders, day.amount);
            }
        }
        "bill" => {
            let Some(order) = flag_value(rest, "--order") else { usage() };
            let id = parse_u32(&order, "id de pedido");
            let session = open_session();
            match session.bill(id) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("[pos] {e}");
                    std::process::exit(4);
                }
            }
        }
        _ => usage(),
    }
}
