//! # Seed Data Generator
//!
//! Populates the database with customers, products and sales for development.
//!
//! ## Usage
//! ```bash
//! # Generate 500 sales (default)
//! cargo run -p loja-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p loja-db --bin seed -- --count 5000
//!
//! # Specify database path
//! cargo run -p loja-db --bin seed -- --db ./lojaDB.sqlite
//! ```
//!
//! ## Generated Data
//! - One customer per name in `CUSTOMERS`
//! - One product per name in `PRODUCTS`, stock spread from -5 to 95
//! - `count` sales cycling through customers and products with
//!   deterministic quantities, so reports come out the same on every run

use std::env;

use loja_core::{Money, NewCustomer, NewProduct, NewSale};
use loja_db::{Database, DbConfig};

const CUSTOMERS: &[&str] = &[
    "Ana Souza",
    "Bruno Lima",
    "Carla Dias",
    "Daniel Rocha",
    "Eduarda Alves",
    "Felipe Costa",
    "Gabriela Nunes",
    "Heitor Ramos",
];

/// (name, unit price in cents)
const PRODUCTS: &[(&str, i64)] = &[
    ("Arroz 5kg", 2499),
    ("Feijão 1kg", 899),
    ("Café 500g", 1850),
    ("Leite 1L", 549),
    ("Pão de Forma", 799),
    ("Açúcar 1kg", 479),
    ("Óleo de Soja", 749),
    ("Macarrão 500g", 399),
    ("Sal 1kg", 299),
    ("Manteiga 200g", 1199),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 500;
    let mut db_path = String::from("./lojaDB.sqlite");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Loja Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of sales to generate (default: 500)");
                println!("  -d, --db <PATH>    Database file path (default: ./lojaDB.sqlite)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Loja Seed Data Generator");
    println!("==========================");
    println!("Database: {}", db_path);
    println!("Sales:    {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.sales().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} sales", existing);
        println!("  Skipping seed: the ledger is append-only.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    for name in CUSTOMERS {
        db.customers()
            .insert(&NewCustomer {
                name: name.to_string(),
                email: email_for(name),
                phone: String::new(),
            })
            .await?;
    }
    println!("✓ Inserted {} customers", CUSTOMERS.len());

    for (idx, (name, price_cents)) in PRODUCTS.iter().enumerate() {
        db.products()
            .insert(&NewProduct {
                name: name.to_string(),
                stock_quantity: ((idx * 37) % 101) as i64 - 5,
                price: Money::from_cents(*price_cents),
            })
            .await?;
    }
    println!("✓ Inserted {} products", PRODUCTS.len());

    println!();
    println!("Generating sales...");
    let start = std::time::Instant::now();

    for seed in 0..count {
        let sale = generate_sale(seed);
        db.sales().append(&sale).await?;

        if (seed + 1) % 100 == 0 {
            println!("  Generated {} sales...", seed + 1);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} sales in {:?}", count, elapsed);

    println!();
    println!("Top sellers:");
    for row in db.reports().top_selling(3).await? {
        println!("  {:<20} {}", row.product_name, row.total_quantity);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds the `seed`-th sale. Same seed, same sale.
fn generate_sale(seed: usize) -> NewSale {
    let customer = CUSTOMERS[(seed * 7) % CUSTOMERS.len()];
    let (product, price_cents) = PRODUCTS[(seed * 3 + seed / PRODUCTS.len()) % PRODUCTS.len()];
    let quantity = 1 + (seed % 5) as i64;

    NewSale::new(customer, product, quantity, Money::from_cents(price_cents * quantity))
}

/// "Ana Souza" → "ana.souza@example.com"
fn email_for(name: &str) -> String {
    format!("{}@example.com", name.to_lowercase().replace(' ', "."))
}
