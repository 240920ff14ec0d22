//! Validating a nested order
//!
//! Run with `RUST_LOG=rulebook=debug` to see the orchestration logs, and
//! `RULEBOOK_TRANSLATE=false` to get structured rule errors instead of text.

use std::collections::HashMap;

use rulebook::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, Serialize)]
struct Product {
    id: i64,
    price: f64,
    quantity: u32,
    note: Option<String>,
    customization: HashMap<String, String>,
    option_indexes: Vec<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
struct Order {
    id: i64,
    user_id: i64,
    products: Vec<Product>,
    coupon: Option<String>,
}

fn product() -> Rule<Product> {
    fields(|p: &Product| {
        vec![
            named("id", p.id, number::<i64>().required()),
            named("price", p.price, number::<f64>().required()),
            named("quantity", p.quantity, number::<u32>().required().min(1).max(10)),
            named("note", p.note.clone(), option::<String>().optional(string().required())),
            named(
                "customization",
                p.customization.clone(),
                map::<HashMap<String, String>>()
                    .required()
                    .each(string().required()),
            ),
            named(
                "option_indexes",
                p.option_indexes.clone(),
                slice::<i32>()
                    .required()
                    .each(number::<i32>().required().min(0).max(5)),
            ),
        ]
    })
}

async fn validate_order(ctx: &Context, order: &Order) -> Result<(), ValidationError> {
    execute(
        ctx,
        [
            named("id", order.id, number::<i64>().required()),
            named("user_id", order.user_id, number::<i64>().required()),
            named(
                "coupon",
                order.coupon.clone(),
                option::<String>().optional(string().required().matches(&patterns::ALPHA_NUMERIC)),
            ),
            named("products", order.products.clone(), slice::<Product>().each(product())),
        ],
    )
    .await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ctx = Config::from_env().context();

    let order = Order {
        id: 17,
        coupon: Some("SPRING-SALE".into()),
        products: vec![Product::default()],
        ..Order::default()
    };

    match validate_order(&ctx, &order).await {
        Ok(()) => println!("order is valid"),
        Err(err) if err.is_internal() => return Err(err.into()),
        Err(err) => println!("{}", serde_json::to_string_pretty(&err)?),
    }
    Ok(())
}
