mod domain;
mod error;
mod clients;
mod services;
mod storage;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod catalog_actor;
mod cart_actor;

use std::sync::Arc;
use tracing::{info, Instrument};
use crate::app_system::{setup_tracing, CartConfig, CartSystem};
use crate::domain::{Cart, NewCatalogItem, UpdateProductAmount};
use crate::services::{CartPorts, HttpCatalog, TracingNotifier};
use crate::storage::FileStorage;

fn demo_catalog() -> Vec<NewCatalogItem> {
    vec![
        NewCatalogItem::new("Tenis de Caminhada Leve Confortavel", 179.9, "https://cdn.example/shoes/1.jpg", 3),
        NewCatalogItem::new("Tenis VR Caminhada Confortavel Detalhes Couro Masculino", 139.9, "https://cdn.example/shoes/2.jpg", 5),
        NewCatalogItem::new("Tenis Adidas Duramo Lite 2.0", 219.9, "https://cdn.example/shoes/3.jpg", 2),
        NewCatalogItem::new("Tenis Adidas Duramo SL", 189.9, "https://cdn.example/shoes/4.jpg", 0),
    ]
}

fn log_cart(cart: &Cart) {
    for product in cart.products() {
        info!(product_id = product.id, title = %product.title, amount = product.amount, subtotal = product.subtotal(), "Cart entry");
    }
    info!(items = cart.total_items(), total = cart.total_price(), "Cart total");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    setup_tracing(&config);

    info!(key = %config.storage_key, dir = %config.storage_dir, "Starting cart store");

    let storage = Arc::new(FileStorage::new(&config.storage_dir));
    let notifier = Arc::new(TracingNotifier);

    let system = match &config.api_url {
        Some(api_url) => {
            info!(%api_url, "Using storefront API catalog");
            let catalog = Arc::new(HttpCatalog::new(api_url.as_str()));
            let ports = CartPorts {
                stock: catalog.clone(),
                products: catalog,
                storage,
                notifier,
            };
            CartSystem::start(&config, ports).await
        }
        None => {
            info!("Using in-process demo catalog");
            CartSystem::with_catalog(&config, storage, notifier, demo_catalog()).await?
        }
    };

    let cart_client = system.cart_client.clone();
    let span = tracing::info_span!("shopping_session");
    let cart = async {
        cart_client.add_product(1).await?;
        cart_client.add_product(1).await?;
        cart_client.add_product(2).await?;
        cart_client.add_product(4).await?;
        cart_client.update_product_amount(UpdateProductAmount { product_id: 2, amount: 9 }).await?;
        cart_client.update_product_amount(UpdateProductAmount { product_id: 2, amount: 3 }).await?;
        cart_client.remove_product(3).await?;
        cart_client.cart().await
    }
    .instrument(span)
    .await?;

    log_cart(&cart);

    drop(cart_client);
    system.shutdown().await?;

    info!("Cart store stopped");
    Ok(())
}
