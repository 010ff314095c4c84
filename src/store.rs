//! In-memory product store.
//!
//! The store is the only stateful component in the service: an ordered
//! collection of products plus a monotonic id counter. It has no knowledge
//! of HTTP; handlers own the locking and map `None` results to error
//! responses.

use crate::models::product::{CreateProductRequest, Product, UpdateProductRequest};

/// Ordered collection of product records.
///
/// # Identifier Generation
///
/// New ids come from a counter that only ever increases, so an id is never
/// reused after its record is deleted. Deriving ids from the collection
/// length would collide after a delete-then-insert sequence.
///
/// # Concurrency
///
/// The store itself is single-threaded. Shared access across request
/// handlers goes through `Arc<tokio::sync::RwLock<ProductStore>>` (see
/// [`crate::state::AppState`]).
#[derive(Debug)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: u64,
}

impl ProductStore {
    /// Create a store pre-populated with the three sample products the
    /// service ships with.
    pub fn seeded() -> Self {
        let products = vec![
            Product {
                id: "1".to_string(),
                name: "Laptop".to_string(),
                description: "High-performance laptop with 16GB RAM".to_string(),
                price: 1200.0,
                category: "electronics".to_string(),
                in_stock: true,
            },
            Product {
                id: "2".to_string(),
                name: "Smartphone".to_string(),
                description: "Latest model with 128GB storage".to_string(),
                price: 800.0,
                category: "electronics".to_string(),
                in_stock: true,
            },
            Product {
                id: "3".to_string(),
                name: "Coffee Maker".to_string(),
                description: "Programmable coffee maker with timer".to_string(),
                price: 50.0,
                category: "kitchen".to_string(),
                in_stock: false,
            },
        ];

        Self {
            next_id: products.len() as u64 + 1,
            products,
        }
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Insert a new product, assigning it the next id.
    ///
    /// Returns the stored record.
    pub fn insert(&mut self, request: CreateProductRequest) -> Product {
        let product = Product {
            id: self.next_id.to_string(),
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            in_stock: request.in_stock,
        };
        self.next_id += 1;

        self.products.push(product.clone());
        product
    }

    /// Shallow-merge the update's present fields onto the product with the
    /// given id.
    ///
    /// Fields absent from the update keep their current values. Returns the
    /// merged record, or `None` if no product has that id.
    pub fn replace_fields(&mut self, id: &str, update: UpdateProductRequest) -> Option<Product> {
        let product = self.products.iter_mut().find(|product| product.id == id)?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(in_stock) = update.in_stock {
            product.in_stock = in_stock;
        }

        Some(product.clone())
    }

    /// Remove the product with the given id.
    ///
    /// Returns the removed record, or `None` if no product has that id.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|product| product.id == id)?;
        Some(self.products.remove(index))
    }
}
