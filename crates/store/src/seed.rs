//! Compiled-in seed dataset.
//!
//! A fresh profile has nothing persisted; stores fall back to this catalog
//! and order history so the storefront renders a populated demo out of the
//! box. Product ids here are the floor for admin-assigned ids (`max + 1`).

use std::collections::HashMap;

use chrono::NaiveDate;

use artstop_core::{
    Category, CategoryId, Order, OrderId, OrderItem, OrderStatus, Price, Product, ProductId,
    Variant,
};

fn variant(name: &str, value: &str, price: i64) -> Variant {
    Variant {
        name: name.to_string(),
        value: value.to_string(),
        price: Price::new(price),
        dimensions: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Seed categories.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::new(1),
            name: "Islamic Art".to_string(),
            slug: "islamic-art".to_string(),
            image: "https://images.unsplash.com/photo-1558114965-eeb97aa84c3b?w=800".to_string(),
            collections: Vec::new(),
            collection_images: HashMap::new(),
        },
        Category {
            id: CategoryId::new(2),
            name: "Home Decor".to_string(),
            slug: "home-decor".to_string(),
            image: "https://images.unsplash.com/photo-1616046229478-9901c5536a45?w=800".to_string(),
            collections: Vec::new(),
            collection_images: HashMap::new(),
        },
        Category {
            id: CategoryId::new(3),
            name: "Gifts".to_string(),
            slug: "gifts".to_string(),
            image: "https://images.pexels.com/photos/2233416/pexels-photo-2233416.jpeg".to_string(),
            collections: Vec::new(),
            collection_images: HashMap::new(),
        },
        Category {
            id: CategoryId::new(4),
            name: "Cutouts & Signage".to_string(),
            slug: "cutouts-signage".to_string(),
            image: "https://images.unsplash.com/photo-1573765727997-e02883182ba7?w=800".to_string(),
            collections: Vec::new(),
            collection_images: HashMap::new(),
        },
    ]
}

/// Seed products.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "17 Ayatul Kursi Stainless Steel Islamic Wall Art".to_string(),
            category: "islamic-art".to_string(),
            collection: None,
            price: Price::new(8000),
            old_price: Some(Price::new(9400)),
            variants: vec![
                variant("Small", "small", 6000),
                variant("Medium", "medium", 8000),
                variant("Large", "large", 12_000),
            ],
            colors: strings(&["Gold", "Silver", "Black"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1558114965-eeb97aa84c3b?w=800",
                "https://images.unsplash.com/photo-1573765727997-e02883182ba7?w=800",
            ]),
            rating: 4.8,
            review_count: 124,
            description: "Beautiful Ayatul Kursi Islamic wall art made from premium stainless steel"
                .to_string(),
            features: strings(&[
                "Premium stainless steel",
                "Laser cut design",
                "Easy mounting",
                "Weather resistant",
            ]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new(2),
            name: "69 Asma ul Husna Acrylic Islamic Wall Art".to_string(),
            category: "islamic-art".to_string(),
            collection: None,
            price: Price::new(7000),
            old_price: Some(Price::new(8200)),
            variants: vec![variant("Medium", "medium", 7000), variant("Large", "large", 10_000)],
            colors: strings(&["Blue", "Gold", "White"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1573765727997-e02883182ba7?w=800",
                "https://images.pexels.com/photos/2233416/pexels-photo-2233416.jpeg",
            ]),
            rating: 4.7,
            review_count: 89,
            description: "Elegant 99 Names of Allah wall art in premium acrylic material".to_string(),
            features: strings(&[
                "Premium acrylic",
                "Modern design",
                "Easy installation",
                "UV resistant",
            ]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new(3),
            name: "Modern Islamic Geometric Pattern Canvas".to_string(),
            category: "home-decor".to_string(),
            collection: None,
            price: Price::new(4500),
            old_price: Some(Price::new(5200)),
            variants: vec![variant("16x20", "16x20", 4500), variant("24x36", "24x36", 7500)],
            colors: strings(&["Teal", "Gold", "Black"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1615874694520-474822394e73?w=800",
                "https://images.unsplash.com/photo-1616046229478-9901c5536a45?w=800",
            ]),
            rating: 4.6,
            review_count: 67,
            description: "Modern interpretation of traditional Islamic patterns on premium canvas"
                .to_string(),
            features: strings(&[
                "High-quality canvas",
                "Gallery wrap",
                "Ready to hang",
                "Fade resistant",
            ]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new(4),
            name: "Handcrafted Islamic Lantern Set".to_string(),
            category: "gifts".to_string(),
            collection: None,
            price: Price::new(3200),
            old_price: Some(Price::new(3800)),
            variants: vec![
                variant("Small Set", "small-set", 3200),
                variant("Large Set", "large-set", 5500),
            ],
            colors: strings(&["Brass", "Silver", "Copper"]),
            images: strings(&[
                "https://images.pexels.com/photos/2233416/pexels-photo-2233416.jpeg",
                "https://images.pexels.com/photos/1099816/pexels-photo-1099816.jpeg",
            ]),
            rating: 4.9,
            review_count: 156,
            description:
                "Beautiful handcrafted Islamic lanterns perfect for Ramadan and special occasions"
                    .to_string(),
            features: strings(&[
                "Handcrafted design",
                "Premium brass",
                "LED compatible",
                "Traditional patterns",
            ]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new(5),
            name: "Custom Arabic Calligraphy Sign".to_string(),
            category: "cutouts-signage".to_string(),
            collection: None,
            price: Price::new(5500),
            old_price: Some(Price::new(6200)),
            variants: vec![
                variant("Wood", "wood", 5500),
                variant("Acrylic", "acrylic", 4800),
                variant("Metal", "metal", 7200),
            ],
            colors: strings(&["Natural", "Black", "White"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1558114965-eeb97aa84c3b?w=800",
                "https://images.unsplash.com/photo-1573765727997-e02883182ba7?w=800",
            ]),
            rating: 4.8,
            review_count: 92,
            description: "Personalized Arabic calligraphy signage for homes and businesses"
                .to_string(),
            features: strings(&[
                "Custom design",
                "Multiple materials",
                "Professional finish",
                "Fast delivery",
            ]),
            in_stock: true,
            featured: false,
        },
    ]
}

/// Seed order history.
#[must_use]
pub fn orders() -> Vec<Order> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Order {
            id: OrderId::from("ORD-001"),
            date: date(2025, 1, 15),
            status: OrderStatus::Delivered,
            total: Price::new(12_500),
            items: vec![
                OrderItem {
                    id: ProductId::new(1),
                    name: "17 Ayatul Kursi Stainless Steel Islamic Wall Art".to_string(),
                    price: Price::new(8000),
                    quantity: 1,
                    image: "https://images.unsplash.com/photo-1558114965-eeb97aa84c3b?w=200"
                        .to_string(),
                },
                OrderItem {
                    id: ProductId::new(4),
                    name: "Handcrafted Islamic Lantern Set".to_string(),
                    price: Price::new(3200),
                    quantity: 1,
                    image: "https://images.pexels.com/photos/2233416/pexels-photo-2233416.jpeg?w=200"
                        .to_string(),
                },
            ],
        },
        Order {
            id: OrderId::from("ORD-002"),
            date: date(2025, 1, 12),
            status: OrderStatus::Processing,
            total: Price::new(7000),
            items: vec![OrderItem {
                id: ProductId::new(2),
                name: "69 Asma ul Husna Acrylic Islamic Wall Art".to_string(),
                price: Price::new(7000),
                quantity: 1,
                image: "https://images.unsplash.com/photo-1573765727997-e02883182ba7?w=200"
                    .to_string(),
            }],
        },
        Order {
            id: OrderId::from("ORD-003"),
            date: date(2025, 1, 8),
            status: OrderStatus::Shipped,
            total: Price::new(4500),
            items: vec![OrderItem {
                id: ProductId::new(3),
                name: "Modern Islamic Geometric Pattern Canvas".to_string(),
                price: Price::new(4500),
                quantity: 1,
                image: "https://images.unsplash.com/photo-1615874694520-474822394e73?w=200"
                    .to_string(),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_products_are_valid() {
        for product in products() {
            product.validate().unwrap();
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<i32> = products().iter().map(|p| p.id.as_i32()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products().len());

        let mut slugs: Vec<String> = categories().iter().map(|c| c.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), categories().len());
    }

    #[test]
    fn test_every_seed_product_has_a_category() {
        let slugs: Vec<String> = categories().iter().map(|c| c.slug.clone()).collect();
        for product in products() {
            assert!(slugs.contains(&product.category), "{}", product.category);
        }
    }
}
