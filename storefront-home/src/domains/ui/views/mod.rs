pub mod featured_products;
pub mod hero;
pub mod product_rail;
