// Domain types and value objects
mod price_bar;
mod symbol;

// Re-export commonly used types to the world
pub use price_bar::PriceBar;
pub use symbol::Symbol;
