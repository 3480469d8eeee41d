pub mod order_factory;

pub use order_factory::OrderFactory;
