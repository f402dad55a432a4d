//! Price storage: the repository contract over the pricing collection plus its
//! production (MongoDB) implementation and an in-memory test double.

pub mod memory;
pub mod mongo;
pub mod record;
pub mod store;

pub use memory::InMemoryPriceStore;
pub use mongo::MongoPriceStore;
pub use record::PriceRecord;
pub use store::PriceStore;
