pub mod store;
pub mod product {
    pub mod entity;
    pub mod repository;
}
