pub mod application {
    pub mod product {
        pub mod consumer_price;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod search;
        pub mod update;
        pub mod update_name;
        mod validation;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod repository;
        pub mod store;
        pub mod value_objects;
        pub mod use_cases {
            pub mod consumer_price;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod search;
            pub mod update;
            pub mod update_name;
        }
    }
}
