pub mod application {
    pub mod gift {
        pub mod enrich;
        pub mod generate;
    }
    pub mod session {
        pub mod create;
        pub mod get;
        pub mod reset;
        pub mod submit;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod gift {
        pub mod card;
        pub mod errors;
        pub mod marketplace;
        pub mod model;
        pub mod preference;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod state;
        pub mod use_cases {
            pub mod create;
            pub mod get;
            pub mod reset;
            pub mod submit;
        }
    }
}
