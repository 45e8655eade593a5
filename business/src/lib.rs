pub mod application {
    pub mod item {
        pub mod add;
        pub mod delete;
        pub mod update;
    }
    pub mod item_list {
        pub mod create;
        pub mod delete;
        pub mod update;
    }
    pub mod item_picture {
        pub mod attach;
        pub mod delete;
    }
    pub mod shopping_user {
        pub mod delete;
        pub mod get_overview;
        pub mod register;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod session;
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod delete;
            pub mod update;
        }
    }
    pub mod item_list {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod update;
        }
    }
    pub mod item_picture {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod attach;
            pub mod delete;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod shopping_user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_overview;
            pub mod register;
        }
    }
}

#[cfg(test)]
mod test_support;
