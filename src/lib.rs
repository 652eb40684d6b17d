pub mod shared {
    pub mod http {
        pub mod params;
        pub mod responses;
    }
    pub mod infrastructure {
        pub mod roster;
    }
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod decision;
            pub mod email;
            pub mod events;
            pub mod evolve;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod sign_up {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
    }
}

pub mod shell;
