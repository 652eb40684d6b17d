// Composition root for the activities service.
//
// Responsibilities
// - Read config from the environment.
// - Seed the in-memory roster and wire it into the use case handlers.
// - Expose the HTTP router: REST, GraphQL, static front end and API docs.

pub mod config;
pub mod docs;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
