/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler is responsible for processing a specific type of HTTP request,
/// extracting the necessary data, calling the todo item store,
/// and returning a properly formatted response.

mod health_handlers;
mod todo_item_handlers;
mod fallback_handlers;

// Re-export all handlers
pub use health_handlers::*;
pub use todo_item_handlers::*;
pub use fallback_handlers::*;
