//! HTTP request handlers.
//!
//! Handlers extract path, query and body input, convert DTOs to domain parameters, call
//! the matching service and wrap the result in the response envelope. Every handler is
//! annotated with `#[utoipa::path]` and listed in the OpenAPI document built by the router.

pub mod attendance;
pub mod category;
pub mod count;
pub mod event;
pub mod member;
pub mod semester;
pub mod status;

#[cfg(test)]
mod test;
