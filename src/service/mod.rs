//! Service layer orchestrating the external calls of the link flow.
//!
//! Services borrow the shared HTTP and OAuth2 clients from the application
//! state; each request constructs them on the stack and drops them when the
//! response is written.

pub mod kajabi;
pub mod oauth;
