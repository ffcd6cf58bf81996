pub mod hello;
pub mod httpbin_headers;

pub use hello::hello_handler;
pub use httpbin_headers::httpbin_headers_handler;
