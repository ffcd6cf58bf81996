/// GET / handler - Static greeting endpoint
pub async fn hello_handler() -> &'static str {
    "Hello, Spring boot!"
}
