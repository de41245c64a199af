#[tokio::main]
async fn main() {
    grindboard_be::start_server().await;
}
