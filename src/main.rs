#[tokio::main]
async fn main() {
    trivia::start_server().await;
}
