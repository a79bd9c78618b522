use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;

    let todos = mock_server::sample_todos();
    println!("serving {} todos on {addr}", todos.len());
    mock_server::run(listener, mock_server::app(todos)).await
}
