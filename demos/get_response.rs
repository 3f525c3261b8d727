use qagent::{Agent, ChatOptions, get_response};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let agent = Agent::from_platform("openai", None)?;

    let options = ChatOptions {
        temperature: 0.2,
        ..ChatOptions::default()
    };

    let reply = get_response(
        &agent,
        "You are a terse code reviewer.",
        "Summarize Rust's ownership model in two sentences.",
        &options,
    )
    .await?;
    println!("{reply}");

    Ok(())
}
