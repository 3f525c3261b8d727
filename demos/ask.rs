use qagent::Agent;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Credentials come from the "openai" section of config.json.
    let mut agent = Agent::builder().platform("openai").build()?;

    let answer = agent.ask("Share a fun fact about Rust programming.").await?;
    println!("Assistant:\n{answer}");

    agent.update_system_prompt("You answer in exactly one sentence.");
    let short = agent.ask("What is the borrow checker?").await?;
    println!("Assistant:\n{short}");

    Ok(())
}
