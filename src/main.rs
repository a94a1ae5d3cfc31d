use growth_graph::GraphConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    growth_graph::run(&GraphConfig::default())?;
    Ok(())
}
