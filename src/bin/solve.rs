use network_delay::problem::Problem;
use std::env;
use std::fs;
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Problem file path, or stdin when absent
    let args: Vec<String> = env::args().collect();
    let text = if args.len() > 1 {
        fs::read_to_string(&args[1])?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let problem = Problem::from_json(&text)?;
    let solution = problem.solve()?;
    println!("{}", serde_json::to_string_pretty(&solution)?);

    Ok(())
}
