use std::fs;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use mali::{Config, Generator};

fn main() {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    let generator = match Generator::new(&config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error initializing generator: {}", e);
            process::exit(1);
        }
    };

    // Get the sentences to corrupt
    let text = if let Some(ref input_file) = config.input_file {
        match fs::read_to_string(input_file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", input_file, e);
                process::exit(1);
            }
        }
    } else if let Some(ref text) = config.text {
        text.clone()
    } else {
        eprintln!("Error: no sentences to corrupt were provided.");
        eprintln!();
        Config::print_help();
        process::exit(1);
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = generator.run(&mut rng, &text);

    // Write result
    if let Some(ref output_file) = config.output_file {
        if let Err(e) = fs::write(output_file, &result) {
            eprintln!("Error writing file '{}': {}", output_file, e);
            process::exit(1);
        }
    } else {
        print!("{}", result);
    }
}
