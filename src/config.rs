//! Configuration and CLI arguments

/// Default function-word vocabulary for the insert operation.
const FUNCTION_WORDS: [&str; 7] = ["ng", "nang", "ay", "na", "pa", "ang", "si"];

/// Default affix vocabulary for the legacy affix rule.
const AFFIXES: [&str; 7] = ["nag", "mag", "um", "in", "ka", "pa", "ma"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound on distinct structural operations per sentence (1..=4)
    pub max_errors: usize,
    /// Seed for the pseudorandom source; None = seeded from entropy
    pub seed: Option<u64>,
    /// Emit the third `errors` column with the per-sentence trace
    pub trace: bool,
    /// Input file, one clean sentence per line
    pub input_file: Option<String>,
    /// Output file for the CSV table
    pub output_file: Option<String>,
    /// Single sentence to corrupt (positional argument)
    pub text: Option<String>,
    /// Error-type weight overrides, by rule name
    pub weights: Vec<(String, f64)>,
    /// Function words drawn from by the insert operation
    pub function_words: Vec<String>,
    /// Affix vocabulary for the legacy affix rule
    pub affixes: Vec<String>,
    /// Show help
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_errors: 2,
            seed: None,
            trace: false,
            input_file: None,
            output_file: None,
            text: None,
            weights: Vec::new(),
            function_words: FUNCTION_WORDS.iter().map(|s| s.to_string()).collect(),
            affixes: AFFIXES.iter().map(|s| s.to_string()).collect(),
            show_help: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-m" | "--max-errors" => {
                    let value = args_iter.next().ok_or("--max-errors requires a value")?;
                    config.max_errors = value
                        .parse()
                        .map_err(|_| format!("--max-errors must be an integer, got '{}'", value))?;
                }
                "--seed" => {
                    let value = args_iter.next().ok_or("--seed requires a value")?;
                    config.seed = Some(
                        value
                            .parse()
                            .map_err(|_| format!("--seed must be an integer, got '{}'", value))?,
                    );
                }
                "--trace" => {
                    config.trace = true;
                }
                "-i" | "--input" => {
                    config.input_file = Some(args_iter.next().ok_or("--input requires a value")?);
                }
                "-o" | "--output" => {
                    config.output_file = Some(args_iter.next().ok_or("--output requires a value")?);
                }
                "-w" | "--weight" => {
                    let value = args_iter.next().ok_or("--weight requires a value")?;
                    config.weights.push(Self::parse_weight(&value)?);
                }
                _ => {
                    if arg.starts_with('-') {
                        return Err(format!("Unknown option: {}", arg));
                    }
                    // Positional argument = sentence to corrupt
                    config.text = Some(arg);
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Boundary validation: an unsatisfiable budget is rejected here, never
    /// discovered mid-loop.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_errors < 1 || self.max_errors > 4 {
            return Err(format!(
                "max_errors must be between 1 and 4, got {}",
                self.max_errors
            ));
        }
        Ok(())
    }

    /// Parses a `name=weight` pair, e.g. `ligature=0.3` or `ng_nang=22`.
    fn parse_weight(value: &str) -> Result<(String, f64), String> {
        let (name, weight) = value
            .split_once('=')
            .ok_or_else(|| format!("--weight expects name=value, got '{}'", value))?;
        let weight: f64 = weight
            .parse()
            .map_err(|_| format!("weight for '{}' must be a number, got '{}'", name, weight))?;
        Ok((name.to_string(), weight))
    }

    pub fn print_help() {
        println!(
            r#"mali - artificial grammatical error generator for Filipino

USAGE:
    mali [OPTIONS] [SENTENCE]

ARGUMENTS:
    [SENTENCE]    Single sentence to corrupt

OPTIONS:
    -h, --help                Show this help
    -m, --max-errors <N>      Max distinct operations per sentence, 1-4 (default: 2)
    --seed <N>                Seed the random source for reproducible output
    --trace                   Add an 'errors' column with the per-sentence trace
    -i, --input <FILE>        Input file, one sentence per line
    -o, --output <FILE>       Output CSV file (default: stdout)
    -w, --weight <NAME=W>     Override an error-type weight (repeatable)

ERROR TYPES:
    ligature, enclitic, hyphenation, ng_nang, morphological, repetition, affix

EXAMPLES:
    mali "Magluto ka ng manok."
    mali --input sentences.txt --output pairs.csv --seed 42
    mali -i sentences.txt --trace -w ng_nang=40 -w repetition=5"#
        );
    }
}
