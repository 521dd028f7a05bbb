use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fynotek_morph::analyzer::Analyzer;
use fynotek_morph::driver::Driver;
use fynotek_morph::grammar::AffixGrammar;
use fynotek_morph::lexicon::Lexicon;
use fynotek_morph::numeral;
use fynotek_morph::phonology::FynotekPhonology;

/// Split Fynotek words into morphemes.
///
/// Each morpheme can then be looked up in a morpheme dictionary.
#[derive(Parser, Debug)]
#[command(name = "fynotek-morph", version, about, long_about = None)]
struct Args {
    /// Words to analyze
    #[arg(required_unless_present = "number")]
    words: Vec<String>,

    /// Load the dictionary from a JSON file instead of the built-in one
    #[arg(short, long, value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// Print the permitted parts of speech after each analysis
    #[arg(long)]
    show_pos: bool,

    /// Print the Fynotek spelling of an integer
    #[arg(short, long, allow_negative_numbers = true)]
    number: Option<i128>,

    /// Log analyzer decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let lexicon = match &args.lexicon {
        Some(path) => Lexicon::from_json_file(path)?,
        None => Lexicon::fynotek(),
    };

    let grammar = AffixGrammar::fynotek();
    let driver = Driver::new(Analyzer::new(&lexicon, &grammar, FynotekPhonology::new()));

    if let Some(value) = args.number {
        println!("{}", numeral::encode(driver.analyzer().lexicon(), value));
    }
    for (position, word) in args.words.iter().enumerate() {
        if args.words.len() > 1 {
            if position > 0 {
                println!();
            }
            println!("{word}:");
        }
        for line in driver.respond(word).render(args.show_pos) {
            println!("{line}");
        }
    }
    Ok(())
}
