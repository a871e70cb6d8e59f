use clap::Args;

use crate::cli::OutputFormat;
use crate::core::sequence::classify;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Raw sequence text (whitespace is ignored)
    #[arg(required = true)]
    pub sequence: String,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if the text is neither a nucleic nor an amino acid sequence.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let data = classify(&args.sequence)?;

    match format {
        OutputFormat::Text => println!("{}", data.kind()),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "kind": data.kind().to_string(),
                "characters": data.characters(),
                "length": data.len(),
                "md5": data.md5(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("kind\tlength\tmd5");
            println!("{}\t{}\t{}", data.kind(), data.len(), data.md5());
        }
    }

    Ok(())
}
