//! # chatclean CLI
//!
//! Command-line interface for chatclean library.

use std::path::Path;
use std::process;
use std::time::Instant;

use chrono::Utc;
use clap::Parser as ClapParser;

use chatclean::ChatcleanError;
use chatclean::cli::Args;
use chatclean::core::normalize;
use chatclean::format::write_to_format;
use chatclean::logging::init_tracing;
use chatclean::parser::load_path;

fn main() {
    let args = <Args as ClapParser>::parse();

    if let Err(e) = init_tracing(args.verbose, args.log_level.as_deref()) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    if let Err(e) = run(&args) {
        tracing::error!(error = %e, "run failed");
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatcleanError> {
    let total_start = Instant::now();
    let input = Path::new(&args.input);

    let document = load_path(input)?;
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.clone());

    let config = args.render_config();
    let transcript = normalize(&document, &config);

    // Preview mode: the transcript is the only thing on stdout
    if args.stdout {
        println!("{}", transcript.full_text);
        return Ok(());
    }

    let format = args.output_format();
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| format.default_file_name(Utc::now()));

    println!("🧹 chatclean v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Loaded:  {}", file_name);
    if let Some(model) = &document.model {
        println!("🤖 Model:   {}", model);
    }
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);
    println!();

    write_to_format(&transcript, &output_path, format)?;

    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Chunks:    {}", document.chunks.len());
    println!("   Turns:     {}", transcript.len());
    println!("   Pairs:     {}", transcript.stats.total_pairs);
    println!("   Omitted:   {}", transcript.stats.omitted);
    println!("   Thoughts:  {}", transcript.stats.thoughts);
    println!();
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
