//! Toxic test data generator for stress testing chatclean.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [chunks] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_test.json

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const ZALGO_CHARS: &[char] = &[
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0304}', '\u{0305}', '\u{0306}', '\u{0307}',
    '\u{0308}', '\u{0309}', '\u{030A}', '\u{030B}', '\u{030C}', '\u{030D}', '\u{030E}', '\u{030F}',
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤔", "🙄", "🤯", "💀", "🤖", "🦄", "🌈", "⚡", "🔥", "👍", "❤️", "🏳️‍🌈",
    "👨‍👩‍👧‍👦", "🧑‍🚀", "🤷‍♀️",
];

/// Roles that show up in real exports besides user/model.
const STRAY_ROLES: &[&str] = &["system", "tool", "function", ""];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_test.json");

    println!("🧪 Toxic Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Chunks: {}", count);
    println!("   Output: {}", output);
    println!();

    if let Err(e) = generate_export(count, output) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn generate_export(count: usize, output: &str) -> std::io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();

    writeln!(writer, "{{")?;
    writeln!(
        writer,
        "  \"runSettings\": {{\"model\": \"models/gemini-2.5-pro\", \"temperature\": 1}},"
    )?;
    writeln!(writer, "  \"systemInstruction\": {{}},")?;
    writeln!(writer, "  \"chunkedPrompt\": {{")?;
    writeln!(writer, "    \"chunks\": [")?;

    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    for i in 0..count {
        let comma = if i + 1 < count { "," } else { "" };
        let line = format!("      {}{}", generate_chunk(&mut rng, i), comma);

        bytes_written += line.len();
        writeln!(writer, "{}", line)?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let cps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} chunks/s)",
                i + 1,
                count,
                mb,
                cps
            );
        }
    }

    writeln!(writer, "    ]")?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} chunks/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

/// Cycles through the chunk shapes an export can contain.
fn generate_chunk(rng: &mut impl Rng, index: usize) -> String {
    let text = quote(&generate_toxic_text(rng, index));
    match index % 8 {
        0 | 4 => format!(r#"{{"role": "user", "text": {}, "tokenCount": {}}}"#, text, index % 500),
        1 => format!(r#"{{"role": "model", "text": {}, "isThought": true}}"#, text),
        2 | 5 => format!(r#"{{"role": "model", "text": {}}}"#, text),
        3 => format!(
            r#"{{"role": "model", "parts": [{{"text": {}, "thought": true}}, {{"text": {}}}]}}"#,
            quote("Let me reason about this first."),
            text
        ),
        6 => format!(
            r#"{{"role": "model", "parts": [{{"text": {}}}, {{"text": null}}, {{}}]}}"#,
            text
        ),
        _ => {
            let role = STRAY_ROLES.choose(rng).copied().unwrap_or("system");
            format!(r#"{{"role": {}, "text": {}}}"#, quote(role), text)
        }
    }
}

fn generate_toxic_text(rng: &mut impl Rng, index: usize) -> String {
    match index % 13 {
        // Normal messages
        0..=4 => format!("Normal message #{} with some text", index),

        // Messages with special chars
        5 => format!("Message with \"quotes\" and (parens) \\ backslash #{}", index),
        6 => format!("Message with\nnewlines\nand\ttabs #{}", index),

        // Emoji spam
        7 => {
            let emojis: String = (0..50)
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("Emoji spam: {} #{}", emojis, index)
        }

        // Zalgo text
        8 => generate_zalgo("This is zalgo text", rng),

        // Giant message (100KB+)
        9 => format!("Giant message #{}: {}", index, "X".repeat(100_000)),

        // Unicode edge cases
        10 => format!("Mixed: Hola ¿qué tal? Привет 你好 🌍 #{}", index),

        // Empty-ish
        11 => "   \n\n ".to_string(),

        // Control characters
        _ => format!("Control chars: \x00\x01\x02\x03 #{}", index),
    }
}

fn generate_zalgo(text: &str, rng: &mut impl Rng) -> String {
    let mut result = String::new();
    for c in text.chars() {
        result.push(c);
        // Add 1-10 random combining characters
        for _ in 0..rng.gen_range(1..=10) {
            result.push(ZALGO_CHARS[rng.gen_range(0..ZALGO_CHARS.len())]);
        }
    }
    result
}

fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
