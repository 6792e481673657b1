use clap::Parser;
use obfusc8::{Method, encode};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "obfusc8")]
#[command(version)]
#[command(
    about = "Encode payloads for obfuscation testing: URL, HTML entities, base64, escapes, and more",
    long_about = None
)]
struct Cli {
    /// Encoding method to apply
    #[arg(short, long, default_value = "url")]
    method: String,

    /// Payload to encode (if not provided, reads from --file or stdin)
    #[arg(value_name = "PAYLOAD")]
    payload: Option<String>,

    /// Read the payload from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "payload")]
    file: Option<PathBuf>,

    /// Emit the result as a JSON object instead of plain text
    #[arg(short, long)]
    json: bool,

    /// List available encoding methods
    #[arg(short, long)]
    list: bool,
}

#[derive(Serialize)]
struct EncodeReport<'a> {
    method: &'a str,
    encoded: &'a str,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        println!("Available encoding methods:\n");
        for method in Method::ALL {
            println!("  {:<12} {}", method.as_str(), method.description());
        }
        return Ok(());
    }

    let method = Method::from_str(&cli.method)
        .map_err(|e| format!("{}. Use --list to see available methods.", e))?;

    let payload = read_payload(&cli)?;
    let encoded = encode(&payload, method);

    if cli.json {
        let report = EncodeReport {
            method: method.as_str(),
            encoded: &encoded,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", encoded);
    }

    Ok(())
}

fn read_payload(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    // An explicit argument is taken verbatim; file/stdin input loses one
    // trailing newline so piped payloads encode without it.
    if let Some(payload) = &cli.payload {
        return Ok(payload.clone());
    }

    let raw = if let Some(path) = &cli.file {
        fs::read(path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    let text = String::from_utf8(raw).map_err(|_| "Payload must be valid UTF-8")?;
    Ok(strip_trailing_newline(&text).to_string())
}

fn strip_trailing_newline(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}
