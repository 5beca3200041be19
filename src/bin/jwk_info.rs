use anyhow::Error;
use clap::Parser;
use jwk_util::*;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, env = "JWK_FILE", conflicts_with = "json")]
    file: Option<PathBuf>,
    #[clap(short, long, env = "JWK")]
    json: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Set(JsonKeySet),
    Key(JsonKey),
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let Args { file, json } = Args::parse();
    let json = match (file, json) {
        (Some(file), _) => std::fs::read_to_string(file)?,
        (None, Some(json)) => json,
        (None, None) => return Err(Error::msg("either --file or --json is required")),
    };

    let set = match serde_json::from_str(&json)? {
        Document::Set(set) => set,
        Document::Key(key) => JsonKeySet { keys: vec![key] },
    };

    for (kid, key) in set.rsa_keys()? {
        println!("{}\t{} bits\te={}", kid.unwrap_or("-"), key.modulus_bits(), key.exponent);
    }

    Ok(())
}
