//! Command-line interface for `aes-ofb-rs`.

#![forbid(unsafe_code)]

use aes_core::{block_from_slice, encrypt_block, expand_key, Aes256Key};
use aesofb_stream::stream_transform;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-256-OFB CLI.
#[derive(Parser)]
#[command(
    name = "aesofb",
    version,
    author,
    about = "AES-256 OFB encrypt/decrypt tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt hex-encoded plaintext.
    Enc {
        /// AES-256 key as 64 hex characters.
        #[arg(short, long, value_name = "HEX")]
        key: String,
        /// Initialization vector as 32 hex characters.
        #[arg(short, long, value_name = "HEX")]
        iv: String,
        /// Plaintext in hex; an odd-length string is padded with one trailing 0 digit.
        #[arg(short, long, value_name = "HEX")]
        plaintext: String,
    },
    /// Decrypt hex-encoded ciphertext (OFB decryption is the same transform).
    Dec {
        /// AES-256 key as 64 hex characters.
        #[arg(short, long, value_name = "HEX")]
        key: String,
        /// Initialization vector as 32 hex characters.
        #[arg(short, long, value_name = "HEX")]
        iv: String,
        /// Ciphertext in hex; an odd-length string is padded with one trailing 0 digit.
        #[arg(short, long, value_name = "HEX")]
        ciphertext: String,
    },
    /// Encrypt a single 16-byte block, e.g. to check known-answer vectors.
    Block {
        /// AES-256 key as 64 hex characters.
        #[arg(short, long, value_name = "HEX")]
        key: String,
        /// Plaintext block as 32 hex characters.
        #[arg(short, long, value_name = "HEX")]
        block: String,
    },
    /// Run a local demo: random key and IV, encrypt a message, decrypt it back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key,
            iv,
            plaintext,
        } => cmd_enc(&key, &iv, &plaintext),
        Commands::Dec {
            key,
            iv,
            ciphertext,
        } => cmd_dec(&key, &iv, &ciphertext),
        Commands::Block { key, block } => cmd_block(&key, &block),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key_hex: &str, iv_hex: &str, plaintext_hex: &str) -> Result<()> {
    let ciphertext = transform(key_hex, iv_hex, plaintext_hex)?;
    println!("ciphertext: {}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_dec(key_hex: &str, iv_hex: &str, ciphertext_hex: &str) -> Result<()> {
    let plaintext = transform(key_hex, iv_hex, ciphertext_hex)?;
    println!("plaintext: {}", hex::encode(plaintext));
    Ok(())
}

/// Both verbs run the same symmetric OFB operation; only the label differs.
fn transform(key_hex: &str, iv_hex: &str, data_hex: &str) -> Result<Vec<u8>> {
    let key = decode_hex(key_hex, "key")?;
    let iv = decode_hex(iv_hex, "iv")?;
    let data = parse_data_hex(data_hex)?;
    let output = stream_transform(&key, &iv, &data)?;
    Ok(output)
}

fn cmd_block(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = Aes256Key::from_slice(&decode_hex(key_hex, "key")?)?;
    let block = block_from_slice(&decode_hex(block_hex, "block")?)?;
    let round_keys = expand_key(&key);
    println!("ciphertext: {}", hex::encode(encrypt_block(&block, &round_keys)));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    let mut message = [0u8; 32];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    rng.fill_bytes(&mut message);

    let ciphertext = stream_transform(&key, &iv, &message)?;
    let decrypted = stream_transform(&key, &iv, &ciphertext)?;

    println!("demo key: {}", hex::encode(key));
    println!("demo iv: {}", hex::encode(iv));
    println!("plaintext: {}", hex::encode(message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn decode_hex(hex_str: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

/// Data hex tolerates an odd number of digits by padding one trailing `0`;
/// key and IV hex must decode to exact lengths and get no such tolerance.
fn parse_data_hex(hex_str: &str) -> Result<Vec<u8>> {
    let mut text = hex_str.trim().to_string();
    if text.len() % 2 != 0 {
        text.push('0');
    }
    decode_hex(&text, "data")
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
