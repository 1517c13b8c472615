//! chain-convert - Binary Entry Point
//!
//! Walks through each conversion component with sample values.
//! Set `RUST_LOG=chain_convert=trace` to see dispatcher and checksum logs.

use chain_convert::{
    from_wei, hex_to_number, number_to_hex, to_checksum_address, to_hex, to_hex_type, to_wei,
    utf8_to_hex, Result,
};
use num_bigint::BigInt;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===========================================");
    println!("  chain-convert - value conversion core");
    println!("===========================================");
    println!();

    if let Err(e) = run() {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    println!();
    println!("Run 'cargo test' to verify all tests pass.");
}

fn run() -> Result<()> {
    println!("Numeric codec:");
    let big = BigInt::from(1u8) << 64;
    let hex = number_to_hex(big)?;
    println!("  2^64        -> {}", hex);
    println!("  {} -> {}", hex, hex_to_number(&hex)?);
    println!("  -255        -> {}", number_to_hex(-255)?);
    println!();

    println!("Unit converter:");
    println!("  1.5 ether   -> {} wei", to_wei("1.5", "ether")?);
    println!("  1 wei       -> {} ether", from_wei(1, "ether")?);
    println!("  21000 gwei  -> {} ether", from_wei(to_wei(21_000, "gwei")?, "ether")?);
    println!();

    println!("Checksum encoder:");
    let address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
    let checksummed = to_checksum_address(Some(address))?;
    println!("  {} -> {}", address, checksummed);
    println!();

    println!("Type coercion:");
    for sample in ["hello", "0xAB", "-0x1f", address] {
        println!("  {:<44} -> {:<8} {}", sample, to_hex_type(sample)?, to_hex(sample)?);
    }
    println!("  {:<44} -> {:<8} {}", "true", to_hex_type(true)?, to_hex(true)?);
    println!("  utf8 \"I have 100€\" -> {}", utf8_to_hex("I have 100€"));

    info!("demo complete");
    Ok(())
}
