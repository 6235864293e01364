use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the interface snapshot as pretty-printed JSON
    Dump,
    /// Print a human-readable interface listing
    List,
}

fn main() -> Result<(), ifsnap::Error> {
    env_logger::init();

    let args = Cli::parse();

    match args.command {
        Commands::Dump => {
            let records = ifsnap::snapshot()?;
            println!("{}", serde_json::to_string_pretty(&records).unwrap());
        }
        Commands::List => {
            for record in ifsnap::snapshot()? {
                println!("Name: {}", record.name);
                println!("Flags: {}", record.flags);
                if let Some(mac) = record.mac {
                    println!("MAC: {mac}");
                }
                if let Some(stats) = record.statistics {
                    println!("TX: {} packets, {} bytes", stats.tx_packets, stats.tx_bytes);
                    println!("RX: {} packets, {} bytes", stats.rx_packets, stats.rx_bytes);
                }
                for entry in record.addresses.iter().flatten() {
                    match (entry.address, entry.prefix_length) {
                        (Some(address), Some(prefix)) => println!("Address: {address}/{prefix}"),
                        (Some(address), None) => println!("Address: {address}"),
                        _ => {}
                    }
                }
                println!();
            }
        }
    }
    Ok(())
}
