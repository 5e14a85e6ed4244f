use log::error;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use rage4_dns::auth::credentials::EnvCredentialManager;
use rage4_dns::config::Config;
use rage4_dns::providers::rage4::map_error;
use rage4_dns::{DNSProvider, DNSRecord, Error, Rage4Provider};

const USAGE: &str = "usage:
  rage4-dns list <zone>
  rage4-dns append <zone> <name> <type> <value> [ttl]
  rage4-dns set <zone> <name> <type> <value> [ttl]
  rage4-dns delete <zone> <name> <type> <value>";

#[derive(Debug)]
enum Command {
    List(String),
    Append(String, DNSRecord),
    Set(String, DNSRecord),
    Delete(String, DNSRecord),
}

fn parse_record(args: &[String]) -> Result<DNSRecord, Error> {
    let [name, record_type, value, rest @ ..] = args else {
        return Err(Error::InvalidInput(USAGE.to_string()));
    };
    let ttl = match rest {
        [] => 0,
        [ttl] => ttl
            .parse()
            .map_err(|_| Error::InvalidInput(format!("invalid ttl: {ttl}")))?,
        _ => return Err(Error::InvalidInput(USAGE.to_string())),
    };
    Ok(DNSRecord::new(
        name.as_str(),
        record_type.as_str(),
        value.as_str(),
        Duration::from_secs(ttl),
    ))
}

fn parse_args(args: &[String]) -> Result<Command, Error> {
    let [command, zone, rest @ ..] = args else {
        return Err(Error::InvalidInput(USAGE.to_string()));
    };
    let zone = zone.clone();
    match (command.as_str(), rest) {
        ("list", []) => Ok(Command::List(zone)),
        ("append", rest) => Ok(Command::Append(zone, parse_record(rest)?)),
        ("set", rest) => Ok(Command::Set(zone, parse_record(rest)?)),
        ("delete", rest @ [_, _, _]) => Ok(Command::Delete(zone, parse_record(rest)?)),
        _ => Err(Error::InvalidInput(USAGE.to_string())),
    }
}

fn print_records(records: &[DNSRecord]) {
    for r in records {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            r.id,
            r.name,
            r.record_type,
            r.ttl.as_secs(),
            r.value
        );
    }
}

/// 1 for a missing zone or record, 2 for bad usage, 3 for anything else.
fn exit_status(e: &Error) -> u8 {
    match e {
        e if e.is_not_found() => 1,
        Error::InvalidInput(_) => 2,
        _ => 3,
    }
}

async fn run(provider: &dyn DNSProvider, command: Command) -> Result<(), Error> {
    let records = match command {
        Command::List(zone) => provider.get_records(&zone).await?,
        Command::Append(zone, record) => provider.append_records(&zone, &[record]).await?,
        Command::Set(zone, record) => provider.set_records(&zone, &[record]).await?,
        Command::Delete(zone, record) => provider.delete_records(&zone, &[record]).await?,
    };
    print_records(&records);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(exit_status(&e));
        }
    };

    let config = Config::from_env();
    let provider = match Rage4Provider::new(&config, Arc::new(EnvCredentialManager)) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to create Rage4 provider: {e}");
            let e = map_error(e);
            eprintln!("{e}");
            return ExitCode::from(exit_status(&e));
        }
    };

    match run(&provider, command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{} operation failed: {e}", provider.name());
            eprintln!("{e}");
            ExitCode::from(exit_status(&e))
        }
    }
}
