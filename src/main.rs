use clap::{Parser, Subcommand};
use jwt_gen::{sign, verify_and_decode, DecodeResult, JwsError, SecretEncoding};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jwt-gen")]
#[command(about = "Generate and decode HS256 JWTs carrying a custom_user_id claim")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Print decode results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a token signed with a text secret
    ///
    /// eg: jwt-gen generate asev01L5kAa9145zJ5Zg3o08I8OINN8L bond007
    ///
    /// note: use a secret of at least 32 bytes
    Generate { secret: String, custom_user_id: String },

    /// Generate a token signed with a hex encoded secret
    ///
    /// eg: jwt-gen generatehex 6173657630314C356B4161393134357A4A355A67336F303849384F494E4E384C bond007
    #[command(name = "generatehex")]
    GenerateHex {
        secret_hex: String,
        custom_user_id: String,
    },

    /// Decode a token and verify it against a text secret
    Decode { secret: String, token: String },

    /// Decode a token and verify it against a hex encoded secret
    #[command(name = "decodehex")]
    DecodeHex { secret_hex: String, token: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Generate {
            secret,
            custom_user_id,
        } => {
            println!(
                "Generating jwt with secret: '{}' and custom_user_id: '{}'\n",
                secret, custom_user_id
            );
            generate(&secret, &custom_user_id, SecretEncoding::Raw)
        }
        Command::GenerateHex {
            secret_hex,
            custom_user_id,
        } => {
            println!(
                "Generating jwt with secretHex: '{}' and custom_user_id: '{}'\n",
                secret_hex, custom_user_id
            );
            generate(&secret_hex, &custom_user_id, SecretEncoding::Hex)
        }
        Command::Decode { secret, token } => {
            decode(&secret, &token, SecretEncoding::Raw, cli.json)
        }
        Command::DecodeHex { secret_hex, token } => {
            decode(&secret_hex, &token, SecretEncoding::Hex, cli.json)
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn generate(secret: &str, custom_user_id: &str, encoding: SecretEncoding) -> Result<(), JwsError> {
    let token = sign(secret, custom_user_id, encoding)?;
    println!("{}", token);
    Ok(())
}

fn decode(secret: &str, token: &str, encoding: SecretEncoding, json: bool) -> Result<(), JwsError> {
    let result = verify_and_decode(secret, token, encoding)?;

    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|e| JwsError::Crypto(format!("Failed to render result: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    print_report(token, &result);
    Ok(())
}

fn print_report(token: &str, result: &DecodeResult) {
    if result.valid {
        println!("Token: '{}' is a valid JWT token\n", token);
    } else {
        eprintln!("Token: '{}' is **NOT A VALID JWT TOKEN**\n", token);
    }

    println!("HEADER:\n\t{}", result.header);
    println!("PAYLOAD:\n\t{}", result.payload);
    println!("SIGNATURE:\n\t{}", result.signature_hex);
}
