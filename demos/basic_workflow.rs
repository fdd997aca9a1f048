// demos/basic_workflow.rs

use jwt_gen::{SecretEncoding, SigningConfig, TokenService};
use secrecy::Secret;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("jwt-gen Basic Usage Example");

    // 1. Setup issuing service with a 32 byte text secret
    let issuer = TokenService::new(SigningConfig {
        secret: Secret::new("asev01L5kAa9145zJ5Zg3o08I8OINN8L".to_string()),
        encoding: SecretEncoding::Raw,
    });

    // 2. Issue a token
    let token = issuer.generate("bond007")?;
    println!("Generated token: {}", token);

    // 3. The same secret given as hex verifies the token
    let verifier = TokenService::new(SigningConfig {
        secret: Secret::new(
            "6173657630314C356B4161393134357A4A355A67336F303849384F494E4E384C".to_string(),
        ),
        encoding: SecretEncoding::Hex,
    });

    let result = verifier.decode(&token)?;
    println!("\nValid: {}", result.valid);
    println!("HEADER:    {}", result.header);
    println!("PAYLOAD:   {}", result.payload);
    println!("SIGNATURE: {}", result.signature_hex);

    // 4. A different secret still decodes, but does not verify
    let stranger = TokenService::new(SigningConfig {
        secret: Secret::new("some-other-secret-of-32-bytes!!!".to_string()),
        encoding: SecretEncoding::Raw,
    });
    let result = stranger.decode(&token)?;
    println!("\nWith the wrong secret, valid: {}", result.valid);

    // 5. Malformed input is an error, not a panic
    match verifier.decode("not.a-token") {
        Ok(_) => println!("Unexpectedly decoded malformed token"),
        Err(e) => println!("\nMalformed token rejected: {}", e),
    }

    Ok(())
}
