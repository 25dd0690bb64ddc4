//! User command handlers

use anyhow::{bail, Result};

use tally_core::CredentialGate;

use crate::output::Output;

/// Create a new account
pub fn register(
    gate: &CredentialGate,
    username: &str,
    password: &str,
    output: &Output,
) -> Result<()> {
    if gate.register(username, password)? {
        output.success("Account created");
        Ok(())
    } else {
        bail!("Account creation failed: fields must be non-empty and the username unused");
    }
}

/// Check credentials against the store
pub fn login(gate: &CredentialGate, username: &str, password: &str, output: &Output) -> Result<()> {
    // Input is trimmed at the presentation boundary; the gate compares
    // exactly what it is given.
    if gate.authenticate(username.trim(), password.trim())? {
        output.success("Login successful");
        Ok(())
    } else {
        bail!("Invalid credentials");
    }
}
