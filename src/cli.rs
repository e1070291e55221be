use clap::Parser;

/// chainup - Boot the local development chain
///
/// Runs the fixed startup sequence: start the Hardhat node, then deploy the
/// contracts against it. There are no options to configure; the sequence is
/// built in.
#[derive(Parser)]
#[command(name = "chainup")]
#[command(about = "Starts the local Hardhat node, then deploys the contracts against it")]
#[command(version)]
pub struct Cli {}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
