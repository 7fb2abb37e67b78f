//! Integration tests for the NFT minting contract. These assume that a
//! devnet is already running locally, that the contract has been deployed,
//! and that the allowlist bundle has been issued by the owner key.

use std::{future::Future, pin::Pin, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use eyre::Result;

use cli::Cli;
use test_args::TestArgs;
use tests::{
    allowlist::test_allowlist_mint,
    mint::{test_dev_mint, test_mint_limits, test_public_mint, test_sell_out},
    reveal::{test_reveal, test_sale_states},
};

mod cli;
mod constants;
mod test_args;
mod utils;

/// The signature of an integration test
type TestFn = fn(TestArgs) -> Pin<Box<dyn Future<Output = Result<()>>>>;

/// A named integration test
struct IntegrationTest {
    /// The name of the test
    name: &'static str,
    /// The test function
    test_fn: TestFn,
}

/// All tests, in run order. The order matters: `sell_out` exhausts the
/// collection's remaining supply, so it must run last.
const ALL_TESTS: &[IntegrationTest] = &[
    IntegrationTest {
        name: "allowlist_mint",
        test_fn: |args| Box::pin(test_allowlist_mint(args)),
    },
    IntegrationTest {
        name: "public_mint",
        test_fn: |args| Box::pin(test_public_mint(args)),
    },
    IntegrationTest {
        name: "mint_limits",
        test_fn: |args| Box::pin(test_mint_limits(args)),
    },
    IntegrationTest {
        name: "dev_mint",
        test_fn: |args| Box::pin(test_dev_mint(args)),
    },
    IntegrationTest {
        name: "sale_states",
        test_fn: |args| Box::pin(test_sale_states(args)),
    },
    IntegrationTest {
        name: "reveal",
        test_fn: |args| Box::pin(test_reveal(args)),
    },
    IntegrationTest {
        name: "sell_out",
        test_fn: |args| Box::pin(test_sell_out(args)),
    },
];

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let args = TestArgs::from_cli(&cli)?;

    let mut failures = 0_usize;
    for test in ALL_TESTS {
        if let Some(filter) = &cli.test {
            if !test.name.contains(filter.as_str()) {
                continue;
            }
        }

        println!("Running {}...", test.name);
        match (test.test_fn)(args.clone()).await {
            Ok(()) => println!("{} {}", test.name, "PASS".green()),
            Err(e) => {
                println!("{} {}: {e}", test.name, "FAIL".red());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        println!("{}", format!("{failures} test(s) failed").red());
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", "all tests passed".green());
    Ok(ExitCode::SUCCESS)
}
