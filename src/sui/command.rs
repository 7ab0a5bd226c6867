// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Argument vectors for the `sui` subcommands this service relays.

/// One invocation of the `sui` binary.
///
/// Arguments are handed to the process as a literal vector; nothing here is
/// ever interpreted by a shell, so addresses and digests are passed through
/// exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiCommand<'a> {
    /// `sui --version`
    Version,
    /// `sui client gas --address <address>`
    Gas { address: &'a str },
    /// `sui client objects --address <address>`
    Objects { address: &'a str },
    /// `sui client active-validators`
    ActiveValidators,
    /// `sui client envs`
    Envs,
    /// `sui client transaction <digest>`
    Transaction { digest: &'a str },
    /// `sui client transfer-sui --to <recipient> --amount <amount> [--gas-budget <budget>]`
    TransferSui {
        recipient: &'a str,
        amount: u64,
        gas_budget: Option<&'a str>,
    },
}

impl SuiCommand<'_> {
    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            SuiCommand::Version => "version",
            SuiCommand::Gas { .. } => "gas",
            SuiCommand::Objects { .. } => "objects",
            SuiCommand::ActiveValidators => "active-validators",
            SuiCommand::Envs => "envs",
            SuiCommand::Transaction { .. } => "transaction",
            SuiCommand::TransferSui { .. } => "transfer-sui",
        }
    }

    /// Build the ordered argument vector passed after the executable path.
    pub fn args(&self) -> Vec<String> {
        let mut args = match self {
            SuiCommand::Version => owned(&["--version"]),
            SuiCommand::Gas { address } => owned(&["client", "gas", "--address", *address]),
            SuiCommand::Objects { address } => owned(&["client", "objects", "--address", *address]),
            SuiCommand::ActiveValidators => owned(&["client", "active-validators"]),
            SuiCommand::Envs => owned(&["client", "envs"]),
            SuiCommand::Transaction { digest } => owned(&["client", "transaction", *digest]),
            SuiCommand::TransferSui {
                recipient, amount, ..
            } => {
                let mut args = owned(&["client", "transfer-sui", "--to", *recipient, "--amount"]);
                args.push(amount.to_string());
                args
            }
        };

        // An empty budget means "let the client pick one".
        if let SuiCommand::TransferSui {
            gas_budget: Some(budget),
            ..
        } = self
        {
            if !budget.is_empty() {
                args.push("--gas-budget".to_string());
                args.push(budget.to_string());
            }
        }

        args
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}
