//! Command dispatch logic for shuttle

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use shuttle_core::error::Result;

mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show => {
                let airport = ctx.load_airport()?;
                commands::show::execute(ctx.cli, &airport)
            }
            Commands::Outgoing { terminal } => {
                let airport = ctx.load_airport()?;
                commands::outgoing::execute(ctx.cli, &airport, terminal)
            }
            Commands::Opposite { from, to, terminal } => {
                let airport = ctx.load_airport()?;
                commands::opposite::execute(ctx.cli, &airport, from, to, terminal)
            }
            Commands::Route {
                from,
                to,
                by,
                repeat,
            } => {
                let mut airport = ctx.load_airport()?;
                commands::route::execute(ctx.cli, &mut airport, from, to, *by, *repeat)
            }
        }
    }
}
