//! Terminal demo comparing three state-management architectures over the
//! same todo feature.
//!
//! Usage: `tristore [route]` where the route is one of `/`,
//! `/observable`, `/reducer` or `/model-tree` (the leading slash is
//! optional; `/` selects the observable variant). Set `TRISTORE_INSPECT`
//! to log every state transition, and `RUST_LOG` to control log output.

mod inspect;
mod route;
mod session;
mod surface;

use std::io::{self, BufRead};
use std::ops::ControlFlow;

use route::Variant;
use session::{Command, CommandError, Session, print_help};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let route = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let variant: Variant = route.parse()?;
    let inspect = std::env::var_os("TRISTORE_INSPECT").is_some();
    tracing::debug!(variant = variant.title(), inspect, "mounting session");

    print_help();
    let mut session = Session::mount(variant, inspect);

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(error) => {
                println!("{error}");
                continue;
            },
        };
        if session.handle(command).is_break() {
            break;
        }
    }

    Ok(())
}
