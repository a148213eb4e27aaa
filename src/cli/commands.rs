//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::samples;
use crate::application::services::TraversalService;
use crate::cli::args::{BinaryOrderArg, Cli, Commands, NaryOrderArg, PolicyArg};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{power, LinkedList, Queue, Stack};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    if !settings.color {
        colored::control::set_override(false);
    }
    let service = TraversalService::new(settings);

    match &cli.command {
        Some(Commands::Binary { order }) => _binary(&service, *order),
        Some(Commands::Nary { order }) => _nary(&service, *order),
        Some(Commands::Search { value, policy }) => _search(&service, value, *policy),
        Some(Commands::Show) => _show(),
        Some(Commands::Queue { values }) => _queue(values),
        Some(Commands::Stack { values }) => _stack(values),
        Some(Commands::List { values }) => _list(values),
        Some(Commands::Power { base, exp }) => _power(*base, *exp),
        Some(Commands::Config) => _config(&service),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run with --help".to_string(),
        )),
    }
}

#[instrument(skip(service))]
fn _binary(service: &TraversalService, order: BinaryOrderArg) -> CliResult<()> {
    let tree = samples::numbers();
    for report in service.binary(&tree, &order.orders()) {
        output::action(&report.label, &service.format(&report));
    }
    Ok(())
}

#[instrument(skip(service))]
fn _nary(service: &TraversalService, order: NaryOrderArg) -> CliResult<()> {
    let (tree, root) = samples::beverages()?;
    let root = tree
        .node(root)
        .ok_or_else(|| CliError::Usage("sample tree has no root".to_string()))?;
    for report in service.nary(root, &order.orders()) {
        output::action(&report.label, &service.format(&report));
    }
    Ok(())
}

#[instrument(skip(service))]
fn _search(service: &TraversalService, value: &str, policy: Option<PolicyArg>) -> CliResult<()> {
    let (tree, root) = samples::beverages()?;
    let root = tree
        .node(root)
        .ok_or_else(|| CliError::Usage("sample tree has no root".to_string()))?;
    let outcome = service.search(root, &value.to_string(), policy.map(Into::into));
    match (outcome.found, outcome.position) {
        (Some(found), Some(position)) => {
            output::success(&format!("{} (level-order position {})", found, position));
            output::detail(&format!("policy: {}", outcome.policy));
            output::detail(&format!("children: {}", outcome.children));
            Ok(())
        }
        _ => Err(CliError::NotFound(value.to_string())),
    }
}

#[instrument]
fn _show() -> CliResult<()> {
    output::header("binary");
    output::info(&samples::numbers().to_tree_string());

    let (tree, _) = samples::beverages()?;
    output::header("n-ary");
    output::info(&tree.to_tree_string());
    Ok(())
}

#[instrument]
fn _queue(values: &[String]) -> CliResult<()> {
    let mut queue = Queue::new();
    for value in values {
        queue.enqueue(value.as_str());
    }
    output::action("queue", &queue);
    while let Some(value) = queue.dequeue() {
        output::detail(&format!("dequeue -> {}", value));
    }
    Ok(())
}

#[instrument]
fn _stack(values: &[String]) -> CliResult<()> {
    let stack: Stack<&str> = values.iter().map(String::as_str).collect();
    output::info(&stack);
    Ok(())
}

#[instrument]
fn _list(values: &[String]) -> CliResult<()> {
    let list: LinkedList<&str> = values.iter().map(String::as_str).collect();
    output::action("list", &list);
    output::detail(&format!("length: {}", list.len()));
    Ok(())
}

#[instrument]
fn _power(base: i64, exp: u32) -> CliResult<()> {
    match power(base, exp) {
        Some(result) => {
            output::action(&format!("{}^{}", base, exp), &result);
            Ok(())
        }
        None => Err(CliError::InvalidArgs(format!(
            "{}^{} overflows a 64-bit integer",
            base, exp
        ))),
    }
}

fn _config(service: &TraversalService) -> CliResult<()> {
    if let Some(path) = global_config_path() {
        let state = if path.exists() { "found" } else { "not found" };
        output::detail(&format!("global config: {} ({})", path.display(), state));
    }
    output::info(&service.settings().to_toml()?);
    Ok(())
}
