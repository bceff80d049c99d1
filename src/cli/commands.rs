use std::fmt::Display;
use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::bnode::BNode;
use crate::binary_tree::BinaryTree;
use crate::cli::args::{Cli, Commands, ConfigCommands, OutputFormat};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, RenderSettings, Settings};
use crate::tree::Tree;
use crate::tree_traits::{ToTermTree, TreeNode};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Build {
            values,
            format,
            ignore_absent,
        }) => _build(values, *format, *ignore_absent, &settings.render),
        Some(Commands::Demo) => _demo(&settings.render),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(&settings),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".into())),
    }
}

#[instrument(level = "debug", skip(settings))]
fn _build(
    values: &[i64],
    format: OutputFormat,
    ignore_absent: bool,
    settings: &RenderSettings,
) -> CliResult<()> {
    if values.is_empty() {
        return Err(CliError::InvalidArgs("at least one value is required".into()));
    }

    let tree = BinaryTree::from_values(values.iter().copied());
    debug!(nodes = tree.len(), height = ?tree.height(), "tree built");

    let settings = settings
        .clone()
        .ignoring_absent(settings.ignore_absent || ignore_absent);
    render(&tree, format, &settings)
}

/// Renders a fixed sample node and a small level-order tree in every format.
#[instrument(level = "debug", skip(settings))]
fn _demo(settings: &RenderSettings) -> CliResult<()> {
    let mut node = BNode::new(150);
    node.set_left_value(10).set_right_value(33);
    node.set_right_value(20).set_left_value(999);

    output::header("binary node");
    output::info(&node);

    let mut tree = BinaryTree::from_value(2);
    tree.extend([105, 105, 101, 101, 10101]);

    output::header("binary tree");
    render(&tree, OutputFormat::Inorder, settings)?;
    render(&tree, OutputFormat::LevelOrder, settings)?;
    for ignore_absent in [true, false] {
        let settings = settings.clone().ignoring_absent(ignore_absent);
        render(&tree, OutputFormat::Visual, &settings)?;
    }
    Ok(())
}

fn render<N>(tree: &Tree<N>, format: OutputFormat, settings: &RenderSettings) -> CliResult<()>
where
    N: TreeNode + Display,
    N::Value: Display,
{
    match format {
        OutputFormat::Visual => output::block(&tree.render_visual(settings)),
        OutputFormat::LevelOrder => {
            for line in tree.level_order_lines(settings) {
                output::info(&line);
            }
        }
        OutputFormat::Inorder => output::info(&tree.try_to_string()?),
        OutputFormat::Termtree => output::block(&tree.to_term_tree().to_string()),
        OutputFormat::All => {
            for format in [
                OutputFormat::Inorder,
                OutputFormat::LevelOrder,
                OutputFormat::Visual,
                OutputFormat::Termtree,
            ] {
                output::header(format.label());
                render(tree, format, settings)?;
            }
        }
    }
    Ok(())
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    output::block(&settings.to_toml()?);
    Ok(())
}

fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::info("no config directory available on this platform"),
    }
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
