//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::server::{serve, ServerConfig};
use crate::config::load_config;
use crate::error::{ErrorTally, Result};
use crate::mapping::MappingRenderer;
use crate::output::write_json;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
    tally: ErrorTally,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli, tally: ErrorTally) -> Self {
        Self { cli, tally }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate {
                input,
                output,
                template,
            } => self.generate(input, output.as_deref(), *template),
            Commands::Collect { port, output } => {
                let config = ServerConfig {
                    port: *port,
                    output: output.clone(),
                };
                serve(config, self.tally.clone()).await
            }
        }
    }

    /// Render a mapping document from an explicit field configuration
    fn generate(&self, input: &Path, output: Option<&Path>, template: bool) -> Result<()> {
        let config = load_config(input)?;
        let tree = config.field_tree()?;
        tracing::debug!("Loaded {} top-level fields from config", tree.len());

        let mut renderer = MappingRenderer::new();
        if !config.supported_fields.is_empty() {
            renderer = renderer.with_allowed_types(config.supported_fields.iter().cloned());
        }

        let document = if template {
            renderer.render_template(&tree, &config.template_options(), &self.tally)
        } else {
            renderer.render(&tree, &self.tally)
        };

        write_json(output, &document)
    }
}
