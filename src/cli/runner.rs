//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::Profile;
use crate::engine::SchemaEngine;
use crate::error::{Error, Result};
use crate::schema::{CollectionSchema, FieldSchema};
use crate::source::{DocumentSource, MemorySource, MongoSource};
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Infer {
                collection,
                sample_size,
                file,
            } => {
                self.infer(collection, *sample_size, file.as_deref())
                    .await
            }
            Commands::Collections => self.collections().await,
            Commands::Count { collection } => self.count(collection).await,
            Commands::Indexes { collection } => self.indexes(collection).await,
        }
    }

    /// Resolve the effective profile: file, then environment, then flags
    fn profile(&self) -> Result<Profile> {
        let mut profile = match &self.cli.profile {
            Some(path) => Profile::load(path)?,
            None => Profile::default(),
        }
        .with_env_fallback();

        if let Some(uri) = &self.cli.uri {
            profile.connection.uri = uri.clone();
        }
        if let Some(database) = &self.cli.database {
            profile.connection.database = Some(database.clone());
        }
        Ok(profile)
    }

    async fn connect(&self, profile: &Profile) -> Result<MongoSource> {
        profile.require_uri()?;
        MongoSource::connect(&profile.connection).await
    }

    async fn infer(
        &self,
        collection: &str,
        sample_size: Option<u32>,
        file: Option<&Path>,
    ) -> Result<()> {
        let profile = self.profile()?;
        let mut settings = profile.inference.clone();
        if let Some(sample_size) = sample_size {
            settings.sample_size = sample_size;
        }
        let config = settings.to_engine_config();

        let schema = match file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::file_not_found(path.display().to_string()));
                }
                let content = std::fs::read_to_string(path)?;
                let source = MemorySource::from_json_str(collection, &content)?;
                SchemaEngine::new(source)
                    .with_config(config)
                    .infer_schema(collection)
                    .await?
            }
            None => {
                let source = self.connect(&profile).await?;
                SchemaEngine::new(source)
                    .with_config(config)
                    .infer_schema(collection)
                    .await?
            }
        };

        self.print_schema(&schema)
    }

    async fn collections(&self) -> Result<()> {
        let profile = self.profile()?;
        let source = self.connect(&profile).await?;
        for name in source.collection_names().await? {
            println!("{name}");
        }
        Ok(())
    }

    async fn count(&self, collection: &str) -> Result<()> {
        let profile = self.profile()?;
        let source = self.connect(&profile).await?;
        println!("{}", source.count_all(collection).await?);
        Ok(())
    }

    async fn indexes(&self, collection: &str) -> Result<()> {
        let profile = self.profile()?;
        let source = self.connect(&profile).await?;
        let indexes = source.list_indexes(collection).await?;
        match self.cli.format {
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&indexes)?),
            _ => println!("{}", serde_json::to_string_pretty(&indexes)?),
        }
        Ok(())
    }

    fn print_schema(&self, schema: &CollectionSchema) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => schema.to_json_pretty()?,
            OutputFormat::Yaml => serde_yaml::to_string(schema)?,
            OutputFormat::Pretty => render_pretty(schema),
        };
        println!("{}", rendered.trim_end());
        Ok(())
    }
}

/// Render a schema as an indented field tree
fn render_pretty(schema: &CollectionSchema) -> String {
    let mut out = format!(
        "{} ({} documents, {} indexes)\n",
        schema.collection,
        schema.count,
        schema.indexes.len()
    );
    render_fields(&mut out, &schema.fields, 1);
    out
}

fn render_fields(out: &mut String, fields: &[FieldSchema], depth: usize) {
    for field in fields {
        let indent = "  ".repeat(depth);
        let marker = if field.is_required { " required" } else { "" };
        out.push_str(&format!(
            "{indent}{}: {}{marker}\n",
            field.field, field.field_type
        ));
        render_fields(out, &field.sub_fields, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::LevelAccumulator;
    use crate::schema::assemble;
    use crate::types::DEFAULT_MAX_DEPTH;
    use crate::walk::walk_document;
    use bson::doc;
    use pretty_assertions::assert_eq;

    fn sample_schema() -> CollectionSchema {
        let mut level = LevelAccumulator::new();
        for doc in [
            doc! { "name": "Ada", "profile": { "age": 30 } },
            doc! { "name": "Grace" },
        ] {
            let observations = walk_document(&doc, DEFAULT_MAX_DEPTH).unwrap();
            level.observe(&observations);
        }
        assemble("users", &level, 2, vec![doc! { "name": "_id_" }])
    }

    #[test]
    fn test_render_pretty() {
        let rendered = render_pretty(&sample_schema());
        let expected = "\
users (2 documents, 1 indexes)
  name: string required
  profile: object
    profile.age: number required
";
        assert_eq!(rendered, expected);
    }
}
