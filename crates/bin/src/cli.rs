//! CLI argument definitions for the cover binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Query and edit nested JSON documents with dot paths
#[derive(Parser, Debug)]
#[command(name = "cover")]
#[command(about = "Cover: read and write nested JSON with dot paths")]
#[command(version)]
pub struct Cli {
    /// JSON document to read. Reads stdin when omitted
    #[arg(short, long, global = true, env = "COVER_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "human", env = "COVER_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a dot path
    Get(GetArgs),
    /// List the keys of the document or of the container at a path
    Keys(TargetArgs),
    /// Count the entries of the document or of the container at a path
    Count(TargetArgs),
    /// Write a value at a dot path, creating missing levels
    Set(WriteArgs),
    /// Append a value to the container at a dot path
    Append(WriteArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dot path such as `user.roles.0`
    pub path: String,
}

/// Arguments for commands that inspect a container
#[derive(clap::Args, Debug)]
pub struct TargetArgs {
    /// Dot path of the container. The document root when omitted
    pub path: Option<String>,
}

/// Arguments for commands that write into the document
#[derive(clap::Args, Debug)]
pub struct WriteArgs {
    /// Dot path to write at
    pub path: String,

    /// JSON value to write. Text that is not valid JSON is stored as a string
    pub value: String,
}
