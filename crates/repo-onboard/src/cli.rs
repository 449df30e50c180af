//! Command line interface

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "repo-onboard",
    version,
    about = "Authorize with GitHub and onboard a repository to the indexing backend"
)]
pub struct Cli {
    /// Backend base URL (overrides config file and REPO_ONBOARD_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Address to start from, e.g. the URL the login redirect came back to
    #[arg(long)]
    pub location: Option<String>,

    /// Backend session cookie (`name=value`) to store for later requests
    #[arg(long, global = true)]
    pub session_cookie: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask a question about an onboarded repository
    Query {
        /// Repository the question is about (e.g. user/repo)
        #[arg(long)]
        repo: String,

        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}
