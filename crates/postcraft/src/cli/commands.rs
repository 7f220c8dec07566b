//! CLI argument definitions.

use clap::{Parser, Subcommand};
use postcraft_core::{Platform, Provider};
use std::path::PathBuf;

/// AI emoji and hashtag suggestions for social media posts.
#[derive(Debug, Parser)]
#[command(name = "postcraft")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "POSTCRAFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Suggest emojis, hashtags and placement for a post
    Suggest {
        /// Post text
        content: String,

        /// Target platform (instagram, twitter, facebook, linkedin)
        #[arg(short, long)]
        platform: Platform,

        /// Provider to use (openai, anthropic); defaults to the configured one
        #[arg(long)]
        provider: Option<Provider>,

        /// Industry hint
        #[arg(long)]
        industry: Option<String>,

        /// Target audience hint
        #[arg(long)]
        audience: Option<String>,
    },

    /// List hashtags trending on a platform
    Trending {
        /// Target platform
        #[arg(short, long)]
        platform: Platform,

        /// Narrow to a category
        #[arg(long)]
        category: Option<String>,

        /// Provider to use; defaults to the configured one
        #[arg(long)]
        provider: Option<Provider>,
    },

    /// Print the static fallback suggestions without calling a provider
    Fallback {
        /// Post text
        content: String,

        /// Target platform
        #[arg(short, long)]
        platform: Platform,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_parses_platform_and_provider() {
        let cli = Cli::try_parse_from([
            "postcraft",
            "suggest",
            "New product!",
            "--platform",
            "LinkedIn",
            "--provider",
            "anthropic",
            "--industry",
            "saas",
        ])
        .unwrap();

        match cli.command {
            Commands::Suggest {
                content,
                platform,
                provider,
                industry,
                audience,
            } => {
                assert_eq!(content, "New product!");
                assert_eq!(platform, Platform::Linkedin);
                assert_eq!(provider, Some(Provider::Anthropic));
                assert_eq!(industry.as_deref(), Some("saas"));
                assert!(audience.is_none());
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let result = Cli::try_parse_from(["postcraft", "fallback", "hi", "--platform", "myspace"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "postcraft",
            "trending",
            "-p",
            "twitter",
            "--json-logs",
            "--config",
            "postcraft.toml",
        ])
        .unwrap();
        assert!(cli.json_logs);
        assert_eq!(cli.config, Some(PathBuf::from("postcraft.toml")));
    }
}
