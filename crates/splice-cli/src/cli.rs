//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use splice_blocks::Boundary;

/// splice - Replace marker-delimited blocks in text files
#[derive(Parser, Debug)]
#[command(name = "splice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Replace the block after a start marker
    ///
    /// Keeps the first line containing the start marker, inserts the payload
    /// after it and drops the original lines up to the end boundary. The end
    /// boundary line is kept. The file is only written when the marker is found.
    ///
    /// Examples:
    ///   splice block app/form.tsx --start "// effects" --until "// end effects" --payload-file effects.part
    ///   splice block app/form.tsx --start "// effects" --until "useEffect(() => {" --followed-by fetchSystemData --payload-file -
    ///   splice block notes.md --start "## Changelog" --until-regex "^## " --payload-file changes.md
    Block {
        /// File to edit
        path: PathBuf,

        /// Literal text identifying the start marker line
        #[arg(short, long, value_name = "MARKER")]
        start: String,

        #[command(flatten)]
        end: EndArgs,

        /// Only accept the --until line when the next line contains this text
        #[arg(long, value_name = "TEXT", requires = "until")]
        followed_by: Option<String>,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Overwrite a file with new content
    Rewrite {
        /// File to overwrite (created if missing)
        path: PathBuf,

        #[command(flatten)]
        content: ContentArgs,
    },

    /// Apply an edit plan (TOML, JSON or YAML)
    Apply {
        /// Plan file; relative paths inside it resolve against its directory
        plan: PathBuf,
    },
}

/// Where the replaced region ends
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct EndArgs {
    /// End at the first line containing this text
    #[arg(long, value_name = "MARKER")]
    pub until: Option<String>,

    /// End at the first line matching this regular expression
    #[arg(long, value_name = "REGEX")]
    pub until_regex: Option<String>,

    /// Replace everything after the start marker
    #[arg(long)]
    pub to_end: bool,
}

impl EndArgs {
    pub fn to_boundary(&self, followed_by: Option<&str>) -> splice_blocks::Result<Boundary> {
        match (&self.until, &self.until_regex, followed_by) {
            (Some(marker), _, Some(next)) => Boundary::contains_followed_by(marker.as_str(), next),
            (Some(marker), _, None) => Boundary::contains(marker.as_str()),
            (None, Some(pattern), _) => Boundary::regex(pattern),
            (None, None, _) => Ok(Boundary::EndOfDocument),
        }
    }
}

/// Text inserted after the start marker line
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct PayloadArgs {
    /// Payload text, inserted verbatim
    #[arg(long, value_name = "TEXT")]
    pub payload: Option<String>,

    /// Read the payload from a file ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub payload_file: Option<PathBuf>,
}

/// New content for a rewrite
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct ContentArgs {
    /// Content text, written verbatim
    #[arg(long, value_name = "TEXT")]
    pub content: Option<String>,

    /// Read the content from a file ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub content_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_block_with_lookahead() {
        let cli = Cli::try_parse_from([
            "splice",
            "block",
            "form.tsx",
            "--start",
            "// effects",
            "--until",
            "useEffect(() => {",
            "--followed-by",
            "fetchSystemData",
            "--payload-file",
            "-",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Block {
                end, followed_by, ..
            }) => {
                assert_eq!(end.until.as_deref(), Some("useEffect(() => {"));
                assert_eq!(followed_by.as_deref(), Some("fetchSystemData"));
                assert!(matches!(
                    end.to_boundary(followed_by.as_deref()),
                    Ok(Boundary::ContainsFollowedBy { .. })
                ));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_block_requires_an_end_rule() {
        let result = Cli::try_parse_from([
            "splice", "block", "form.tsx", "--start", "M", "--payload", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_end_rules_are_exclusive() {
        let result = Cli::try_parse_from([
            "splice", "block", "form.tsx", "--start", "M", "--until", "E", "--to-end",
            "--payload", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_followed_by_requires_until() {
        let result = Cli::try_parse_from([
            "splice", "block", "form.tsx", "--start", "M", "--to-end", "--followed-by", "x",
            "--payload", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_end_boundary() {
        let end = EndArgs {
            until: None,
            until_regex: None,
            to_end: true,
        };
        assert!(matches!(end.to_boundary(None), Ok(Boundary::EndOfDocument)));
    }

    #[test]
    fn test_parse_rewrite() {
        let cli = Cli::try_parse_from(["splice", "rewrite", "form.tsx", "--content", "x"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Rewrite { .. })));
    }
}
