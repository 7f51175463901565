use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(
    name = "fcmd",
    version,
    about = "Find commands in $PATH whose names match a regular expression",
    long_about = "fcmd searches every directory of the executable search path for file names matching an extended regular expression and prints each match as <directory>/<filename>."
)]
pub struct Cli {
    /// Extended regular expression matched anywhere within each file name
    pub pattern: String,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Environment variable holding the directories to search
    #[arg(long = "var", value_name = "NAME", env = "FCMD_PATH_VAR", default_value = "PATH")]
    pub path_var: String,

    /// Characters separating directories in the search path
    #[arg(short, long, value_name = "CHARS", default_value = ":", value_parser = parse_delimiters)]
    pub delimiter: String,

    /// Match file names case-insensitively
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Sort the matches of each directory by name
    #[arg(short, long)]
    pub sort: bool,

    /// Report directories that produced no matches
    #[arg(short, long)]
    pub verbose: bool,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// Delimiters split raw bytes, so only ASCII characters are accepted.
fn parse_delimiters(value: &str) -> Result<String, String> {
    if value.is_ascii() {
        Ok(value.to_string())
    } else {
        Err("delimiters must be ASCII characters".to_string())
    }
}
