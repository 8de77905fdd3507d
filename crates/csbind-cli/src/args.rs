use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the csbind binary.
#[derive(Parser, Debug)]
#[command(
    name = "csbind",
    version,
    about = "Generate C# P/Invoke bindings from C API declaration IR"
)]
pub struct CliArgs {
    /// IR documents (JSON) to generate, after the modules listed in the config file.
    #[arg(value_name = "IR_FILES")]
    pub ir_files: Vec<PathBuf>,

    /// Path to a csbind.json configuration file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Directory receiving `<Module>.cs` and the copied headers.
    #[arg(short = 'o', long = "out-dir", alias = "outDir")]
    pub out_dir: Option<PathBuf>,

    /// Namespace wrapping every generated module class.
    #[arg(long)]
    pub namespace: Option<String>,

    /// Native library name used in `[DllImport]`.
    #[arg(long)]
    pub library: Option<String>,

    /// C header to copy next to the output, paired with IR_FILES by position.
    #[arg(long = "header")]
    pub headers: Vec<PathBuf>,

    /// Do not write; fail when any generated file is out of date.
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print generated sources instead of writing them.
    #[arg(long)]
    pub stdout: bool,

    /// Print the effective configuration instead of generating.
    #[arg(long = "show-config", alias = "showConfig")]
    pub show_config: bool,

    /// Enable color in progress and placeholder reports.
    #[arg(long)]
    pub pretty: Option<bool>,
}
