//! Generation driver: reads IR files, generates modules in order and
//! writes, checks or prints the results.
//!
//! Modules are generated strictly one after another; each generation gets
//! its own emitter state.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use csbind_common::BindingConfig;
use csbind_emitter::{GeneratedModule, generate_module};
use csbind_ir::IrModule;

use crate::args::CliArgs;
use crate::config::{ConfigFile, find_config, resolve_binding_config};

/// Directory under the output directory receiving copied C headers.
pub const HEADER_DIR: &str = "c";

/// One module to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleJob {
    pub ir: PathBuf,
    pub header: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    /// Output file created or replaced.
    Written,
    /// Output file already had the generated content.
    Unchanged,
    /// `--check` found the output file missing or different.
    Stale,
    /// `--stdout`: nothing touched on disk.
    Printed,
}

#[derive(Debug)]
pub struct ModuleOutcome {
    pub job: ModuleJob,
    pub module: GeneratedModule,
    pub path: PathBuf,
    pub status: ModuleStatus,
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub outcomes: Vec<ModuleOutcome>,
}

impl RunResult {
    pub fn stale_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == ModuleStatus::Stale)
            .count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| outcome.module.placeholders.len())
            .sum()
    }
}

/// Everything a run needs, resolved from flags and the config file.
#[derive(Debug)]
pub struct RunPlan {
    pub config: BindingConfig,
    pub out_dir: PathBuf,
    pub jobs: Vec<ModuleJob>,
}

pub fn plan(args: &CliArgs, cwd: &Path) -> Result<RunPlan> {
    let file = find_config(args, cwd)?;
    let config = resolve_binding_config(args, file.as_ref());

    let out_dir = match (&args.out_dir, file.as_ref().and_then(|f| f.out_dir.as_ref())) {
        (Some(dir), _) => cwd.join(dir),
        (None, Some(dir)) => dir.clone(),
        (None, None) => cwd.to_path_buf(),
    };

    let jobs = collect_jobs(args, file.as_ref(), cwd)?;
    Ok(RunPlan {
        config,
        out_dir,
        jobs,
    })
}

/// Config file modules first, then positional IR files paired with
/// `--header` values by position.
pub fn collect_jobs(args: &CliArgs, file: Option<&ConfigFile>, cwd: &Path) -> Result<Vec<ModuleJob>> {
    if args.headers.len() > args.ir_files.len() {
        bail!(
            "{} --header values given for {} IR files",
            args.headers.len(),
            args.ir_files.len()
        );
    }

    let mut jobs: Vec<ModuleJob> = file
        .map(|file| {
            file.modules
                .iter()
                .map(|entry| ModuleJob {
                    ir: entry.ir.clone(),
                    header: entry.header.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    for (index, ir) in args.ir_files.iter().enumerate() {
        jobs.push(ModuleJob {
            ir: cwd.join(ir),
            header: args.headers.get(index).map(|header| cwd.join(header)),
        });
    }
    Ok(jobs)
}

pub fn run(args: &CliArgs, plan: &RunPlan) -> Result<RunResult> {
    if plan.jobs.is_empty() {
        bail!("no IR files given (pass IR_FILES or list `modules` in {})", crate::config::DEFAULT_CONFIG_FILE);
    }

    let mut result = RunResult::default();
    for job in &plan.jobs {
        let outcome = generate_one(args, plan, job)?;
        result.outcomes.push(outcome);
    }
    info!(
        modules = result.outcomes.len(),
        stale = result.stale_count(),
        placeholders = result.placeholder_count(),
        "generation finished"
    );
    Ok(result)
}

fn generate_one(args: &CliArgs, plan: &RunPlan, job: &ModuleJob) -> Result<ModuleOutcome> {
    let source = std::fs::read_to_string(&job.ir)
        .with_context(|| format!("failed to read IR file: {}", job.ir.display()))?;
    let ir = IrModule::from_json(&source)
        .with_context(|| format!("failed to parse IR file: {}", job.ir.display()))?;
    let module = generate_module(&ir, &plan.config)
        .with_context(|| format!("failed to generate module from {}", job.ir.display()))?;

    let path = plan.out_dir.join(module.file_name());
    let existing = std::fs::read_to_string(&path).ok();
    let up_to_date = existing.as_deref() == Some(module.text.as_str());

    let status = if args.stdout {
        ModuleStatus::Printed
    } else if args.check {
        if up_to_date {
            ModuleStatus::Unchanged
        } else {
            ModuleStatus::Stale
        }
    } else {
        if let Some(header) = &job.header {
            copy_header(header, &plan.out_dir)?;
        }
        if up_to_date {
            ModuleStatus::Unchanged
        } else {
            std::fs::create_dir_all(&plan.out_dir).with_context(|| {
                format!("failed to create output directory: {}", plan.out_dir.display())
            })?;
            std::fs::write(&path, &module.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            ModuleStatus::Written
        }
    };
    debug!(module = %module.name, path = %path.display(), ?status, "module done");

    Ok(ModuleOutcome {
        job: job.clone(),
        module,
        path,
        status,
    })
}

/// Copy a C header into `<out_dir>/c/`.
pub fn copy_header(header: &Path, out_dir: &Path) -> Result<PathBuf> {
    let file_name = header
        .file_name()
        .with_context(|| format!("header path has no file name: {}", header.display()))?;
    let header_dir = out_dir.join(HEADER_DIR);
    std::fs::create_dir_all(&header_dir)
        .with_context(|| format!("failed to create header directory: {}", header_dir.display()))?;

    let target = header_dir.join(file_name);
    std::fs::copy(header, &target).with_context(|| {
        format!(
            "failed to copy header {} to {}",
            header.display(),
            target.display()
        )
    })?;
    Ok(target)
}
