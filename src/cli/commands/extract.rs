use anyhow::Result;

use super::super::{
    args::ExtractArgs,
    exit_status::ExitStatus,
    report::{print_summary, write_strings},
};
use crate::{
    core::{context::ExtractionContext, pipeline::Extractor},
    diagnostics::{DiagnosticSink, Level, Silent, StderrSink},
};

pub fn extract(args: &ExtractArgs) -> Result<ExitStatus> {
    let stderr_sink = StderrSink::new(Level::Trace);
    let sink: &dyn DiagnosticSink = if args.verbose { &stderr_sink } else { &Silent };

    let ctx = ExtractionContext::new(args, sink)?;
    sink.info(format!(
        "extracting calls to {} from {} file(s)",
        ctx.target,
        ctx.files.len()
    ));

    let mut extractor = Extractor::new(ctx.target.clone(), ctx.module_root.clone(), sink);
    extractor.process_files(&ctx.files)?;

    write_strings(&extractor.strings(), ctx.format, ctx.output.as_deref())?;
    if ctx.verbose {
        print_summary(&extractor.stats(), extractor.extracted().len());
    }

    Ok(ExitStatus::Success)
}
