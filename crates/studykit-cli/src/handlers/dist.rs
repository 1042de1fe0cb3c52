use super::{HandlerContext, create_csv};
use crate::args::{SelectionArgs, TableArgs};
use crate::presentation::view_models::{
    CategoryListViewModel, CommandResultViewModel, DistributionEntry, DistributionViewModel,
    ExportResultViewModel, Guidance, RowListViewModel, StatusBadge,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use studykit_engine::export::{write_ranking, write_vector};
use studykit_engine::{CategoryTable, aggregate, load_table, normalize, ranked, raw_rows, top_n};
use studykit_types::{CategoryVector, Granularity};

const FALLBACK_WIDTH: usize = 80;

fn open_table(ctx: &HandlerContext, args: &TableArgs) -> Result<CategoryTable> {
    let defaults = &ctx.config.distribution;
    let key_column = args.key_column.as_deref().unwrap_or(&defaults.key_column);
    let separator = args.separator.unwrap_or(defaults.separator);

    let table = load_table(&args.file, key_column, separator)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    tracing::debug!(
        file = %args.file.display(),
        rows = table.row_count(),
        columns = table.columns().len(),
        "loaded table"
    );
    Ok(table)
}

fn granularity(ctx: &HandlerContext, raw: bool) -> Granularity {
    if raw {
        Granularity::Raw
    } else {
        ctx.config.distribution.granularity
    }
}

/// The selected row before and after optional normalization.
struct Selection {
    granularity: Granularity,
    normalized: bool,
    original: CategoryVector,
    shown: CategoryVector,
}

fn select(ctx: &HandlerContext, table: &CategoryTable, args: &SelectionArgs) -> Result<Selection> {
    let granularity = granularity(ctx, args.raw);
    let normalized = ctx.config.distribution.normalize && !args.no_normalize;

    let original = studykit_engine::select_vector(table, &args.key, granularity)?;
    let shown = if normalized {
        normalize(&original)
    } else {
        original.clone()
    };
    Ok(Selection {
        granularity,
        normalized,
        original,
        shown,
    })
}

pub fn handle_rows(ctx: &HandlerContext, args: TableArgs) -> Result<()> {
    let table = open_table(ctx, &args)?;
    let content = RowListViewModel {
        key_column: table.key_column().to_string(),
        rows: table.row_keys()?,
    };
    let result = CommandResultViewModel::new(content).with_suggestion(
        Guidance::new("Chart one row").with_command(format!(
            "studykit dist show --file {} --key <ROW>",
            args.file.display()
        )),
    );
    ctx.render(result)
}

pub fn handle_categories(ctx: &HandlerContext, args: TableArgs, raw: bool) -> Result<()> {
    let table = open_table(ctx, &args)?;
    let granularity = granularity(ctx, raw);
    let rows = match granularity {
        Granularity::Aggregated => aggregate(&table)?,
        Granularity::Raw => raw_rows(&table)?,
    };

    ctx.render(CommandResultViewModel::new(CategoryListViewModel {
        granularity,
        categories: rows.categories(),
    }))
}

pub fn handle_show(
    ctx: &HandlerContext,
    table_args: TableArgs,
    selection: SelectionArgs,
    top: Option<usize>,
    output: Option<PathBuf>,
    bom: bool,
) -> Result<()> {
    let table = open_table(ctx, &table_args)?;
    let picked = select(ctx, &table, &selection)?;

    let ranking = match top.or(ctx.config.distribution.top) {
        Some(n) => top_n(&picked.shown, n)?,
        None => ranked(&picked.shown),
    };

    let exported_to = match &output {
        Some(path) => {
            write_ranking(create_csv(path, bom)?, &ranking)?;
            tracing::info!(path = %path.display(), "wrote ranking");
            Some(path.display().to_string())
        }
        None => None,
    };

    let content = DistributionViewModel {
        key: selection.key.clone(),
        granularity: picked.granularity,
        normalized: picked.normalized,
        total: picked.original.sum(),
        entries: ranking
            .into_iter()
            .enumerate()
            .map(|(i, (category, value))| DistributionEntry {
                rank: i + 1,
                category,
                value,
            })
            .collect(),
        exported_to,
        width: terminal_width(),
    };

    let zero_total = content.is_zero();
    let mut result = CommandResultViewModel::new(content);
    if zero_total {
        result = result.with_badge(StatusBadge::warning(format!(
            "Every value for {} is zero; nothing to normalize",
            selection.key
        )));
    }
    if output.is_none() {
        result = result.with_suggestion(
            Guidance::new("Export the full row").with_command(format!(
                "studykit dist export --file {} --key \"{}\" --output row.csv",
                table_args.file.display(),
                selection.key
            )),
        );
    }
    ctx.render(result)
}

pub fn handle_export(
    ctx: &HandlerContext,
    table_args: TableArgs,
    selection: SelectionArgs,
    output: &Path,
    bom: bool,
) -> Result<()> {
    let table = open_table(ctx, &table_args)?;
    let picked = select(ctx, &table, &selection)?;

    write_vector(create_csv(output, bom)?, &picked.shown)?;
    tracing::info!(path = %output.display(), key = %selection.key, "wrote distribution");

    let content = ExportResultViewModel {
        key: selection.key,
        path: output.display().to_string(),
        categories: picked.shown.len(),
        normalized: picked.normalized,
    };
    ctx.render(CommandResultViewModel::new(content).with_badge(StatusBadge::success("Exported")))
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .unwrap_or(FALLBACK_WIDTH)
}
