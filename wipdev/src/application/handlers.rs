use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use wip_core::error::{Result, WipError};
use wip_core::expense::{Expense, ExpenseTotals};
use wip_core::format::{format_hours, format_money, format_percent};
use wip_core::query::MAX_LIMIT;
use wip_core::source::{SourceParams, WipSource};
use wip_core::source_factory::{Backend, open_source};
use wip_core::{DashboardSummary, Thresholds, WipClient, WipJob, WipQuery, WipView};

use crate::presentation::cli::{QueryArgs, SourceArgs};

pub fn source_from_args(args: &SourceArgs) -> Result<Box<dyn WipSource>> {
    let params = SourceParams {
        file: args.file.clone(),
        api_url: args.api_url.clone(),
        token: args.token.clone(),
        warning_ratio: args.warning_ratio,
    };
    let backend = match (&params.file, &params.api_url) {
        (Some(_), _) => Backend::Fs,
        (None, Some(_)) => Backend::Http,
        (None, None) => {
            return Err(WipError::Config(
                "no data source: pass --file or --api-url (or set WIP_API_URL)".into(),
            ));
        }
    };
    open_source(backend, params)
}

pub fn thresholds(args: &SourceArgs) -> Result<Thresholds> {
    Thresholds::from_option(args.warning_ratio)
}

pub fn query_from_args(q: QueryArgs) -> WipQuery {
    WipQuery {
        page: q.page,
        limit: q.limit,
        search: q.search,
        target_met_condition: q.target_met,
        wip_warning_jobs: q.warning_only,
    }
}

fn fetch_view(args: &SourceArgs, query: &WipQuery) -> Result<WipView> {
    let source = source_from_args(args)?;
    let page = source.fetch_page(query)?;
    Ok(page.into_view(&thresholds(args)?))
}

pub fn handle_clients(args: &SourceArgs, q: QueryArgs) -> Result<()> {
    let view = fetch_view(args, &query_from_args(q))?;
    render_clients(&mut std::io::stdout().lock(), &view)
}

pub fn render_clients(out: &mut impl Write, view: &WipView) -> Result<()> {
    writeln!(
        out,
        "{:<10} {:<32} {:>5} {:>14} {:>14}",
        "CODE", "CLIENT", "JOBS", "IMPORTED", "WIP"
    )?;
    for c in &view.clients {
        writeln!(
            out,
            "{:<10} {:<32} {:>5} {:>14} {:>14}",
            c.code,
            truncate(&c.name, 32),
            c.jobs.len(),
            format_money(c.imported_wip_balance),
            format_money(c.wip_balance)
        )?;
    }
    let p = &view.pagination;
    writeln!(out, "page {}/{} ({} clients)", p.page, p.total_pages, p.total)?;
    Ok(())
}

/// Walks pages until the client turns up; the endpoint has no lookup by id.
pub fn find_client(source: &dyn WipSource, client_id: &str) -> Result<Option<WipClient>> {
    let mut query = WipQuery {
        limit: MAX_LIMIT,
        ..Default::default()
    };
    loop {
        let page = source.fetch_page(&query)?;
        let found = page
            .data
            .iter()
            .filter(|r| wip_core::raw::id(r) == client_id)
            .map(wip_core::normalize_client)
            .next();
        if found.is_some() {
            return Ok(found);
        }
        if page.data.is_empty() || query.page >= page.pagination.total_pages {
            return Ok(None);
        }
        query.page += 1;
    }
}

pub fn handle_jobs(args: &SourceArgs, client_id: String) -> Result<()> {
    let source = source_from_args(args)?;
    let Some(client) = find_client(source.as_ref(), &client_id)? else {
        return Err(WipError::InvalidQuery(format!("no client with id '{client_id}'")));
    };
    let t = thresholds(args)?;
    render_jobs(&mut std::io::stdout().lock(), &client, &t)
}

pub fn job_flag(t: &Thresholds, job: &WipJob) -> &'static str {
    if t.target_met(job) {
        " ready"
    } else if t.is_warning(job) {
        " warn"
    } else {
        ""
    }
}

pub fn render_jobs(out: &mut impl Write, client: &WipClient, t: &Thresholds) -> Result<()> {
    writeln!(out, "{} ({})", client.name, client.code)?;
    writeln!(
        out,
        "{:<12} {:<28} {:<10} {:>9} {:>14} {:>14} {:>6}",
        "ID", "JOB", "STATUS", "HOURS", "WIP", "TARGET", "OF"
    )?;
    for j in &client.jobs {
        writeln!(
            out,
            "{:<12} {:<28} {:<10} {:>9} {:>14} {:>14} {:>6}{}",
            truncate(&j.id, 12),
            truncate(&j.name, 28),
            j.status.label(),
            format_hours(j.hours_logged),
            format_money(j.wip_amount),
            format_money(j.fee_target),
            format_percent(j.wip_amount, j.fee_target),
            job_flag(t, j)
        )?;
    }
    writeln!(
        out,
        "open balances {}  imported {}  jobs {}  total {}",
        format_money(client.open_balance_total),
        format_money(client.imported_wip_balance),
        format_money(client.jobs_total_wip),
        format_money(client.wip_balance)
    )?;
    Ok(())
}

pub fn handle_summary(args: &SourceArgs, q: QueryArgs) -> Result<()> {
    let s = fetch_view(args, &query_from_args(q))?.summary;
    render_summary(&mut std::io::stdout().lock(), &s)
}

pub fn render_summary(out: &mut impl Write, s: &DashboardSummary) -> Result<()> {
    writeln!(out, "clients           {}", s.total_clients)?;
    writeln!(out, "jobs              {}", s.total_jobs)?;
    writeln!(out, "total WIP         {}", format_money(s.total_wip))?;
    writeln!(
        out,
        "ready to invoice  {} ({})",
        s.ready_to_invoice_count,
        format_money(s.ready_to_invoice_amount)
    )?;
    Ok(())
}

pub fn handle_export(args: &SourceArgs, q: QueryArgs, out: Option<PathBuf>) -> Result<()> {
    let view = fetch_view(args, &query_from_args(q))?;
    match out {
        Some(path) => {
            let mut file = std::fs::File::create(&path)?;
            render_export(&mut file, &view)?;
            tracing::info!(path = %path.display(), clients = view.clients.len(), "exported view");
        }
        None => render_export(&mut std::io::stdout().lock(), &view)?,
    }
    Ok(())
}

pub fn render_export(out: &mut impl Write, view: &WipView) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, view)?;
    writeln!(out)?;
    Ok(())
}

pub fn load_expenses(file: &Path) -> Result<Vec<Expense>> {
    let doc: Value = serde_json::from_slice(&std::fs::read(file)?)?;
    let Value::Array(items) = doc else {
        return Err(WipError::Config(format!(
            "{}: expected an array of expenses",
            file.display()
        )));
    };
    Ok(items.iter().map(Expense::from_raw).collect())
}

pub fn handle_expenses(file: PathBuf) -> Result<()> {
    let totals = ExpenseTotals::from_expenses(&load_expenses(&file)?);
    println!("expenses      {}", totals.count);
    println!("net           {}", format_money(totals.net));
    println!("VAT           {}", format_money(totals.vat));
    println!("gross         {}", format_money(totals.gross));
    println!("invoiced      {}", format_money(totals.invoiced));
    println!("not invoiced  {}", format_money(totals.not_invoiced));
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
    t.push('~');
    t
}
