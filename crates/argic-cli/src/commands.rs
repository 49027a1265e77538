use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use argic_cli::config::{AppConfig, DepotOverrides};
use argic_cli::logging::redact_value;
use argic_cli::request::normalize_request;
use argic_core::CodeMapper;
use argic_depot::{DepotLookup, SoapDepotClient};
use argic_model::{CodeRequest, GlassSpecification, SegmentKind, VehicleDetails};
use argic_standards::{TableSet, default_tables, load_tables_dir, verify_and_load};

use crate::cli::{CodeArgs, DepotsArgs, TableArg, TablesArgs, VerifyTablesArgs};
use crate::summary::{
    print_breakdown, print_depots, print_segment_table, print_table_counts, print_verify_summary,
    print_window_table,
};

/// Shipped tables, or the tables in `dir`.
fn load_tables(dir: Option<&Path>) -> Result<Cow<'static, TableSet>> {
    match dir {
        Some(dir) => {
            let tables = load_tables_dir(dir)
                .with_context(|| format!("load tables from {}", dir.display()))?;
            Ok(Cow::Owned(tables))
        }
        None => Ok(Cow::Borrowed(default_tables())),
    }
}

pub fn run_code(args: &CodeArgs, config: &AppConfig, tables_dir: Option<&Path>) -> Result<()> {
    let span = info_span!("code");
    let _guard = span.enter();

    let tables = load_tables(config.tables_dir(tables_dir).as_deref())?;
    let mapper = CodeMapper::new(&tables).context("check tables")?;

    let mut specification = GlassSpecification::new(args.color.as_str())
        .with_modifications(args.modifications.iter().map(String::as_str));
    if let Some(stripe) = &args.stripe {
        specification = specification.with_stripe(stripe.as_str());
    }
    let request = normalize_request(CodeRequest {
        vehicle: VehicleDetails::new(args.manufacturer.as_str(), args.model.as_str()),
        selected_windows: args.windows.clone(),
        specification,
    });

    if args.explain {
        let breakdown = mapper.describe(&request)?;
        info!(code = %breakdown.code, "explained product code");
        print_breakdown(&breakdown);
    } else {
        let code = mapper.generate(&request)?;
        info!(code = %code, "generated product code");
        println!("{code}");
    }
    Ok(())
}

pub fn run_tables(args: &TablesArgs, config: &AppConfig, tables_dir: Option<&Path>) -> Result<()> {
    let span = info_span!("tables");
    let _guard = span.enter();

    let tables = load_tables(config.tables_dir(tables_dir).as_deref())?;
    let kind = match args.table {
        None => {
            print_table_counts(&tables);
            return Ok(());
        }
        Some(TableArg::Windows) => {
            print_window_table(&tables.windows, &tables.glass_positions);
            return Ok(());
        }
        Some(TableArg::Manufacturers) => SegmentKind::Manufacturer,
        Some(TableArg::Models) => SegmentKind::Model,
        Some(TableArg::Glass) => SegmentKind::GlassPosition,
        Some(TableArg::Colors) => SegmentKind::Color,
        Some(TableArg::Stripes) => SegmentKind::Stripe,
        Some(TableArg::Modifications) => SegmentKind::Modification,
    };
    print_segment_table(tables.segment(kind));
    Ok(())
}

pub fn run_verify_tables(args: &VerifyTablesArgs) -> Result<()> {
    let span = info_span!("verify_tables", dir = %args.dir.display());
    let _guard = span.enter();

    let (tables, summary) = verify_and_load(&args.dir)
        .with_context(|| format!("verify tables in {}", args.dir.display()))?;
    CodeMapper::new(&tables).context("check tables")?;
    print_verify_summary(&summary);
    Ok(())
}

pub fn run_depots(args: &DepotsArgs, config: &AppConfig) -> Result<()> {
    let span = info_span!("depots");
    let _guard = span.enter();

    let (depot_config, credentials) = config.depot(DepotOverrides {
        endpoint: args.endpoint.clone(),
        login: args.login.clone(),
        password: args.password.clone(),
        user_id: args.user_id,
    })?;
    info!(
        endpoint = %depot_config.endpoint,
        login = redact_value(&credentials.login),
        "looking up depots"
    );

    let client = SoapDepotClient::new(depot_config).context("configure depot client")?;
    let response = client.get_depots(&credentials).context("depot lookup")?;
    // print first so a failed status still shows the service's answer
    print_depots(&response);
    response.ensure_success().context("depot lookup")?;
    Ok(())
}
