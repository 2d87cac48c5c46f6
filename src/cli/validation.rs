use crate::cli::args::CliArgs;
use crate::output::OutputFormat;
use crate::platforms::CategoryFilter;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.category.as_deref() {
        if CategoryFilter::parse(raw).is_none() {
            return Err(format!(
                "invalid --cat '{raw}', expected all, social, video, dev, business, blogging, gaming, or music"
            ));
        }
    }
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected text or json"
            ));
        }
    }
    if let Some(raw) = args.platforms.as_deref() {
        let ids = crate::utils::parse_id_set_csv(raw)
            .map_err(|e| format!("invalid --pf '{raw}': {e}"))?;
        for id in &ids {
            if crate::platforms::find(id).is_none() {
                return Err(format!("invalid --pf: unknown platform id '{id}'"));
            }
        }
    }
    if let Some(ms) = args.debounce_ms {
        if ms > 60_000 {
            return Err("invalid --debounce, expected at most 60000 ms".to_string());
        }
    }
    Ok(())
}
