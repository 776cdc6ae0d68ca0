//! Flag parsing for `quote`.

use pricing_domain::DiscountTarget;

use crate::cli::core::CommandError;

pub const QUOTE_USAGE: &str = "quote <plan> [--enrollees N] [--flat AMOUNT] [--percent P] \
     [--target membership|enrollment] [--json]";

/// Parsed `quote` arguments. Range checks are left to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteArgs {
    /// Catalog index or tier name.
    pub plan: String,
    pub enrollees: u32,
    pub flat: Option<f64>,
    pub percent: Option<f64>,
    pub target: Option<DiscountTarget>,
    /// Print the breakdown as JSON instead of a table.
    pub json: bool,
}

pub fn parse_quote_args(args: &[&str]) -> Result<QuoteArgs, CommandError> {
    let mut plan_words: Vec<&str> = Vec::new();
    let mut parsed = QuoteArgs {
        plan: String::new(),
        enrollees: 1,
        flat: None,
        percent: None,
        target: None,
        json: false,
    };

    let mut iter = args.iter().copied();
    while let Some(token) = iter.next() {
        let Some(flag) = token.strip_prefix("--") else {
            plan_words.push(token);
            continue;
        };
        let (name, inline) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (flag, None),
        };
        if name.eq_ignore_ascii_case("json") && inline.is_none() {
            parsed.json = true;
            continue;
        }
        let value = match inline {
            Some(value) => value,
            None => iter.next().ok_or_else(|| {
                CommandError::InvalidArguments(format!("`--{name}` needs a value"))
            })?,
        };
        match name.to_ascii_lowercase().as_str() {
            "enrollees" | "people" => {
                parsed.enrollees = value.parse().map_err(|_| {
                    CommandError::InvalidArguments(format!(
                        "`--enrollees` must be a whole number, got `{value}`"
                    ))
                })?
            }
            "flat" => parsed.flat = Some(parse_amount("--flat", value)?),
            "percent" => parsed.percent = Some(parse_amount("--percent", value)?),
            "target" => {
                parsed.target = Some(
                    value
                        .parse::<DiscountTarget>()
                        .map_err(CommandError::InvalidArguments)?,
                )
            }
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `--{other}`. Usage: {QUOTE_USAGE}"
                )))
            }
        }
    }

    if plan_words.is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "missing plan. Usage: {QUOTE_USAGE}"
        )));
    }
    parsed.plan = plan_words.join(" ");
    Ok(parsed)
}

fn parse_amount(flag: &str, raw: &str) -> Result<f64, CommandError> {
    raw.trim()
        .trim_start_matches('$')
        .trim_end_matches('%')
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{flag}` expects a number, got `{raw}`")))
}
