use crate::types::Package;
use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging on stderr.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = i16::from(verbose) - i16::from(quiet);
    let level = match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fitness_tracker={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Parse a `CODE=V1,V2,...` command-line package.
///
/// `CODE=` yields an empty reading list; any other blank field is an error.
pub fn parse_package_arg(s: &str) -> Result<Package> {
    let Some((code, values)) = s.split_once('=') else {
        bail!("Package must look like CODE=V1,V2,...: {s:?}");
    };

    let code = code.trim();
    if code.is_empty() {
        bail!("Package has an empty workout code: {s:?}");
    }

    if values.trim().is_empty() {
        return Ok(Package::new(code, Vec::new()));
    }

    let data = values
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, v)| {
            if v.is_empty() {
                bail!("Reading {i} is empty in package {s:?}");
            }
            v.parse::<f64>()
                .with_context(|| format!("Parsing reading {i} ({v:?}) in package {s:?}"))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Package::new(code, data))
}

/// Read packages from a JSON file.
///
/// Accepts an array whose items are either `["RUN", [15000, 1, 75]]` pairs or
/// `{"code": "RUN", "data": [15000, 1, 75]}` objects.
pub fn load_packages_file(path: &Path) -> Result<Vec<Package>> {
    let shown = path.display();
    let text = fs::read_to_string(path).with_context(|| format!("Reading packages: {shown}"))?;
    let packages =
        parse_packages_json(&text).with_context(|| format!("Parsing packages: {shown}"))?;

    tracing::info!(path = %path.display(), packages = packages.len(), "loaded packages file");
    Ok(packages)
}

pub fn parse_packages_json(text: &str) -> Result<Vec<Package>> {
    let root: JsonValue = serde_json::from_str(text).context("Invalid JSON")?;
    let Some(items) = root.as_array() else {
        bail!("Expected a JSON array of packages");
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| package_from_json(item).with_context(|| format!("Package #{i}")))
        .collect()
}

fn package_from_json(item: &JsonValue) -> Result<Package> {
    let (code, data) = match item {
        JsonValue::Array(pair) if pair.len() == 2 => (&pair[0], &pair[1]),
        JsonValue::Object(obj) => {
            let (Some(code), Some(data)) = (obj.get("code"), obj.get("data")) else {
                bail!("Package object needs \"code\" and \"data\" keys");
            };
            (code, data)
        }
        _ => bail!("Package must be a [code, data] pair or an object: {item}"),
    };

    let Some(code) = code.as_str() else {
        bail!("Workout code must be a string: {code}");
    };
    let Some(values) = data.as_array() else {
        bail!("Readings must be an array of numbers: {data}");
    };

    let data = values
        .iter()
        .map(|v| {
            v.as_f64()
                .with_context(|| format!("Reading must be a number: {v}"))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Package::new(code, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_package_arg() {
        let pkg = parse_package_arg("WLK=9000, 1, 75, 180").unwrap();
        assert_eq!(pkg, Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]));

        let pkg = parse_package_arg("RUN=15000,1.5,75.2").unwrap();
        assert_eq!(pkg.data, vec![15000.0, 1.5, 75.2]);
    }

    #[test]
    fn test_parse_package_arg_errors() {
        assert!(parse_package_arg("RUN").is_err());
        assert!(parse_package_arg("=1,2,3").is_err());
        assert!(parse_package_arg("RUN=1,abc,3").is_err());
    }

    #[test]
    fn test_parse_package_arg_blank_reading() {
        let err = parse_package_arg("RUN=1,,2").unwrap_err();
        assert_eq!(err.to_string(), "Reading 1 is empty in package \"RUN=1,,2\"");

        let err = parse_package_arg("RUN=15000,1,75,").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Reading 3 is empty in package \"RUN=15000,1,75,\""
        );

        assert!(parse_package_arg("SWM=720,1,,80,25,40").is_err());
    }

    #[test]
    fn test_parse_package_arg_without_readings() {
        let pkg = parse_package_arg("RUN=").unwrap();
        assert_eq!(pkg, Package::new("RUN", Vec::new()));
    }

    #[test]
    fn test_parse_packages_json_pairs_and_objects() {
        let text = r#"[
            ["SWM", [720, 1, 80, 25, 40]],
            {"code": "RUN", "data": [15000, 1, 75]}
        ]"#;

        let packages = parse_packages_json(text).unwrap();
        assert_eq!(
            packages,
            vec![
                Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
                Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            ]
        );
    }

    #[test]
    fn test_parse_packages_json_errors() {
        assert!(parse_packages_json("{}").is_err());
        assert!(parse_packages_json("not json").is_err());
        assert!(parse_packages_json(r#"[["RUN"]]"#).is_err());
        assert!(parse_packages_json(r#"[[1, [1, 2, 3]]]"#).is_err());
        assert!(parse_packages_json(r#"[["RUN", [1, "x", 3]]]"#).is_err());
        assert!(parse_packages_json(r#"[{"code": "RUN"}]"#).is_err());

        let err = parse_packages_json(r#"[["RUN", [1, 2, 3]], ["WLK", 5]]"#).unwrap_err();
        assert_eq!(err.to_string(), "Package #1");
    }
}
