//! banner-fetch - issue one JSON request and print the resulting banner
//!
//! Usage: banner-fetch <get|post> <uri> [json-body] [--config <path>]

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use serde_json::Value;

use banner_fetch::constants::APP_VERSION;
use banner_fetch::{use_response_state, Api, FetchConfig, HttpMethod, StateStore};

const USAGE: &str = "Usage: banner-fetch <get|post> <uri> [json-body] [--config <path>]";

/// Parsed command line
struct Args {
    method: HttpMethod,
    uri: String,
    body: Option<Value>,
    config_path: PathBuf,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut config_path = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().ok_or_else(|| anyhow!("--config needs a path"))?;
                config_path = Some(PathBuf::from(path));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let method = positional.next().ok_or_else(|| anyhow!(USAGE))?;
    let method = HttpMethod::parse(&method).ok_or_else(|| anyhow!("Unsupported method '{}'", method))?;
    let uri = positional.next().ok_or_else(|| anyhow!(USAGE))?;
    let body = positional
        .next()
        .map(|raw| serde_json::from_str::<Value>(&raw).context("body is not valid JSON"))
        .transpose()?;

    if positional.next().is_some() {
        bail!(USAGE);
    }

    Ok(Args {
        method,
        uri,
        body,
        config_path: config_path.unwrap_or_else(FetchConfig::default_path),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.iter().any(|a| a == "--version" || a == "-V") {
        println!("banner-fetch {}", APP_VERSION);
        return Ok(());
    }

    let args = parse_args(raw)?;
    let config = FetchConfig::load_or_default(&args.config_path)?;
    let api = Api::with_config(config);

    let store = StateStore::new();
    let banner = use_response_state(&store)?;

    let result = api.request(&args.uri, args.method, args.body.as_ref()).await;
    match &result {
        Ok(_) => banner.report_success(format!("{} {} succeeded", args.method, args.uri)),
        Err(e) => banner.report_error(e),
    }

    println!("{}", banner.get());
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            if let Some(payload) = e.payload() {
                println!("{}", serde_json::to_string_pretty(payload)?);
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_post_with_body() {
        let parsed = parse_args(args(&["post", "/api/items", r#"{"name":"a"}"#, "--config", "x.yaml"])).unwrap();
        assert_eq!(parsed.method, HttpMethod::POST);
        assert_eq!(parsed.uri, "/api/items");
        assert_eq!(parsed.body, Some(serde_json::json!({"name": "a"})));
        assert_eq!(parsed.config_path, PathBuf::from("x.yaml"));
    }

    #[test]
    fn test_parse_get_without_body() {
        let parsed = parse_args(args(&["GET", "https://example.com"])).unwrap();
        assert_eq!(parsed.method, HttpMethod::GET);
        assert!(parsed.body.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(args(&["put", "/x"])).is_err());
        assert!(parse_args(args(&["post"])).is_err());
        assert!(parse_args(args(&["post", "/x", "{not json"])).is_err());
        assert!(parse_args(args(&["post", "/x", "{}", "extra"])).is_err());
    }
}
