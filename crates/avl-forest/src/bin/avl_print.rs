//! `avl-print` — build an AVL set from integers and dump the tree.
//!
//! Usage:
//!   avl-print [ELEM...]
//!
//! Elements are inserted in argument order. Without arguments a fixed
//! fifteen-element sequence is used. Log verbosity comes from `AVL_LOG`
//! (`off`, `error`, `warn`, `info`, `debug`, `trace`, any case; default
//! `warn`).

use avl_forest::AvlTreeSet;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use thiserror::Error;

const DEFAULT_ELEMS: [i64; 15] = [33, 73, 14, 78, 96, 34, 1, 51, 18, 94, 24, 50, 31, 10, 5];

#[derive(Debug, Error)]
enum ParseError {
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
}

fn parse_elems(args: &[String]) -> Result<Vec<i64>, ParseError> {
    if args.is_empty() {
        return Ok(DEFAULT_ELEMS.to_vec());
    }
    args.iter()
        .map(|a| a.parse().map_err(|_| ParseError::NotAnInteger(a.clone())))
        .collect()
}

/// Unset or unrecognised values fall back to `warn`.
fn log_level(var: Option<&str>) -> LevelFilter {
    var.and_then(|v| v.parse().ok()).unwrap_or(LevelFilter::Warn)
}

fn main() {
    let level = log_level(std::env::var("AVL_LOG").ok().as_deref());
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("{e}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let elems = match parse_elems(&args) {
        Ok(elems) => elems,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut set = AvlTreeSet::new();
    for elem in elems {
        set.add(elem);
        if let Err(err) = set.assert_valid() {
            log::error!("invariant broken after inserting {elem}: {err}");
            std::process::exit(1);
        }
    }

    println!("{set}");
    println!();
    println!("{set:?}");
    log::info!(
        "{} elements, height {}, {} restructuring(s)",
        set.size(),
        set.height(),
        set.restructures()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_matrix() {
        assert_eq!(log_level(None), LevelFilter::Warn);
        assert_eq!(log_level(Some("off")), LevelFilter::Off);
        assert_eq!(log_level(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(log_level(Some("Info")), LevelFilter::Info);
        assert_eq!(log_level(Some("verbose")), LevelFilter::Warn);
    }

    #[test]
    fn parse_elems_matrix() {
        assert_eq!(parse_elems(&[]).unwrap(), DEFAULT_ELEMS.to_vec());
        let args = ["3".to_string(), "-1".to_string()];
        assert_eq!(parse_elems(&args).unwrap(), vec![3, -1]);
        let bad = ["7".to_string(), "x".to_string()];
        assert_eq!(
            parse_elems(&bad).unwrap_err().to_string(),
            "not an integer: \"x\""
        );
    }
}
