//! Report layer behind the `linesim` command-line tool.
//!
//! Every command builds one of the report structs here, which the binary then
//! prints either as JSON or as human-readable text.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use linecode::{CodecConfig, LineCode, LineCodeResult, Scheme, Violation};
use serde::Serialize;
use signal::{format_bits, format_levels, parse_levels, Bit, Level};

/// One row of the `schemes` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeInfo {
    pub name: &'static str,
    pub intervals_per_bit: usize,
    pub violation_check: bool,
}

/// Lists every supported scheme.
pub fn list_schemes() -> Vec<SchemeInfo> {
    Scheme::ALL
        .iter()
        .map(|scheme| SchemeInfo {
            name: scheme.name(),
            intervals_per_bit: scheme.intervals_per_bit(),
            violation_check: scheme.has_violation_check(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViolationReport {
    pub previous: usize,
    pub position: usize,
    pub polarity: Level,
}

impl From<Violation> for ViolationReport {
    fn from(violation: Violation) -> Self {
        Self {
            previous: violation.previous,
            position: violation.position,
            polarity: violation.polarity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    pub scheme: &'static str,
    pub initial_level: Level,
    pub bits: String,
    pub levels: String,
    pub amplitudes: Vec<i8>,
}

/// Encodes `bits` and records the trace in symbol and numeric form.
pub fn encode_report(scheme: Scheme, config: CodecConfig, bits: &[Bit]) -> EncodeReport {
    let levels = scheme.build(config).encode(bits);
    EncodeReport {
        scheme: scheme.name(),
        initial_level: config.initial_level(),
        bits: format_bits(bits),
        levels: format_levels(&levels),
        amplitudes: levels.iter().map(|level| level.as_i8()).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub scheme: &'static str,
    pub levels: String,
    pub bits: String,
    /// Trailing levels that did not form a whole symbol.
    pub dropped_levels: usize,
    /// Only present for schemes with a violation rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_violation: Option<ViolationReport>,
}

/// Decodes `levels`, running the violation check where the scheme has one.
pub fn decode_report(
    scheme: Scheme,
    config: CodecConfig,
    levels: &[Level],
) -> LineCodeResult<DecodeReport> {
    let code = scheme.build(config);
    let bits = code.decode(levels)?;
    let violation = code
        .violation_check()
        .map(|check| check.find_violation(levels));
    Ok(DecodeReport {
        scheme: scheme.name(),
        levels: format_levels(levels),
        bits: format_bits(&bits),
        dropped_levels: levels.len() % scheme.intervals_per_bit(),
        violation_free: violation.map(|found| found.is_none()),
        first_violation: violation.flatten().map(ViolationReport::from),
    })
}

/// Parses signed amplitudes such as `1,-1,0` or `+1 0 -1`.
pub fn parse_amplitudes(text: &str) -> Result<Vec<i8>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i8>()
                .with_context(|| format!("invalid amplitude {token:?}"))
        })
        .collect()
}

/// Like [`decode_report`], for a trace given as signed amplitudes.
pub fn decode_amplitude_report(
    scheme: Scheme,
    config: CodecConfig,
    amplitudes: &[i8],
) -> LineCodeResult<DecodeReport> {
    let levels = Level::from_i8_slice(amplitudes)?;
    decode_report(scheme, config, &levels)
}

/// Decode report for one trace file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceReport {
    pub path: PathBuf,
    pub level_count: usize,
    #[serde(flatten)]
    pub decode: DecodeReport,
}

/// Reads a level trace from `path` and decodes it.
pub fn inspect_trace(scheme: Scheme, config: CodecConfig, path: &Path) -> Result<TraceReport> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read trace {}", path.display()))?;
    let levels = parse_levels(&text).with_context(|| format!("parse trace {}", path.display()))?;
    let decode = decode_report(scheme, config, &levels)
        .with_context(|| format!("decode trace {}", path.display()))?;
    Ok(TraceReport {
        path: path.to_path_buf(),
        level_count: levels.len(),
        decode,
    })
}

/// Collects trace files from `dir`, optionally filtered by a glob matched
/// against either the full path or the file name. Results are sorted by path.
pub fn collect_trace_paths(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = glob
        .map(|value| Pattern::new(value).context("invalid glob pattern"))
        .transpose()?;

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

/// Human-readable rendering of a decode report.
pub fn format_decode_pretty(report: &DecodeReport) -> String {
    let mut out = format!(
        "scheme: {}\nlevels: {}\nbits:   {}",
        report.scheme, report.levels, report.bits
    );
    if report.dropped_levels > 0 {
        out.push_str(&format!(
            "\ndropped {} trailing level(s)",
            report.dropped_levels
        ));
    }
    match (report.violation_free, report.first_violation) {
        (Some(true), _) => out.push_str("\nviolations: none"),
        (_, Some(violation)) => out.push_str(&format!(
            "\nviolations: {} at level {} repeats level {}",
            violation.polarity, violation.position, violation.previous
        )),
        _ => {}
    }
    out
}
