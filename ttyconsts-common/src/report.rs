// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::Write;

use crate::constants::ReportVariant;
use crate::errors::ReportError;
use crate::sentinel::{self, VDISABLE_NAME};

/// Write the report for `variant` to `out`, one `NAME=VALUE ` line per
/// constant in list order, then the sentinel line if `sentinel` is set.
///
/// The trailing space before each newline is part of the format.
/// Returns the number of lines written.
///
/// # Errors
/// Will return an error if writing to `out` fails.
#[allow(clippy::module_name_repetitions)]
pub fn write_report<W: Write>(
    out: &mut W,
    variant: ReportVariant,
    sentinel: Option<i64>,
) -> Result<usize, ReportError> {
    let constants = variant.constants();
    for constant in &constants {
        writeln!(out, "{}={} ", constant.name, constant.value).map_err(ReportError::Write)?;
    }

    let mut lines = constants.len();
    if let Some(value) = sentinel {
        writeln!(out, "{VDISABLE_NAME}={value} ").map_err(ReportError::Write)?;
        lines += 1;
    }

    Ok(lines)
}

/// Probe the sentinel and write the report for `variant` to stdout.
///
/// # Errors
/// Will return an error if writing to stdout fails.
#[allow(clippy::module_name_repetitions)]
pub fn run_report(variant: ReportVariant) -> Result<usize, ReportError> {
    let sentinel = sentinel::vdisable();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let lines = write_report(&mut out, variant, sentinel)?;
    out.flush().map_err(ReportError::Write)?;
    trace!("wrote {lines} report lines for {variant:?}");

    Ok(lines)
}

#[cfg(test)]
mod report_tests {
    use super::*;

    fn render(variant: ReportVariant, sentinel: Option<i64>) -> (String, usize) {
        let mut out = Vec::new();
        let lines = match write_report(&mut out, variant, sentinel) {
            Ok(lines) => lines,
            Err(e) => panic!("write to a Vec failed: {e}"),
        };

        (String::from_utf8_lossy(&out).to_string(), lines)
    }

    #[test]
    fn full_report_without_sentinel_has_thirteen_lines() {
        let (output, lines) = render(ReportVariant::Full, None);

        assert_eq!(lines, 13);
        assert_eq!(output.lines().count(), 13);
        assert!(!output.contains(VDISABLE_NAME));
    }

    #[test]
    fn minimal_report_without_sentinel_has_ten_lines() {
        let (output, lines) = render(ReportVariant::Minimal, None);

        assert_eq!(lines, 10);
        assert_eq!(output.lines().count(), 10);
    }

    #[test]
    fn sentinel_line_is_last_when_present() {
        let (output, lines) = render(ReportVariant::Full, Some(255));

        assert_eq!(lines, 14);
        assert_eq!(output.lines().next_back(), Some("_POSIX_VDISABLE=255 "));
    }

    #[test]
    fn lines_carry_a_trailing_space_before_the_newline() {
        let (output, _) = render(ReportVariant::Full, Some(0));

        for line in output.lines() {
            assert!(line.ends_with(' '), "missing trailing space: {line:?}");
        }
        assert!(output.ends_with(" \n"));
    }

    #[test]
    fn first_line_is_the_mode_apply_selector() {
        let (output, _) = render(ReportVariant::Minimal, None);

        let first = output.lines().next().unwrap_or_default();
        assert!(first.starts_with("TCSANOW="), "unexpected first line: {first:?}");
    }
}
